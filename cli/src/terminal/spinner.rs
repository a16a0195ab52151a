use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sift_common::config::Config;
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::{colors, logging::PRINT_TARGET};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Clears the spinner when dropped.
pub struct SpinnerGuard;

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = SPINNER.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}

fn new_spinner(cfg: &Config) -> ProgressBar {
    if cfg.json || cfg.quiet > 1 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn start(message: &str, cfg: &Config) -> SpinnerGuard {
    let pb = new_spinner(cfg);
    pb.set_message(message.color(colors::TEXT_DEFAULT).to_string());
    if let Ok(mut slot) = SPINNER.lock() {
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }
    SpinnerGuard
}

fn with_active<R>(f: impl FnOnce(&ProgressBar) -> R) -> Option<R> {
    let slot = SPINNER.lock().ok()?;
    slot.as_ref().filter(|pb| !pb.is_hidden()).map(f)
}

/// Prints above the spinner while one is running, straight to the stream otherwise.
pub struct SpinnerWriter {
    stderr: bool,
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let line = msg.trim_end();
        if with_active(|pb| pb.println(line)).is_none() {
            if self.stderr {
                io::stderr().lock().write_all(buf)?;
            } else {
                io::stdout().lock().write_all(buf)?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.stderr {
            io::stderr().flush()
        } else {
            io::stdout().flush()
        }
    }
}

/// Program output goes to stdout, diagnostics to stderr.
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = SpinnerWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SpinnerWriter { stderr: false }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        SpinnerWriter {
            stderr: meta.target() != PRINT_TARGET,
        }
    }
}
