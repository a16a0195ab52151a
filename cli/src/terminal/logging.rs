use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::ConsoleWriter;

/// Events on this target are program output, printed without decoration.
pub const PRINT_TARGET: &str = "sift::print";

/// Environment variable that overrides the computed filter.
pub const LOG_ENV: &str = "SIFT_LOG";

const OWN_CRATES: &[&str] = &["sift_cli", "sift_core", "sift_common"];

pub fn filter_directives(verbose: u8, quiet: u8) -> String {
    let level = match (quiet, verbose) {
        (1.., _) => "warn",
        (0, 0) => "info",
        (0, 1) => "debug",
        (0, 2..) => "trace",
    };

    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.push(format!("{PRINT_TARGET}=info"));
    directives.join(",")
}

pub fn init(verbose: u8, quiet: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .event_format(SiftFormatter)
        .with_env_filter(filter)
        .with_writer(ConsoleWriter)
        .try_init();
}

#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    status: Option<String>,
    extra: Vec<(&'static str, String)>,
}

impl EventFields {
    fn store(&mut self, field: &Field, text: String) {
        match field.name() {
            "message" => self.message = text,
            "raw_msg" => self.raw_msg = Some(text),
            "status" => self.status = Some(text),
            name => self.extra.push((name, text)),
        }
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }
}

pub struct SiftFormatter;

impl<S, N> FormatEvent<S, N> for SiftFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if let Some(raw) = fields.raw_msg {
            return writeln!(writer, "{raw}");
        }

        let success = fields.status.as_deref() == Some("success");
        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *event.metadata().level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO if success => ("[+]", |s| s.green().bold()),
            Level::INFO => ("[>]", |s| s.cyan()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            _ => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        for (key, value) in &fields.extra {
            write!(writer, " {}", format!("{key}={value}").dimmed())?;
        }
        writeln!(writer)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
