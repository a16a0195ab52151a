use std::time::Duration;

use chrono::Local;
use colored::*;
use sift_common::config::Config;
use sift_common::lottery::draw::DrawResult;
use sift_common::{info, success, warn};
use sift_core::source::{self, DrawSource, RelayChain};
use tokio::time::MissedTickBehavior;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

/// Shortest polling interval accepted by `--watch`.
const MIN_WATCH: Duration = Duration::from_secs(5);

pub async fn latest(watch: Option<u64>, cfg: &Config) -> anyhow::Result<()> {
    let chain = RelayChain::new(cfg.api_base.clone());

    let Some(secs) = watch else {
        if let Some(draws) = fetch_latest(&chain, cfg).await {
            show_latest(&draws, cfg)?;
        }
        return Ok(());
    };

    let period = Duration::from_secs(secs).max(MIN_WATCH);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_issue: Option<String> = None;

    info!("Polling every {}s, press Ctrl-C to stop", period.as_secs());
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => break,
        }

        let Some(draws) = fetch_latest(&chain, cfg).await else {
            break;
        };
        let issue = draws.first().map(|draw| draw.issue.clone());
        if issue != last_issue {
            if last_issue.is_some() {
                success!("New draw published");
            }
            show_latest(&draws, cfg)?;
            last_issue = issue;
        }
    }
    Ok(())
}

pub async fn history(cfg: &Config) -> anyhow::Result<()> {
    let chain = RelayChain::new(cfg.api_base.clone());

    let records: Vec<DrawResult> = if cfg.no_fetch {
        vec![source::fallback_record()]
    } else {
        let _spinner = spinner::start("Loading recent draws...", cfg);
        let now = Local::now().naive_local();
        tokio::select! {
            list = source::recent_history(&chain, cfg.timeout, now) => list,
            _ = tokio::signal::ctrl_c() => {
                warn!("Cancelled");
                return Ok(());
            }
        }
    };

    if cfg.json {
        print::print(&serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        print::header("no history", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("recent draws", cfg.quiet);
    for (idx, draw) in records.iter().enumerate() {
        let (chips, zodiacs) = format::draw_lines(draw, cfg.year);
        match cfg.quiet {
            2 => print::print(&format!("{} {}", draw.issue, chips)),
            _ => {
                print::tree_head(idx, &format!("{} · {}", draw.issue, draw.date()));
                print::print_status(chips);
                print::print_status(zodiacs);
            }
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&format!("{} draws listed", records.len().to_string().green().bold()));
    }
    Ok(())
}

/// `None` when the user pressed Ctrl-C while waiting.
async fn fetch_latest(chain: &dyn DrawSource, cfg: &Config) -> Option<Vec<DrawResult>> {
    if cfg.no_fetch {
        return Some(vec![source::fallback_record()]);
    }

    let _spinner = spinner::start("Fetching the latest draw...", cfg);
    tokio::select! {
        draws = source::latest_or_fallback(chain, cfg.timeout) => Some(draws),
        _ = tokio::signal::ctrl_c() => {
            warn!("Cancelled");
            None
        }
    }
}

fn show_latest(draws: &[DrawResult], cfg: &Config) -> anyhow::Result<()> {
    let Some(draw) = draws.first() else {
        return Ok(());
    };

    if cfg.json {
        print::print(&serde_json::to_string_pretty(draw)?);
        return Ok(());
    }

    print::header(&format!("draw {}", draw.issue), cfg.quiet);
    let (chips, zodiacs) = format::draw_lines(draw, cfg.year);
    print::print(&chips);
    if cfg.quiet < 2 {
        print::print(&zodiacs);
        mprint!();
        let special = draw
            .special()
            .map(|n| format!("{n:02}"))
            .unwrap_or_else(|| "?".to_string());
        print::aligned_line("opened", 7, draw.open_time.clone());
        print::aligned_line("special", 7, special.color(colors::ACCENT));
    }
    Ok(())
}
