//! # Draw Source
//!
//! Latest and recent draws come from a public JSON endpoint that is often
//! unreachable from a browser or a restricted network, so requests go through
//! a [`RelayChain`]: the endpoint itself first, then a list of public relays.
//!
//! Whatever comes back is mapped to [`DrawResult`] by [`normalize_records`].
//! Callers never see transport failures: [`latest_or_fallback`] always has
//! something to show and [`recent_history`] degrades to an empty list.

use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeDelta};
use serde_json::Value;
use sift_common::lottery::draw::DrawResult;
use sift_common::warn;
use thiserror::Error;
use tracing::debug;

mod normalize;
mod relay;

pub use normalize::{normalize_code, normalize_records};
pub use relay::{Relay, RelayChain};

/// Rows requested for the latest draw.
pub const LATEST_ROWS: u32 = 5;
/// Rows requested for the history list.
pub const HISTORY_ROWS: u32 = 50;
/// Entries kept in the history list.
pub const HISTORY_LIMIT: usize = 30;
/// Draws timestamped further than this in the future are hidden.
pub const FUTURE_TOLERANCE_HOURS: i64 = 12;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("body is empty")]
    Empty,
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    #[error("all {0} relays failed")]
    Exhausted(usize),
}

/// Anything that can hand back the raw JSON body for `rows` draws.
#[async_trait]
pub trait DrawSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, rows: u32) -> Result<Value, SourceError>;
}

/// Last known draw, shown when nothing can be fetched.
pub fn fallback_record() -> DrawResult {
    DrawResult::new("2025127", "06,40,04,34,26,28,25", "2025-12-06 21:30:00")
}

async fn fetch_records(
    source: &dyn DrawSource,
    rows: u32,
    limit: Duration,
) -> Result<Vec<DrawResult>, SourceError> {
    let body = tokio::time::timeout(limit, source.fetch(rows))
        .await
        .map_err(|_| SourceError::Timeout(limit))??;
    let records = normalize_records(&body);
    debug!(source = source.name(), rows, records = records.len(), "draws normalized");
    Ok(records)
}

/// Newest draws as reported by the source, or the fallback record.
///
/// Never empty.
pub async fn latest_or_fallback(source: &dyn DrawSource, limit: Duration) -> Vec<DrawResult> {
    match fetch_records(source, LATEST_ROWS, limit).await {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            warn!("{} returned no usable draws, showing the last known result", source.name());
            vec![fallback_record()]
        }
        Err(err) => {
            warn!("Could not reach {}: {err}. Showing the last known result", source.name());
            vec![fallback_record()]
        }
    }
}

/// Up to [`HISTORY_LIMIT`] recent draws, newest first. Empty on failure.
pub async fn recent_history(
    source: &dyn DrawSource,
    limit: Duration,
    now: NaiveDateTime,
) -> Vec<DrawResult> {
    match fetch_records(source, HISTORY_ROWS, limit).await {
        Ok(records) => order_history(records, now),
        Err(err) => {
            warn!("Could not load history from {}: {err}", source.name());
            Vec::new()
        }
    }
}

/// Timed records first, newest to oldest; untimed ones after, by issue.
fn newest_first(a: &DrawResult, b: &DrawResult) -> Ordering {
    match (a.opened_at(), b.opened_at()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.issue.cmp(&a.issue),
    }
}

/// Sorts, hides draws too far in the future and caps the list.
///
/// If hiding would leave nothing, every record is kept, still sorted.
/// Records whose time cannot be read are never hidden.
pub fn order_history(mut records: Vec<DrawResult>, now: NaiveDateTime) -> Vec<DrawResult> {
    records.sort_by(newest_first);

    let horizon = now + TimeDelta::hours(FUTURE_TOLERANCE_HOURS);
    let visible: Vec<DrawResult> = records
        .iter()
        .filter(|record| record.opened_at().is_none_or(|at| at <= horizon))
        .cloned()
        .collect();

    let mut list = if visible.is_empty() { records } else { visible };
    list.truncate(HISTORY_LIMIT);
    list
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
