//! # Draw Record
//!
//! A published draw in the normalized shape every source is mapped to: the
//! issue identifier, the comma-joined codes (the last one is the special
//! number) and the opening time as written by the source.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A draw has six regular numbers and one special number.
pub const MIN_CODES: usize = 7;

const TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub issue: String,
    pub open_code: String,
    pub open_time: String,
}

impl DrawResult {
    pub fn new(issue: impl Into<String>, open_code: impl Into<String>, open_time: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            open_code: open_code.into(),
            open_time: open_time.into(),
        }
    }

    /// Raw code strings in draw order.
    pub fn codes(&self) -> Vec<&str> {
        self.open_code
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect()
    }

    /// Parsed codes; entries that are not numbers come back as `None`.
    pub fn numbers(&self) -> Vec<Option<u8>> {
        self.codes().into_iter().map(|code| code.parse().ok()).collect()
    }

    pub fn special(&self) -> Option<u8> {
        self.numbers().last().copied().flatten()
    }

    /// Opening time, if the source wrote it in one of the usual layouts.
    ///
    /// A bare date opens at midnight.
    pub fn opened_at(&self) -> Option<NaiveDateTime> {
        let raw = self.open_time.trim();
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    /// Year used to look up the zodiac of this draw's numbers.
    pub fn draw_year(&self) -> Option<i32> {
        self.opened_at().map(|at| at.year())
    }

    /// Date part of the opening time (`2025-12-06 21:30:00` → `2025-12-06`).
    pub fn date(&self) -> &str {
        self.open_time.split(' ').next().unwrap_or_default()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_special() {
        let draw = DrawResult::new("2025127", "06,40,04,34,26,28,25", "2025-12-06 21:30:00");
        assert_eq!(draw.codes().len(), 7);
        assert_eq!(draw.numbers()[0], Some(6));
        assert_eq!(draw.special(), Some(25));
        assert_eq!(draw.date(), "2025-12-06");
    }

    #[test]
    fn test_opened_at_layouts() {
        let at = |s: &str| DrawResult::new("1", "", s).opened_at();
        assert!(at("2025-12-06 21:30:00").is_some());
        assert!(at("2025-12-06T21:30:00").is_some());
        assert!(at("2025/12/06 21:30").is_some());
        assert_eq!(
            at("2025-12-06"),
            NaiveDate::from_ymd_opt(2025, 12, 6).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(at("tomorrow"), None);
        assert_eq!(at(""), None);
    }

    #[test]
    fn test_draw_year() {
        let draw = DrawResult::new("2024001", "01,02,03,04,05,06,07", "2024-01-02 21:30:00");
        assert_eq!(draw.draw_year(), Some(2024));
        assert_eq!(DrawResult::new("x", "", "n/a").draw_year(), None);
    }
}
