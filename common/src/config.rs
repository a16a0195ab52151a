use std::time::Duration;

use chrono::{Datelike, Local};

/// Upper bound for a whole relay chain, matching the draw page's own timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const DEFAULT_API: &str = "https://kj.9bkj.com:1888/api/?xg";

pub struct Config {
    /// Year whose zodiac rotation is applied to the ball table.
    pub year: i32,
    /// 0 prints everything, 1 drops headers and banners, 2 prints bare results.
    pub quiet: u8,
    /// Skips the network and answers from the built-in last known draw.
    pub no_fetch: bool,
    pub timeout: Duration,
    /// Draw endpoint; `row` and `t` query parameters are appended per request.
    pub api_base: String,
    /// Emit draw records as JSON instead of the colored layout.
    pub json: bool,
}

impl Config {
    pub fn current_year() -> i32 {
        Local::now().year()
    }
}
