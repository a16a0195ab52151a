use serde_json::json;
use sift_common::config::Config;
use sift_common::utils::numbers::{format_numbers, parse_numbers};
use sift_common::{success, warn};

use crate::terminal::print;

pub fn parse(text: &str, cfg: &Config) -> anyhow::Result<()> {
    let numbers = parse_numbers(text);

    if cfg.json {
        let body = json!({ "input": text, "numbers": numbers, "count": numbers.len() });
        print::print(&serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if numbers.is_empty() {
        warn!("No ball numbers found in '{text}'");
        return Ok(());
    }

    print::header("manual list", cfg.quiet);
    print::print(&format_numbers(&numbers));
    if cfg.quiet == 0 {
        success!("{} numbers read", numbers.len());
    }
    Ok(())
}
