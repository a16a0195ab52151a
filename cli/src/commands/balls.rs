use colored::*;
use sift_common::config::Config;
use sift_common::lottery::zodiac::Zodiac;
use sift_common::{success, warn};
use sift_core::deriver;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn balls(numbers: &[u8], cfg: &Config) -> anyhow::Result<()> {
    if numbers.is_empty() {
        table(cfg)
    } else {
        details(numbers, cfg)
    }
}

fn table(cfg: &Config) -> anyhow::Result<()> {
    let balls = deriver::derive_balls(cfg.year);
    if cfg.json {
        print::print(&serde_json::to_string_pretty(&balls)?);
        return Ok(());
    }

    print::header(&format!("{} ball table", cfg.year), cfg.quiet);
    for row in format::chip_rows(&balls) {
        print::print(&row);
    }

    if cfg.quiet > 1 {
        return Ok(());
    }

    mprint!();
    print::header("zodiac groups", cfg.quiet);
    for zodiac in Zodiac::ALL {
        let members: Vec<String> = deriver::numbers_of(*zodiac, cfg.year)
            .into_iter()
            .filter_map(|n| deriver::attributes_of(n, cfg.year))
            .map(|ball| format::ball_chip(&ball).to_string())
            .collect();
        print::aligned_line(zodiac.label(), 2, members.join(" "));
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        let first = deriver::attributes_of(1, cfg.year).map(|ball| ball.zodiac);
        if let Some(zodiac) = first {
            print::centerln(
                &format!("Ball 01 carries {} in {}", zodiac.label().color(colors::ACCENT), cfg.year)
                    .color(colors::TEXT_DEFAULT)
                    .to_string(),
            );
        }
    }
    Ok(())
}

fn details(numbers: &[u8], cfg: &Config) -> anyhow::Result<()> {
    let found: Vec<_> = numbers
        .iter()
        .filter_map(|n| {
            let ball = deriver::attributes_of(*n, cfg.year);
            if ball.is_none() {
                warn!("{n} is not a ball number (1-49)");
            }
            ball
        })
        .collect();

    if cfg.json {
        print::print(&serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        print::no_results();
        return Ok(());
    }

    print::header(&format!("{} ball details", cfg.year), cfg.quiet);
    for (idx, ball) in found.iter().enumerate() {
        print::tree_head(idx, &format::ball_chip(ball).to_string());
        print::as_tree_one_level(format::ball_details(ball));
        if idx + 1 != found.len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        success!("{} of {} numbers described", found.len(), numbers.len());
    }
    Ok(())
}
