use colored::*;
use serde_json::json;
use sift_common::config::Config;
use sift_common::success;
use sift_core::filter::rejection;
use sift_core::reconcile::Action;
use sift_core::session::Session;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn filter(actions: &[Action], explain: bool, cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(cfg.year);
    for action in actions {
        session.dispatch(action);
    }

    if cfg.json {
        return print_json(&session, explain);
    }

    let details = format::config_details(session.config());
    if !details.is_empty() && cfg.quiet < 2 {
        print::header("active criteria", cfg.quiet);
        print::as_tree_one_level(details);
        mprint!();
    }

    if session.survivors().is_empty() {
        print::header("nothing survives", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header(&format!("{} survivors", cfg.year), cfg.quiet);
    for row in format::chip_rows(session.survivors()) {
        print::print(&row);
    }

    if explain && cfg.quiet < 2 {
        mprint!();
        print::header("excluded", cfg.quiet);
        for ball in session.balls() {
            if let Some(rule) = rejection(ball, session.config()) {
                print::aligned_line(
                    &format!("{:02}", ball.number),
                    2,
                    rule.to_string().color(colors::ACCENT),
                );
            }
        }
    }

    summary(&session, cfg);
    Ok(())
}

fn summary(session: &Session, cfg: &Config) {
    let remaining = session.survivors().len();
    let text = format!(
        "{} of {} numbers remain",
        remaining.to_string().green().bold(),
        session.balls().len()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&text);
            print::print(&session.copy_line());
        }
        1 => {
            mprint!();
            success!("{text}");
            print::print(&session.copy_line());
        }
        _ => {}
    }
}

fn print_json(session: &Session, explain: bool) -> anyhow::Result<()> {
    let survivors: Vec<u8> = session.survivors().iter().map(|ball| ball.number).collect();
    let criteria: Vec<String> = session
        .config()
        .criteria()
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut body = json!({
        "year": session.year(),
        "criteria": criteria,
        "customMode": session.config().custom_mode.to_string(),
        "customNumbers": session.config().custom_numbers,
        "survivors": survivors,
        "count": survivors.len(),
    });

    if explain {
        let excluded: Vec<_> = session
            .balls()
            .iter()
            .filter_map(|ball| {
                rejection(ball, session.config())
                    .map(|rule| json!({"number": ball.number, "rule": rule.to_string()}))
            })
            .collect();
        body["excluded"] = json!(excluded);
    }

    print::print(&serde_json::to_string_pretty(&body)?);
    Ok(())
}
