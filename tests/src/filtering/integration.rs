#![cfg(test)]
use std::collections::BTreeSet;

use sift_common::lottery::attribute::{Color, Parity, Size};
use sift_common::lottery::composite::HalfWave;
use sift_common::lottery::zodiac::Zodiac;
use sift_common::utils::numbers::{format_numbers, parse_numbers};
use sift_core::criteria::{Category, Criterion, CustomMode, FilterConfig};
use sift_core::deriver::{attributes_of, derive_balls, numbers_of};
use sift_core::filter::{apply, rejection};
use sift_core::reconcile::Action;
use sift_core::session::Session;

fn survivors(session: &Session) -> Vec<u8> {
    session.survivors().iter().map(|ball| ball.number).collect()
}

/// Typed manual list feeds the filter the same way the input box does.
#[test]
fn manual_text_round_trip() {
    let mut session = Session::new(2025);
    let typed = "01 02,03|0405";
    session.dispatch(&Action::Manual {
        mode: CustomMode::Exclude,
        numbers: parse_numbers(typed),
    });
    // One multi-token input: "0405" is a single token, read as 405 and dropped.
    assert_eq!(session.custom_input(), "01 02 03");
    assert_eq!(survivors(&session).len(), 46);

    let packed = parse_numbers("0405");
    assert_eq!(format_numbers(&packed), "04 05");
}

/// Every zodiac gets four numbers, except the year's own which gets five.
#[test]
fn zodiac_partition_every_year() {
    for year in 2000..=2030 {
        let balls = derive_balls(year);
        let own = balls[0].zodiac;
        let mut seen = BTreeSet::new();
        for zodiac in Zodiac::ALL {
            let members = numbers_of(*zodiac, year);
            let expected = if *zodiac == own { 5 } else { 4 };
            assert_eq!(members.len(), expected, "{zodiac} in {year}");
            seen.extend(members);
        }
        assert_eq!(seen.len(), 49);
    }
}

#[test]
fn criteria_tokens_drive_a_session() {
    let mut session = Session::new(2025);
    let tokens = ["color:green", "size:big", "mod3:0", "zodiac:蛇"];
    for token in tokens {
        let action: Action = token.parse::<Action>().expect("token should parse");
        session.dispatch(&action);
    }

    for ball in session.survivors() {
        assert_ne!(ball.color, Color::Green);
        assert_eq!(ball.size(), Size::Small);
        assert_ne!(ball.number % 3, 0);
        assert_ne!(ball.zodiac, Zodiac::Snake);
    }
    assert!(!session.survivors().is_empty());
}

#[test]
fn explanation_matches_survival() {
    let balls = derive_balls(2025);
    let mut cfg = FilterConfig::default();
    cfg.toggle(Criterion::HalfWave(HalfWave {
        color: Color::Blue,
        parity: Parity::Even,
    }));
    cfg.toggle(Criterion::Segment(3));
    cfg.custom_numbers = [1, 2].into_iter().collect();

    let kept = apply(&balls, &cfg);
    for ball in &balls {
        let rule = rejection(ball, &cfg);
        assert_eq!(rule.is_none(), kept.contains(ball), "ball {}", ball.number);
    }
    assert_eq!(rejection(&balls[0], &cfg), Some(Category::Manual));
}

#[test]
fn clicking_a_ball_of_an_excluded_zodiac() {
    let mut session = Session::new(2025);
    session.dispatch(&"zodiac:蛇".parse::<Action>().expect("zodiac token"));
    assert!(!session.is_survivor(25));

    session.dispatch(&Action::ToggleBall(25));
    assert!(session.is_survivor(25));
    for n in [1, 13, 37, 49] {
        assert!(!session.is_survivor(n), "{n} should stay excluded");
    }

    // Turning 蛇 back on and off again releases the whole group.
    session.dispatch(&Action::ToggleZodiac(Zodiac::Snake));
    session.dispatch(&Action::ToggleZodiac(Zodiac::Snake));
    assert!(session.is_survivor(1));
    assert!(session.config().custom_numbers.is_empty());
}

#[test]
fn keep_mode_with_other_rules() {
    let mut session = Session::new(2025);
    session.dispatch(&"keep:05 10 15 20".parse::<Action>().expect("keep token"));
    session.dispatch(&"parity:even".parse::<Action>().expect("parity token"));
    assert_eq!(survivors(&session), vec![5, 15]);
    assert_eq!(session.copy_line(), "05 15 (共2个号码)");

    session.dispatch(&Action::ClearCustom);
    assert!(session.survivors().is_empty());
}

#[test]
fn single_lookup_agrees_with_rotation() {
    let ball = attributes_of(13, 2025).expect("13 is a ball");
    assert_eq!(ball.zodiac, Zodiac::Snake);
    assert_eq!(ball.color, Color::Red);
    assert_eq!(attributes_of(13, 2026).map(|b| b.zodiac), Some(Zodiac::Horse));
}
