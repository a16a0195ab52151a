//! # Manual / Zodiac Reconciliation
//!
//! The manual list and the zodiac exclusions overlap: excluding 蛇 and also
//! killing 13 by hand both remove 13. Toggling either side keeps the two
//! views consistent.
//!
//! * Clicking a ball whose zodiac is excluded turns that zodiac back on and
//!   moves its other numbers into the manual exclude list, leaving only the
//!   clicked ball available.
//! * Turning a zodiac back on while the manual exclude list still holds some
//!   of its numbers releases those numbers too.
//!
//! [`reconcile`] is a pure transition: previous config in, next config out.

use std::collections::BTreeSet;
use std::str::FromStr;

use sift_common::lottery::ball::Ball;
use sift_common::lottery::zodiac::Zodiac;
use sift_common::lottery::{UnknownLabel, is_ball_number};
use sift_common::utils::numbers::parse_numbers;
use thiserror::Error;

use crate::criteria::{Criterion, CriterionError, CustomMode, FilterConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip one criterion, no reconciliation.
    Toggle(Criterion),
    /// Click on a ball of the board.
    ToggleBall(u8),
    /// Zodiac toggle aware of the manual list.
    ToggleZodiac(Zodiac),
    SetMode(CustomMode),
    SetCustomNumbers(BTreeSet<u8>),
    /// Replace mode and list at once (`kill:` / `keep:`).
    Manual {
        mode: CustomMode,
        numbers: BTreeSet<u8>,
    },
    ClearCustom,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("'{0}' is not a ball number (1-49)")]
    Ball(String),
    #[error(transparent)]
    Label(#[from] UnknownLabel),
    #[error(transparent)]
    Criterion(#[from] CriterionError),
}

impl FromStr for Action {
    type Err = ActionError;

    /// Tokens: `ball:N`, `zodiac:Z`, `kill:LIST`, `keep:LIST`, `numbers:LIST`,
    /// `mode:exclude|keep`, `clear`, `reset`, or any criterion (`tail:3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "clear" => return Ok(Action::ClearCustom),
            "reset" => return Ok(Action::Reset),
            _ => {}
        }

        let Some((key, value)) = token.split_once(':') else {
            return Err(CriterionError::Shape(token.to_string()).into());
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "ball" => value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|n| is_ball_number(u32::from(*n)))
                .map(Action::ToggleBall)
                .ok_or_else(|| ActionError::Ball(value.trim().to_string())),
            "zodiac" => Ok(Action::ToggleZodiac(value.parse()?)),
            "kill" => Ok(Action::Manual {
                mode: CustomMode::Exclude,
                numbers: parse_numbers(value),
            }),
            "keep" => Ok(Action::Manual {
                mode: CustomMode::Keep,
                numbers: parse_numbers(value),
            }),
            "numbers" => Ok(Action::SetCustomNumbers(parse_numbers(value))),
            "mode" => Ok(Action::SetMode(value.parse()?)),
            _ => Ok(Action::Toggle(token.parse()?)),
        }
    }
}

fn members(balls: &[Ball], zodiac: Zodiac) -> impl Iterator<Item = u8> + '_ {
    balls
        .iter()
        .filter(move |ball| ball.zodiac == zodiac)
        .map(|ball| ball.number)
}

fn toggle_ball(cfg: &mut FilterConfig, number: u8, balls: &[Ball]) {
    let zodiac = balls.iter().find(|b| b.number == number).map(|b| b.zodiac);

    if let Some(zodiac) = zodiac.filter(|z| cfg.zodiacs.contains(*z)) {
        cfg.zodiacs.remove(zodiac);
        cfg.custom_numbers
            .extend(members(balls, zodiac).filter(|n| *n != number));
        cfg.custom_numbers.remove(&number);
    } else if !cfg.custom_numbers.remove(&number) {
        cfg.custom_numbers.insert(number);
    }

    cfg.custom_mode = CustomMode::Exclude;
}

fn toggle_zodiac(cfg: &mut FilterConfig, zodiac: Zodiac, balls: &[Ball]) {
    let releasing = cfg.zodiacs.contains(zodiac)
        && cfg.custom_mode == CustomMode::Exclude
        && members(balls, zodiac).any(|n| cfg.custom_numbers.contains(&n));

    if releasing {
        cfg.zodiacs.remove(zodiac);
        for n in members(balls, zodiac) {
            cfg.custom_numbers.remove(&n);
        }
    } else {
        cfg.zodiacs.toggle(zodiac);
    }
}

/// Next configuration after `action`, given the current year's `balls`.
pub fn reconcile(prev: &FilterConfig, action: &Action, balls: &[Ball]) -> FilterConfig {
    let mut next = prev.clone();
    match action {
        Action::Toggle(criterion) => {
            next.toggle(*criterion);
        }
        Action::ToggleBall(number) => toggle_ball(&mut next, *number, balls),
        Action::ToggleZodiac(zodiac) => toggle_zodiac(&mut next, *zodiac, balls),
        Action::SetMode(mode) => next.custom_mode = *mode,
        Action::SetCustomNumbers(numbers) => next.custom_numbers = numbers.clone(),
        Action::Manual { mode, numbers } => {
            next.custom_mode = *mode;
            next.custom_numbers = numbers.clone();
        }
        Action::ClearCustom => next.custom_numbers.clear(),
        Action::Reset => next = FilterConfig::default(),
    }
    next
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
    use crate::deriver::derive_balls;
    use crate::filter;

    fn set(numbers: &[u8]) -> BTreeSet<u8> {
        numbers.iter().copied().collect()
    }

    fn with_zodiac(zodiac: Zodiac) -> FilterConfig {
        let mut cfg = FilterConfig::default();
        cfg.zodiacs.insert(zodiac);
        cfg
    }

    #[test]
    fn test_ball_click_releases_its_zodiac() {
        // 2025: 蛇 owns 1, 13, 25, 37, 49.
        let balls = derive_balls(2025);
        let prev = with_zodiac(Zodiac::Snake);
        let next = reconcile(&prev, &Action::ToggleBall(13), &balls);

        assert!(!next.zodiacs.contains(Zodiac::Snake));
        assert_eq!(next.custom_numbers, set(&[1, 25, 37, 49]));
        assert_eq!(next.custom_mode, CustomMode::Exclude);

        let survivors: Vec<u8> = filter::apply(&balls, &next).iter().map(|b| b.number).collect();
        assert!(survivors.contains(&13));
        assert_eq!(survivors.len(), 45);
    }

    #[test]
    fn test_ball_click_plain_toggle() {
        let balls = derive_balls(2025);
        let mut prev = FilterConfig::default();
        prev.custom_mode = CustomMode::Keep;

        let next = reconcile(&prev, &Action::ToggleBall(7), &balls);
        assert_eq!(next.custom_numbers, set(&[7]));
        assert_eq!(next.custom_mode, CustomMode::Exclude);

        let back = reconcile(&next, &Action::ToggleBall(7), &balls);
        assert!(back.custom_numbers.is_empty());
    }

    #[test]
    fn test_zodiac_release_clears_members() {
        let balls = derive_balls(2025);
        let mut prev = with_zodiac(Zodiac::Snake);
        prev.custom_numbers = set(&[1, 25, 8]);

        let next = reconcile(&prev, &Action::ToggleZodiac(Zodiac::Snake), &balls);
        assert!(!next.zodiacs.contains(Zodiac::Snake));
        assert_eq!(next.custom_numbers, set(&[8]));
    }

    #[test]
    fn test_zodiac_toggle_without_overlap() {
        let balls = derive_balls(2025);
        let mut prev = FilterConfig::default();
        prev.custom_numbers = set(&[8]);

        let on = reconcile(&prev, &Action::ToggleZodiac(Zodiac::Snake), &balls);
        assert!(on.zodiacs.contains(Zodiac::Snake));
        assert_eq!(on.custom_numbers, set(&[8]));

        let off = reconcile(&on, &Action::ToggleZodiac(Zodiac::Snake), &balls);
        assert_eq!(off, prev);
    }

    #[test]
    fn test_zodiac_toggle_in_keep_mode_leaves_list() {
        let balls = derive_balls(2025);
        let mut prev = with_zodiac(Zodiac::Snake);
        prev.custom_mode = CustomMode::Keep;
        prev.custom_numbers = set(&[1, 25]);

        let next = reconcile(&prev, &Action::ToggleZodiac(Zodiac::Snake), &balls);
        assert!(!next.zodiacs.contains(Zodiac::Snake));
        assert_eq!(next.custom_numbers, set(&[1, 25]));
    }

    #[test]
    fn test_reconcile_does_not_touch_previous() {
        let balls = derive_balls(2025);
        let prev = with_zodiac(Zodiac::Snake);
        let snapshot = prev.clone();
        let _ = reconcile(&prev, &Action::ToggleBall(1), &balls);
        assert_eq!(prev, snapshot);
    }

    #[test]
    fn test_manual_actions() {
        let balls = derive_balls(2025);
        let keep = reconcile(&FilterConfig::default(), &"keep:01 02 03".parse::<Action>().unwrap(), &balls);
        assert_eq!(keep.custom_mode, CustomMode::Keep);
        assert_eq!(keep.custom_numbers, set(&[1, 2, 3]));

        let cleared = reconcile(&keep, &Action::ClearCustom, &balls);
        assert!(cleared.custom_numbers.is_empty());
        assert_eq!(cleared.custom_mode, CustomMode::Keep);

        let reset = reconcile(&keep, &Action::Reset, &balls);
        assert!(reset.is_default());
    }

    #[test]
    fn test_action_tokens() {
        assert_eq!("ball:13".parse(), Ok(Action::ToggleBall(13)));
        assert_eq!("zodiac:蛇".parse(), Ok(Action::ToggleZodiac(Zodiac::Snake)));
        assert_eq!("mode:keep".parse(), Ok(Action::SetMode(CustomMode::Keep)));
        assert_eq!("RESET".parse(), Ok(Action::Reset));
        assert_eq!("tail:3".parse(), Ok(Action::Toggle(Criterion::Tail(3))));
        assert_eq!(
            "kill:010203".parse(),
            Ok(Action::Manual {
                mode: CustomMode::Exclude,
                numbers: set(&[1, 2, 3]),
            })
        );
        assert_eq!("numbers:5 6".parse(), Ok(Action::SetCustomNumbers(set(&[5, 6]))));
    }

    #[test]
    fn test_action_token_errors() {
        assert!(matches!("ball:50".parse::<Action>(), Err(ActionError::Ball(_))));
        assert!(matches!("ball:x".parse::<Action>(), Err(ActionError::Ball(_))));
        assert!(matches!("zodiac:cat".parse::<Action>(), Err(ActionError::Label(_))));
        assert!(matches!("bogus".parse::<Action>(), Err(ActionError::Criterion(_))));
        assert!(matches!("tail:10".parse::<Action>(), Err(ActionError::Criterion(_))));
    }
}
