//! Selection session: the current year's table, the active configuration and
//! the survivors it produces. Survivors are recomputed whenever the year or
//! the configuration changes, never on read.

use sift_common::lottery::ball::Ball;
use sift_common::utils::numbers::format_numbers;
use tracing::debug;

use crate::criteria::FilterConfig;
use crate::deriver::derive_balls;
use crate::filter;
use crate::reconcile::{Action, reconcile};

#[derive(Debug, Clone)]
pub struct Session {
    year: i32,
    balls: Vec<Ball>,
    config: FilterConfig,
    survivors: Vec<Ball>,
}

impl Session {
    pub fn new(year: i32) -> Self {
        let balls = derive_balls(year);
        let survivors = balls.clone();
        Self {
            year,
            balls,
            config: FilterConfig::default(),
            survivors,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn survivors(&self) -> &[Ball] {
        &self.survivors
    }

    pub fn is_survivor(&self, number: u8) -> bool {
        self.survivors.iter().any(|ball| ball.number == number)
    }

    /// Switches the zodiac rotation. The configuration is kept as is.
    pub fn set_year(&mut self, year: i32) {
        if year == self.year {
            return;
        }
        self.year = year;
        self.balls = derive_balls(year);
        self.refresh();
    }

    pub fn dispatch(&mut self, action: &Action) {
        let next = reconcile(&self.config, action, &self.balls);
        if next != self.config {
            self.config = next;
            self.refresh();
        }
    }

    /// Manual list as the user would see it in the input box.
    pub fn custom_input(&self) -> String {
        format_numbers(&self.config.custom_numbers)
    }

    /// Clipboard text: `01 07 49 (共3个号码)`.
    pub fn copy_line(&self) -> String {
        let numbers: Vec<u8> = self.survivors.iter().map(|ball| ball.number).collect();
        format!("{} (共{}个号码)", format_numbers(&numbers), numbers.len())
    }

    fn refresh(&mut self) {
        self.survivors = filter::apply(&self.balls, &self.config);
        debug!(
            year = self.year,
            survivors = self.survivors.len(),
            "filter re-evaluated"
        );
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
    use crate::criteria::Criterion;
    use sift_common::lottery::zodiac::Zodiac;

    #[test]
    fn test_new_session_keeps_all() {
        let session = Session::new(2025);
        assert_eq!(session.survivors().len(), 49);
        assert!(session.config().is_default());
    }

    #[test]
    fn test_dispatch_refreshes_survivors() {
        let mut session = Session::new(2025);
        session.dispatch(&Action::Toggle(Criterion::Zodiac(Zodiac::Snake)));
        assert_eq!(session.survivors().len(), 44);
        assert!(!session.is_survivor(13));

        session.dispatch(&Action::ToggleBall(13));
        assert!(session.is_survivor(13));
        assert_eq!(session.custom_input(), "01 25 37 49");
    }

    #[test]
    fn test_year_change_rotates_zodiacs() {
        let mut session = Session::new(2025);
        session.dispatch(&Action::Toggle(Criterion::Zodiac(Zodiac::Snake)));
        assert!(!session.is_survivor(1));

        // 2024 is a 龙 year: 蛇 moves to 12, 24, 36, 48.
        session.set_year(2024);
        assert!(session.is_survivor(1));
        assert!(!session.is_survivor(12));
        assert_eq!(session.survivors().len(), 45);
    }

    #[test]
    fn test_copy_line() {
        let mut session = Session::new(2025);
        session.dispatch(&Action::Manual {
            mode: crate::criteria::CustomMode::Keep,
            numbers: [1, 7, 49].into_iter().collect(),
        });
        assert_eq!(session.copy_line(), "01 07 49 (共3个号码)");
    }
}
