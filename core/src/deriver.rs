//! # Ball Attribute Derivation
//!
//! Builds the 49-entry table for a year. Number 1 carries the year's own
//! zodiac and the cycle runs backwards as numbers increase, so in 2024 (龙)
//! ball 1 is 龙, ball 2 is 兔, ball 13 is 龙 again.
//!
//! Color and element never depend on the year.

use sift_common::lottery::ball::Ball;
use sift_common::lottery::catalog;
use sift_common::lottery::zodiac::{CYCLE_LEN, Zodiac};
use sift_common::lottery::MAX_NUMBER;

/// Anchor of the rotation: 2024 is a 龙 year.
const REFERENCE_YEAR: i64 = 2024;
const REFERENCE_ZODIAC: Zodiac = Zodiac::Dragon;

/// Cycle position of the zodiac assigned to ball 1 in `year`.
///
/// Defined for every year, including ones before the anchor.
pub fn zodiac_index_for_year(year: i32) -> usize {
    let offset = REFERENCE_ZODIAC.index() as i64 + (i64::from(year) - REFERENCE_YEAR);
    offset.rem_euclid(CYCLE_LEN as i64) as usize
}

pub fn zodiac_of(number: u8, year: i32) -> Zodiac {
    let first = zodiac_index_for_year(year) as i64;
    let index = (first - (i64::from(number) - 1)).rem_euclid(CYCLE_LEN as i64);
    Zodiac::from_index(index as usize)
}

/// Attributes of a single number in `year`; `None` outside 1-49.
pub fn attributes_of(number: u8, year: i32) -> Option<Ball> {
    let color = catalog::color_of(number)?;
    let element = catalog::element_of(number)?;
    Some(Ball {
        number,
        color,
        zodiac: zodiac_of(number, year),
        element,
    })
}

/// The full table, ascending by number.
pub fn derive_balls(year: i32) -> Vec<Ball> {
    (1..=MAX_NUMBER)
        .filter_map(|number| attributes_of(number, year))
        .collect()
}

/// Numbers carrying `zodiac` in `year`, ascending.
pub fn numbers_of(zodiac: Zodiac, year: i32) -> Vec<u8> {
    (1..=MAX_NUMBER)
        .filter(|number| zodiac_of(*number, year) == zodiac)
        .collect()
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
    fn test_reference_year_anchor() {
        let balls = derive_balls(2024);
        assert_eq!(balls[0].zodiac, Zodiac::Dragon);
        assert_eq!(balls[1].zodiac, Zodiac::Rabbit);
        assert_eq!(balls[12].zodiac, Zodiac::Dragon);
    }

    #[test]
    fn test_next_year_moves_one_step_forward() {
        assert_eq!(derive_balls(2025)[0].zodiac, Zodiac::Snake);
        assert_eq!(derive_balls(2023)[0].zodiac, Zodiac::Rabbit);
    }

    #[test]
    fn test_table_covers_every_number_once() {
        for year in [1900, 2024, 2025, 2100] {
            let numbers: Vec<u8> = derive_balls(year).iter().map(|b| b.number).collect();
            let expected: Vec<u8> = (1..=49).collect();
            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn test_single_lookup_matches_table() {
        for year in [-3000, 0, 1999, 2024, 2031, i32::MAX, i32::MIN] {
            let balls = derive_balls(year);
            for ball in &balls {
                assert_eq!(attributes_of(ball.number, year), Some(*ball));
            }
        }
    }

    #[test]
    fn test_negative_offsets_normalize() {
        assert!(zodiac_index_for_year(i32::MIN) < CYCLE_LEN);
        assert_eq!(zodiac_index_for_year(2012), zodiac_index_for_year(2024));
        assert_eq!(zodiac_index_for_year(2020), Zodiac::Rat.index());
    }

    #[test]
    fn test_colors_do_not_depend_on_year() {
        let a = derive_balls(1987);
        let b = derive_balls(2025);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.color, y.color);
            assert_eq!(x.element, y.element);
        }
    }

    #[test]
    fn test_numbers_of_zodiac() {
        // The year's own zodiac gets five numbers, every other one gets four.
        assert_eq!(numbers_of(Zodiac::Snake, 2025), vec![1, 13, 25, 37, 49]);
        assert_eq!(numbers_of(Zodiac::Dragon, 2025), vec![2, 14, 26, 38]);
    }

    #[test]
    fn test_out_of_range_lookup() {
        assert_eq!(attributes_of(0, 2025), None);
        assert_eq!(attributes_of(50, 2025), None);
    }
}
