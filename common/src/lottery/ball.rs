//! # Ball Model
//!
//! A [`Ball`] is one number of the board together with the attributes derived
//! for a given year. The number is the identity; every other property is either
//! stored (color, zodiac, element) or computed from the number on demand.

use serde::Serialize;

use super::attribute::{Color, Element, Parity, Size};
use super::composite::{HalfParity, HalfHead, HalfWave};
use super::zodiac::{Zodiac, ZodiacAttributes};

/// Numbers from here up are "big" (25-49).
pub const BIG_NUMBER_FROM: u8 = 25;
/// Tails from here up are "big" (5-9).
pub const BIG_TAIL_FROM: u8 = 5;
/// Digit sums from here up are "big" (7-13).
pub const BIG_SUM_FROM: u8 = 7;
/// Width of a segment (段).
pub const SEGMENT_WIDTH: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ball {
    pub number: u8,
    pub color: Color,
    pub zodiac: Zodiac,
    pub element: Element,
}

impl Ball {
    /// Units digit.
    pub fn tail(&self) -> u8 {
        self.number % 10
    }

    /// Tens digit.
    pub fn head(&self) -> u8 {
        self.number / 10
    }

    /// 合数: head + tail.
    pub fn digit_sum(&self) -> u8 {
        self.head() + self.tail()
    }

    pub fn sum_tail(&self) -> u8 {
        self.digit_sum() % 10
    }

    pub fn parity(&self) -> Parity {
        Parity::of(self.number)
    }

    pub fn size(&self) -> Size {
        Size::split_at(self.number, BIG_NUMBER_FROM)
    }

    pub fn tail_size(&self) -> Size {
        Size::split_at(self.tail(), BIG_TAIL_FROM)
    }

    pub fn sum_parity(&self) -> Parity {
        Parity::of(self.digit_sum())
    }

    pub fn sum_size(&self) -> Size {
        Size::split_at(self.digit_sum(), BIG_SUM_FROM)
    }

    /// 1-7, grouping 01-07, 08-14, ..., 43-49.
    pub fn segment(&self) -> u8 {
        self.number.div_ceil(SEGMENT_WIDTH)
    }

    pub fn half_wave(&self) -> HalfWave {
        HalfWave {
            color: self.color,
            parity: self.parity(),
        }
    }

    pub fn half_head(&self) -> HalfHead {
        HalfHead {
            head: self.head(),
            parity: self.parity(),
        }
    }

    pub fn half_parity(&self) -> HalfParity {
        HalfParity {
            size: self.size(),
            parity: self.parity(),
        }
    }

    pub fn zodiac_attributes(&self) -> &'static ZodiacAttributes {
        self.zodiac.attributes()
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

    fn ball(number: u8) -> Ball {
        Ball {
            number,
            color: Color::Red,
            zodiac: Zodiac::Rat,
            element: Element::Fire,
        }
    }

    #[test]
    fn test_digits_and_sums() {
        let b = ball(38);
        assert_eq!(b.head(), 3);
        assert_eq!(b.tail(), 8);
        assert_eq!(b.digit_sum(), 11);
        assert_eq!(b.sum_tail(), 1);
        assert_eq!(b.sum_parity(), Parity::Odd);
        assert_eq!(b.sum_size(), Size::Big);
    }

    #[test]
    fn test_size_boundaries() {
        assert_eq!(ball(24).size(), Size::Small);
        assert_eq!(ball(25).size(), Size::Big);
        assert_eq!(ball(14).tail_size(), Size::Small);
        assert_eq!(ball(15).tail_size(), Size::Big);
        assert_eq!(ball(6).sum_size(), Size::Small);
        assert_eq!(ball(7).sum_size(), Size::Big);
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(ball(1).segment(), 1);
        assert_eq!(ball(7).segment(), 1);
        assert_eq!(ball(8).segment(), 2);
        assert_eq!(ball(42).segment(), 6);
        assert_eq!(ball(43).segment(), 7);
        assert_eq!(ball(49).segment(), 7);
    }

    #[test]
    fn test_composite_keys() {
        let b = ball(1);
        assert_eq!(b.half_wave().to_string(), "RED_odd");
        assert_eq!(b.half_head().to_string(), "0_odd");
        assert_eq!(b.half_parity().to_string(), "small_odd");
        assert_eq!(ball(40).half_parity().to_string(), "big_even");
    }
}
