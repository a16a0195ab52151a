//! Two-axis exclusion keys.
//!
//! Each key pairs a primary attribute with the ball's parity and renders as
//! `{primary}_{parity}`: `RED_odd`, `0_even`, `big_odd`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::attribute::{Color, Parity, Size};

/// Largest tens digit on the board (40-49).
pub const MAX_HEAD: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeKeyError {
    #[error("composite key '{0}' must look like <primary>_<odd|even>")]
    Shape(String),
    #[error("invalid head '{0}' in composite key (expected 0-4)")]
    Head(String),
    #[error(transparent)]
    Label(#[from] super::UnknownLabel),
}

/// 半波: color combined with parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfWave {
    pub color: Color,
    pub parity: Parity,
}

/// 半头: tens digit combined with parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfHead {
    pub head: u8,
    pub parity: Parity,
}

/// 半单双: big/small combined with parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfParity {
    pub size: Size,
    pub parity: Parity,
}

fn split_key(s: &str) -> Result<(&str, Parity), CompositeKeyError> {
    let (primary, parity) = s
        .trim()
        .rsplit_once('_')
        .ok_or_else(|| CompositeKeyError::Shape(s.to_string()))?;
    if primary.is_empty() {
        return Err(CompositeKeyError::Shape(s.to_string()));
    }
    Ok((primary, parity.parse()?))
}

impl fmt::Display for HalfWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.color, self.parity)
    }
}

impl FromStr for HalfWave {
    type Err = CompositeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, parity) = split_key(s)?;
        Ok(Self {
            color: color.parse()?,
            parity,
        })
    }
}

impl fmt::Display for HalfHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.head, self.parity)
    }
}

impl FromStr for HalfHead {
    type Err = CompositeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, parity) = split_key(s)?;
        let head = head
            .parse::<u8>()
            .ok()
            .filter(|h| *h <= MAX_HEAD)
            .ok_or_else(|| CompositeKeyError::Head(head.to_string()))?;
        Ok(Self { head, parity })
    }
}

impl fmt::Display for HalfParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.size, self.parity)
    }
}

impl FromStr for HalfParity {
    type Err = CompositeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (size, parity) = split_key(s)?;
        Ok(Self {
            size: size.parse()?,
            parity,
        })
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
    fn test_key_rendering() {
        let wave = HalfWave { color: Color::Red, parity: Parity::Odd };
        assert_eq!(wave.to_string(), "RED_odd");

        let head = HalfHead { head: 0, parity: Parity::Even };
        assert_eq!(head.to_string(), "0_even");

        let half = HalfParity { size: Size::Big, parity: Parity::Odd };
        assert_eq!(half.to_string(), "big_odd");
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(
            "red_odd".parse::<HalfWave>(),
            Ok(HalfWave { color: Color::Red, parity: Parity::Odd })
        );
        assert_eq!(
            "4_even".parse::<HalfHead>(),
            Ok(HalfHead { head: 4, parity: Parity::Even })
        );
        assert_eq!(
            "small_odd".parse::<HalfParity>(),
            Ok(HalfParity { size: Size::Small, parity: Parity::Odd })
        );
    }

    #[test]
    fn test_key_parsing_errors() {
        assert!(matches!("RED".parse::<HalfWave>(), Err(CompositeKeyError::Shape(_))));
        assert!(matches!("_odd".parse::<HalfWave>(), Err(CompositeKeyError::Shape(_))));
        assert!(matches!("5_odd".parse::<HalfHead>(), Err(CompositeKeyError::Head(_))));
        assert!(matches!("big_three".parse::<HalfParity>(), Err(CompositeKeyError::Label(_))));
    }
}
