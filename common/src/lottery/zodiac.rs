//! # Zodiac Cycle
//!
//! The 12 symbols in cycle order (鼠 first) and their fixed traits.
//!
//! The sky/ground and lucky/unlucky splits follow one regional convention among
//! several; the table below is the reference used by every filter.

use super::attribute::{DomesticWild, FrontBack, Luck, Parity, SkyGround, YinYang};

labelled_enum! {
    /// One of the 12 zodiac symbols (生肖), declared in cycle order.
    Zodiac as "zodiac" {
        Rat => "鼠" | "rat",
        Ox => "牛" | "ox",
        Tiger => "虎" | "tiger",
        Rabbit => "兔" | "rabbit",
        Dragon => "龙" | "dragon" | "龍",
        Snake => "蛇" | "snake",
        Horse => "马" | "horse" | "馬",
        Goat => "羊" | "goat" | "sheep",
        Monkey => "猴" | "monkey",
        Rooster => "鸡" | "rooster" | "雞",
        Dog => "狗" | "dog",
        Pig => "猪" | "pig" | "豬",
    }
}

/// Number of symbols in the cycle.
pub const CYCLE_LEN: usize = 12;

/// Static traits of a zodiac symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacAttributes {
    pub sky_ground: SkyGround,
    pub domestic_wild: DomesticWild,
    pub yin_yang: YinYang,
    pub front_back: FrontBack,
    pub luck: Luck,
    /// Stroke count of the symbol's character.
    pub strokes: u8,
}

impl ZodiacAttributes {
    pub fn stroke_parity(&self) -> Parity {
        Parity::of(self.strokes)
    }
}

const fn attrs(
    sky_ground: SkyGround,
    domestic_wild: DomesticWild,
    yin_yang: YinYang,
    front_back: FrontBack,
    luck: Luck,
    strokes: u8,
) -> ZodiacAttributes {
    ZodiacAttributes {
        sky_ground,
        domestic_wild,
        yin_yang,
        front_back,
        luck,
        strokes,
    }
}

use DomesticWild::{Domestic, Wild};
use FrontBack::{Back, Front};
use Luck::{Lucky, Unlucky};
use SkyGround::{Ground, Sky};
use YinYang::{Yang, Yin};

/// Indexed by [`Zodiac::index`].
const ZODIAC_ATTRIBUTES: [ZodiacAttributes; CYCLE_LEN] = [
    attrs(Ground, Wild, Yang, Front, Unlucky, 13), // 鼠
    attrs(Sky, Domestic, Yin, Front, Unlucky, 4),  // 牛
    attrs(Ground, Wild, Yang, Front, Unlucky, 8),  // 虎
    attrs(Sky, Wild, Yin, Front, Lucky, 8),        // 兔
    attrs(Sky, Wild, Yang, Front, Lucky, 5),       // 龙
    attrs(Ground, Wild, Yin, Front, Lucky, 11),    // 蛇
    attrs(Sky, Domestic, Yang, Back, Lucky, 3),    // 马
    attrs(Ground, Domestic, Yin, Back, Lucky, 6),  // 羊
    attrs(Sky, Wild, Yang, Back, Lucky, 12),       // 猴
    attrs(Ground, Domestic, Yin, Back, Lucky, 7),  // 鸡
    attrs(Ground, Domestic, Yang, Back, Unlucky, 8), // 狗
    attrs(Sky, Domestic, Yin, Back, Unlucky, 11),  // 猪
];

impl Zodiac {
    /// Symbol at `index` in the cycle, wrapping past the Pig.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % CYCLE_LEN]
    }

    pub fn attributes(self) -> &'static ZodiacAttributes {
        &ZODIAC_ATTRIBUTES[self.index()]
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
