//! # Filter Criteria
//!
//! The filter configuration is a fixed record: one named field per category,
//! each a bitset over that category's closed domain. A set bit means "exclude
//! balls with this value".
//!
//! [`Criterion`] names a single (category, value) pair and is what toggles
//! operate on. Its textual form is `category:value`, for example `tail:3`,
//! `zodiac:龙`, `half-wave:RED_odd`.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::ops::RangeInclusive;
use std::str::FromStr;

use sift_common::lottery::UnknownLabel;
use sift_common::lottery::attribute::{
    Color, DomesticWild, Element, FrontBack, Luck, Parity, Size, SkyGround, YinYang,
};
use sift_common::lottery::composite::{CompositeKeyError, HalfHead, HalfParity, HalfWave, MAX_HEAD};
use sift_common::lottery::zodiac::Zodiac;
use thiserror::Error;

/// A value that owns one bit of a [`Mask`].
pub trait Member: Copy {
    /// Bit position, always below 64.
    fn bit(self) -> u32;
    fn from_bit(bit: u32) -> Option<Self>;
}

impl Member for u8 {
    fn bit(self) -> u32 {
        u32::from(self)
    }

    fn from_bit(bit: u32) -> Option<Self> {
        u8::try_from(bit).ok()
    }
}

macro_rules! enum_member {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Member for $ty {
                fn bit(self) -> u32 {
                    self.index() as u32
                }

                fn from_bit(bit: u32) -> Option<Self> {
                    <$ty>::ALL.get(bit as usize).copied()
                }
            }
        )+
    };
}

enum_member!(Color, Element, Zodiac, Parity, Size, SkyGround, DomesticWild, YinYang, FrontBack, Luck);

impl Member for HalfWave {
    fn bit(self) -> u32 {
        (self.color.index() * 2 + self.parity.index()) as u32
    }

    fn from_bit(bit: u32) -> Option<Self> {
        Some(Self {
            color: Color::from_bit(bit / 2)?,
            parity: Parity::from_bit(bit % 2)?,
        })
    }
}

impl Member for HalfHead {
    fn bit(self) -> u32 {
        u32::from(self.head) * 2 + self.parity.index() as u32
    }

    fn from_bit(bit: u32) -> Option<Self> {
        let head = u8::try_from(bit / 2).ok().filter(|h| *h <= MAX_HEAD)?;
        Some(Self {
            head,
            parity: Parity::from_bit(bit % 2)?,
        })
    }
}

impl Member for HalfParity {
    fn bit(self) -> u32 {
        (self.size.index() * 2 + self.parity.index()) as u32
    }

    fn from_bit(bit: u32) -> Option<Self> {
        Some(Self {
            size: Size::from_bit(bit / 2)?,
            parity: Parity::from_bit(bit % 2)?,
        })
    }
}

/// Set of excluded values for one category.
pub struct Mask<T> {
    bits: u64,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Mask<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Mask<T> {}

impl<T> PartialEq for Mask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for Mask<T> {}

impl<T> Default for Mask<T> {
    fn default() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }
}

impl<T: Member + fmt::Debug> fmt::Debug for Mask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Member> Mask<T> {
    /// Values without a bit below 64 never become members.
    fn flag(value: T) -> u64 {
        1u64.checked_shl(value.bit()).unwrap_or(0)
    }

    pub fn contains(&self, value: T) -> bool {
        self.bits & Self::flag(value) != 0
    }

    /// Returns `true` when the value was not yet present.
    pub fn insert(&mut self, value: T) -> bool {
        let fresh = !self.contains(value);
        self.bits |= Self::flag(value);
        fresh
    }

    /// Returns `true` when the value was present.
    pub fn remove(&mut self, value: T) -> bool {
        let present = self.contains(value);
        self.bits &= !Self::flag(value);
        present
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, value: T) -> bool {
        self.bits ^= Self::flag(value);
        self.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..u64::BITS)
            .filter(|bit| self.bits & (1u64 << bit) != 0)
            .filter_map(T::from_bit)
    }
}

impl<T: Member> FromIterator<T> for Mask<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mask = Self::default();
        for value in iter {
            mask.insert(value);
        }
        mask
    }
}

/// How the manual number list is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomMode {
    /// 杀码: listed numbers are removed.
    #[default]
    Exclude,
    /// 出码: only listed numbers may remain.
    Keep,
}

impl fmt::Display for CustomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CustomMode::Exclude => "exclude",
            CustomMode::Keep => "keep",
        })
    }
}

impl FromStr for CustomMode {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude" | "kill" | "杀" | "杀码" => Ok(CustomMode::Exclude),
            "keep" | "出" | "出码" => Ok(CustomMode::Keep),
            other => Err(UnknownLabel {
                kind: "mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Exclusion categories, in the order the filter evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Manual,
    Tail,
    Head,
    Zodiac,
    Color,
    Element,
    Parity,
    Size,
    TailSize,
    DigitSum,
    SumParity,
    SumSize,
    SumTail,
    HalfWave,
    HalfHead,
    HalfParity,
    SkyGround,
    DomesticWild,
    FrontBack,
    YinYang,
    Luck,
    Strokes,
    Mod3,
    Mod4,
    Mod6,
    Mod7,
    Segment,
}

const CATEGORY_TOKENS: &[(Category, &str)] = &[
    (Category::Manual, "manual"),
    (Category::Tail, "tail"),
    (Category::Head, "head"),
    (Category::Zodiac, "zodiac"),
    (Category::Color, "color"),
    (Category::Element, "element"),
    (Category::Parity, "parity"),
    (Category::Size, "size"),
    (Category::TailSize, "tail-size"),
    (Category::DigitSum, "sum"),
    (Category::SumParity, "sum-parity"),
    (Category::SumSize, "sum-size"),
    (Category::SumTail, "sum-tail"),
    (Category::HalfWave, "half-wave"),
    (Category::HalfHead, "half-head"),
    (Category::HalfParity, "half-parity"),
    (Category::SkyGround, "sky-ground"),
    (Category::DomesticWild, "domestic-wild"),
    (Category::FrontBack, "front-back"),
    (Category::YinYang, "yin-yang"),
    (Category::Luck, "luck"),
    (Category::Strokes, "strokes"),
    (Category::Mod3, "mod3"),
    (Category::Mod4, "mod4"),
    (Category::Mod6, "mod6"),
    (Category::Mod7, "mod7"),
    (Category::Segment, "segment"),
];

impl Category {
    pub fn token(self) -> &'static str {
        CATEGORY_TOKENS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, token)| *token)
            .unwrap_or("?")
    }

    /// Accepted values for the numeric categories.
    pub fn numeric_domain(self) -> Option<RangeInclusive<u8>> {
        match self {
            Category::Tail | Category::SumTail => Some(0..=9),
            Category::Head => Some(0..=MAX_HEAD),
            Category::DigitSum => Some(1..=13),
            Category::Mod3 => Some(0..=2),
            Category::Mod4 => Some(0..=3),
            Category::Mod6 => Some(0..=5),
            Category::Mod7 => Some(0..=6),
            Category::Segment => Some(1..=7),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CATEGORY_TOKENS
            .iter()
            .find(|(_, token)| *token == wanted)
            .map(|(category, _)| *category)
            .ok_or_else(|| CriterionError::Category(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriterionError {
    #[error("criterion '{0}' must look like <category>:<value>")]
    Shape(String),
    #[error("unknown category '{0}'")]
    Category(String),
    #[error("{category} accepts {min}-{max}, got '{value}'")]
    OutOfRange {
        category: Category,
        value: String,
        min: u8,
        max: u8,
    },
    #[error("the manual list is set with kill:, keep: or ball:")]
    Manual,
    #[error(transparent)]
    Label(#[from] UnknownLabel),
    #[error(transparent)]
    Composite(#[from] CompositeKeyError),
}

/// One (category, value) pair of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Tail(u8),
    Head(u8),
    Zodiac(Zodiac),
    Color(Color),
    Element(Element),
    Parity(Parity),
    Size(Size),
    TailSize(Size),
    DigitSum(u8),
    SumParity(Parity),
    SumSize(Size),
    SumTail(u8),
    HalfWave(HalfWave),
    HalfHead(HalfHead),
    HalfParity(HalfParity),
    SkyGround(SkyGround),
    DomesticWild(DomesticWild),
    FrontBack(FrontBack),
    YinYang(YinYang),
    Luck(Luck),
    Strokes(Parity),
    Mod3(u8),
    Mod4(u8),
    Mod6(u8),
    Mod7(u8),
    Segment(u8),
}

impl Criterion {
    pub fn category(&self) -> Category {
        match self {
            Criterion::Tail(_) => Category::Tail,
            Criterion::Head(_) => Category::Head,
            Criterion::Zodiac(_) => Category::Zodiac,
            Criterion::Color(_) => Category::Color,
            Criterion::Element(_) => Category::Element,
            Criterion::Parity(_) => Category::Parity,
            Criterion::Size(_) => Category::Size,
            Criterion::TailSize(_) => Category::TailSize,
            Criterion::DigitSum(_) => Category::DigitSum,
            Criterion::SumParity(_) => Category::SumParity,
            Criterion::SumSize(_) => Category::SumSize,
            Criterion::SumTail(_) => Category::SumTail,
            Criterion::HalfWave(_) => Category::HalfWave,
            Criterion::HalfHead(_) => Category::HalfHead,
            Criterion::HalfParity(_) => Category::HalfParity,
            Criterion::SkyGround(_) => Category::SkyGround,
            Criterion::DomesticWild(_) => Category::DomesticWild,
            Criterion::FrontBack(_) => Category::FrontBack,
            Criterion::YinYang(_) => Category::YinYang,
            Criterion::Luck(_) => Category::Luck,
            Criterion::Strokes(_) => Category::Strokes,
            Criterion::Mod3(_) => Category::Mod3,
            Criterion::Mod4(_) => Category::Mod4,
            Criterion::Mod6(_) => Category::Mod6,
            Criterion::Mod7(_) => Category::Mod7,
            Criterion::Segment(_) => Category::Segment,
        }
    }

    fn value_text(&self) -> String {
        match self {
            Criterion::Tail(v)
            | Criterion::Head(v)
            | Criterion::DigitSum(v)
            | Criterion::SumTail(v)
            | Criterion::Mod3(v)
            | Criterion::Mod4(v)
            | Criterion::Mod6(v)
            | Criterion::Mod7(v)
            | Criterion::Segment(v) => v.to_string(),
            Criterion::Zodiac(v) => v.to_string(),
            Criterion::Color(v) => v.to_string(),
            Criterion::Element(v) => v.to_string(),
            Criterion::Parity(v) | Criterion::SumParity(v) | Criterion::Strokes(v) => v.to_string(),
            Criterion::Size(v) | Criterion::TailSize(v) | Criterion::SumSize(v) => v.to_string(),
            Criterion::HalfWave(v) => v.to_string(),
            Criterion::HalfHead(v) => v.to_string(),
            Criterion::HalfParity(v) => v.to_string(),
            Criterion::SkyGround(v) => v.to_string(),
            Criterion::DomesticWild(v) => v.to_string(),
            Criterion::FrontBack(v) => v.to_string(),
            Criterion::YinYang(v) => v.to_string(),
            Criterion::Luck(v) => v.to_string(),
        }
    }

    /// Builds a criterion from an already split `category` and `value`.
    pub fn parse_value(category: Category, value: &str) -> Result<Self, CriterionError> {
        let value = value.trim();
        if let Some(domain) = category.numeric_domain() {
            let n = value
                .parse::<u8>()
                .ok()
                .filter(|n| domain.contains(n))
                .ok_or_else(|| CriterionError::OutOfRange {
                    category,
                    value: value.to_string(),
                    min: *domain.start(),
                    max: *domain.end(),
                })?;
            return Ok(match category {
                Category::Tail => Criterion::Tail(n),
                Category::Head => Criterion::Head(n),
                Category::DigitSum => Criterion::DigitSum(n),
                Category::SumTail => Criterion::SumTail(n),
                Category::Mod3 => Criterion::Mod3(n),
                Category::Mod4 => Criterion::Mod4(n),
                Category::Mod6 => Criterion::Mod6(n),
                Category::Mod7 => Criterion::Mod7(n),
                _ => Criterion::Segment(n),
            });
        }

        Ok(match category {
            Category::Zodiac => Criterion::Zodiac(value.parse()?),
            Category::Color => Criterion::Color(value.parse()?),
            Category::Element => Criterion::Element(value.parse()?),
            Category::Parity => Criterion::Parity(value.parse()?),
            Category::Size => Criterion::Size(value.parse()?),
            Category::TailSize => Criterion::TailSize(value.parse()?),
            Category::SumParity => Criterion::SumParity(value.parse()?),
            Category::SumSize => Criterion::SumSize(value.parse()?),
            Category::HalfWave => Criterion::HalfWave(value.parse()?),
            Category::HalfHead => Criterion::HalfHead(value.parse()?),
            Category::HalfParity => Criterion::HalfParity(value.parse()?),
            Category::SkyGround => Criterion::SkyGround(value.parse()?),
            Category::DomesticWild => Criterion::DomesticWild(value.parse()?),
            Category::FrontBack => Criterion::FrontBack(value.parse()?),
            Category::YinYang => Criterion::YinYang(value.parse()?),
            Category::Luck => Criterion::Luck(value.parse()?),
            Category::Strokes => Criterion::Strokes(value.parse()?),
            _ => return Err(CriterionError::Manual),
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category(), self.value_text())
    }
}

impl FromStr for Criterion {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once(':')
            .ok_or_else(|| CriterionError::Shape(s.to_string()))?;
        Criterion::parse_value(category.parse()?, value)
    }
}

/// Runs `$body` with `$mask` bound to the field addressed by `$criterion` and
/// `$value` to the criterion's payload.
macro_rules! with_mask {
    ($cfg:expr, $criterion:expr, [$($borrow:tt)+], |$mask:ident, $value:ident| $body:expr) => {
        match $criterion {
            Criterion::Tail($value) => { let $mask = $($borrow)+ $cfg.tails; $body }
            Criterion::Head($value) => { let $mask = $($borrow)+ $cfg.heads; $body }
            Criterion::Zodiac($value) => { let $mask = $($borrow)+ $cfg.zodiacs; $body }
            Criterion::Color($value) => { let $mask = $($borrow)+ $cfg.colors; $body }
            Criterion::Element($value) => { let $mask = $($borrow)+ $cfg.elements; $body }
            Criterion::Parity($value) => { let $mask = $($borrow)+ $cfg.parity; $body }
            Criterion::Size($value) => { let $mask = $($borrow)+ $cfg.size; $body }
            Criterion::TailSize($value) => { let $mask = $($borrow)+ $cfg.tail_size; $body }
            Criterion::DigitSum($value) => { let $mask = $($borrow)+ $cfg.digit_sums; $body }
            Criterion::SumParity($value) => { let $mask = $($borrow)+ $cfg.sum_parity; $body }
            Criterion::SumSize($value) => { let $mask = $($borrow)+ $cfg.sum_size; $body }
            Criterion::SumTail($value) => { let $mask = $($borrow)+ $cfg.sum_tails; $body }
            Criterion::HalfWave($value) => { let $mask = $($borrow)+ $cfg.half_wave; $body }
            Criterion::HalfHead($value) => { let $mask = $($borrow)+ $cfg.half_head; $body }
            Criterion::HalfParity($value) => { let $mask = $($borrow)+ $cfg.half_parity; $body }
            Criterion::SkyGround($value) => { let $mask = $($borrow)+ $cfg.zodiac_sky_ground; $body }
            Criterion::DomesticWild($value) => { let $mask = $($borrow)+ $cfg.zodiac_domestic_wild; $body }
            Criterion::FrontBack($value) => { let $mask = $($borrow)+ $cfg.zodiac_front_back; $body }
            Criterion::YinYang($value) => { let $mask = $($borrow)+ $cfg.zodiac_yin_yang; $body }
            Criterion::Luck($value) => { let $mask = $($borrow)+ $cfg.zodiac_luck; $body }
            Criterion::Strokes($value) => { let $mask = $($borrow)+ $cfg.zodiac_strokes; $body }
            Criterion::Mod3($value) => { let $mask = $($borrow)+ $cfg.mod3; $body }
            Criterion::Mod4($value) => { let $mask = $($borrow)+ $cfg.mod4; $body }
            Criterion::Mod6($value) => { let $mask = $($borrow)+ $cfg.mod6; $body }
            Criterion::Mod7($value) => { let $mask = $($borrow)+ $cfg.mod7; $body }
            Criterion::Segment($value) => { let $mask = $($borrow)+ $cfg.segments; $body }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub tails: Mask<u8>,
    pub heads: Mask<u8>,
    pub zodiacs: Mask<Zodiac>,
    pub colors: Mask<Color>,
    pub elements: Mask<Element>,

    pub digit_sums: Mask<u8>,
    pub sum_tails: Mask<u8>,
    pub mod3: Mask<u8>,
    pub mod4: Mask<u8>,
    pub mod6: Mask<u8>,
    pub mod7: Mask<u8>,
    pub segments: Mask<u8>,

    pub parity: Mask<Parity>,
    pub size: Mask<Size>,
    pub tail_size: Mask<Size>,
    pub sum_parity: Mask<Parity>,
    pub sum_size: Mask<Size>,

    pub zodiac_sky_ground: Mask<SkyGround>,
    pub zodiac_domestic_wild: Mask<DomesticWild>,
    pub zodiac_front_back: Mask<FrontBack>,
    pub zodiac_yin_yang: Mask<YinYang>,
    pub zodiac_luck: Mask<Luck>,
    pub zodiac_strokes: Mask<Parity>,

    pub half_wave: Mask<HalfWave>,
    pub half_head: Mask<HalfHead>,
    pub half_parity: Mask<HalfParity>,

    pub custom_mode: CustomMode,
    pub custom_numbers: BTreeSet<u8>,
}

impl FilterConfig {
    pub fn contains(&self, criterion: Criterion) -> bool {
        with_mask!(self, criterion, [&], |mask, value| mask.contains(value))
    }

    /// Flips one value and returns whether it is now excluded.
    pub fn toggle(&mut self, criterion: Criterion) -> bool {
        with_mask!(self, criterion, [&mut], |mask, value| mask.toggle(value))
    }

    pub fn insert(&mut self, criterion: Criterion) -> bool {
        with_mask!(self, criterion, [&mut], |mask, value| mask.insert(value))
    }

    pub fn remove(&mut self, criterion: Criterion) -> bool {
        with_mask!(self, criterion, [&mut], |mask, value| mask.remove(value))
    }

    /// Every active exclusion, in evaluation order. The manual list is not included.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut out: Vec<Criterion> = Vec::new();
        out.extend(self.tails.iter().map(Criterion::Tail));
        out.extend(self.heads.iter().map(Criterion::Head));
        out.extend(self.zodiacs.iter().map(Criterion::Zodiac));
        out.extend(self.colors.iter().map(Criterion::Color));
        out.extend(self.elements.iter().map(Criterion::Element));
        out.extend(self.parity.iter().map(Criterion::Parity));
        out.extend(self.size.iter().map(Criterion::Size));
        out.extend(self.tail_size.iter().map(Criterion::TailSize));
        out.extend(self.digit_sums.iter().map(Criterion::DigitSum));
        out.extend(self.sum_parity.iter().map(Criterion::SumParity));
        out.extend(self.sum_size.iter().map(Criterion::SumSize));
        out.extend(self.sum_tails.iter().map(Criterion::SumTail));
        out.extend(self.half_wave.iter().map(Criterion::HalfWave));
        out.extend(self.half_head.iter().map(Criterion::HalfHead));
        out.extend(self.half_parity.iter().map(Criterion::HalfParity));
        out.extend(self.zodiac_sky_ground.iter().map(Criterion::SkyGround));
        out.extend(self.zodiac_domestic_wild.iter().map(Criterion::DomesticWild));
        out.extend(self.zodiac_front_back.iter().map(Criterion::FrontBack));
        out.extend(self.zodiac_yin_yang.iter().map(Criterion::YinYang));
        out.extend(self.zodiac_luck.iter().map(Criterion::Luck));
        out.extend(self.zodiac_strokes.iter().map(Criterion::Strokes));
        out.extend(self.mod3.iter().map(Criterion::Mod3));
        out.extend(self.mod4.iter().map(Criterion::Mod4));
        out.extend(self.mod6.iter().map(Criterion::Mod6));
        out.extend(self.mod7.iter().map(Criterion::Mod7));
        out.extend(self.segments.iter().map(Criterion::Segment));
        out
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
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
