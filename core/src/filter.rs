//! # Filter Engine
//!
//! A ball survives when no rule rejects it. Rules are checked in a fixed order
//! and the first one that fires is reported by [`rejection`], which is what
//! `--explain` prints. Survival itself does not depend on the order.

use sift_common::lottery::ball::Ball;

use crate::criteria::{Category, CustomMode, FilterConfig};

type Rule = fn(&Ball, &FilterConfig) -> bool;

fn manual(ball: &Ball, cfg: &FilterConfig) -> bool {
    let listed = cfg.custom_numbers.contains(&ball.number);
    match cfg.custom_mode {
        CustomMode::Exclude => listed,
        // An empty keep list keeps nothing.
        CustomMode::Keep => !listed,
    }
}

const RULES: &[(Category, Rule)] = &[
    (Category::Manual, manual),
    (Category::Tail, |b: &Ball, c: &FilterConfig| c.tails.contains(b.tail())),
    (Category::Head, |b: &Ball, c: &FilterConfig| c.heads.contains(b.head())),
    (Category::Zodiac, |b: &Ball, c: &FilterConfig| c.zodiacs.contains(b.zodiac)),
    (Category::Color, |b: &Ball, c: &FilterConfig| c.colors.contains(b.color)),
    (Category::Element, |b: &Ball, c: &FilterConfig| c.elements.contains(b.element)),
    (Category::Parity, |b: &Ball, c: &FilterConfig| c.parity.contains(b.parity())),
    (Category::Size, |b: &Ball, c: &FilterConfig| c.size.contains(b.size())),
    (Category::TailSize, |b: &Ball, c: &FilterConfig| c.tail_size.contains(b.tail_size())),
    (Category::DigitSum, |b: &Ball, c: &FilterConfig| c.digit_sums.contains(b.digit_sum())),
    (Category::SumParity, |b: &Ball, c: &FilterConfig| c.sum_parity.contains(b.sum_parity())),
    (Category::SumSize, |b: &Ball, c: &FilterConfig| c.sum_size.contains(b.sum_size())),
    (Category::SumTail, |b: &Ball, c: &FilterConfig| c.sum_tails.contains(b.sum_tail())),
    (Category::HalfWave, |b: &Ball, c: &FilterConfig| c.half_wave.contains(b.half_wave())),
    (Category::HalfHead, |b: &Ball, c: &FilterConfig| c.half_head.contains(b.half_head())),
    (Category::HalfParity, |b: &Ball, c: &FilterConfig| c.half_parity.contains(b.half_parity())),
    (Category::SkyGround, |b: &Ball, c: &FilterConfig| {
        c.zodiac_sky_ground.contains(b.zodiac_attributes().sky_ground)
    }),
    (Category::DomesticWild, |b: &Ball, c: &FilterConfig| {
        c.zodiac_domestic_wild.contains(b.zodiac_attributes().domestic_wild)
    }),
    (Category::FrontBack, |b: &Ball, c: &FilterConfig| {
        c.zodiac_front_back.contains(b.zodiac_attributes().front_back)
    }),
    (Category::YinYang, |b: &Ball, c: &FilterConfig| {
        c.zodiac_yin_yang.contains(b.zodiac_attributes().yin_yang)
    }),
    (Category::Luck, |b: &Ball, c: &FilterConfig| c.zodiac_luck.contains(b.zodiac_attributes().luck)),
    (Category::Strokes, |b: &Ball, c: &FilterConfig| {
        c.zodiac_strokes.contains(b.zodiac_attributes().stroke_parity())
    }),
    (Category::Mod3, |b: &Ball, c: &FilterConfig| c.mod3.contains(b.number % 3)),
    (Category::Mod4, |b: &Ball, c: &FilterConfig| c.mod4.contains(b.number % 4)),
    (Category::Mod6, |b: &Ball, c: &FilterConfig| c.mod6.contains(b.number % 6)),
    (Category::Mod7, |b: &Ball, c: &FilterConfig| c.mod7.contains(b.number % 7)),
    (Category::Segment, |b: &Ball, c: &FilterConfig| c.segments.contains(b.segment())),
];

/// First rule that excludes `ball`, or `None` when it survives.
pub fn rejection(ball: &Ball, cfg: &FilterConfig) -> Option<Category> {
    RULES
        .iter()
        .find(|(_, rule)| rule(ball, cfg))
        .map(|(category, _)| *category)
}

pub fn survives(ball: &Ball, cfg: &FilterConfig) -> bool {
    rejection(ball, cfg).is_none()
}

/// Survivors of `balls`, in input order.
pub fn apply(balls: &[Ball], cfg: &FilterConfig) -> Vec<Ball> {
    balls.iter().filter(|ball| survives(ball, cfg)).copied().collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
