use colored::*;
use sift_common::lottery::attribute::Color as Wave;
use sift_common::lottery::ball::Ball;
use sift_common::lottery::draw::DrawResult;
use sift_common::utils::numbers::format_numbers;
use sift_core::criteria::{CustomMode, FilterConfig};
use sift_core::deriver;

use crate::terminal::colors;

/// Chips per printed row.
pub const ROW_LEN: usize = 10;

type Detail = (String, ColoredString);

pub fn wave_color(wave: Wave) -> Color {
    match wave {
        Wave::Red => colors::RED_BALL,
        Wave::Blue => colors::BLUE_BALL,
        Wave::Green => colors::GREEN_BALL,
    }
}

pub fn chip(number: u8, wave: Option<Wave>) -> ColoredString {
    chip_on(number, wave.map(wave_color).unwrap_or(colors::UNKNOWN_BALL))
}

fn chip_on(number: u8, background: Color) -> ColoredString {
    format!(" {number:02} ").white().bold().on_color(background)
}

/// The special number of a draw is always shown red.
fn draw_chip_color(ball: &Ball, special: bool) -> Color {
    if special { colors::RED_BALL } else { wave_color(ball.color) }
}

pub fn ball_chip(ball: &Ball) -> ColoredString {
    chip(ball.number, Some(ball.color))
}

/// Survivors as rows of colored chips.
pub fn chip_rows(balls: &[Ball]) -> Vec<String> {
    balls
        .chunks(ROW_LEN)
        .map(|row| {
            row.iter()
                .map(|ball| ball_chip(ball).to_string())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect()
}

/// Codes of a draw, regulars then `+` and the special number, with the
/// zodiac of each code underneath.
pub fn draw_lines(draw: &DrawResult, fallback_year: i32) -> (String, String) {
    let year = draw.draw_year().unwrap_or(fallback_year);
    let numbers = draw.numbers();
    let last = numbers.len().saturating_sub(1);

    let mut chips: Vec<String> = Vec::new();
    let mut zodiacs: Vec<String> = Vec::new();
    for (idx, number) in numbers.iter().enumerate() {
        let special = idx == last && idx > 0;
        if special {
            chips.push("+".color(colors::SEPARATOR).to_string());
            zodiacs.push(" ".to_string());
        }
        match number.and_then(|n| deriver::attributes_of(n, year)) {
            Some(ball) => {
                let background = draw_chip_color(&ball, special);
                chips.push(chip_on(ball.number, background).to_string());
                // Chips are four columns wide, a zodiac glyph two.
                zodiacs.push(format!(" {} ", ball.zodiac).color(colors::TEXT_DEFAULT).to_string());
            }
            None => {
                let raw = draw.codes().get(idx).copied().unwrap_or("?").to_string();
                chips.push(format!(" {raw} ").on_color(colors::UNKNOWN_BALL).to_string());
                zodiacs.push("  ? ".to_string());
            }
        }
    }
    (chips.join(" "), zodiacs.join(" "))
}

pub fn ball_details(ball: &Ball) -> Vec<Detail> {
    let zodiac = ball.zodiac_attributes();
    vec![
        ("波色".to_string(), ball.color.wave_name().color(wave_color(ball.color))),
        ("生肖".to_string(), ball.zodiac.to_string().color(colors::ACCENT)),
        ("五行".to_string(), ball.element.to_string().normal()),
        (
            "头尾".to_string(),
            format!("{}头 {}尾 合{}", ball.head(), ball.tail(), ball.digit_sum()).normal(),
        ),
        (
            "属性".to_string(),
            format!(
                "{} {} {} {} {} {}笔",
                zodiac.sky_ground,
                zodiac.domestic_wild,
                zodiac.yin_yang,
                zodiac.front_back,
                zodiac.luck,
                zodiac.strokes
            )
            .normal(),
        ),
    ]
}

/// Active criteria as `category:value` tokens, manual list last.
pub fn config_details(cfg: &FilterConfig) -> Vec<Detail> {
    let mut details: Vec<Detail> = cfg
        .criteria()
        .iter()
        .map(|criterion| {
            let token = criterion.to_string();
            let (category, value) = token.split_once(':').unwrap_or((token.as_str(), ""));
            (category.to_string(), value.color(colors::ACCENT))
        })
        .collect();

    if !cfg.custom_numbers.is_empty() || cfg.custom_mode == CustomMode::Keep {
        let listed = format_numbers(&cfg.custom_numbers);
        let label = match cfg.custom_mode {
            CustomMode::Exclude => "kill",
            CustomMode::Keep => "keep",
        };
        let shown = if listed.is_empty() { "(none)".to_string() } else { listed };
        details.push((label.to_string(), shown.color(colors::PRIMARY)));
    }
    details
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
    use sift_core::criteria::Criterion;

    #[test]
    fn test_chip_rows_split() {
        colored::control::set_override(false);
        let balls = deriver::derive_balls(2025);
        let rows = chip_rows(&balls);
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with(" 01 "));
        assert!(rows[4].ends_with(" 49 "));
    }

    #[test]
    fn test_draw_lines_mark_special() {
        colored::control::set_override(false);
        let draw = DrawResult::new("2025127", "06,40,04,34,26,28,25", "2025-12-06 21:30:00");
        let (chips, _) = draw_lines(&draw, 2025);
        assert!(chips.contains(" 28  +  25 "));
    }

    #[test]
    fn test_special_chip_is_red() {
        let blue = deriver::attributes_of(25, 2025).unwrap();
        assert_eq!(blue.color, Wave::Blue);
        assert_eq!(draw_chip_color(&blue, true), colors::RED_BALL);
        assert_eq!(draw_chip_color(&blue, false), colors::BLUE_BALL);
    }

    #[test]
    fn test_config_details() {
        colored::control::set_override(false);
        let mut cfg = FilterConfig::default();
        cfg.toggle(Criterion::Tail(3));
        cfg.custom_numbers = [2, 1].into_iter().collect();
        let details = config_details(&cfg);
        assert_eq!(details[0].0, "tail");
        assert_eq!(details[1].0, "kill");
        assert_eq!(details[1].1.to_string(), "01 02");
    }
}
