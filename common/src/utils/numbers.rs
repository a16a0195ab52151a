//! # Number List Parsing
//!
//! Turns whatever the user typed into the manual box into a set of ball numbers.
//!
//! Strategies, first match wins:
//! * **Separated**: `"01 02, 3"`: any run of non-digits splits tokens.
//! * **Packed**: `"010203"`: one even-length token read two digits at a time.
//! * **Single**: `"7"`.
//!
//! Nothing here fails. Tokens outside 1-49 are dropped, and input that fits no
//! strategy yields an empty set.

use std::collections::BTreeSet;

use crate::lottery::is_ball_number;

pub fn parse_numbers(text: &str) -> BTreeSet<u8> {
    let tokens: Vec<&str> = text
        .trim()
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => BTreeSet::new(),
        [single] => parse_packed(single)
            .or_else(|| ball_number(single).map(|n| BTreeSet::from([n])))
            .unwrap_or_default(),
        many => many.iter().filter_map(|token| ball_number(token)).collect(),
    }
}

/// Renders numbers as two-digit, space-separated text (`01 07 49`).
pub fn format_numbers<'a, I>(numbers: I) -> String
where
    I: IntoIterator<Item = &'a u8>,
{
    numbers
        .into_iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Reads `"010203"` as 1, 2, 3. Only succeeds when every pair is a ball number.
fn parse_packed(token: &str) -> Option<BTreeSet<u8>> {
    if token.len() < 2 || token.len() % 2 != 0 {
        return None;
    }

    token
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).ok().and_then(ball_number))
        .collect()
}

fn ball_number(token: &str) -> Option<u8> {
    token
        .parse::<u64>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| is_ball_number(*value))
        .and_then(|value| u8::try_from(value).ok())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
