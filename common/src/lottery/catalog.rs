//! Year-invariant number tables.

use super::attribute::{Color, Element};
use super::MAX_NUMBER;

use Color::{Blue as B, Green as G, Red as R};
use Element::{Earth, Fire, Gold, Water, Wood};

/// Wave color of numbers 1..=49, index 0 holds number 1.
const NUMBER_COLORS: [Color; MAX_NUMBER as usize] = [
    R, R, B, B, G, G, R, R, B, B, // 01-10
    G, R, R, B, B, G, G, R, R, B, // 11-20
    G, G, R, R, B, B, G, G, R, R, // 21-30
    B, G, G, R, R, B, B, G, G, R, // 31-40
    B, B, G, G, R, R, B, B, G, // 41-49
];

/// Element of numbers 1..=49, index 0 holds number 1.
const NUMBER_ELEMENTS: [Element; MAX_NUMBER as usize] = [
    Fire, Fire, Earth, Earth, Wood, Wood, Gold, Gold, Water, Water, // 01-10
    Fire, Fire, Earth, Earth, Wood, Wood, Gold, Gold, Water, Water, // 11-20
    Fire, Fire, Earth, Earth, Wood, Wood, Gold, Gold, Water, Water, // 21-30
    Fire, Fire, Earth, Earth, Wood, Wood, Gold, Gold, Water, Water, // 31-40
    Fire, Fire, Earth, Earth, Wood, Wood, Gold, Gold, Water, // 41-49
];

fn slot(number: u8) -> Option<usize> {
    (1..=MAX_NUMBER)
        .contains(&number)
        .then(|| usize::from(number - 1))
}

pub fn color_of(number: u8) -> Option<Color> {
    slot(number).map(|idx| NUMBER_COLORS[idx])
}

pub fn element_of(number: u8) -> Option<Element> {
    slot(number).map(|idx| NUMBER_ELEMENTS[idx])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
