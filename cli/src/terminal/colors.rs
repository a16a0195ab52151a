use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 175, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 95 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const RED_BALL: Color = Color::TrueColor { r: 214, g: 48, b: 49 };
pub const BLUE_BALL: Color = Color::TrueColor { r: 9, g: 132, b: 227 };
pub const GREEN_BALL: Color = Color::TrueColor { r: 0, g: 160, b: 80 };
pub const UNKNOWN_BALL: Color = Color::BrightBlack;
