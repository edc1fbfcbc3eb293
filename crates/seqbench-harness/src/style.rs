//! ANSI style tokens wrapped around report fields.
//!
//! Terminals that do not honor them show the escape text verbatim.

pub const RESET: &str = "\u{1b}[0m";
/// Fastest cell in a column.
pub const GREEN: &str = "\u{1b}[32m";
/// Size label.
pub const CYAN: &str = "\u{1b}[36m";
/// Header and row labels.
pub const YELLOW: &str = "\u{1b}[33m";
/// Significant delta.
pub const RED: &str = "\u{1b}[31m";

/// Token set used by a renderer. [`Palette::PLAIN`] renders every token empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub fastest: &'static str,
    pub size_label: &'static str,
    pub label: &'static str,
    pub significant: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        reset: RESET,
        fastest: GREEN,
        size_label: CYAN,
        label: YELLOW,
        significant: RED,
    };

    pub const PLAIN: Palette = Palette {
        reset: "",
        fastest: "",
        size_label: "",
        label: "",
        significant: "",
    };
}
