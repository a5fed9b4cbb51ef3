//! Army colors.
//!
//! Every territory is owned by exactly one army, identified by its color.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The color label of an army.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Blue,
    Green,
    Black,
    Red,
}

/// All army colors in display order.
pub const ALL_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Black,
    Color::Red,
];

impl Color {
    /// Returns the lowercase name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Black => "black",
            Color::Red => "red",
        }
    }

    /// Returns the capitalized label used in tables and messages.
    pub const fn label(self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Black => "Black",
            Color::Red => "Red",
        }
    }

    /// Parses a color from its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Color> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
