//! Entity colors

use serde::{Deserialize, Serialize};

/// Colors used by the simulation.
///
/// `White` marks an uncolored electron, `Yellow` is the nucleon fill. The
/// remaining variants are deflector colors and therefore score keys. The
/// declaration order is the scoreboard display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    #[default]
    White,
    Yellow,
    Blue,
    Lime,
    Red,
    Cyan,
    Green,
}

impl Tint {
    /// CSS color name, as understood by a canvas 2D context
    pub fn as_str(&self) -> &'static str {
        match self {
            Tint::White => "white",
            Tint::Yellow => "yellow",
            Tint::Blue => "blue",
            Tint::Lime => "lime",
            Tint::Red => "red",
            Tint::Cyan => "cyan",
            Tint::Green => "green",
        }
    }

    /// Linear RGBA (CSS named color values)
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Tint::White => [1.0, 1.0, 1.0, 1.0],
            Tint::Yellow => [1.0, 1.0, 0.0, 1.0],
            Tint::Blue => [0.0, 0.0, 1.0, 1.0],
            Tint::Lime => [0.0, 1.0, 0.0, 1.0],
            Tint::Red => [1.0, 0.0, 0.0, 1.0],
            Tint::Cyan => [0.0, 1.0, 1.0, 1.0],
            Tint::Green => [0.0, 0.5, 0.0, 1.0],
        }
    }

    /// Whether an electron of this color scores on a nucleon strike
    pub fn scores(&self) -> bool {
        !matches!(self, Tint::White | Tint::Yellow)
    }
}
