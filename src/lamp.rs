//! Lamp - the atomic display unit of the Berlin Clock
//!
//! Every position in every row is exactly one lamp. A lamp is either
//! unlit or lit in one of two colors, and renders to a single character.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a single lamp.
///
/// Renders as `'O'` (off), `'Y'` (yellow) or `'R'` (red).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Lamp {
    /// Unlit.
    Off,
    /// Lit yellow.
    Yellow,
    /// Lit red.
    Red,
}

impl Lamp {
    /// Character rendering of this lamp state.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    /// Whether the lamp is lit (any color).
    #[inline]
    pub fn is_lit(self) -> bool {
        !matches!(self, Lamp::Off)
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lamp::Off => "O",
            Lamp::Yellow => "Y",
            Lamp::Red => "R",
        })
    }
}
