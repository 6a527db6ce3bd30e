//! Lamp rows - the five encoders at the heart of the Berlin Clock
//!
//! Each row is an independent leaf-level function of one time component.
//! The tens/units split for hours and minutes uses integer division and
//! modulo by 5, matching the clock's physical grouping of lamps in fives.

use crate::lamp::Lamp;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the seconds row (a single blinking lamp).
pub const SECONDS_ROW_LEN: usize = 1;

/// Length of each hours row (five hours / one hour per lamp).
pub const HOURS_ROW_LEN: usize = 4;

/// Length of the minutes-tens row (five minutes per lamp).
pub const MINUTES_TENS_ROW_LEN: usize = 11;

/// Length of the minutes-units row (one minute per lamp).
pub const MINUTES_UNITS_ROW_LEN: usize = 4;

/// A fixed-length ordered sequence of lamps.
///
/// Rows are built fresh on every call and never mutated afterwards.
/// `Display` renders the row as its `Y`/`R`/`O` string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    fn unlit(len: usize) -> Self {
        Self {
            lamps: vec![Lamp::Off; len],
        }
    }

    /// Number of lamps in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.lamps.len()
    }

    /// Whether the row has no lamps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lamps.is_empty()
    }

    /// Lamp at a 0-based position, if in range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Lamp> {
        self.lamps.get(idx).copied()
    }

    /// All lamps in order.
    #[inline]
    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    /// Count of lit lamps (any color). Never exceeds `len`.
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|l| l.is_lit()).count()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lamp in &self.lamps {
            write!(f, "{}", lamp.as_char())?;
        }
        Ok(())
    }
}

/// Light the first `lit` lamps of a fresh row in a single color.
fn filled_row(len: usize, lit: usize, color: Lamp) -> LampRow {
    let mut row = LampRow::unlit(len);
    for lamp in row.lamps.iter_mut().take(lit) {
        *lamp = color;
    }
    row
}

// =========================================================================
// ROW ENCODERS
// =========================================================================

/// Encode the seconds row: one lamp, yellow iff the second count is even.
pub fn seconds_row(seconds: u8) -> LampRow {
    let lit = usize::from(seconds % 2 == 0);
    filled_row(SECONDS_ROW_LEN, lit, Lamp::Yellow)
}

/// Encode the hours-tens row: `hours / 5` red lamps.
///
/// For hours = 24 this yields all four lamps lit, the clock's
/// end-of-day calibration state.
pub fn hours_tens_row(hours: u8) -> LampRow {
    filled_row(HOURS_ROW_LEN, usize::from(hours / 5), Lamp::Red)
}

/// Encode the hours-units row: `hours % 5` red lamps.
pub fn hours_units_row(hours: u8) -> LampRow {
    filled_row(HOURS_ROW_LEN, usize::from(hours % 5), Lamp::Red)
}

/// Encode the minutes-tens row: `minutes / 5` lit lamps.
///
/// Lit lamps are yellow except at 1-based positions 3, 6 and 9 (the
/// quarter-hour marks), which are red. The positional override applies
/// only within the lit range; it never lights an unlit lamp.
pub fn minutes_tens_row(minutes: u8) -> LampRow {
    let mut row = LampRow::unlit(MINUTES_TENS_ROW_LEN);
    let lit = usize::from(minutes / 5);
    for (idx, lamp) in row.lamps.iter_mut().take(lit).enumerate() {
        let position = idx + 1;
        *lamp = if position % 3 == 0 {
            Lamp::Red
        } else {
            Lamp::Yellow
        };
    }
    row
}

/// Encode the minutes-units row: `minutes % 5` yellow lamps.
pub fn minutes_units_row(minutes: u8) -> LampRow {
    filled_row(MINUTES_UNITS_ROW_LEN, usize::from(minutes % 5), Lamp::Yellow)
}
