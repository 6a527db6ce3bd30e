//! Clock time - validated immutable time triple
//!
//! Hours run 0..=24 because the Berlin Clock treats 24:00:00 as a
//! distinct end-of-day calibration display (hours-tens fully lit).

use crate::error::ClockError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive upper bound for the hours component.
pub const MAX_HOURS: u8 = 24;

/// An immutable wall-clock time since midnight.
///
/// Construction is strict: out-of-range components are rejected with
/// [`ClockError::InvalidInput`], so every `ClockTime` satisfies the row
/// encoders' caller contract by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Create a validated time. Hours 0..=24, minutes and seconds 0..=59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ClockError> {
        if hours > MAX_HOURS {
            return Err(ClockError::InvalidInput(format!(
                "hours out of range 0..=24: {}",
                hours
            )));
        }
        if minutes > 59 {
            return Err(ClockError::InvalidInput(format!(
                "minutes out of range 0..=59: {}",
                minutes
            )));
        }
        if seconds > 59 {
            return Err(ClockError::InvalidInput(format!(
                "seconds out of range 0..=59: {}",
                seconds
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Hours since midnight (0..=24).
    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes within the hour (0..=59).
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds within the minute (0..=59).
    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Parse `HH:MM:SS` - exactly three colon-separated decimal components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split(':').collect();
        if components.len() != 3 {
            return Err(ClockError::InvalidInput(format!(
                "expected three colon-separated components, got {}: {:?}",
                components.len(),
                s
            )));
        }

        let mut parsed = [0u8; 3];
        for (slot, component) in parsed.iter_mut().zip(&components) {
            *slot = component.trim().parse().map_err(|_| {
                ClockError::InvalidInput(format!("not a decimal integer: {:?}", component))
            })?;
        }

        Self::new(parsed[0], parsed[1], parsed[2])
    }
}
