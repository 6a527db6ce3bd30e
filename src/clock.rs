//! Clock composition - row selection by key and the five-row display
//!
//! Row keys mirror the clock's maintenance panel labels: `S` for the
//! seconds lamp, `H1`/`H2` for the hours rows, `M1`/`M2` for the minutes
//! rows. Keys match case-insensitively; the empty key selects the
//! composed five-row display.

use crate::error::{ClockError, Result};
use crate::row::{
    hours_tens_row, hours_units_row, minutes_tens_row, minutes_units_row, seconds_row, LampRow,
};
use crate::time::ClockTime;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator between rows in the composed display.
pub const ROW_SEPARATOR: &str = "\r\n";

/// Identifier of one of the five lamp rows, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowKey {
    /// `S` - the single blinking seconds lamp.
    Seconds,
    /// `H1` - five-hour blocks.
    HoursTens,
    /// `H2` - single hours.
    HoursUnits,
    /// `M1` - five-minute blocks with quarter-hour marks.
    MinutesTens,
    /// `M2` - single minutes.
    MinutesUnits,
}

/// All row keys in composed display order.
pub const ROW_ORDER: [RowKey; 5] = [
    RowKey::Seconds,
    RowKey::HoursTens,
    RowKey::HoursUnits,
    RowKey::MinutesTens,
    RowKey::MinutesUnits,
];

impl FromStr for RowKey {
    type Err = ClockError;

    /// Case-insensitive key lookup. The empty key is not a row; it selects
    /// the composed display and is handled by [`format`].
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "s" => Ok(RowKey::Seconds),
            "h1" => Ok(RowKey::HoursTens),
            "h2" => Ok(RowKey::HoursUnits),
            "m1" => Ok(RowKey::MinutesTens),
            "m2" => Ok(RowKey::MinutesUnits),
            _ => Err(ClockError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Encode a single row of the clock for the given time.
pub fn encode_row(time: &ClockTime, key: RowKey) -> LampRow {
    match key {
        RowKey::Seconds => seconds_row(time.seconds()),
        RowKey::HoursTens => hours_tens_row(time.hours()),
        RowKey::HoursUnits => hours_units_row(time.hours()),
        RowKey::MinutesTens => minutes_tens_row(time.minutes()),
        RowKey::MinutesUnits => minutes_units_row(time.minutes()),
    }
}

/// Render the composed five-row display.
///
/// Rows appear in fixed order (seconds, hours-tens, hours-units,
/// minutes-tens, minutes-units), one per line, CRLF-separated.
pub fn display(time: &ClockTime) -> String {
    let rows: Vec<String> = ROW_ORDER
        .iter()
        .map(|&key| encode_row(time, key).to_string())
        .collect();
    rows.join(ROW_SEPARATOR)
}

/// Render one row selected by string key, or the composed display for the
/// empty key.
///
/// Fails with [`ClockError::UnsupportedFormat`] for unrecognized keys;
/// no partial or default substitution.
pub fn format(time: &ClockTime, key: &str) -> Result<String> {
    if key.is_empty() {
        return Ok(display(time));
    }
    let key: RowKey = key.parse()?;
    Ok(encode_row(time, key).to_string())
}

/// End-to-end conversion: parse an `HH:MM:SS` string and render the
/// composed five-row display.
pub fn convert_time(input: &str) -> Result<String> {
    let time: ClockTime = input.parse()?;
    Ok(display(&time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    #[test]
    fn test_display_midnight() {
        assert_eq!(
            display(&time(0, 0, 0)),
            "Y\r\nOOOO\r\nOOOO\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test]
    fn test_display_afternoon() {
        assert_eq!(
            display(&time(13, 17, 1)),
            "O\r\nRROO\r\nRRRO\r\nYYROOOOOOOO\r\nYYOO"
        );
    }

    #[test]
    fn test_display_end_of_day() {
        assert_eq!(
            display(&time(24, 0, 0)),
            "Y\r\nRRRR\r\nRRRR\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test]
    fn test_display_shape() {
        let rendered = display(&time(23, 59, 59));
        let lines: Vec<&str> = rendered.split(ROW_SEPARATOR).collect();
        assert_eq!(lines.len(), 5);
        let lengths: Vec<usize> = lines.iter().map(|l| l.len()).collect();
        assert_eq!(lengths, vec![1, 4, 4, 11, 4]);
    }

    #[test]
    fn test_row_key_parsing() {
        assert_eq!("h1".parse::<RowKey>().unwrap(), RowKey::HoursTens);
        assert_eq!("H1".parse::<RowKey>().unwrap(), RowKey::HoursTens);
        assert_eq!("S".parse::<RowKey>().unwrap(), RowKey::Seconds);
        assert_eq!("m2".parse::<RowKey>().unwrap(), RowKey::MinutesUnits);
        assert!(matches!(
            "x".parse::<RowKey>(),
            Err(ClockError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            "".parse::<RowKey>(),
            Err(ClockError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_single_row() {
        let t = time(13, 17, 1);
        assert_eq!(format(&t, "H1").unwrap(), "RROO");
        assert_eq!(format(&t, "h2").unwrap(), "RRRO");
        assert_eq!(format(&t, "M1").unwrap(), "YYROOOOOOOO");
        assert_eq!(format(&t, "m2").unwrap(), "YYOO");
        assert_eq!(format(&t, "s").unwrap(), "O");
    }

    #[test]
    fn test_format_empty_key_composes() {
        let t = time(13, 17, 1);
        assert_eq!(format(&t, "").unwrap(), display(&t));
    }

    #[test]
    fn test_format_unknown_key() {
        assert!(matches!(
            format(&time(0, 0, 0), "X"),
            Err(ClockError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_convert_time() {
        assert_eq!(
            convert_time("13:17:01").unwrap(),
            "O\r\nRROO\r\nRRRO\r\nYYROOOOOOOO\r\nYYOO"
        );
        assert!(matches!(
            convert_time("13:17"),
            Err(ClockError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_encode_row_independent_of_other_components() {
        // Each row depends on exactly one time component.
        let a = time(13, 17, 1);
        let b = time(13, 42, 58);
        assert_eq!(encode_row(&a, RowKey::HoursTens), encode_row(&b, RowKey::HoursTens));
        assert_eq!(encode_row(&a, RowKey::HoursUnits), encode_row(&b, RowKey::HoursUnits));
    }
}
