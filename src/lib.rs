//! Berlin Clock - lamp row encoder for the Mengenlehreuhr
//!
//! Converts a wall-clock time into the five-row lamp display of the
//! Berlin Clock. Each row is a fixed-length sequence of lamps, each
//! lamp off (`O`), yellow (`Y`) or red (`R`).
//!
//! # Core Types
//!
//! - **Lamp**: a single indicator, off / yellow / red
//! - **LampRow**: one fixed-length row of lamps
//! - **ClockTime**: validated immutable time triple (hours, minutes, seconds)
//! - **RowKey**: selects one of the five rows
//!
//! # The Display
//!
//! Five rows, top to bottom:
//!
//! 1. Seconds lamp (1): yellow on even seconds
//! 2. Hours tens (4): one red lamp per five full hours
//! 3. Hours units (4): one red lamp per remaining hour
//! 4. Minutes tens (11): one lamp per five full minutes, yellow except
//!    the quarter-hour marks at positions 3, 6 and 9, which are red
//! 5. Minutes units (4): one yellow lamp per remaining minute
//!
//! Encoding is pure and stateless. Every call recomputes its rows from
//! the time value alone, so calls may run concurrently without
//! synchronization.
//!
//! # Example
//!
//! ```rust
//! use berlin_clock::{convert_time, format, ClockTime};
//!
//! // End-to-end: HH:MM:SS string to the composed five-row display.
//! let display = convert_time("13:17:01").unwrap();
//! assert_eq!(display, "O\r\nRROO\r\nRRRO\r\nYYROOOOOOOO\r\nYYOO");
//!
//! // Single-row selection by key.
//! let time = ClockTime::new(13, 17, 1).unwrap();
//! assert_eq!(format(&time, "H1").unwrap(), "RROO");
//! ```

mod clock;
mod error;
mod lamp;
mod row;
mod time;

pub use clock::{convert_time, display, encode_row, format, RowKey, ROW_ORDER, ROW_SEPARATOR};
pub use error::{ClockError, Result};
pub use lamp::Lamp;
pub use row::{
    hours_tens_row, hours_units_row, minutes_tens_row, minutes_units_row, seconds_row, LampRow,
    HOURS_ROW_LEN, MINUTES_TENS_ROW_LEN, MINUTES_UNITS_ROW_LEN, SECONDS_ROW_LEN,
};
pub use time::{ClockTime, MAX_HOURS};
