//! Date line formatting

use core::fmt;

use crate::{ClockReading, Error};

/// Abbreviated weekday names, starting on Sunday
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Abbreviated month names
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Fits "Www Mmm DD " followed by any `i32` year
const BUF_LEN: usize = 24;

/// Formatted date line, e.g. "Sun Jan 1 2024"
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DateLabel {
    str_buf: [u8; BUF_LEN],
    len: usize,
}

impl DateLabel {
    /// Format a date from table indices
    pub fn format(weekday: u8, month: u8, day: u8, year: i32) -> Result<Self, Error> {
        let weekday_name = WEEKDAYS
            .get(weekday as usize)
            .ok_or(Error::WeekdayOutOfRange(weekday))?;
        let month_name = MONTHS
            .get(month as usize)
            .ok_or(Error::MonthOutOfRange(month))?;

        let mut str_buf = [0; BUF_LEN];
        let len = format_no_std::show(
            &mut str_buf,
            format_args!("{} {} {} {}", weekday_name, month_name, day, year),
        )
        .map_err(|_| Error::LabelOverflow)?
        .len();

        Ok(Self { str_buf, len })
    }

    /// Format the date part of a clock reading
    pub fn from_reading(reading: &ClockReading) -> Self {
        // Readings are range checked, so the lookup cannot fail
        Self::format(
            reading.weekday(),
            reading.month(),
            reading.day(),
            reading.year(),
        )
        .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for DateLabel {
    fn default() -> Self {
        Self {
            str_buf: [0; BUF_LEN],
            len: 0,
        }
    }
}

impl fmt::Debug for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DateLabel").field(&self.as_str()).finish()
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DateLabel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Format a date line from table indices
pub fn format(weekday: u8, month: u8, day: u8, year: i32) -> Result<DateLabel, Error> {
    DateLabel::format(weekday, month, day, year)
}
