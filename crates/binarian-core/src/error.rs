//! Error types

use core::fmt;

/// Contract violations detected at the edges of the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Hour outside 0-23
    HourOutOfRange(u8),
    /// Minute outside 0-59
    MinuteOutOfRange(u8),
    /// Weekday index outside 0-6
    WeekdayOutOfRange(u8),
    /// Month index outside 0-11
    MonthOutOfRange(u8),
    /// Day of month outside 1-31
    DayOutOfRange(u8),
    /// Formatted label did not fit its buffer
    LabelOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HourOutOfRange(v) => write!(f, "hour {} out of range", v),
            Error::MinuteOutOfRange(v) => write!(f, "minute {} out of range", v),
            Error::WeekdayOutOfRange(v) => write!(f, "weekday index {} out of range", v),
            Error::MonthOutOfRange(v) => write!(f, "month index {} out of range", v),
            Error::DayOutOfRange(v) => write!(f, "day {} out of range", v),
            Error::LabelOverflow => write!(f, "label buffer overflow"),
        }
    }
}
