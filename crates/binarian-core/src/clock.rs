//! Wall clock readings

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::Error;

/// A minute-resolution wall clock reading, as delivered by the host clock.
///
/// All fields are range checked on construction, so the encoder and the
/// date formatter can rely on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    /// Days since Sunday
    weekday: u8,
    /// Months since January
    month: u8,
    day: u8,
    year: i32,
}

impl ClockReading {
    /// Create a reading from raw fields
    pub fn new(
        hour: u8,
        minute: u8,
        weekday: u8,
        month: u8,
        day: u8,
        year: i32,
    ) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(Error::MinuteOutOfRange(minute));
        }
        if weekday > 6 {
            return Err(Error::WeekdayOutOfRange(weekday));
        }
        if month > 11 {
            return Err(Error::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::DayOutOfRange(day));
        }

        Ok(Self {
            hour,
            minute,
            weekday,
            month,
            day,
            year,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Month index, 0 = January
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl From<&NaiveDateTime> for ClockReading {
    fn from(time: &NaiveDateTime) -> Self {
        // chrono keeps every field in range
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            weekday: time.weekday().num_days_from_sunday() as u8,
            month: time.month0() as u8,
            day: time.day() as u8,
            year: time.year(),
        }
    }
}

impl From<NaiveDateTime> for ClockReading {
    fn from(time: NaiveDateTime) -> Self {
        Self::from(&time)
    }
}
