//! Time keeping module for PineTime

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use embassy_time::Instant;

pub struct TimeReference {
    /// Clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::UNIX_EPOCH,
            instant: Instant::from_ticks(0),
        }
    }
}

impl TimeReference {
    /// Create new time reference from local seconds since the epoch, taken at boot
    pub fn from_local_epoch(secs: i64) -> Self {
        match DateTime::from_timestamp(secs, 0) {
            Some(time) => Self {
                time: time.naive_utc(),
                instant: Instant::from_ticks(0),
            },
            None => {
                defmt::warn!("Invalid time reference {}, using epoch", secs);
                Self::default()
            }
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }
    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference
            .time
            .checked_add_signed(TimeDelta::microseconds(elapsed.as_micros() as i64))
            .unwrap_or(self.reference.time)
    }
}
