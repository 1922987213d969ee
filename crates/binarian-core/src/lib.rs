//! Board-agnostic core of the Binarian watchface
//!
//! The face shows the time as a 4x4 grid of circles, one column per digit
//! of "HHMM" in binary-coded decimal, with the date on a text line below.
//!
//! This crate provides:
//! - [`ClockReading`], the minute-resolution input from the host clock
//! - [`encode`] and [`DigitGrid`], the BCD encoder
//! - [`format`] and [`DateLabel`], the date line
//! - [`Renderer`] and the fixed [`layout`], drawing onto any
//!   `embedded-graphics` target
//! - [`WatchFace`] and [`BinaryFace`], the start/tick/stop lifecycle
//! - [`Runner`], a host driver turning clock readings into minute ticks
//!
//! Nothing here touches hardware, so everything is tested on the host.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod clock;
mod date;
mod encoder;
mod error;
mod face;
mod host;
pub mod layout;
mod render;

#[cfg(test)]
mod testing;

pub use clock::ClockReading;
pub use date::{format, DateLabel, MONTHS, WEEKDAYS};
pub use encoder::{encode, DigitGrid, GRID_SIZE};
pub use error::Error;
pub use face::{BinaryFace, DisplayState, Lifecycle, Redraw, WatchFace};
pub use host::Runner;
pub use render::{cells, CellStyle, Palette, Renderer};
