//! Watchface lifecycle

use embedded_graphics::{pixelcolor::PixelColor, prelude::DrawTarget};

use crate::{
    encoder::DigitGrid,
    render::{Palette, Renderer},
    ClockReading, DateLabel,
};

/// Everything a redraw needs, rebuilt wholesale on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub grid: DigitGrid,
    pub date: DateLabel,
}

impl DisplayState {
    pub fn from_reading(reading: &ClockReading) -> Self {
        Self {
            grid: DigitGrid::encode(reading.hour(), reading.minute()),
            date: DateLabel::from_reading(reading),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    Uninitialized,
    Running,
}

/// Answer of a lifecycle callback
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    Needed,
    NotNeeded,
}

/// Callbacks a host delivers to a watchface.
///
/// The host serialises all calls. `draw` only reads what the last
/// `on_start`/`on_tick` stored.
pub trait WatchFace {
    type Color: PixelColor;

    /// Allocate state and compute the first frame
    fn on_start(&mut self, now: &ClockReading) -> Redraw;

    /// Minute changed
    fn on_tick(&mut self, now: &ClockReading) -> Redraw;

    /// Release state
    fn on_stop(&mut self);

    /// Draw the current state
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;
}

/// BCD circle grid with a date line
pub struct BinaryFace<C> {
    lifecycle: Lifecycle,
    state: DisplayState,
    renderer: Renderer<C>,
}

impl<C> BinaryFace<C>
where
    C: PixelColor,
{
    pub fn new(palette: Palette<C>) -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            state: DisplayState::default(),
            renderer: Renderer::new(palette),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}

impl<C> WatchFace for BinaryFace<C>
where
    C: PixelColor,
{
    type Color = C;

    fn on_start(&mut self, now: &ClockReading) -> Redraw {
        if self.lifecycle == Lifecycle::Running {
            warn!("Watchface already running");
            return Redraw::NotNeeded;
        }

        self.state = DisplayState::from_reading(now);
        self.lifecycle = Lifecycle::Running;
        info!("Watchface started at {}:{}", now.hour(), now.minute());

        Redraw::Needed
    }

    fn on_tick(&mut self, now: &ClockReading) -> Redraw {
        if self.lifecycle != Lifecycle::Running {
            warn!("Tick before start ignored");
            return Redraw::NotNeeded;
        }

        self.state = DisplayState::from_reading(now);
        debug!("Tick {}:{}", now.hour(), now.minute());

        Redraw::Needed
    }

    fn on_stop(&mut self) {
        if self.lifecycle == Lifecycle::Uninitialized {
            return;
        }

        self.state = DisplayState::default();
        self.lifecycle = Lifecycle::Uninitialized;
        info!("Watchface stopped");
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        if self.lifecycle != Lifecycle::Running {
            return Ok(());
        }
        self.renderer.draw(&self.state, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout, testing::Frame};
    use embedded_graphics::pixelcolor::BinaryColor;

    fn face() -> BinaryFace<BinaryColor> {
        BinaryFace::new(Palette {
            background: BinaryColor::Off,
            foreground: BinaryColor::On,
        })
    }

    fn reading(hour: u8, minute: u8) -> ClockReading {
        ClockReading::new(hour, minute, 0, 0, 1, 2024).unwrap()
    }

    #[test]
    fn test_start_then_stop() {
        let mut face = face();
        assert_eq!(face.lifecycle(), Lifecycle::Uninitialized);

        assert_eq!(face.on_start(&reading(12, 0)), Redraw::Needed);
        assert_eq!(face.lifecycle(), Lifecycle::Running);
        assert_eq!(face.state().date.as_str(), "Sun Jan 1 2024");

        face.on_stop();
        assert_eq!(face.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(face.state(), &DisplayState::default());
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut face = face();
        assert_eq!(face.on_tick(&reading(9, 5)), Redraw::NotNeeded);
        assert_eq!(face.state(), &DisplayState::default());
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut face = face();
        let _ = face.on_start(&reading(8, 0));
        assert_eq!(face.on_start(&reading(9, 0)), Redraw::NotNeeded);
        assert_eq!(face.state().grid.digits(), [0, 8, 0, 0]);
    }

    #[test]
    fn test_tick_replaces_state() {
        let mut face = face();
        let _ = face.on_start(&reading(8, 59));
        assert_eq!(face.on_tick(&reading(9, 5)), Redraw::Needed);
        assert_eq!(face.state().grid.digits(), [0, 9, 0, 5]);
    }

    #[test]
    fn test_draw_reads_stored_state() {
        let mut face = face();
        let _ = face.on_start(&reading(9, 5));

        let mut frame = Frame::new();
        face.draw(&mut frame).unwrap();

        // Units of hour = 9 = 1001
        let column = [
            frame.pixel(layout::cell_center(0, 1)),
            frame.pixel(layout::cell_center(1, 1)),
            frame.pixel(layout::cell_center(2, 1)),
            frame.pixel(layout::cell_center(3, 1)),
        ];
        assert_eq!(
            column,
            [
                Some(BinaryColor::On),
                Some(BinaryColor::Off),
                Some(BinaryColor::Off),
                Some(BinaryColor::On),
            ]
        );
    }

    #[test]
    fn test_draw_when_stopped_is_blank() {
        let face = face();
        let mut frame = Frame::new();
        face.draw(&mut frame).unwrap();
        assert_eq!(frame.draw_calls, 0);
    }
}
