//! Host driver
//!
//! Stands in for a platform's minute timer service. The platform feeds it
//! clock readings at whatever cadence it has (once per second on the watch)
//! and the runner turns them into one `on_tick` per minute change, followed
//! by a redraw when the face asks for one.

use embedded_graphics::prelude::DrawTarget;

use crate::{
    face::{Redraw, WatchFace},
    ClockReading,
};

pub struct Runner<F> {
    face: F,
    /// Last reading delivered to the face, `None` while unsubscribed
    last: Option<ClockReading>,
}

impl<F> Runner<F>
where
    F: WatchFace,
{
    pub fn new(face: F) -> Self {
        Self { face, last: None }
    }

    pub fn face(&self) -> &F {
        &self.face
    }

    /// Whether minute ticks are currently delivered
    pub fn is_subscribed(&self) -> bool {
        self.last.is_some()
    }

    /// Start the face, draw the first frame and subscribe to minute ticks
    pub fn start<D>(&mut self, now: ClockReading, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = F::Color>,
    {
        if self.is_subscribed() {
            return Ok(());
        }

        self.last = Some(now);
        if self.face.on_start(&now) == Redraw::Needed {
            self.face.draw(target)?;
        }
        Ok(())
    }

    /// Feed the current time. Returns whether the face was redrawn.
    pub fn tick<D>(&mut self, now: ClockReading, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = F::Color>,
    {
        match self.last {
            None => return Ok(false),
            Some(last) if last == now => return Ok(false),
            Some(_) => {}
        }

        self.last = Some(now);
        trace!("Minute changed");

        match self.face.on_tick(&now) {
            Redraw::Needed => {
                self.face.draw(target)?;
                Ok(true)
            }
            Redraw::NotNeeded => Ok(false),
        }
    }

    /// Unsubscribe and stop the face
    pub fn stop(&mut self) {
        if self.last.take().is_some() {
            self.face.on_stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{face::Lifecycle, layout, render::Palette, testing::Frame, BinaryFace};
    use chrono::{NaiveDate, NaiveDateTime};
    use embedded_graphics::pixelcolor::BinaryColor;

    fn runner() -> Runner<BinaryFace<BinaryColor>> {
        Runner::new(BinaryFace::new(Palette {
            background: BinaryColor::Off,
            foreground: BinaryColor::On,
        }))
    }

    /// Fake clock stepping one second at a time
    struct FakeClock {
        now: NaiveDateTime,
    }

    impl FakeClock {
        fn at(hour: u32, minute: u32, second: u32) -> Self {
            Self {
                now: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(hour, minute, second)
                    .unwrap(),
            }
        }

        fn step(&mut self) -> ClockReading {
            self.now += chrono::TimeDelta::seconds(1);
            ClockReading::from(self.now)
        }

        fn reading(&self) -> ClockReading {
            ClockReading::from(self.now)
        }
    }

    #[test]
    fn test_start_draws_first_frame() {
        let mut runner = runner();
        let mut frame = Frame::new();
        runner
            .start(FakeClock::at(12, 34, 0).reading(), &mut frame)
            .unwrap();

        assert!(runner.is_subscribed());
        assert_eq!(runner.face().lifecycle(), Lifecycle::Running);
        assert!(frame.draw_calls > 0);
    }

    #[test]
    fn test_one_tick_per_minute() {
        let mut runner = runner();
        let mut frame = Frame::new();
        let mut clock = FakeClock::at(8, 58, 30);
        runner.start(clock.reading(), &mut frame).unwrap();

        let mut redraws = 0;
        for _ in 0..120 {
            if runner.tick(clock.step(), &mut frame).unwrap() {
                redraws += 1;
            }
        }

        // 08:59:00 and 09:00:00
        assert_eq!(redraws, 2);
        assert_eq!(runner.face().state().grid.digits(), [0, 9, 0, 0]);
    }

    #[test]
    fn test_tick_at_nine_oh_five() {
        let mut runner = runner();
        let mut frame = Frame::new();
        let mut clock = FakeClock::at(9, 4, 59);
        runner.start(clock.reading(), &mut frame).unwrap();

        assert!(runner.tick(clock.step(), &mut frame).unwrap());

        let grid = runner.face().state().grid;
        assert_eq!(grid.digits(), [0, 9, 0, 5]);
        for (row, col, lit) in grid.cells() {
            let expected = if lit { BinaryColor::On } else { BinaryColor::Off };
            assert_eq!(frame.pixel(layout::cell_center(row, col)), Some(expected));
        }
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut runner = runner();
        let mut frame = Frame::new();
        let redrawn = runner
            .tick(FakeClock::at(1, 2, 3).reading(), &mut frame)
            .unwrap();

        assert!(!redrawn);
        assert_eq!(frame.draw_calls, 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut runner = runner();
        let mut frame = Frame::new();
        let mut clock = FakeClock::at(23, 59, 59);
        runner.start(clock.reading(), &mut frame).unwrap();

        runner.stop();
        runner.stop();
        assert!(!runner.is_subscribed());
        assert_eq!(runner.face().lifecycle(), Lifecycle::Uninitialized);

        let calls = frame.draw_calls;
        assert!(!runner.tick(clock.step(), &mut frame).unwrap());
        assert_eq!(frame.draw_calls, calls);
    }

    #[test]
    fn test_midnight_rolls_date() {
        let mut runner = runner();
        let mut frame = Frame::new();
        let mut clock = FakeClock::at(23, 59, 59);
        runner.start(clock.reading(), &mut frame).unwrap();
        assert_eq!(runner.face().state().date.as_str(), "Mon Jan 1 2024");

        assert!(runner.tick(clock.step(), &mut frame).unwrap());
        assert_eq!(runner.face().state().date.as_str(), "Tue Jan 2 2024");
        assert_eq!(runner.face().state().grid.digits(), [0, 0, 0, 0]);
    }
}
