//! In-memory draw target for host tests

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

use crate::layout::SCREEN_SIZE;

/// Frame buffer the size of the face that counts draw calls
pub struct Frame {
    pixels: Vec<Option<BinaryColor>>,
    pub draw_calls: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (SCREEN_SIZE.width * SCREEN_SIZE.height) as usize],
            draw_calls: 0,
        }
    }

    /// Colour at `point`, `None` if never touched
    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    /// Number of pixels inside `area` set to `color`
    pub fn count(&self, area: &Rectangle, color: BinaryColor) -> usize {
        area.points()
            .filter(|&p| self.pixel(p) == Some(color))
            .count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (w, h) = (SCREEN_SIZE.width as i32, SCREEN_SIZE.height as i32);
        if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
            return None;
        }
        Some((point.y * w + point.x) as usize)
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        SCREEN_SIZE
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_calls += 1;
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}
