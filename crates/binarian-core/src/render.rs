//! Renderer
//!
//! Draws a [`DisplayState`] onto any `embedded-graphics` draw target: one
//! filled or outlined circle per grid cell, and the date line centred
//! below the grid.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder},
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::{
    encoder::DigitGrid,
    face::DisplayState,
    layout::{self, CELL_RADIUS, DATE_REGION, TIME_REGION},
    DateLabel,
};

/// How a single grid cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellStyle {
    /// Bit set
    Filled,
    /// Bit clear
    Outlined,
}

impl From<bool> for CellStyle {
    fn from(lit: bool) -> Self {
        if lit {
            CellStyle::Filled
        } else {
            CellStyle::Outlined
        }
    }
}

/// Colours used by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub background: C,
    pub foreground: C,
}

/// The sixteen draw decisions for a grid, as `(centre, style)`
pub fn cells(grid: &DigitGrid) -> impl Iterator<Item = (Point, CellStyle)> + '_ {
    grid.cells()
        .map(|(row, col, lit)| (layout::cell_center(row, col), CellStyle::from(lit)))
}

pub struct Renderer<C> {
    palette: Palette<C>,
}

impl<C> Renderer<C>
where
    C: PixelColor,
{
    pub fn new(palette: Palette<C>) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    /// Draw the full face
    pub fn draw<D>(&self, state: &DisplayState, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.draw_grid(&state.grid, target)?;
        self.draw_date(&state.date, target)
    }

    /// Clear the time region and draw one circle per cell
    pub fn draw_grid<D>(&self, grid: &DigitGrid, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        TIME_REGION
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(target)?;

        let filled = PrimitiveStyle::with_fill(self.palette.foreground);
        let outlined = PrimitiveStyle::with_stroke(self.palette.foreground, 1);

        for (center, cell) in cells(grid) {
            let circle = Circle::with_center(center, CELL_RADIUS * 2 + 1);
            match cell {
                CellStyle::Filled => circle.into_styled(filled).draw(target)?,
                CellStyle::Outlined => circle.into_styled(outlined).draw(target)?,
            }
        }

        Ok(())
    }

    /// Clear the date region and draw the label centred in it
    pub fn draw_date<D>(&self, label: &DateLabel, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        DATE_REGION
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(target)?;

        // Styling
        let character_style: MonoTextStyle<'_, C> = MonoTextStyleBuilder::new()
            .font(&PROFONT_12_POINT)
            .text_color(self.palette.foreground)
            .background_color(self.palette.background)
            .build();
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();

        let anchor = Point::new(DATE_REGION.center().x, DATE_REGION.top_left.y);
        Text::with_text_style(label.as_str(), anchor, character_style, text_style)
            .draw(target)?;

        Ok(())
    }
}
