//! Display control module for PineTime

use binarian_core::layout::SCREEN_SIZE;
use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};
use embassy_time::Delay;
use embedded_graphics::{draw_target::Translated, pixelcolor::Rgb565, prelude::*};
use mipidsi::{models::ST7789, Builder, Orientation};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;

pub type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

pub struct Display<'a, SPI>
where
    SPI: spim::Instance,
{
    lcd: Lcd<'a, SPI>,
}

impl<'a, SPI> Display<'a, SPI>
where
    SPI: spim::Instance,
{
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'a, SPI>,
        cs_pin: Output<'a, P0_25>,
        dc_pin: Output<'a, P0_18>,
        rst_pin: Output<'a, P0_26>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        let mut display = Self { lcd };
        display.clear()?;
        Ok(display)
    }

    /// Clear the display
    pub fn clear(&mut self) -> Result<(), Error> {
        self.lcd.clear(BACKGROUND_COLOR).map_err(|_| Error::Bus)
    }

    /// Draw target for the watchface, centred on the panel
    pub fn face_area(&mut self) -> Translated<'_, Lcd<'a, SPI>> {
        let offset = Point::new(
            (LCD_W as i32 - SCREEN_SIZE.width as i32) / 2,
            (LCD_H as i32 - SCREEN_SIZE.height as i32) / 2,
        );
        self.lcd.translated(offset)
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Controller did not come up
    Init,
    /// SPI transfer failed
    Bus,
}
