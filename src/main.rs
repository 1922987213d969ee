#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, button::Button, display::Display};
use system::{
    config::SystemConfig,
    time::{TimeManager, TimeReference},
};

// Others
use binarian_core::{BinaryFace, ClockReading, Palette, Runner};
use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// Include build machine's local time at compile time
include!(concat!(env!("OUT_DIR"), "/local_time.rs"));

/// Backlight level while the face is running
const BRIGHTNESS: u8 = 2;

// Communication channels
static SHUTDOWN: Signal<ThreadModeRawMutex, ()> = Signal::new();
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button<'static>) {
    loop {
        if button.pressed().await {
            defmt::info!("Button pressed, shutting down");
            SHUTDOWN.signal(());
            return;
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Get the current time.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        // Send time to channel
        TIME.signal(clock.get_time());

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Drive the watchface from the time channel
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<'static, SPI2>, mut backlight: Backlight<'static>) {
    let mut runner = Runner::new(BinaryFace::new(Palette {
        background: Rgb565::BLACK,
        foreground: Rgb565::WHITE,
    }));

    let now = ClockReading::from(TIME.wait().await);
    if runner.start(now, &mut display.face_area()).is_err() {
        defmt::warn!("Initial draw failed");
    }
    if let Err(e) = backlight.set(BRIGHTNESS) {
        defmt::warn!("Backlight: {}", e);
    }
    defmt::info!("Watchface running, backlight {}", backlight.get_brightness());

    loop {
        let now = ClockReading::from(TIME.wait().await);

        if SHUTDOWN.signaled() {
            runner.stop();
            if let Err(e) = display.clear() {
                defmt::warn!("Display: {}", e);
            }
            backlight.off();
            defmt::info!("Watchface stopped");
            return;
        }

        match runner.tick(now, &mut display.face_area()) {
            Ok(true) => defmt::debug!("Redrawn at {}:{}", now.hour(), now.minute()),
            Ok(false) => {}
            // Retried on the next minute change
            Err(_) => defmt::warn!("Redraw failed"),
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize time keeping
    let clock = TimeManager::init(TimeReference::from_local_epoch(LOCAL_EPOCH));

    // Initialize Backlight
    let backlight = Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
    );

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(update_time(clock)));
    unwrap!(spawner.spawn(update_lcd(display, backlight)));
}
