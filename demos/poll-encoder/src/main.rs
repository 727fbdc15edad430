//! Poll encoder example
//!
//! Decodes a mechanical rotary encoder wired straight to two GPIOs of the
//! Raspberry Pi Pico 2. One task samples the channels at 1 kHz through the
//! shared decoder; a second task drains the accumulated detents every
//! 100 ms and logs them via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC A     | GP2        | Pull-up enabled              |
//! | ENC B     | GP3        | Pull-up enabled              |
//! | ENC COM   | GND        |                              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quadrature_decoder::{encoder_poll_task, PollConfig, QuadratureDecoder, SharedDecoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Concrete decoder type shared between the two tasks.
type Decoder = SharedDecoder<CriticalSectionRawMutex, Input<'static>, Input<'static>>;

static DECODER: StaticCell<Decoder> = StaticCell::new();

/// Thin wrapper that monomorphises the generic `encoder_poll_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn poll_task(decoder: &'static Decoder, config: PollConfig) {
    encoder_poll_task(decoder, config).await;
}

/// Drains detents counted since the last report.
#[embassy_executor::task]
async fn report_task(decoder: &'static Decoder) {
    let mut total: i32 = 0;
    let mut ticker = Ticker::every(Duration::from_millis(100));

    loop {
        ticker.next().await;

        let moved = decoder.take_position();
        if moved != 0 {
            total = total.wrapping_add(moved);
            info!("Moved {} detents, total {}", moved, total);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder channels (GP2 = A, GP3 = B), idle high ---
    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);

    let decoder = DECODER.init(SharedDecoder::new(QuadratureDecoder::new(pin_a, pin_b)));

    info!("Encoder example started — rotate the knob to see detents");

    spawner.spawn(poll_task(decoder, PollConfig::default())).unwrap();
    spawner.spawn(report_task(decoder)).unwrap();
}
