//! Table-driven quadrature decoder for two-channel rotary encoders.
//!
//! This crate turns the A/B channel levels of a mechanical or optical
//! rotary encoder into a signed detent count. It reads any pair of
//! [`embedded_hal::digital::InputPin`]s and tolerates contact bounce:
//! impossible double-channel transitions are absorbed, and a step is only
//! emitted after four consistent sub-steps (one full detent).
//!
//! # Architecture
//!
//! - **`table`** — the fixed 16-entry transition table and constants.
//! - **[`QuadratureState`]** — pin-independent history and detent
//!   accumulator, for callers that already have the channel levels.
//! - **[`QuadratureDecoder`]** — owns the two pins, samples them, and keeps
//!   the position counter.
//! - **[`SharedDecoder`]** — the same operations, each atomic under an
//!   `embassy-sync` mutex, for sharing between an interrupt handler and
//!   thread-mode code.
//!
//! # Quick start
//!
//! ```ignore
//! use embassy_rp::gpio::{Input, Pull};
//! use quadrature_decoder::QuadratureDecoder;
//!
//! let mut decoder = QuadratureDecoder::new(
//!     Input::new(p.PIN_2, Pull::Up),
//!     Input::new(p.PIN_3, Pull::Up),
//! );
//!
//! loop {
//!     let position = decoder.accumulate()?;
//!     Timer::after_micros(500).await;
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations and logging in the
//!   poll task.
//! - **`task`** — [`encoder_poll_task`], a periodic sampling loop built on
//!   `embassy-time`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod decoder;
pub mod direction;
pub mod error;
#[cfg(feature = "task")]
pub mod poll_task;
pub mod shared;
pub mod state;
pub mod table;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::PollConfig;
pub use decoder::QuadratureDecoder;
pub use direction::Direction;
pub use error::DecoderError;
#[cfg(feature = "task")]
pub use poll_task::encoder_poll_task;
pub use shared::SharedDecoder;
pub use state::QuadratureState;
