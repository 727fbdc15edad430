//! Decoder shared between interrupt and thread contexts.
//!
//! [`SharedDecoder`] puts a [`QuadratureDecoder`] behind an `embassy-sync`
//! blocking mutex. Each method locks for its whole duration, so a sample
//! taken in an edge interrupt can never interleave with a position read or
//! reset happening in thread mode.
//!
//! Pick the raw mutex to match the deployment:
//!
//! - [`CriticalSectionRawMutex`] when the decoder is touched from an
//!   interrupt handler (or another core).
//! - [`NoopRawMutex`] for single-context polling; locking is then free.
//!
//! [`CriticalSectionRawMutex`]: embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex
//! [`NoopRawMutex`]: embassy_sync::blocking_mutex::raw::NoopRawMutex

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::digital::InputPin;

use crate::decoder::QuadratureDecoder;
use crate::error::DecoderError;

/// A [`QuadratureDecoder`] whose every operation is individually atomic.
///
/// Typically stored in a `static` (through `StaticCell`) and used from both
/// a GPIO interrupt that calls [`update()`](Self::update) and a task that
/// calls [`position()`](Self::position).
pub struct SharedDecoder<R, A, B>
where
    R: RawMutex,
{
    inner: Mutex<R, RefCell<QuadratureDecoder<A, B>>>,
}

impl<R, A, B> SharedDecoder<R, A, B>
where
    R: RawMutex,
{
    /// Wrap an existing decoder.
    pub fn new(decoder: QuadratureDecoder<A, B>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(decoder)),
        }
    }

    /// Run `f` with exclusive access to the decoder.
    ///
    /// Use this for sequences that must be atomic as a whole, such as
    /// reading the position and resetting it in one step. `f` runs inside
    /// the lock (a critical section for [`CriticalSectionRawMutex`]) and
    /// should be short.
    ///
    /// # Panics
    /// Panics if called re-entrantly from within `f`.
    ///
    /// [`CriticalSectionRawMutex`]: embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex
    pub fn with<U>(&self, f: impl FnOnce(&mut QuadratureDecoder<A, B>) -> U) -> U {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Returns the accumulated position.
    pub fn position(&self) -> i32 {
        self.with(|decoder| decoder.position())
    }

    /// Set the position to zero, keeping any partial detent.
    pub fn reset_position(&self) {
        self.with(|decoder| decoder.reset_position())
    }

    /// Overwrite the position, keeping any partial detent.
    pub fn set_position(&self, value: i32) {
        self.with(|decoder| decoder.set_position(value))
    }

    /// Read the position and reset it to zero atomically.
    ///
    /// Returns the detents counted since the previous call, which is the
    /// usual way for a consumer task to drain movement recorded by an
    /// interrupt handler.
    pub fn take_position(&self) -> i32 {
        self.with(|decoder| {
            let position = decoder.position();
            decoder.reset_position();
            position
        })
    }

    /// Consume the wrapper and return the decoder.
    pub fn into_inner(self) -> QuadratureDecoder<A, B> {
        self.inner.into_inner().into_inner()
    }
}

impl<R, A, B> SharedDecoder<R, A, B>
where
    R: RawMutex,
    A: InputPin,
    B: InputPin,
{
    /// See [`QuadratureDecoder::sample_step()`].
    pub fn sample_step(&self) -> Result<i8, DecoderError<A::Error, B::Error>> {
        self.with(|decoder| decoder.sample_step())
    }

    /// See [`QuadratureDecoder::accumulate()`].
    pub fn accumulate(&self) -> Result<i32, DecoderError<A::Error, B::Error>> {
        self.with(|decoder| decoder.accumulate())
    }

    /// See [`QuadratureDecoder::poll_step()`].
    pub fn poll_step(&self) -> Result<(i8, i32), DecoderError<A::Error, B::Error>> {
        self.with(|decoder| decoder.poll_step())
    }

    /// See [`QuadratureDecoder::update()`].
    pub fn update(&self) -> Result<(), DecoderError<A::Error, B::Error>> {
        self.with(|decoder| decoder.update())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
