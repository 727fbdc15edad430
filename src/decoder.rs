//! Quadrature decoder bound to two input pins.
//!
//! [`QuadratureDecoder`] owns the A and B channel pins, reads them on every
//! call, and feeds the levels through [`QuadratureState`]. Emitted steps are
//! optionally accumulated into a signed position counter.

use embedded_hal::digital::InputPin;

use crate::error::DecoderError;
use crate::state::QuadratureState;

/// Decodes a two-channel rotary encoder into a signed position.
///
/// Both pins must already be configured as digital inputs with pull-ups
/// enabled, so that an idle or open-collector encoder reads high. The
/// decoder takes ownership of the pins, which guarantees no other decoder
/// can be bound to the same channel.
///
/// Every operation runs in constant time without blocking. For use from an
/// interrupt handler alongside thread-mode readers, wrap the decoder in a
/// [`SharedDecoder`](crate::SharedDecoder).
///
/// # Example
///
/// ```ignore
/// use embassy_rp::gpio::{Input, Pull};
/// use quadrature_decoder::QuadratureDecoder;
///
/// let a = Input::new(p.PIN_2, Pull::Up);
/// let b = Input::new(p.PIN_3, Pull::Up);
/// let mut decoder = QuadratureDecoder::new(a, b);
///
/// loop {
///     let position = decoder.accumulate()?;
///     // ...
/// }
/// ```
pub struct QuadratureDecoder<A, B> {
    pin_a: A,
    pin_b: B,
    state: QuadratureState,
    position: i32,
}

impl<A, B> QuadratureDecoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create a decoder that assumes both channels start idle (high).
    ///
    /// # Arguments
    /// * `pin_a` — channel A input, pull-up enabled
    /// * `pin_b` — channel B input, pull-up enabled
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self {
            pin_a,
            pin_b,
            state: QuadratureState::new(),
            position: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Read both channels once and return the emitted step.
    ///
    /// Returns `1` or `-1` when a full detent completes and `0` otherwise.
    /// The position counter is not touched.
    ///
    /// # Errors
    /// * [`DecoderError::PinA`] / [`DecoderError::PinB`] if a channel read
    ///   fails. Both channels are read before any state changes, so the
    ///   decoder is unchanged on error.
    pub fn sample_step(&mut self) -> Result<i8, DecoderError<A::Error, B::Error>> {
        let a = self.pin_a.is_high().map_err(DecoderError::PinA)?;
        let b = self.pin_b.is_high().map_err(DecoderError::PinB)?;

        Ok(self.state.advance(a, b))
    }

    /// Sample once, add the emitted step to the position and return it.
    ///
    /// This is the usual polling entry point. The returned value always
    /// equals [`position()`](Self::position) right after the call.
    ///
    /// The counter wraps at the `i32` bounds.
    pub fn accumulate(&mut self) -> Result<i32, DecoderError<A::Error, B::Error>> {
        self.poll_step().map(|(_, position)| position)
    }

    /// Sample once, accumulate, and return both the step and the position.
    ///
    /// Behaves exactly like [`accumulate()`](Self::accumulate) but also
    /// reports which step (`-1`, `0` or `1`) was added.
    pub fn poll_step(&mut self) -> Result<(i8, i32), DecoderError<A::Error, B::Error>> {
        let step = self.sample_step()?;
        self.position = self.position.wrapping_add(i32::from(step));
        Ok((step, self.position))
    }

    /// Same as [`accumulate()`](Self::accumulate), discarding the position.
    pub fn update(&mut self) -> Result<(), DecoderError<A::Error, B::Error>> {
        self.accumulate().map(|_| ())
    }
}

impl<A, B> QuadratureDecoder<A, B> {
    // -----------------------------------------------------------------------
    // Position
    // -----------------------------------------------------------------------

    /// Returns the accumulated position without sampling.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Set the position to zero.
    ///
    /// A detent that is partway through keeps its progress and still
    /// registers once completed.
    pub fn reset_position(&mut self) {
        self.set_position(0);
    }

    /// Overwrite the position, leaving the sample history intact.
    pub fn set_position(&mut self, value: i32) {
        self.position = value;
    }

    // -----------------------------------------------------------------------
    // Pins and state
    // -----------------------------------------------------------------------

    /// Returns the channel A pin.
    pub fn pin_a(&self) -> &A {
        &self.pin_a
    }

    /// Returns the channel B pin.
    pub fn pin_b(&self) -> &B {
        &self.pin_b
    }

    /// Returns the decoding state (history and detent progress).
    pub fn state(&self) -> &QuadratureState {
        &self.state
    }

    /// Consume the decoder and hand the pins back.
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
