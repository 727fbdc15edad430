//! Error types for the quadrature decoder.

use core::fmt;

/// A channel read failed while sampling.
///
/// The decoding itself cannot fail; only the underlying
/// [`InputPin`](embedded_hal::digital::InputPin) reads can. When a read
/// fails the decoder state is left exactly as it was before the call.
///
/// With infallible pins (`Error = Infallible`) this type is uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError<EA, EB> {
    /// Reading channel A failed.
    PinA(EA),

    /// Reading channel B failed.
    PinB(EB),
}

impl<EA: fmt::Debug, EB: fmt::Debug> fmt::Display for DecoderError<EA, EB> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::PinA(e) => write!(f, "channel A read error: {:?}", e),
            DecoderError::PinB(e) => write!(f, "channel B read error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<EA: defmt::Format, EB: defmt::Format> defmt::Format for DecoderError<EA, EB> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::PinA(e) => defmt::write!(f, "channel A read error: {}", e),
            DecoderError::PinB(e) => defmt::write!(f, "channel B read error: {}", e),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
