//! Rotation direction of emitted detents.

/// Rotation direction of one emitted detent.
///
/// `Clockwise` corresponds to a `+1` step, i.e. the channel sequence
/// `00 → 10 → 11 → 01`. Which way that turns the shaft depends on how the
/// encoder is wired; swap the pins to invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Interpret a step returned by the decoder. `0` means no detent.
    pub fn from_step(step: i8) -> Option<Self> {
        match step {
            s if s > 0 => Some(Direction::Clockwise),
            s if s < 0 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    /// The signed step this direction contributes to a position.
    pub fn as_step(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}
