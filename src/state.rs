//! Pin-independent quadrature state machine.
//!
//! [`QuadratureState`] holds the rolling sample history and the sub-step
//! accumulator. It is driven with channel levels that have already been
//! read, which lets [`QuadratureDecoder`](crate::QuadratureDecoder) and
//! callers sampling a whole GPIO port share the same decoding path.

use crate::table::{sample_bits, transition_delta, HISTORY_MASK, IDLE_SAMPLE, SUBSTEPS_PER_DETENT};

/// Rolling history and detent accumulator for one encoder.
///
/// After every [`advance()`](Self::advance) the accumulator lies strictly
/// inside `(-4, 4)`: it is cleared the moment a full detent is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadratureState {
    /// Previous sample in bits 3–2, current sample in bits 1–0.
    history: u8,
    /// Progress towards the next detent.
    sub_step: i8,
}

impl Default for QuadratureState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureState {
    /// Create a state seeded with both channels idle (high).
    ///
    /// Seeding the history with the idle sample means the first real sample
    /// is compared against the resting level rather than against `00`.
    pub const fn new() -> Self {
        Self {
            history: IDLE_SAMPLE,
            sub_step: 0,
        }
    }

    /// Fold one sample into the history and return the emitted step.
    ///
    /// Returns `+1` once four forward sub-steps have accumulated, `-1` once
    /// four backward sub-steps have accumulated, and `0` otherwise. Invalid
    /// double-channel transitions contribute nothing.
    pub fn advance(&mut self, a: bool, b: bool) -> i8 {
        self.history = ((self.history << 2) | sample_bits(a, b)) & HISTORY_MASK;
        self.sub_step += transition_delta(self.history);

        if self.sub_step >= SUBSTEPS_PER_DETENT {
            self.sub_step = 0;
            1
        } else if self.sub_step <= -SUBSTEPS_PER_DETENT {
            self.sub_step = 0;
            -1
        } else {
            0
        }
    }

    /// Returns the 4-bit rolling history.
    pub fn history(&self) -> u8 {
        self.history
    }

    /// Returns the accumulated progress towards the next detent.
    pub fn sub_step(&self) -> i8 {
        self.sub_step
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// One forward detent from rest: 11 → 01 → 00 → 10 → 11.
    const FORWARD_DETENT: [(bool, bool); 4] =
        [(false, true), (false, false), (true, false), (true, true)];

    /// One backward detent from rest: 11 → 10 → 00 → 01 → 11.
    const BACKWARD_DETENT: [(bool, bool); 4] =
        [(true, false), (false, false), (false, true), (true, true)];

    fn feed(state: &mut QuadratureState, samples: &[(bool, bool)]) -> [i8; 4] {
        let mut out = [0i8; 4];
        for (slot, &(a, b)) in out.iter_mut().zip(samples) {
            *slot = state.advance(a, b);
        }
        out
    }

    #[test]
    fn new_state_is_idle() {
        let state = QuadratureState::new();
        assert_eq!(state.history(), 0b11);
        assert_eq!(state.sub_step(), 0);
        assert_eq!(state, QuadratureState::default());
    }

    #[test]
    fn forward_detent_emits_once_on_last_sample() {
        let mut state = QuadratureState::new();
        assert_eq!(feed(&mut state, &FORWARD_DETENT), [0, 0, 0, 1]);
        assert_eq!(state.sub_step(), 0);
    }

    #[test]
    fn backward_detent_emits_once_on_last_sample() {
        let mut state = QuadratureState::new();
        assert_eq!(feed(&mut state, &BACKWARD_DETENT), [0, 0, 0, -1]);
        assert_eq!(state.sub_step(), 0);
    }

    #[test]
    fn held_levels_never_move_the_accumulator() {
        for &(a, b) in &[(false, false), (false, true), (true, false), (true, true)] {
            let mut state = QuadratureState::new();
            // First sample may register a transition away from idle.
            state.advance(a, b);
            let settled = state.sub_step();

            for _ in 0..100 {
                assert_eq!(state.advance(a, b), 0);
                assert_eq!(state.sub_step(), settled);
            }
        }
    }

    #[test]
    fn double_transition_from_idle_is_absorbed() {
        let mut state = QuadratureState::new();
        assert_eq!(state.advance(false, false), 0);
        assert_eq!(state.sub_step(), 0);
        assert_eq!(state.history(), 0b1100);
    }

    #[test]
    fn partial_detent_then_reversal_cancels() {
        let mut state = QuadratureState::new();
        state.advance(false, true); // 11 → 01: +1
        state.advance(false, false); // 01 → 00: +1
        assert_eq!(state.sub_step(), 2);

        state.advance(false, true); // 00 → 01: -1
        state.advance(true, true); // 01 → 11: -1
        assert_eq!(state.sub_step(), 0);
    }

    #[test]
    fn history_keeps_only_four_bits() {
        let mut state = QuadratureState::new();
        for &(a, b) in FORWARD_DETENT.iter().cycle().take(37) {
            state.advance(a, b);
            assert_eq!(state.history() & !0x0F, 0);
        }
    }
}
