//! Quadrature transition table and decoding constants.
//!
//! A sample packs the two channel levels into two bits: channel A in bit 1,
//! channel B in bit 0. The rolling history keeps the previous sample in
//! bits 3–2 and the current sample in bits 1–0, so every `(previous,
//! current)` pair maps to one of 16 table indices:
//!
//! ```text
//! index = (previous << 2) | current        previous, current ∈ {0b00..=0b11}
//! ```

// ---------------------------------------------------------------------------
// Sample layout
// ---------------------------------------------------------------------------

/// Bit set in a sample when channel A reads high.
pub const CHANNEL_A_BIT: u8 = 0b10;

/// Bit set in a sample when channel B reads high.
pub const CHANNEL_B_BIT: u8 = 0b01;

/// Both channels high. Pulled-up encoder outputs rest here between detents.
pub const IDLE_SAMPLE: u8 = CHANNEL_A_BIT | CHANNEL_B_BIT;

/// Mask selecting the meaningful (previous, current) bits of the history.
pub const HISTORY_MASK: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Number of valid sub-step transitions making up one detent.
pub const SUBSTEPS_PER_DETENT: i8 = 4;

/// Direction delta for every `(previous, current)` history index.
///
/// Single-channel changes yield ±1, unchanged samples yield 0, and
/// double-channel changes (impossible under correct sequencing) also yield 0
/// so glitches are absorbed instead of counted.
///
/// Positive deltas follow the sequence `00 → 10 → 11 → 01 → 00`.
pub const TRANSITION_TABLE: [i8; 16] = [
    0, -1, 1, 0, //  previous 00
    1, 0, 0, -1, //  previous 01
    -1, 0, 0, 1, //  previous 10
    0, 1, -1, 0, //  previous 11
];

/// Pack two channel levels into a 2-bit sample.
#[inline]
pub const fn sample_bits(a: bool, b: bool) -> u8 {
    let mut sample = 0;
    if a {
        sample |= CHANNEL_A_BIT;
    }
    if b {
        sample |= CHANNEL_B_BIT;
    }
    sample
}

/// Look up the direction delta for a rolling history value.
///
/// Only the low four bits are used, so any `u8` is a valid input.
#[inline]
pub const fn transition_delta(history: u8) -> i8 {
    TRANSITION_TABLE[(history & HISTORY_MASK) as usize]
}

// ── Tests ────────────────────────────────────────────────────────────────
