//! Polling configuration.

// ── PollConfig ───────────────────────────────────────────────────────────

/// Configuration for the polling loop (`encoder_poll_task`, `task` feature).
///
/// The sampling rate must be fast enough that no more than one channel
/// changes between two samples; otherwise the transition is treated as a
/// glitch and its sub-step is lost. Mechanical detent encoders turned by
/// hand are comfortably covered by the 1 kHz default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Sampling rate in Hz. Default: 1000. A value of 0 is treated as 1.
    pub poll_frequency_hz: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_frequency_hz: 1000,
        }
    }
}

impl PollConfig {
    /// Convert the configured frequency to a timer period in microseconds.
    ///
    /// Formula: `1_000_000 / poll_frequency_hz`.
    pub fn poll_period_us(&self) -> u64 {
        1_000_000 / self.poll_frequency_hz.max(1) as u64
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
