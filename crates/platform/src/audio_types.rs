//! Stream and clock domain types.
//!
//! - `StreamRequest`: the parameters the audio framework hands over on every
//!   hw_params event (rate + physical sample width)
//! - `ClockMode`: which clock the CPU I2S controller must be told about
//! - `ClockResult`: the negotiated value, tagged by mode
//! - `FormatError`: rejected stream parameters

use thiserror::Error;

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when stream parameters cannot be clocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Sample rate or sample width is zero.
    #[error("unsupported stream format: rate {sample_rate_hz} Hz, width {sample_bits} bits")]
    UnsupportedFormat {
        /// Requested sample rate.
        sample_rate_hz: u32,
        /// Requested physical sample width.
        sample_bits: u32,
    },
}

// ── StreamRequest ────────────────────────────────────────────────────────────

/// Stream parameters delivered with a parameter-set event.
///
/// `sample_bits` is the *physical* width of one sample in memory (a 24-bit
/// format packed in 32 bits reports 32), which is what the bit clock slot
/// width follows.
///
/// Zero values are representable on purpose: they arrive from outside and are
/// rejected by negotiation, not by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamRequest {
    /// Frames per second.
    pub sample_rate_hz: u32,
    /// Physical sample width in bits.
    pub sample_bits: u32,
}

impl StreamRequest {
    /// Create a request from raw framework values.
    #[must_use]
    pub const fn new(sample_rate_hz: u32, sample_bits: u32) -> Self {
        Self {
            sample_rate_hz,
            sample_bits,
        }
    }

    /// Check that both fields are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedFormat`] if either field is zero.
    pub const fn validate(self) -> Result<Self, FormatError> {
        if self.sample_rate_hz == 0 || self.sample_bits == 0 {
            Err(FormatError::UnsupportedFormat {
                sample_rate_hz: self.sample_rate_hz,
                sample_bits: self.sample_bits,
            })
        } else {
            Ok(self)
        }
    }
}

// ── ClockMode ────────────────────────────────────────────────────────────────

/// Clocking scheme of the CPU-side I2S controller.
///
/// Fixed for the lifetime of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    /// Controller needs an explicit master clock of `fs × 512`.
    MasterClockRatio,
    /// Controller derives everything from a bit-clock/frame ratio.
    BitClockRatio,
}

// ── ClockResult ──────────────────────────────────────────────────────────────

/// Outcome of clock negotiation, tagged by the [`ClockMode`] that produced it.
///
/// Values are `u64` so every `u32` request maps without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockResult {
    /// System clock to program on the CPU DAI, output direction.
    MasterClock {
        /// Master clock frequency in Hz.
        rate_hz: u64,
    },
    /// Bit clocks per frame.
    BitClockRatio {
        /// BCLK / LRCLK ratio.
        ratio: u64,
    },
}

impl ClockResult {
    /// The mode this result belongs to.
    #[must_use]
    pub const fn mode(self) -> ClockMode {
        match self {
            Self::MasterClock { .. } => ClockMode::MasterClockRatio,
            Self::BitClockRatio { .. } => ClockMode::BitClockRatio,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_cd_quality() {
        let req = StreamRequest::new(44_100, 16);
        assert_eq!(req.validate(), Ok(req));
    }

    #[test]
    fn validate_rejects_zero_rate() {
        let err = StreamRequest::new(0, 32).validate().unwrap_err();
        assert_eq!(
            err,
            FormatError::UnsupportedFormat {
                sample_rate_hz: 0,
                sample_bits: 32
            }
        );
    }

    #[test]
    fn validate_rejects_zero_width() {
        assert!(StreamRequest::new(48_000, 0).validate().is_err());
    }

    #[test]
    fn result_reports_its_mode() {
        assert_eq!(
            ClockResult::MasterClock { rate_hz: 1 }.mode(),
            ClockMode::MasterClockRatio
        );
        assert_eq!(
            ClockResult::BitClockRatio { ratio: 64 }.mode(),
            ClockMode::BitClockRatio
        );
    }
}
