//! Clock negotiation for the CPU-side I2S controller.
//!
//! Every hw_params event turns the stream's rate and physical sample width
//! into the single clock value the CPU DAI needs. Which value depends on the
//! controller family, fixed per link:
//!
//! # Master clock mode (Rockchip I2S)
//!
//!   MCLK = fs x 512
//!
//!   44.1 kHz -> 22.5792 MHz
//!   48 kHz   -> 24.576 MHz
//!   192 kHz  -> 98.304 MHz
//!
//! The controller divides MCLK down to BCLK/LRCLK itself; 512 is what its
//! dividers are laid out for and is not a tunable.
//!
//! # Bit clock ratio mode (BCM2835 I2S)
//!
//!   BCLK / LRCLK = physical sample width x 2
//!
//!   S16_LE        -> 32
//!   S24_LE (in 32) -> 64
//!   S32_LE        -> 64
//!
//! Two slots per frame because the link is always stereo I2S.

use platform::{ClockMode, ClockResult, FormatError, StreamRequest};

/// MCLK/fs ratio in [`ClockMode::MasterClockRatio`].
pub const MCLK_FS_RATIO: u64 = 512;

/// Channel slots per I2S frame.
pub const CHANNEL_SLOTS: u64 = 2;

/// Clock mode compiled into this build.
///
/// `rockchip-i2s` selects the master clock scheme; everything else uses the
/// bit clock ratio. A board descriptor may still override it per link.
#[cfg(feature = "rockchip-i2s")]
pub const BUILD_CLOCK_MODE: ClockMode = ClockMode::MasterClockRatio;

/// Clock mode compiled into this build.
///
/// `rockchip-i2s` selects the master clock scheme; everything else uses the
/// bit clock ratio. A board descriptor may still override it per link.
#[cfg(not(feature = "rockchip-i2s"))]
pub const BUILD_CLOCK_MODE: ClockMode = ClockMode::BitClockRatio;

/// Map a stream request to the clock value for `mode`.
///
/// Pure and deterministic. Both request fields are validated in both modes,
/// even though each mode only reads one of them.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedFormat`] when the rate or the width is
/// zero.
pub fn negotiate(mode: ClockMode, request: StreamRequest) -> Result<ClockResult, FormatError> {
    let request = request.validate()?;
    // u32 widened to u64: neither product can exceed 2^42.
    #[allow(clippy::arithmetic_side_effects)]
    let result = match mode {
        ClockMode::MasterClockRatio => ClockResult::MasterClock {
            rate_hz: u64::from(request.sample_rate_hz) * MCLK_FS_RATIO,
        },
        ClockMode::BitClockRatio => ClockResult::BitClockRatio {
            ratio: u64::from(request.sample_bits) * CHANNEL_SLOTS,
        },
    };
    Ok(result)
}
