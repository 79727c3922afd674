//! Mute line levels and polarity.
//!
//! The amplifier mute line is a single GPIO output. Whether "muted" means the
//! pin is high or low depends on board wiring, so the logical level
//! ([`MuteState`]) and the electrical level ([`PinState`]) are kept apart and
//! joined by a [`Polarity`].

/// Electrical pin level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Logical level of the mute line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuteState {
    /// Amplifier silenced.
    Muted,
    /// Amplifier passes audio.
    Unmuted,
}

/// Which electrical level mutes the amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pin low mutes, pin high unmutes. IQaudIO boards are wired this way.
    #[default]
    ActiveLow,
    /// Pin high mutes, pin low unmutes.
    ActiveHigh,
}

impl Polarity {
    /// Electrical level that realises `state`.
    #[must_use]
    pub const fn pin_state(self, state: MuteState) -> PinState {
        match (self, state) {
            (Self::ActiveLow, MuteState::Muted) | (Self::ActiveHigh, MuteState::Unmuted) => {
                PinState::Low
            }
            (Self::ActiveLow, MuteState::Unmuted) | (Self::ActiveHigh, MuteState::Muted) => {
                PinState::High
            }
        }
    }
}
