//! Bias levels of the amplifier path and the mute decision table.
//!
//! The audio framework walks the pipeline through these levels:
//!
//! ```text
//! Off <──> Standby <──> Prepare <──> On
//! ```
//!
//! Only the `Standby`/`Prepare` edge moves the amplifier mute line:
//!
//! ```text
//! Standby --(prepare)--> Prepare   unmute: audio is about to flow
//! Prepare --(standby)--> Standby   mute:   stream has stopped
//! ```
//!
//! Every other pair, same-level repeats included, leaves the line alone.

/// Power/activity state of the audio pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BiasLevel {
    /// Powered down.
    #[default]
    Off,
    /// Idle, ready to prepare quickly.
    Standby,
    /// About to start (or just finished) streaming.
    Prepare,
    /// Streaming.
    On,
}

/// A level change as reported by the framework.
///
/// `previous` is supplied, never derived: the framework owns the level
/// bookkeeping and hands over both ends of the edge at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BiasTransition {
    /// Level the pipeline is leaving.
    pub previous: BiasLevel,
    /// Level the pipeline is entering.
    pub requested: BiasLevel,
}

/// What the mute line should do for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuteAction {
    /// Drive the line to the muted level.
    Mute,
    /// Drive the line to the unmuted level.
    Unmute,
}

impl BiasTransition {
    /// Create a transition from `previous` to `requested`.
    #[must_use]
    pub const fn new(previous: BiasLevel, requested: BiasLevel) -> Self {
        Self {
            previous,
            requested,
        }
    }

    /// Mute action this edge calls for, if any.
    #[must_use]
    pub const fn mute_action(self) -> Option<MuteAction> {
        match (self.previous, self.requested) {
            (BiasLevel::Standby, BiasLevel::Prepare) => Some(MuteAction::Unmute),
            (BiasLevel::Prepare, BiasLevel::Standby) => Some(MuteAction::Mute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BiasLevel; 4] = [
        BiasLevel::Off,
        BiasLevel::Standby,
        BiasLevel::Prepare,
        BiasLevel::On,
    ];

    #[test]
    fn only_standby_prepare_edge_acts() {
        for previous in ALL {
            for requested in ALL {
                let action = BiasTransition::new(previous, requested).mute_action();
                let expected = match (previous, requested) {
                    (BiasLevel::Standby, BiasLevel::Prepare) => Some(MuteAction::Unmute),
                    (BiasLevel::Prepare, BiasLevel::Standby) => Some(MuteAction::Mute),
                    _ => None,
                };
                assert_eq!(action, expected, "{previous:?} -> {requested:?}");
            }
        }
    }

    #[test]
    fn default_level_is_off() {
        assert_eq!(BiasLevel::default(), BiasLevel::Off);
    }
}
