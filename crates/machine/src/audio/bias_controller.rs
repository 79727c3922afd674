//! Bias-level driven amplifier muting.
//!
//! The audio framework reports every bias change on the card. The controller
//! owns one link: its configuration, its mute line, and the identity of the
//! codec device whose changes it acts on.
//!
//! ## Lifecycle
//! ```text
//! new() --startup()--> [running] --set_bias_level()*--> teardown()
//!          one-shot      Standby->Prepare: unmute        forced mute,
//!          unmute        Prepare->Standby: mute          line released
//! ```
//!
//! Only the Standby/Prepare edge moves the line. Transitions to or from `Off`
//! and `On` leave it alone.

use platform::{
    BiasLevel, BiasTransition, ClockResult, DeviceId, FormatError, MuteAction, StreamRequest,
};

use crate::audio::amp::MuteActuator;
use crate::audio::clock_math;
use crate::link::LinkConfig;
use crate::log;

/// Mute-line state machine for one audio link.
pub struct BiasStateController<M> {
    device: DeviceId,
    config: LinkConfig<M>,
    level: BiasLevel,
    previous: BiasLevel,
    startup_done: bool,
}

impl<M: MuteActuator> BiasStateController<M> {
    /// Take ownership of `config` for the codec `device`.
    ///
    /// Starts at [`BiasLevel::Off`]. The mute line is not touched.
    pub fn new(device: DeviceId, config: LinkConfig<M>) -> Self {
        Self {
            device,
            config,
            level: BiasLevel::Off,
            previous: BiasLevel::Off,
            startup_done: false,
        }
    }

    /// Codec device this controller acts for.
    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// Link configuration.
    pub fn config(&self) -> &LinkConfig<M> {
        &self.config
    }

    /// Last level reported for the owned device.
    pub fn level(&self) -> BiasLevel {
        self.level
    }

    /// Level before [`level`](Self::level).
    pub fn previous_level(&self) -> BiasLevel {
        self.previous
    }

    /// Negotiate clocks for a new stream using the link's clock mode.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedFormat`] for a zero rate or width; the caller
    /// must abort the parameter-set operation.
    pub fn negotiate(&self, request: StreamRequest) -> Result<ClockResult, FormatError> {
        clock_math::negotiate(self.config.clock_mode(), request)
    }

    /// Handle a bias change reported for `device`.
    ///
    /// Returns the mute action performed, if any. Changes for any other
    /// device return `None` without side effects. The actuator call has
    /// completed by the time this returns.
    pub fn set_bias_level(
        &mut self,
        device: DeviceId,
        transition: BiasTransition,
    ) -> Option<MuteAction> {
        if device != self.device {
            log::debug!("bias change for foreign device {}, ignoring", device.0);
            return None;
        }

        self.previous = transition.previous;
        self.level = transition.requested;

        if !self.config.auto_mute() {
            return None;
        }
        let action = transition.mute_action()?;
        let line = self.config.mute_line_mut()?;
        line.apply(action);
        Some(action)
    }

    /// One-shot unmute after registration.
    ///
    /// Acts at most once per controller and only when the link asks for it
    /// and has a mute line; auto-mute does not matter here.
    pub fn startup(&mut self) -> Option<MuteAction> {
        if self.startup_done {
            return None;
        }
        self.startup_done = true;

        if !self.config.unmute_at_startup() {
            return None;
        }
        let line = self.config.mute_line_mut()?;
        line.deassert();
        Some(MuteAction::Unmute)
    }

    /// Mute unconditionally and hand the line back.
    ///
    /// Best effort: a failing write is logged by the actuator, never raised.
    pub fn teardown(mut self) -> Option<M> {
        if let Some(line) = self.config.mute_line_mut() {
            line.assert();
        }
        self.config.into_mute_line()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::audio::amp::MockMute;
    use platform::{ClockMode, MuteState};

    const CODEC: DeviceId = DeviceId(7);
    const OTHER: DeviceId = DeviceId(8);

    fn t(previous: BiasLevel, requested: BiasLevel) -> BiasTransition {
        BiasTransition::new(previous, requested)
    }

    fn auto_mute() -> BiasStateController<MockMute> {
        BiasStateController::new(
            CODEC,
            LinkConfig::new()
                .with_auto_mute(true)
                .with_mute_line(Some(MockMute::new())),
        )
    }

    fn line(c: &BiasStateController<MockMute>) -> &MockMute {
        c.config().mute_line().unwrap()
    }

    #[test]
    fn standby_to_prepare_unmutes_once() {
        let mut c = auto_mute();
        let action = c.set_bias_level(CODEC, t(BiasLevel::Standby, BiasLevel::Prepare));
        assert_eq!(action, Some(MuteAction::Unmute));
        assert_eq!(line(&c).deassert_count, 1);
        assert_eq!(line(&c).assert_count, 0);
        assert_eq!(line(&c).state, Some(MuteState::Unmuted));
    }

    #[test]
    fn prepare_to_standby_mutes_once() {
        let mut c = auto_mute();
        let action = c.set_bias_level(CODEC, t(BiasLevel::Prepare, BiasLevel::Standby));
        assert_eq!(action, Some(MuteAction::Mute));
        assert_eq!(line(&c).assert_count, 1);
        assert_eq!(line(&c).deassert_count, 0);
    }

    #[test]
    fn other_edges_make_no_calls() {
        let mut c = auto_mute();
        for tr in [
            t(BiasLevel::On, BiasLevel::On),
            t(BiasLevel::Off, BiasLevel::Standby),
            t(BiasLevel::Prepare, BiasLevel::On),
            t(BiasLevel::On, BiasLevel::Prepare),
            t(BiasLevel::Standby, BiasLevel::Off),
            t(BiasLevel::Prepare, BiasLevel::Prepare),
        ] {
            assert_eq!(c.set_bias_level(CODEC, tr), None);
        }
        assert_eq!(line(&c).calls(), 0);
    }

    #[test]
    fn levels_are_recorded() {
        let mut c = auto_mute();
        c.set_bias_level(CODEC, t(BiasLevel::Prepare, BiasLevel::On));
        assert_eq!(c.previous_level(), BiasLevel::Prepare);
        assert_eq!(c.level(), BiasLevel::On);
    }

    #[test]
    fn foreign_device_is_ignored_entirely() {
        let mut c = auto_mute();
        let action = c.set_bias_level(OTHER, t(BiasLevel::Standby, BiasLevel::Prepare));
        assert_eq!(action, None);
        assert_eq!(line(&c).calls(), 0);
        assert_eq!(c.level(), BiasLevel::Off);
    }

    #[test]
    fn auto_mute_disabled_is_noop() {
        let mut c = BiasStateController::new(
            CODEC,
            LinkConfig::new().with_mute_line(Some(MockMute::new())),
        );
        c.set_bias_level(CODEC, t(BiasLevel::Standby, BiasLevel::Prepare));
        c.set_bias_level(CODEC, t(BiasLevel::Prepare, BiasLevel::Standby));
        assert_eq!(line(&c).calls(), 0);
        assert_eq!(c.level(), BiasLevel::Standby);
    }

    #[test]
    fn missing_line_is_noop_with_auto_mute() {
        let mut c: BiasStateController<MockMute> =
            BiasStateController::new(CODEC, LinkConfig::new().with_auto_mute(true));
        assert_eq!(
            c.set_bias_level(CODEC, t(BiasLevel::Standby, BiasLevel::Prepare)),
            None
        );
        assert_eq!(c.startup(), None);
        assert!(c.teardown().is_none());
    }

    #[test]
    fn startup_unmutes_without_auto_mute() {
        let mut c = BiasStateController::new(
            CODEC,
            LinkConfig::new()
                .with_unmute_at_startup(true)
                .with_mute_line(Some(MockMute::new())),
        );
        assert_eq!(c.startup(), Some(MuteAction::Unmute));
        assert_eq!(line(&c).deassert_count, 1);
    }

    #[test]
    fn startup_acts_only_once() {
        let mut c = BiasStateController::new(
            CODEC,
            LinkConfig::new()
                .with_unmute_at_startup(true)
                .with_mute_line(Some(MockMute::new())),
        );
        c.startup();
        assert_eq!(c.startup(), None);
        assert_eq!(line(&c).deassert_count, 1);
    }

    #[test]
    fn startup_without_request_is_noop() {
        let mut c = auto_mute();
        assert_eq!(c.startup(), None);
        assert_eq!(line(&c).calls(), 0);
    }

    #[test]
    fn teardown_mutes_from_every_level() {
        for level in [
            BiasLevel::Off,
            BiasLevel::Standby,
            BiasLevel::Prepare,
            BiasLevel::On,
        ] {
            let mut c = auto_mute();
            c.set_bias_level(CODEC, t(BiasLevel::Standby, BiasLevel::Prepare));
            c.set_bias_level(CODEC, t(BiasLevel::Prepare, level));
            let released = c.teardown().unwrap();
            assert_eq!(released.state, Some(MuteState::Muted), "from {level:?}");
        }
    }

    #[test]
    fn teardown_mutes_even_without_auto_mute() {
        let mut c = BiasStateController::new(
            CODEC,
            LinkConfig::new()
                .with_unmute_at_startup(true)
                .with_mute_line(Some(MockMute::new())),
        );
        c.startup();
        let released = c.teardown().unwrap();
        assert!(released.is_muted());
        assert_eq!(released.assert_count, 1);
    }

    #[test]
    fn negotiate_uses_link_mode() {
        let c: BiasStateController<MockMute> = BiasStateController::new(
            CODEC,
            LinkConfig::new().with_clock_mode(ClockMode::MasterClockRatio),
        );
        assert_eq!(
            c.negotiate(StreamRequest::new(48_000, 16)).unwrap(),
            ClockResult::MasterClock { rate_hz: 24_576_000 }
        );
        assert!(c.negotiate(StreamRequest::new(0, 16)).is_err());
    }
}
