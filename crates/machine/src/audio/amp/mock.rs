//! Mock mute actuator for host-side testing
//!
//! Implements [`MuteActuator`] without any hardware dependency. Records all
//! calls for assertion in tests.

use platform::MuteState;

use super::MuteActuator;

/// Mock mute line: records all calls for test assertions.
pub struct MockMute {
    /// Current logical level, `None` until the first call.
    pub state: Option<MuteState>,
    /// Total number of times [`MuteActuator::assert`] has been called.
    pub assert_count: usize,
    /// Total number of times [`MuteActuator::deassert`] has been called.
    pub deassert_count: usize,
    /// Number of calls that actually changed the level.
    pub transitions: usize,
}

impl MockMute {
    /// Create a new mock line. Starts with an unknown level.
    pub fn new() -> Self {
        Self {
            state: None,
            assert_count: 0,
            deassert_count: 0,
            transitions: 0,
        }
    }

    /// Total calls of either kind.
    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    pub fn calls(&self) -> usize {
        self.assert_count + self.deassert_count
    }

    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn set(&mut self, target: MuteState) {
        if self.state != Some(target) {
            self.state = Some(target);
            self.transitions += 1;
        }
    }
}

impl Default for MockMute {
    fn default() -> Self {
        Self::new()
    }
}

impl MuteActuator for MockMute {
    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn assert(&mut self) {
        self.assert_count += 1;
        self.set(MuteState::Muted);
    }

    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn deassert(&mut self) {
        self.deassert_count += 1;
        self.set(MuteState::Unmuted);
    }

    fn state(&self) -> Option<MuteState> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::MuteAction;

    #[test]
    fn test_initial_state() {
        let mute = MockMute::new();
        assert_eq!(mute.state(), None);
        assert!(!mute.is_muted());
        assert_eq!(mute.calls(), 0);
    }

    #[test]
    fn test_assert() {
        let mut mute = MockMute::new();
        mute.assert();
        assert!(mute.is_muted());
        assert_eq!(mute.assert_count, 1);
        assert_eq!(mute.transitions, 1);
    }

    #[test]
    fn test_repeated_assert_is_one_transition() {
        let mut mute = MockMute::new();
        mute.assert();
        mute.assert();
        assert_eq!(mute.assert_count, 2);
        assert_eq!(mute.transitions, 1);
        assert_eq!(mute.state(), Some(MuteState::Muted));
    }

    #[test]
    fn test_toggle() {
        let mut mute = MockMute::new();
        mute.deassert();
        assert_eq!(mute.state(), Some(MuteState::Unmuted));
        mute.assert();
        assert!(mute.is_muted());
        mute.deassert();
        assert_eq!(mute.transitions, 3);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut mute = MockMute::new();
        mute.apply(MuteAction::Unmute);
        assert_eq!(mute.deassert_count, 1);
        mute.apply(MuteAction::Mute);
        assert_eq!(mute.assert_count, 1);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn unmute<M: MuteActuator>(mut line: M) {
            line.deassert();
        }
        let mut mute = MockMute::new();
        unmute(&mut mute);
        assert_eq!(mute.deassert_count, 1);
    }

    #[test]
    fn test_default_matches_new() {
        let a = MockMute::new();
        let b = MockMute::default();
        assert_eq!(a.state, b.state);
        assert_eq!(a.calls(), b.calls());
        assert_eq!(a.transitions, b.transitions);
    }
}
