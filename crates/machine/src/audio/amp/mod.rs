//! Amplifier mute line control
//!
//! Concrete actuators:
//! - `gpio_mute` - mute line on any `embedded_hal::digital::OutputPin`
//! - `mock` - In-process mock for host tests (always available)

pub mod gpio_mute;
pub mod mock;

pub use gpio_mute::GpioMute;
pub use mock::MockMute;

use platform::{MuteAction, MuteState};

/// Amplifier mute actuator.
///
/// Drives one binary line. Both operations are idempotent: repeating the
/// current level performs no further hardware write. They may block while
/// the line is written, so callers must be in a context that can sleep.
///
/// Neither operation reports failure. A line write that fails is logged by
/// the implementation; the audio pipeline must keep moving regardless.
pub trait MuteActuator {
    /// Drive the line to the muted level.
    fn assert(&mut self);

    /// Drive the line to the unmuted level.
    fn deassert(&mut self);

    /// Last level successfully written. `None` until the first write lands
    /// and again after any failed write.
    fn state(&self) -> Option<MuteState>;

    /// Apply `action`.
    fn apply(&mut self, action: MuteAction) {
        match action {
            MuteAction::Mute => self.assert(),
            MuteAction::Unmute => self.deassert(),
        }
    }

    /// Returns `true` if the line is known to be at the muted level.
    fn is_muted(&self) -> bool {
        self.state() == Some(MuteState::Muted)
    }
}

impl<M: MuteActuator + ?Sized> MuteActuator for &mut M {
    fn assert(&mut self) {
        (**self).assert();
    }

    fn deassert(&mut self) {
        (**self).deassert();
    }

    fn state(&self) -> Option<MuteState> {
        (**self).state()
    }
}
