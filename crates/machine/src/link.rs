//! Resolved per-link configuration.

use platform::ClockMode;

use crate::audio::clock_math::BUILD_CLOCK_MODE;

/// Immutable configuration of one audio link.
///
/// Built once before the controller exists (see
/// [`crate::descriptor::resolve`]) and owned by it afterwards. There are no
/// setters on a built value: the `with_*` methods consume and are meant for
/// construction only.
pub struct LinkConfig<M> {
    clock_mode: ClockMode,
    auto_mute: bool,
    unmute_at_startup: bool,
    mute_line: Option<M>,
}

impl<M> LinkConfig<M> {
    /// Configuration with the build's clock mode, no mute line and both mute
    /// behaviours off.
    pub fn new() -> Self {
        Self {
            clock_mode: BUILD_CLOCK_MODE,
            auto_mute: false,
            unmute_at_startup: false,
            mute_line: None,
        }
    }

    /// Use `mode` for clock negotiation.
    pub fn with_clock_mode(mut self, mode: ClockMode) -> Self {
        self.clock_mode = mode;
        self
    }

    /// Mute/unmute with the Standby/Prepare bias edge.
    pub fn with_auto_mute(mut self, enabled: bool) -> Self {
        self.auto_mute = enabled;
        self
    }

    /// Unmute once right after the card registers.
    pub fn with_unmute_at_startup(mut self, enabled: bool) -> Self {
        self.unmute_at_startup = enabled;
        self
    }

    /// Attach the amplifier mute line, if one is wired.
    pub fn with_mute_line(mut self, line: Option<M>) -> Self {
        self.mute_line = line;
        self
    }

    /// Clock mode used by this link.
    pub fn clock_mode(&self) -> ClockMode {
        self.clock_mode
    }

    /// Whether bias transitions drive the mute line.
    pub fn auto_mute(&self) -> bool {
        self.auto_mute
    }

    /// Whether a one-shot unmute follows registration.
    pub fn unmute_at_startup(&self) -> bool {
        self.unmute_at_startup
    }

    /// The mute line, if wired.
    pub fn mute_line(&self) -> Option<&M> {
        self.mute_line.as_ref()
    }

    pub(crate) fn mute_line_mut(&mut self) -> Option<&mut M> {
        self.mute_line.as_mut()
    }

    pub(crate) fn into_mute_line(self) -> Option<M> {
        self.mute_line
    }
}

impl<M> Default for LinkConfig<M> {
    fn default() -> Self {
        Self::new()
    }
}
