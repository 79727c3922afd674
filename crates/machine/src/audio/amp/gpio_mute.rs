//! GPIO-backed amplifier mute line
//!
//! Uses `embedded_hal::digital::OutputPin` (v1.0). The write is blocking;
//! on expander-backed GPIOs (I2C/SPI) it sleeps for a bus transaction.

use embedded_hal::digital::OutputPin;
use platform::{MuteState, PinState, Polarity};

use crate::audio::amp::MuteActuator;
use crate::log;

/// Amplifier mute line on a GPIO output.
///
/// Holds ownership of the pin and caches the last level written, so repeated
/// `assert()`/`deassert()` calls cost nothing.
pub struct GpioMute<P: OutputPin> {
    pin: P,
    polarity: Polarity,
    state: Option<MuteState>,
}

impl<P: OutputPin> GpioMute<P> {
    /// Take ownership of `pin` with the default [`Polarity::ActiveLow`] wiring.
    ///
    /// The line is driven to the muted level immediately.
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveLow)
    }

    /// Take ownership of `pin` wired with `polarity`.
    ///
    /// The line is driven to the muted level immediately. If that write
    /// fails the cached level stays unknown and the next call retries.
    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        let mut this = Self {
            pin,
            polarity,
            state: None,
        };
        this.drive(MuteState::Muted);
        this
    }

    /// Wiring polarity of this line.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Give the pin back.
    ///
    /// The line keeps whatever level was last written.
    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, target: MuteState) {
        if self.state == Some(target) {
            log::debug!("mute line already at requested level, skipping write");
            return;
        }
        let result = match self.polarity.pin_state(target) {
            PinState::High => self.pin.set_high(),
            PinState::Low => self.pin.set_low(),
        };
        match result {
            Ok(()) => self.state = Some(target),
            Err(_) => {
                // The level may have landed anyway; force the next call to write.
                self.state = None;
                log::warning!("mute line write failed, amplifier level unknown");
            }
        }
    }
}

impl<P: OutputPin> MuteActuator for GpioMute<P> {
    fn assert(&mut self) {
        log::info!("muting amp using mute line");
        self.drive(MuteState::Muted);
    }

    fn deassert(&mut self) {
        log::info!("un-muting amp using mute line");
        self.drive(MuteState::Unmuted);
    }

    fn state(&self) -> Option<MuteState> {
        self.state
    }
}
