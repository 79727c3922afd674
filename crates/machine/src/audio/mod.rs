//! Audio control plane: clock negotiation and amplifier muting
//!
//! # Structure
//!
//! - `clock_math` - hw_params clock negotiation
//! - `amp/` - Amplifier mute line (`GpioMute` hardware, `MockMute` for tests)
//! - `bias_controller` - Bias-level state machine driving the mute line
//!
//! # Dependency Injection
//!
//! The controller is generic over [`amp::MuteActuator`]. Concrete lines are
//! injected at the call site:
//!
//! ```rust,ignore
//! // Hardware:
//! BiasStateController::new(codec, LinkConfig::new().with_mute_line(Some(GpioMute::new(pin))));
//! // Tests:
//! BiasStateController::new(codec, LinkConfig::new().with_mute_line(Some(MockMute::new())));
//! ```

pub mod amp;
pub mod bias_controller;
pub mod clock_math;

pub use amp::{GpioMute, MockMute, MuteActuator};
pub use bias_controller::BiasStateController;
pub use clock_math::negotiate;
