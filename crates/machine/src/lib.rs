//! IQaudIO DAC machine driver
//!
//! Control logic for a PCM512x DAC board with a GPIO-muted amplifier:
//! clock negotiation on every hw_params event, and amplifier muting that
//! follows the audio pipeline's bias level so the amp is silent except while
//! a stream is running.
//!
//! # Architecture
//!
//! ```text
//! Audio framework (register / hw_params / set_bias_level / unregister)
//!         ↓
//! Card lifecycle (card)
//!         ↓
//! Descriptor resolution (descriptor) → LinkConfig (link)
//!         ↓
//! Audio control (audio: clock_math, bias_controller, amp)
//!         ↓
//! Platform types + embedded-hal OutputPin
//! ```
//!
//! # Features
//!
//! - `tracing` - Log through `tracing` (host builds, default)
//! - `defmt` - Log through `defmt` (hardware builds)
//! - `rockchip-i2s` - Build default clock mode is master clock (fs x 512)
//! - `std` - Enable standard library
//!
//! # Example
//!
//! ```no_run
//! use machine::card::{DacCard, MockRegistry};
//! use machine::descriptor::BoardDescriptor;
//! use machine::audio::MockMute;
//! use platform::{BiasLevel, BiasTransition, DeviceId, StreamRequest};
//!
//! let codec = DeviceId(1);
//! let mut registry = MockRegistry::new(codec);
//! let board = BoardDescriptor { auto_mute_amp: true, ..BoardDescriptor::default() };
//! let mut card = DacCard::probe(&board, || Ok::<_, ()>(Some(MockMute::new())), &mut registry)
//!     .unwrap();
//!
//! card.hw_params(StreamRequest::new(48_000, 32)).unwrap();
//! card.set_bias_level(codec, BiasTransition::new(BiasLevel::Standby, BiasLevel::Prepare));
//! card.remove(&mut registry).unwrap();
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]
#![allow(clippy::doc_markdown)]

pub(crate) mod log;

pub mod audio;
pub mod card;
pub mod descriptor;
pub mod link;

// Re-export key types
pub use audio::{negotiate, BiasStateController, GpioMute, MockMute, MuteActuator};
pub use card::{CardInfo, CardRegistry, DacCard, MockRegistry, ProbeError, RegisterError};
pub use descriptor::{resolve, BoardDescriptor, ConfigError, ResolveError};
pub use link::LinkConfig;
