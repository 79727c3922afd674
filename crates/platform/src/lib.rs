//! Domain types for the IQaudIO DAC amplifier control
//!
//! This crate holds the vocabulary shared between the machine driver and the
//! audio framework that calls it. It has no hardware dependencies and builds
//! `no_std`.
//!
//! # Architecture Layers
//!
//! ```text
//! Audio framework (hw_params / bias-level callbacks)
//!         ↓
//! Machine driver (machine crate - negotiation, mute control)
//!         ↓
//! Platform types (this crate)
//! ```
//!
//! # Modules
//!
//! - [`audio_types`] - Stream requests, clock modes and results
//! - [`bias`] - Bias levels and the mute decision table
//! - [`gpio`] - Mute line polarity and logical/electrical levels
//! - [`device`] - Framework device and node handles
//! - [`config`] - Board identity constants
//!
//! # Features
//!
//! - `defmt`: Enable `defmt::Format` derives on all types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod audio_types;
pub mod bias;
pub mod config;
pub mod device;
pub mod gpio;

pub use audio_types::{ClockMode, ClockResult, FormatError, StreamRequest};
pub use bias::{BiasLevel, BiasTransition, MuteAction};
pub use device::{DeviceId, NodeRef};
pub use gpio::{MuteState, PinState, Polarity};
