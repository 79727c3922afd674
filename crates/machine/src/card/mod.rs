//! Sound card lifecycle: probe, per-stream and per-bias callbacks, remove.
//!
//! The owning audio framework is reached through [`CardRegistry`]; this
//! module only decides *when* to call it.
//!
//! ## Probe order
//! ```text
//! resolve descriptor ─> register card ─> build controller ─> link init ─> startup unmute
//!                          │                                 (volume cap)
//!                          └─ Deferred: return quietly, framework retries later
//! ```
//!
//! ## Remove order
//! ```text
//! teardown (forced mute) ─> unregister card
//! ```

pub mod mock;

pub use mock::MockRegistry;

use core::fmt::Debug;

use platform::config::{CODEC_DAI, CODEC_DEVICE, DEFAULT_CPU_DAI, NAME_CAPACITY};
use platform::{
    BiasTransition, ClockResult, DeviceId, FormatError, MuteAction, NodeRef, StreamRequest,
};
use thiserror::Error;

use crate::audio::amp::MuteActuator;
use crate::audio::bias_controller::BiasStateController;
use crate::descriptor::{resolve, BoardDescriptor, ConfigError, ResolveError};
use crate::log;

/// Bounded name string for card and DAI identities.
pub type Name = heapless::String<NAME_CAPACITY>;

// ── Link identity ────────────────────────────────────────────────────────────

/// How a DAI link endpoint is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// By registered component name.
    Named(&'static str),
    /// By hardware description node.
    Node(NodeRef),
}

impl Endpoint {
    /// The built-in BCM2708 I2S controller.
    pub const fn default_cpu() -> Self {
        Self::Named(DEFAULT_CPU_DAI)
    }
}

/// Serial audio format of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaiFormat {
    /// Frame layout.
    pub protocol: DaiProtocol,
    /// Bit clock inverted.
    pub bit_clock_inverted: bool,
    /// Frame clock inverted.
    pub frame_clock_inverted: bool,
    /// Codec consumes BCLK/LRCLK from the CPU side.
    pub codec_is_clock_consumer: bool,
}

/// Frame layout on the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaiProtocol {
    /// Philips I2S.
    I2s,
}

impl DaiFormat {
    /// I2S, normal bit and frame clocks, CPU provides the clocks.
    pub const I2S_CPU_PROVIDER: Self = Self {
        protocol: DaiProtocol::I2s,
        bit_clock_inverted: false,
        frame_clock_inverted: false,
        codec_is_clock_consumer: true,
    };
}

/// The card's single CPU-to-codec link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaiLink {
    /// Link name.
    pub name: Name,
    /// Stream name.
    pub stream_name: Name,
    /// CPU DAI.
    pub cpu: Endpoint,
    /// PCM platform.
    pub platform: Endpoint,
    /// Codec DAI name.
    pub codec_dai: &'static str,
    /// Codec device name.
    pub codec: &'static str,
    /// Wire format.
    pub format: DaiFormat,
}

impl DaiLink {
    /// Link to the PCM512x codec with the given names and CPU side.
    pub fn new(name: Name, stream_name: Name, cpu: Endpoint, platform: Endpoint) -> Self {
        Self {
            name,
            stream_name,
            cpu,
            platform,
            codec_dai: CODEC_DAI,
            codec: CODEC_DEVICE,
            format: DaiFormat::I2S_CPU_PROVIDER,
        }
    }
}

/// Mixer control capped at link init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeLimit {
    /// Control name.
    pub control: &'static str,
    /// Highest register value allowed.
    pub max: u32,
}

/// Everything the framework needs to register the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// Card name.
    pub name: Name,
    /// The card's DAI link.
    pub link: DaiLink,
    /// Volume cap applied at link init, if any.
    pub volume_limit: Option<VolumeLimit>,
}

// ── Framework seam ───────────────────────────────────────────────────────────

/// Registration outcome other than success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError<E> {
    /// A dependency is not ready; the framework will probe again later.
    Deferred,
    /// Registration failed for good.
    Failed(E),
}

/// The audio framework that owns registered cards.
pub trait CardRegistry {
    /// Error type returned by registry operations.
    type Error: Debug;

    /// Register `card`, returning the device identity of its bound codec.
    fn register(&mut self, card: &CardInfo) -> Result<DeviceId, RegisterError<Self::Error>>;

    /// Unregister `card`.
    fn unregister(&mut self, card: &CardInfo) -> Result<(), Self::Error>;

    /// Cap mixer `control` at `max`.
    fn limit_volume(&mut self, control: &str, max: u32) -> Result<(), Self::Error>;
}

/// Probe failure.
#[derive(Debug, Error)]
pub enum ProbeError<R: Debug, E: Debug> {
    /// Descriptor contents are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The mute line was requested but could not be acquired.
    #[error("failed to get mute line")]
    MuteLine(E),
    /// Registration deferred; probe again later.
    #[error("card registration deferred")]
    Deferred,
    /// Registration failed.
    #[error("card registration failed")]
    Register(R),
}

impl<R: Debug, E: Debug> From<ResolveError<E>> for ProbeError<R, E> {
    fn from(err: ResolveError<E>) -> Self {
        match err {
            ResolveError::Config(e) => Self::Config(e),
            ResolveError::MuteLine(e) => Self::MuteLine(e),
        }
    }
}

// ── Card ─────────────────────────────────────────────────────────────────────

/// A registered IQaudIO DAC card.
///
/// Call [`remove`](Self::remove) to take the card down. Dropping a `DacCard`
/// without it neither mutes the amplifier nor unregisters the card: the mute
/// line keeps its last level.
pub struct DacCard<M> {
    info: CardInfo,
    controller: BiasStateController<M>,
}

impl<M: MuteActuator> DacCard<M> {
    /// Resolve `descriptor`, register the card and run link init.
    ///
    /// On success the one-shot startup unmute has already happened if the
    /// descriptor asked for it.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::Config`] / [`ProbeError::MuteLine`] from resolution.
    /// - [`ProbeError::Deferred`] if the registry defers; not logged.
    /// - [`ProbeError::Register`] for any other registration failure.
    pub fn probe<R, E, F>(
        descriptor: &BoardDescriptor<'_>,
        acquire_mute: F,
        registry: &mut R,
    ) -> Result<Self, ProbeError<R::Error, E>>
    where
        R: CardRegistry,
        E: Debug,
        F: FnOnce() -> Result<Option<M>, E>,
    {
        let board = resolve(descriptor, acquire_mute)?;

        let codec = match registry.register(&board.card) {
            Ok(codec) => codec,
            Err(RegisterError::Deferred) => return Err(ProbeError::Deferred),
            Err(RegisterError::Failed(e)) => {
                log::error!("card registration failed");
                return Err(ProbeError::Register(e));
            }
        };

        let mut card = Self {
            info: board.card,
            controller: BiasStateController::new(codec, board.link),
        };
        card.init_link(registry);
        card.controller.startup();
        Ok(card)
    }

    fn init_link<R: CardRegistry>(&self, registry: &mut R) {
        if let Some(limit) = self.info.volume_limit {
            if registry.limit_volume(limit.control, limit.max).is_err() {
                log::warning!("failed to set volume limit on {}", limit.control);
            }
        }
    }

    /// Registered identity.
    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    /// The link's bias controller.
    pub fn controller(&self) -> &BiasStateController<M> {
        &self.controller
    }

    /// Stream parameters are being set.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedFormat`]; the caller aborts the operation.
    pub fn hw_params(&self, request: StreamRequest) -> Result<ClockResult, FormatError> {
        self.controller.negotiate(request)
    }

    /// A bias level changed somewhere on the card.
    pub fn set_bias_level(
        &mut self,
        device: DeviceId,
        transition: BiasTransition,
    ) -> Option<MuteAction> {
        self.controller.set_bias_level(device, transition)
    }

    /// Mute the amplifier, then unregister.
    ///
    /// The mute happens even if unregistering fails; the mute line is
    /// released either way.
    ///
    /// # Errors
    ///
    /// The registry's unregister error.
    pub fn remove<R: CardRegistry>(self, registry: &mut R) -> Result<(), R::Error> {
        let Self { info, controller } = self;
        drop(controller.teardown());
        registry.unregister(&info)
    }
}
