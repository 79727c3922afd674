//! Board descriptor resolution.
//!
//! The hardware description arrives as a bag of optional properties. It is
//! resolved exactly once, before any controller exists, into the card
//! identity registered with the framework ([`CardInfo`]) and the link
//! configuration the controller owns ([`LinkConfig`]). Nothing downstream
//! asks whether a property was present; it only sees resolved values.
//!
//! | Property                    | Field               | Absent                  |
//! |-----------------------------|---------------------|-------------------------|
//! | `i2s-controller`            | `i2s_controller`    | `bcm2708-i2s.0` by name |
//! | `iqaudio,24db_digital_gain` | `digital_gain_24db` | volume capped at 0 dB   |
//! | `card_name`                 | `card_name`         | `IQaudIODAC`            |
//! | `dai_name`                  | `dai_name`          | `IQaudIO DAC`           |
//! | `dai_stream_name`           | `dai_stream_name`   | `IQaudIO DAC HiFi`      |
//! | `iqaudio-dac,unmute-amp`    | `unmute_amp`        | no startup unmute       |
//! | `iqaudio-dac,auto-mute-amp` | `auto_mute_amp`     | no bias-driven muting   |

use core::fmt::Debug;

use platform::config::{
    DEFAULT_CARD_NAME, DEFAULT_DAI_NAME, DEFAULT_STREAM_NAME, DIGITAL_VOLUME_0DB,
    DIGITAL_VOLUME_CONTROL, NAME_CAPACITY,
};
use platform::{ClockMode, NodeRef};
use thiserror::Error;

use crate::card::{CardInfo, DaiLink, Endpoint, Name, VolumeLimit};
use crate::link::LinkConfig;
use crate::log;

/// Optional properties read from the board's hardware description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardDescriptor<'a> {
    /// I2S controller node; replaces the named CPU DAI and platform.
    pub i2s_controller: Option<NodeRef>,
    /// Allow the codec's full +24 dB digital gain.
    pub digital_gain_24db: bool,
    /// Card name override.
    pub card_name: Option<&'a str>,
    /// DAI link name override.
    pub dai_name: Option<&'a str>,
    /// DAI stream name override.
    pub dai_stream_name: Option<&'a str>,
    /// Unmute the amplifier once after registration.
    pub unmute_amp: bool,
    /// Mute/unmute the amplifier with the stream.
    pub auto_mute_amp: bool,
    /// Clock mode override; the build default applies when absent.
    pub clock_mode: Option<ClockMode>,
}

/// Invalid descriptor contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A name property does not fit in [`NAME_CAPACITY`] bytes.
    #[error("{field} is longer than {max} bytes")]
    NameTooLong {
        /// Property that overflowed.
        field: &'static str,
        /// Capacity in bytes.
        max: usize,
    },
}

/// Descriptor resolution failure.
#[derive(Debug, Error)]
pub enum ResolveError<E: Debug> {
    /// Descriptor contents are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The mute line was requested but could not be acquired.
    #[error("failed to get mute line")]
    MuteLine(E),
}

/// Output of [`resolve`].
pub struct ResolvedBoard<M> {
    /// Card identity to register.
    pub card: CardInfo,
    /// Configuration for the link's controller.
    pub link: LinkConfig<M>,
}

/// Resolve `descriptor` into card identity and link configuration.
///
/// `acquire_mute` is called only when the descriptor asks for startup unmute
/// or auto-mute. `Ok(None)` from it means the optional line is not wired,
/// which is not an error: both behaviours then become no-ops.
///
/// # Errors
///
/// - [`ResolveError::Config`] for names that do not fit.
/// - [`ResolveError::MuteLine`] if `acquire_mute` fails. Not retried.
pub fn resolve<M, E, F>(
    descriptor: &BoardDescriptor<'_>,
    acquire_mute: F,
) -> Result<ResolvedBoard<M>, ResolveError<E>>
where
    E: Debug,
    F: FnOnce() -> Result<Option<M>, E>,
{
    let card = card_info(descriptor)?;

    let mute_line = if descriptor.unmute_amp || descriptor.auto_mute_amp {
        match acquire_mute() {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to get mute line");
                return Err(ResolveError::MuteLine(e));
            }
        }
    } else {
        None
    };

    let mut link = LinkConfig::new()
        .with_auto_mute(descriptor.auto_mute_amp)
        .with_unmute_at_startup(descriptor.unmute_amp)
        .with_mute_line(mute_line);
    if let Some(mode) = descriptor.clock_mode {
        link = link.with_clock_mode(mode);
    }

    Ok(ResolvedBoard { card, link })
}

fn card_info(descriptor: &BoardDescriptor<'_>) -> Result<CardInfo, ConfigError> {
    let (cpu, platform) = match descriptor.i2s_controller {
        Some(node) => (Endpoint::Node(node), Endpoint::Node(node)),
        None => (Endpoint::default_cpu(), Endpoint::default_cpu()),
    };

    let volume_limit = if descriptor.digital_gain_24db {
        None
    } else {
        Some(VolumeLimit {
            control: DIGITAL_VOLUME_CONTROL,
            max: DIGITAL_VOLUME_0DB,
        })
    };

    Ok(CardInfo {
        name: name("card_name", descriptor.card_name, DEFAULT_CARD_NAME)?,
        link: DaiLink::new(
            name("dai_name", descriptor.dai_name, DEFAULT_DAI_NAME)?,
            name(
                "dai_stream_name",
                descriptor.dai_stream_name,
                DEFAULT_STREAM_NAME,
            )?,
            cpu,
            platform,
        ),
        volume_limit,
    })
}

fn name(field: &'static str, value: Option<&str>, default: &str) -> Result<Name, ConfigError> {
    let mut out = Name::new();
    out.push_str(value.unwrap_or(default))
        .map_err(|_| ConfigError::NameTooLong {
            field,
            max: NAME_CAPACITY,
        })?;
    Ok(out)
}
