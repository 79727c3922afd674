//! Board identity and fixed link constants
//!
//! Everything that names the board, the driver, or the hard-wired codec link
//! lives here. Descriptor-supplied names override the `DEFAULT_*` values.

/// Device-tree compatible string the driver binds to.
pub const COMPATIBLE: &str = "iqaudio,iqaudio-dac";

/// Platform driver name.
pub const DRIVER_NAME: &str = "snd-rpi-iqaudio-dac";

/// Card name used when the descriptor has none.
pub const DEFAULT_CARD_NAME: &str = "IQaudIODAC";

/// DAI link name used when the descriptor has none.
pub const DEFAULT_DAI_NAME: &str = "IQaudIO DAC";

/// DAI stream name used when the descriptor has none.
pub const DEFAULT_STREAM_NAME: &str = "IQaudIO DAC HiFi";

/// CPU DAI and platform name when no I2S controller node is given.
pub const DEFAULT_CPU_DAI: &str = "bcm2708-i2s.0";

/// Codec DAI on the PCM512x.
pub const CODEC_DAI: &str = "pcm512x-hifi";

/// PCM512x codec device (I2C bus 6, address 0x4c).
pub const CODEC_DEVICE: &str = "pcm512x.6-004c";

/// Mixer control capped at link init.
pub const DIGITAL_VOLUME_CONTROL: &str = "Digital Playback Volume";

/// Register value of 0 dB on the PCM512x digital volume.
///
/// Values above this add up to +24 dB of digital gain.
pub const DIGITAL_VOLUME_0DB: u32 = 207;

/// Capacity of card/DAI/stream name strings.
pub const NAME_CAPACITY: usize = 32;
