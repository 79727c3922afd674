//! Opaque handles handed out by the owning audio framework.

/// Identity of a device taking part in bias-level callbacks.
///
/// The framework fires bias callbacks for every DAPM context on the card; a
/// controller compares this against the codec device it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(pub u32);

/// Reference to a hardware description node (e.g. the I2S controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeRef(pub u32);
