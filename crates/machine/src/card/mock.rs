//! Mock card registry for host-side testing
//!
//! Implements [`CardRegistry`] without an audio framework. Outcomes are set
//! through public fields; every call is recorded.

use platform::DeviceId;

use super::{CardInfo, CardRegistry, Name, RegisterError};

/// Failure injected by [`MockRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRegistryError;

/// Mock registry: records all calls for test assertions.
pub struct MockRegistry {
    /// Codec device returned by a successful registration.
    pub codec: DeviceId,
    /// Answer `register` with [`RegisterError::Deferred`].
    pub defer: bool,
    /// Answer `register` with [`RegisterError::Failed`].
    pub fail_register: bool,
    /// Fail `unregister`.
    pub fail_unregister: bool,
    /// Fail `limit_volume`.
    pub fail_volume_limit: bool,
    /// Name of the currently registered card.
    pub registered: Option<Name>,
    /// Total number of `register` calls.
    pub register_count: usize,
    /// Total number of `unregister` calls.
    pub unregister_count: usize,
    /// Last `limit_volume` call.
    pub volume_limit: Option<(Name, u32)>,
}

impl MockRegistry {
    /// Create a registry that accepts everything and binds `codec`.
    pub fn new(codec: DeviceId) -> Self {
        Self {
            codec,
            defer: false,
            fail_register: false,
            fail_unregister: false,
            fail_volume_limit: false,
            registered: None,
            register_count: 0,
            unregister_count: 0,
            volume_limit: None,
        }
    }
}

impl CardRegistry for MockRegistry {
    type Error = MockRegistryError;

    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn register(&mut self, card: &CardInfo) -> Result<DeviceId, RegisterError<Self::Error>> {
        self.register_count += 1;
        if self.defer {
            return Err(RegisterError::Deferred);
        }
        if self.fail_register {
            return Err(RegisterError::Failed(MockRegistryError));
        }
        self.registered = Some(card.name.clone());
        Ok(self.codec)
    }

    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    fn unregister(&mut self, _card: &CardInfo) -> Result<(), Self::Error> {
        self.unregister_count += 1;
        if self.fail_unregister {
            return Err(MockRegistryError);
        }
        self.registered = None;
        Ok(())
    }

    /// Control names that do not fit in [`Name`] are rejected and not recorded.
    fn limit_volume(&mut self, control: &str, max: u32) -> Result<(), Self::Error> {
        let mut name = Name::new();
        name.push_str(control).map_err(|_| MockRegistryError)?;
        self.volume_limit = Some((name, max));
        if self.fail_volume_limit {
            Err(MockRegistryError)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use platform::config::NAME_CAPACITY;

    #[test]
    fn limit_volume_records_control() {
        let mut registry = MockRegistry::new(DeviceId(1));
        registry.limit_volume("Digital Playback Volume", 207).unwrap();
        let (name, max) = registry.volume_limit.unwrap();
        assert_eq!(name.as_str(), "Digital Playback Volume");
        assert_eq!(max, 207);
    }

    #[test]
    fn oversized_control_name_is_rejected() {
        let mut registry = MockRegistry::new(DeviceId(1));
        let long = "v".repeat(NAME_CAPACITY + 1);
        assert_eq!(registry.limit_volume(&long, 207), Err(MockRegistryError));
        assert!(registry.volume_limit.is_none());
    }
}
