//! Configuration persistence
//!
//! Serializes [`DriverConfig`] with postcard so it can be stored in flash
//! (or anywhere else) and reapplied after a power cycle.

use super::types::{DriverConfig, CONFIG_VERSION};

/// Upper bound on the encoded size of a [`DriverConfig`]
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small or encoding failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Config version mismatch
    VersionMismatch,
}

impl DriverConfig {
    /// Encode into `buf`, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode a configuration written by [`DriverConfig::to_slice`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DriverConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        Ok(config)
    }
}
