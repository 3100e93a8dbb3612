//! Configuration types
//!
//! Driver settings that can be kept on the host and applied in one go,
//! stored as postcard binary data when the `serde` feature is enabled.

#[cfg(feature = "serde")]
pub mod persist;
pub mod types;

#[cfg(feature = "serde")]
pub use persist::{ConfigError, MAX_CONFIG_SIZE};
pub use types::*;
