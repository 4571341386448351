//! Configuration types and presets
//!
//! - `base`: the unified [`Config`] with its [`SinkConfig`] sub-section
//! - `presets`: development / production profiles and environment lookup

mod base;
mod presets;

pub use base::{Config, Encoding, Environment, SinkConfig};
pub use presets::ENV_PREFIX;
