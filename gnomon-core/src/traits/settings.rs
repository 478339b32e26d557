//! Settings provider trait

use crate::config::FaceSettings;

/// Trait for the host's settings storage
///
/// Accent colour and colour mode may change over time, so the renderer asks
/// again on every tick instead of caching.
pub trait SettingsProvider {
    /// Current face settings
    fn settings(&self) -> FaceSettings;
}
