//! Host collaborator traits
//!
//! These traits define the interface between the renderer and the host
//! shell that owns the clock, the settings storage and the sensors.

pub mod clock;
pub mod indicator;
pub mod settings;

pub use clock::{ClockSource, WallTime};
pub use indicator::IndicatorSource;
pub use settings::SettingsProvider;
