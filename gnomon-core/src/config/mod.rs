//! Configuration types
//!
//! Face settings and the device descriptor.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
