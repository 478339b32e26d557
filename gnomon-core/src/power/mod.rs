//! Power-mode state machine
//!
//! Tracks awake/low-power transitions, the countdown before the second hand
//! is hidden in low power, and the one-way latch that disables per-second
//! drawing after the host reports a blown execution budget.

pub mod controller;
pub mod events;
pub mod guard;
pub mod machine;

pub use controller::{PowerModeController, PowerState, SecondHandAction, SECOND_HAND_TIMER};
pub use events::PowerEvent;
pub use guard::RedrawGuard;
pub use machine::PowerMode;
