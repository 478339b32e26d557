//! Events that trigger power-mode transitions

/// Power-mode events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    /// Host switched the display to its reduced-power mode
    EnterLowPower,
    /// Host woke the display (wrist gesture, button)
    ExitLowPower,
    /// Second-hand countdown ran out under a hiding policy
    TimerExpired,
}
