//! Power-mode states
//!
//! Second-hand behaviour is a function of the current mode and an event.

use super::events::PowerEvent;

/// Display power modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Normal mode, every tick may repaint freely
    #[default]
    Awake,
    /// Reduced-power mode, second hand still drawn per tick
    LowPowerActive,
    /// Reduced-power mode, second hand erased and no longer drawn
    LowPowerSuppressed,
}

impl PowerMode {
    /// Check if the display is awake
    pub fn is_awake(&self) -> bool {
        matches!(self, PowerMode::Awake)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: PowerEvent) -> Self {
        use PowerEvent::*;
        use PowerMode::*;

        match (self, event) {
            (_, ExitLowPower) => Awake,
            (Awake, EnterLowPower) => LowPowerActive,
            (LowPowerActive, TimerExpired) => LowPowerSuppressed,

            // Repeated enter edges and late timer events keep the mode
            (mode, _) => mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_wake_cycle() {
        let mode = PowerMode::Awake;
        let mode = mode.transition(PowerEvent::EnterLowPower);
        assert_eq!(mode, PowerMode::LowPowerActive);

        let mode = mode.transition(PowerEvent::TimerExpired);
        assert_eq!(mode, PowerMode::LowPowerSuppressed);

        let mode = mode.transition(PowerEvent::ExitLowPower);
        assert_eq!(mode, PowerMode::Awake);
    }

    #[test]
    fn test_timer_ignored_while_awake() {
        assert_eq!(
            PowerMode::Awake.transition(PowerEvent::TimerExpired),
            PowerMode::Awake
        );
    }

    #[test]
    fn test_repeated_enter_keeps_suppression() {
        let mode = PowerMode::LowPowerSuppressed.transition(PowerEvent::EnterLowPower);
        assert_eq!(mode, PowerMode::LowPowerSuppressed);
        assert!(!mode.is_awake());
    }

    #[test]
    fn test_wake_from_any_mode() {
        for mode in [
            PowerMode::Awake,
            PowerMode::LowPowerActive,
            PowerMode::LowPowerSuppressed,
        ] {
            assert!(mode.transition(PowerEvent::ExitLowPower).is_awake());
        }
    }
}
