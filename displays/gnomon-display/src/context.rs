//! Per-tick render context
//!
//! Everything a tick needs from the host, gathered once and passed by
//! reference into every entry point. There is no global configuration state.

use gnomon_core::config::FaceSettings;
use gnomon_core::traits::{ClockSource, IndicatorSource, SettingsProvider, WallTime};

/// Inputs for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderContext {
    pub time: WallTime,
    pub settings: FaceSettings,
    /// Latest pulse rate, if the sensor has one
    pub pulse_rate: Option<u16>,
}

impl RenderContext {
    /// Create a context from explicit values
    pub const fn new(time: WallTime, settings: FaceSettings, pulse_rate: Option<u16>) -> Self {
        Self {
            time,
            settings,
            pulse_rate,
        }
    }

    /// Poll the host collaborators
    pub fn gather<C, S, I>(clock: &C, settings: &S, indicators: &I) -> Self
    where
        C: ClockSource,
        S: SettingsProvider,
        I: IndicatorSource,
    {
        Self {
            time: clock.now(),
            settings: settings.settings(),
            pulse_rate: indicators.pulse_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use gnomon_core::config::HideSeconds;

    struct FakeClock(Cell<u8>);

    impl ClockSource for FakeClock {
        fn now(&self) -> WallTime {
            let s = self.0.get();
            self.0.set((s + 1) % 60);
            WallTime::new(10, 8, s, 19)
        }
    }

    struct FixedSettings(FaceSettings);

    impl SettingsProvider for FixedSettings {
        fn settings(&self) -> FaceSettings {
            self.0
        }
    }

    struct NoSensor;

    impl IndicatorSource for NoSensor {
        fn pulse_rate(&self) -> Option<u16> {
            None
        }
    }

    #[test]
    fn test_gather_polls_each_source() {
        let clock = FakeClock(Cell::new(58));
        let settings = FixedSettings(FaceSettings {
            hide_seconds: HideSeconds::Never,
            ..Default::default()
        });

        let first = RenderContext::gather(&clock, &settings, &NoSensor);
        let second = RenderContext::gather(&clock, &settings, &NoSensor);
        let third = RenderContext::gather(&clock, &settings, &NoSensor);

        assert_eq!(first.time.second, 58);
        assert_eq!(second.time.second, 59);
        assert_eq!(third.time.second, 0);
        assert_eq!(first.settings.hide_seconds, HideSeconds::Never);
        assert_eq!(first.pulse_rate, None);
    }
}
