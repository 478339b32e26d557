//! Indicator source trait

/// Trait for health/activity readouts shown on the face
pub trait IndicatorSource {
    /// Latest pulse rate in beats per minute, if a reading is available
    fn pulse_rate(&self) -> Option<u16>;
}
