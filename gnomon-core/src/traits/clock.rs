//! Clock source trait

/// Wall-clock time as read once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Day of month (1-31)
    pub day: u8,
}

impl WallTime {
    /// Create a new time
    pub const fn new(hour: u8, minute: u8, second: u8, day: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            day,
        }
    }
}

/// Trait for the host clock
///
/// Polled once per tick; the clock never pushes ticks itself.
pub trait ClockSource {
    /// Current local time
    fn now(&self) -> WallTime;
}
