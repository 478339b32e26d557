//! Last-drawn-minute guard

/// Remembers which minute was last fully drawn
///
/// `None` means the next full redraw must happen regardless of the time.
/// A full redraw is skipped only when `Some(m)` equals the current minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RedrawGuard {
    last_minute: Option<u8>,
}

impl RedrawGuard {
    /// Create an invalidated guard
    pub const fn new() -> Self {
        Self { last_minute: None }
    }

    /// Check if a full redraw is needed for `minute`
    pub fn needs_full_redraw(&self, minute: u8) -> bool {
        self.last_minute != Some(minute)
    }

    /// Record that `minute` has been fully drawn
    pub fn mark_drawn(&mut self, minute: u8) {
        self.last_minute = Some(minute);
    }

    /// Force the next full redraw
    pub fn invalidate(&mut self) {
        self.last_minute = None;
    }

    /// Minute last drawn, if any
    pub fn last_minute(&self) -> Option<u8> {
        self.last_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_guard_redraws() {
        let guard = RedrawGuard::new();
        assert!(guard.needs_full_redraw(0));
        assert!(guard.needs_full_redraw(59));
    }

    #[test]
    fn test_same_minute_skipped() {
        let mut guard = RedrawGuard::new();
        guard.mark_drawn(17);
        assert!(!guard.needs_full_redraw(17));
        assert!(guard.needs_full_redraw(18));
    }

    #[test]
    fn test_invalidate() {
        let mut guard = RedrawGuard::new();
        guard.mark_drawn(5);
        guard.invalidate();
        assert_eq!(guard.last_minute(), None);
        assert!(guard.needs_full_redraw(5));
    }
}
