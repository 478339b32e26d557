//! 60-entry sine lookup
//!
//! Second and minute positions only ever land on sixtieths of a turn, so a
//! single table of 60 sines replaces every transcendental call on the
//! per-second path. Cosine reuses the same table a quarter turn ahead.

use core::f32::consts::TAU;

/// Positions per full turn of the dial
pub const TICKS_PER_TURN: usize = 60;

/// Quarter turn in ticks: `cos(a) = sin(a + 15/60 turn)`
pub const QUARTER_TURN: usize = TICKS_PER_TURN / 4;

/// Sine values for every sixtieth of a turn
#[derive(Debug, Clone, PartialEq)]
pub struct SineTable {
    values: [f32; TICKS_PER_TURN],
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SineTable {
    /// Build the table
    pub fn new() -> Self {
        Self {
            values: core::array::from_fn(|i| {
                libm::sinf(i as f32 * TAU / TICKS_PER_TURN as f32)
            }),
        }
    }

    /// Sine of `index` sixtieths of a turn (index must be 0-59)
    #[inline]
    pub fn sin(&self, index: u8) -> f32 {
        self.values[index as usize]
    }

    /// Cosine of `index` sixtieths of a turn (index must be 0-59)
    #[inline]
    pub fn cos(&self, index: u8) -> f32 {
        self.values[(index as usize + QUARTER_TURN) % TICKS_PER_TURN]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::round_px;

    #[test]
    fn test_cardinal_points() {
        let table = SineTable::new();
        assert_eq!(table.sin(0), 0.0);
        assert!((table.sin(15) - 1.0).abs() < 1e-6);
        assert!((table.cos(0) - 1.0).abs() < 1e-6);
        assert!((table.cos(30) + 1.0).abs() < 1e-6);
        assert!(table.sin(30).abs() < 1e-6);
        assert!((table.sin(45) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_matches_libm_within_rounding() {
        // Scaled to a 150 px radius, table values must round to the same
        // pixel as a direct evaluation (within one pixel).
        let table = SineTable::new();
        for s in 0..60u8 {
            let angle = s as f32 * TAU / 60.0;
            let direct_sin = round_px(150.0 * libm::sinf(angle));
            let direct_cos = round_px(150.0 * libm::cosf(angle));
            assert!((round_px(150.0 * table.sin(s)) - direct_sin).abs() <= 1);
            assert!((round_px(150.0 * table.cos(s)) - direct_cos).abs() <= 1);
        }
    }

    #[test]
    fn test_pythagorean_identity() {
        let table = SineTable::new();
        for s in 0..60u8 {
            let sum = table.sin(s) * table.sin(s) + table.cos(s) * table.cos(s);
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_hits_table_bounds() {
        let table = SineTable::new();
        let _ = table.sin(60);
    }
}
