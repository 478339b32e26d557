//! Redraw regions
//!
//! Axis-aligned clip rectangles and the calculator that derives the minimal
//! rectangle covering a second hand (polygon plus tip circle).

pub mod dirty;
pub mod rect;

pub use dirty::{BoundsMode, DirtyRegionCalculator, CLIP_MARGIN};
pub use rect::{Bounds, ClipRect};
