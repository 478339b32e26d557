//! Display backend glue
//!
//! Error type for the tick entry points and conversions between the core's
//! integer geometry and embedded-graphics types.

use core::convert::Infallible;

use embedded_graphics::prelude::{Point as EgPoint, Size};
use embedded_graphics::primitives::Rectangle;
use gnomon_core::geometry::Point;
use gnomon_core::region::ClipRect;

/// Render errors
///
/// `E` is the error type of the host's draw target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// A tick arrived before the first layout event
    NotLaidOut,
    /// The display rejected a draw call
    Display(E),
}

impl<E> From<E> for RenderError<E> {
    fn from(e: E) -> Self {
        RenderError::Display(e)
    }
}

/// Unwrap a result from an in-memory surface
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Core point to embedded-graphics point
#[inline]
pub(crate) fn to_eg(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

/// Clip rectangle to embedded-graphics rectangle
#[inline]
pub(crate) fn to_rectangle(r: ClipRect) -> Rectangle {
    Rectangle::new(EgPoint::new(r.x, r.y), Size::new(r.width, r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error_converts() {
        fn fails() -> Result<(), RenderError<u8>> {
            Err::<(), u8>(7)?;
            Ok(())
        }
        assert_eq!(fails(), Err(RenderError::Display(7)));
    }

    #[test]
    fn test_rectangle_conversion() {
        let r = to_rectangle(ClipRect::new(-2, 3, 10, 4));
        assert_eq!(r.top_left, EgPoint::new(-2, 3));
        assert_eq!(r.size, Size::new(10, 4));
    }
}
