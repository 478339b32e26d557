//! In-memory drawing surfaces
//!
//! `Framebuffer` is the off-screen bitmap used by the buffered strategy and
//! the pixel oracle in tests. `Layer` is a transparent surface; a
//! `LayerStack` composites four of them in fixed order, standing in for a
//! host compositor.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use gnomon_core::region::ClipRect;

use crate::backend::to_rectangle;

/// Full-colour off-screen bitmap
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Framebuffer[{}x{}]", self.width, self.height)
    }
}

impl Framebuffer {
    /// Create a framebuffer filled with one colour
    pub fn new(width: u32, height: u32, fill: Rgb565) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at a pixel, `None` when off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        index_of(self.width, self.height, x, y).map(|i| self.pixels[i])
    }

    /// Copy the pixels under `area` to another target
    ///
    /// The area is clamped to the framebuffer first; nothing is sent when it
    /// lies fully off-screen.
    pub fn blit<D>(&self, area: ClipRect, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(area) = area.clamp_to_screen(self.width, self.height) else {
            return Ok(());
        };
        let stride = self.width as usize;
        let pixels: &[Rgb565] = &self.pixels;
        let colors = (area.y..area.bottom()).flat_map(move |y| {
            let row = y as usize * stride;
            pixels[row + area.x as usize..row + area.right() as usize]
                .iter()
                .copied()
        });
        target.fill_contiguous(&to_rectangle(area), colors)
    }

    /// Copy the whole framebuffer to another target
    pub fn blit_all<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.blit(ClipRect::screen(self.width, self.height), target)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[{}x{}]", self.width, self.height);
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = index_of(self.width, self.height, p.x, p.y) {
                self.pixels[i] = c;
            }
        }
        Ok(())
    }
}

/// Transparent drawing surface
#[derive(Clone, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb565>>,
}

impl core::fmt::Debug for Layer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Layer[{}x{}]", self.width, self.height)
    }
}

impl Layer {
    /// Create a fully transparent layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width * height) as usize],
        }
    }

    /// Colour at a pixel, `None` when transparent or off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        index_of(self.width, self.height, x, y).and_then(|i| self.pixels[i])
    }

    /// Make the whole layer transparent
    pub fn erase_all(&mut self) {
        self.pixels.fill(None);
    }

    /// Make a region transparent
    pub fn erase(&mut self, area: ClipRect) {
        let Some(area) = area.clamp_to_screen(self.width, self.height) else {
            return;
        };
        let stride = self.width as usize;
        for y in area.y..area.bottom() {
            let row = y as usize * stride;
            self.pixels[row + area.x as usize..row + area.right() as usize].fill(None);
        }
    }

    /// Check if any pixel is drawn
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(Option::is_none)
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Rgb565> {
        self.pixels[index]
    }
}

impl OriginDimensions for Layer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Layer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = index_of(self.width, self.height, p.x, p.y) {
                self.pixels[i] = Some(c);
            }
        }
        Ok(())
    }
}

/// Four layers composited bottom to top
#[derive(Debug, Clone)]
pub struct LayerStack {
    /// Face, ticks, date and indicators
    pub background: Layer,
    /// Second-hand shadow
    pub shadow: Layer,
    /// Hour and minute hands
    pub hands: Layer,
    /// Second hand
    pub seconds: Layer,
}

impl LayerStack {
    /// Create an empty stack
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            background: Layer::new(width, height),
            shadow: Layer::new(width, height),
            hands: Layer::new(width, height),
            seconds: Layer::new(width, height),
        }
    }

    /// Size shared by every layer
    pub fn size(&self) -> Size {
        self.background.size()
    }

    /// Merge the layers under `area` and send the result to `target`
    pub fn composite<D>(&self, area: ClipRect, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = self.size();
        let Some(area) = area.clamp_to_screen(size.width, size.height) else {
            return Ok(());
        };
        let stride = size.width as usize;
        let colors = (area.y..area.bottom()).flat_map(move |y| {
            (area.x..area.right()).map(move |x| {
                let i = y as usize * stride + x as usize;
                self.seconds
                    .at(i)
                    .or_else(|| self.hands.at(i))
                    .or_else(|| self.shadow.at(i))
                    .or_else(|| self.background.at(i))
                    .unwrap_or(Rgb565::BLACK)
            })
        });
        target.fill_contiguous(&to_rectangle(area), colors)
    }
}

#[inline]
fn index_of(width: u32, height: u32, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        None
    } else {
        Some(y as usize * width as usize + x as usize)
    }
}

#[cfg(test)]
impl Framebuffer {
    /// Pixels where two framebuffers differ
    pub(crate) fn diff<'a>(&'a self, other: &'a Framebuffer) -> impl Iterator<Item = Point> + 'a {
        let width = self.width as usize;
        self.pixels
            .iter()
            .zip(other.pixels.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::infallible;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_draw_and_read_back() {
        let mut fb = Framebuffer::new(8, 8, Rgb565::BLACK);
        infallible(
            Rectangle::new(Point::new(2, 2), Size::new(3, 3))
                .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
                .draw(&mut fb),
        );
        assert_eq!(fb.pixel(2, 2), Some(Rgb565::RED));
        assert_eq!(fb.pixel(4, 4), Some(Rgb565::RED));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(-1, 0), None);
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_blit_region_only() {
        let src = Framebuffer::new(10, 10, Rgb565::GREEN);
        let mut dst = Framebuffer::new(10, 10, Rgb565::BLACK);
        infallible(src.blit(ClipRect::new(-3, 8, 5, 5), &mut dst));

        let changed: Vec<Point> = dst.diff(&Framebuffer::new(10, 10, Rgb565::BLACK)).collect();
        // Clamped to columns 0..2 and rows 8..10
        assert_eq!(changed.len(), 4);
        assert!(changed.iter().all(|p| p.x < 2 && p.y >= 8));
    }

    #[test]
    fn test_blit_off_screen_is_noop() {
        let src = Framebuffer::new(4, 4, Rgb565::GREEN);
        let mut dst = Framebuffer::new(4, 4, Rgb565::BLACK);
        infallible(src.blit(ClipRect::new(10, 10, 3, 3), &mut dst));
        assert_eq!(dst, Framebuffer::new(4, 4, Rgb565::BLACK));

        infallible(src.blit_all(&mut dst));
        assert_eq!(dst, src);
    }

    #[test]
    fn test_layer_erase() {
        let mut layer = Layer::new(6, 6);
        assert!(layer.is_blank());
        infallible(layer.clear(Rgb565::BLUE));
        layer.erase(ClipRect::new(1, 1, 2, 2));
        assert_eq!(layer.pixel(1, 1), None);
        assert_eq!(layer.pixel(2, 2), None);
        assert_eq!(layer.pixel(3, 3), Some(Rgb565::BLUE));

        layer.erase_all();
        assert!(layer.is_blank());
    }

    #[test]
    fn test_composite_order() {
        let mut stack = LayerStack::new(4, 1);
        infallible(stack.background.clear(Rgb565::WHITE));
        infallible(Pixel(Point::new(1, 0), Rgb565::CSS_GRAY).draw(&mut stack.shadow));
        infallible(Pixel(Point::new(2, 0), Rgb565::CSS_GRAY).draw(&mut stack.shadow));
        infallible(Pixel(Point::new(2, 0), Rgb565::BLUE).draw(&mut stack.hands));
        infallible(Pixel(Point::new(3, 0), Rgb565::BLUE).draw(&mut stack.hands));
        infallible(Pixel(Point::new(3, 0), Rgb565::RED).draw(&mut stack.seconds));

        let mut out = Framebuffer::new(4, 1, Rgb565::BLACK);
        infallible(stack.composite(ClipRect::screen(4, 1), &mut out));
        assert_eq!(out.pixel(0, 0), Some(Rgb565::WHITE));
        assert_eq!(out.pixel(1, 0), Some(Rgb565::CSS_GRAY));
        assert_eq!(out.pixel(2, 0), Some(Rgb565::BLUE));
        assert_eq!(out.pixel(3, 0), Some(Rgb565::RED));
    }
}
