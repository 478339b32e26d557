//! Face painter
//!
//! Draws the face element by element onto any `DrawTarget<Color = Rgb565>`.
//! A full frame is painted in this order:
//!
//! 1. background fill
//! 2. tick marks
//! 3. date
//! 4. indicators
//! 5. second-hand shadow
//! 6. hour and minute hands
//! 7. second hand
//!
//! Strategies split the sequence across surfaces but never reorder it, so a
//! composited or buffered frame matches a direct repaint pixel for pixel.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use gnomon_core::geometry::{HandAngle, Point as CorePoint, Quad, ShapeKind};
use gnomon_core::precompute::RenderRecord;
use gnomon_core::region::ClipRect;
use gnomon_core::traits::WallTime;
use heapless::String;

use crate::backend::{to_eg, to_rectangle};
use crate::context::RenderContext;
use crate::layout::{FaceLayout, INDICATOR_CHARS};
use crate::palette::Palette;

/// Shown when no pulse reading is available
const NO_READING: &str = "--";

/// Largest value the indicator can show
const INDICATOR_MAX: u16 = 999;

/// Paint a complete frame
///
/// `second` is the second hand to draw, if visible; `shadow` the shadow
/// offset, if the effect is active.
pub fn paint_face<D>(
    target: &mut D,
    layout: &FaceLayout,
    palette: &Palette,
    ctx: &RenderContext,
    second: Option<&RenderRecord>,
    shadow: Option<i32>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    paint_background(target, layout, palette, ctx)?;
    if let (Some(record), Some(offset)) = (second, shadow) {
        paint_second_shadow(target, layout, record, offset, palette.shadow)?;
    }
    paint_hour_minute(target, layout, palette, &ctx.time)?;
    if let Some(record) = second {
        paint_second(target, layout, record, palette.second)?;
    }
    Ok(())
}

/// Background fill, ticks, date and indicators
pub fn paint_background<D>(
    target: &mut D,
    layout: &FaceLayout,
    palette: &Palette,
    ctx: &RenderContext,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(palette.background)?;
    paint_ticks(target, layout, palette)?;
    paint_date(target, layout, palette, ctx.time.day)?;
    paint_indicators(target, layout, palette, ctx.pulse_rate)
}

/// 60 tick marks, a big one every five
pub fn paint_ticks<D>(target: &mut D, layout: &FaceLayout, palette: &Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let big = layout.geometry().get(ShapeKind::BigTick);
    let small = layout.geometry().get(ShapeKind::SmallTick);
    for i in 0..60u8 {
        let shape = if i % 5 == 0 { big } else { small };
        let quad = layout.rotator().rotate(shape, HandAngle::Tick(i));
        fill_quad(target, &quad, palette.ticks)?;
    }
    Ok(())
}

/// Day of month towards 3 o'clock
pub fn paint_date<D>(
    target: &mut D,
    layout: &FaceLayout,
    palette: &Palette,
    day: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut text: String<4> = String::new();
    let _ = write!(text, "{}", day);
    draw_centered(target, &text, layout.date_anchor(), palette.text)
}

/// Pulse-rate readout
///
/// Fills its whole box first so it can be repainted in place.
pub fn paint_indicators<D>(
    target: &mut D,
    layout: &FaceLayout,
    palette: &Palette,
    pulse_rate: Option<u16>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&to_rectangle(layout.indicator_area()), palette.background)?;

    let mut text: String<{ INDICATOR_CHARS as usize }> = String::new();
    match pulse_rate {
        Some(bpm) => {
            let _ = write!(text, "{}", bpm.min(INDICATOR_MAX));
        }
        None => {
            let _ = text.push_str(NO_READING);
        }
    }
    draw_centered(target, &text, layout.indicator_anchor(), palette.text)
}

/// Hour and minute hands
pub fn paint_hour_minute<D>(
    target: &mut D,
    layout: &FaceLayout,
    palette: &Palette,
    time: &WallTime,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let rotator = layout.rotator();
    let geometry = layout.geometry();

    let hour = rotator.rotate(
        geometry.get(ShapeKind::HourHand),
        HandAngle::hour(time.hour, time.minute),
    );
    fill_quad(target, &hour, palette.hands)?;

    let minute = rotator.rotate(
        geometry.get(ShapeKind::MinuteHand),
        HandAngle::minute(time.minute),
    );
    fill_quad(target, &minute, palette.hands)
}

/// Second-hand polygon and tip circle
pub fn paint_second<D>(
    target: &mut D,
    layout: &FaceLayout,
    record: &RenderRecord,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_quad(target, &record.corners, color)?;
    fill_circle(
        target,
        record.circle_center,
        layout.geometry().second_circle_radius(),
        color,
    )
}

/// Second hand displaced by `offset` on both axes
pub fn paint_second_shadow<D>(
    target: &mut D,
    layout: &FaceLayout,
    record: &RenderRecord,
    offset: i32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let by = CorePoint::new(offset, offset);
    let corners = record.corners.map(|c| c.offset(by));
    fill_quad(target, &corners, color)?;
    fill_circle(
        target,
        record.circle_center.offset(by),
        layout.geometry().second_circle_radius(),
        color,
    )
}

/// Clip rectangle of a second-hand shadow
pub fn shadow_clip(record: &RenderRecord, offset: i32) -> ClipRect {
    record.clip.translate(CorePoint::new(offset, offset))
}

/// Fill a trapezoid as two triangles sharing the 0-2 diagonal
fn fill_quad<D>(target: &mut D, quad: &Quad, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(color);
    let [a, b, c, d] = quad.map(to_eg);
    Triangle::new(a, b, c).into_styled(style).draw(target)?;
    Triangle::new(a, c, d).into_styled(style).draw(target)
}

fn fill_circle<D>(target: &mut D, center: CorePoint, radius: i32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(to_eg(center), (2 * radius + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

fn draw_centered<D>(target: &mut D, text: &str, at: CorePoint, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(text, to_eg(at), MonoTextStyle::new(&FONT_6X10, color), style)
        .draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::infallible;
    use crate::surface::Framebuffer;
    use gnomon_core::config::{DeviceDescriptor, FaceSettings};
    use proptest::prelude::*;

    const BLANK: Rgb565 = Rgb565::BLACK;

    fn layout() -> FaceLayout {
        FaceLayout::new(&DeviceDescriptor::round(240))
    }

    fn ctx(second: u8) -> RenderContext {
        RenderContext::new(
            WallTime::new(10, 8, second, 19),
            FaceSettings::default(),
            Some(72),
        )
    }

    fn frame(layout: &FaceLayout, second: u8) -> Framebuffer {
        let palette = Palette::resolve(&FaceSettings::default(), false);
        let record = layout.second_record(second);
        let mut fb = Framebuffer::new(layout.width(), layout.height(), BLANK);
        infallible(paint_face(&mut fb, layout, &palette, &ctx(second), Some(&record), None));
        fb
    }

    #[test]
    fn test_second_hand_stays_inside_its_clip() {
        let layout = layout();
        for s in 0..60u8 {
            let record = layout.second_record(s);
            let mut fb = Framebuffer::new(layout.width(), layout.height(), BLANK);
            infallible(paint_second(&mut fb, &layout, &record, Rgb565::WHITE));

            let blank = Framebuffer::new(layout.width(), layout.height(), BLANK);
            let mut touched = 0;
            for p in fb.diff(&blank) {
                assert!(
                    record.clip.contains(CorePoint::new(p.x, p.y)),
                    "second {s}: pixel {:?} outside {:?}",
                    p,
                    record.clip
                );
                touched += 1;
            }
            assert!(touched > 0);
        }
    }

    #[test]
    fn test_consecutive_seconds_differ_only_inside_union() {
        let layout = layout();
        let frames: alloc::vec::Vec<Framebuffer> = (0..60u8).map(|s| frame(&layout, s)).collect();
        for s in 0..60u8 {
            let next = (s + 1) % 60;
            let union = layout
                .second_record(s)
                .clip
                .union(&layout.second_record(next).clip);
            for p in frames[s as usize].diff(&frames[next as usize]) {
                assert!(
                    union.contains(CorePoint::new(p.x, p.y)),
                    "{s}->{next}: pixel {:?} outside {:?}",
                    p,
                    union
                );
            }
        }
    }

    #[test]
    fn test_full_paint_is_idempotent() {
        let layout = layout();
        let a = frame(&layout, 42);
        let b = frame(&layout, 42);
        assert_eq!(a, b);

        // Repainting over an existing frame lands on the same pixels
        let mut again = a.clone();
        let palette = Palette::resolve(&FaceSettings::default(), false);
        let record = layout.second_record(42);
        infallible(paint_face(&mut again, &layout, &palette, &ctx(42), Some(&record), None));
        assert_eq!(again, b);
    }

    #[test]
    fn test_shadow_inside_translated_clip() {
        let layout = layout();
        let record = layout.second_record(13);
        let mut fb = Framebuffer::new(layout.width(), layout.height(), BLANK);
        infallible(paint_second_shadow(&mut fb, &layout, &record, 4, Rgb565::WHITE));

        let clip = shadow_clip(&record, 4);
        let blank = Framebuffer::new(layout.width(), layout.height(), BLANK);
        assert!(fb.diff(&blank).all(|p| clip.contains(CorePoint::new(p.x, p.y))));
    }

    #[test]
    fn test_indicator_repaint_in_place() {
        let layout = layout();
        let palette = Palette::resolve(&FaceSettings::default(), false);
        let mut fb = Framebuffer::new(layout.width(), layout.height(), BLANK);
        infallible(paint_background(&mut fb, &layout, &palette, &ctx(0)));
        let before = fb.clone();

        infallible(paint_indicators(&mut fb, &layout, &palette, Some(1234)));
        let area = layout.indicator_area();
        assert!(fb.diff(&before).all(|p| area.contains(CorePoint::new(p.x, p.y))));
        assert_ne!(fb, before);

        infallible(paint_indicators(&mut fb, &layout, &palette, Some(72)));
        assert_eq!(fb, before);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_rasterised_hand_inside_clip(
            width in 64u32..320,
            height in 64u32..320,
            round in any::<bool>(),
            second in 0u8..60,
        ) {
            let device = if round {
                DeviceDescriptor::round(width)
            } else {
                DeviceDescriptor::rectangular(width, height)
            };
            let layout = FaceLayout::new(&device);
            let record = layout.second_record(second);

            let mut fb = Framebuffer::new(layout.width(), layout.height(), BLANK);
            infallible(paint_second(&mut fb, &layout, &record, Rgb565::WHITE));
            let blank = Framebuffer::new(layout.width(), layout.height(), BLANK);
            for p in fb.diff(&blank) {
                prop_assert!(record.clip.contains(CorePoint::new(p.x, p.y)));
            }
        }
    }
}
