//! Portrait canvas synthesis.
//!
//! A portrait is a transparent square canvas with a filled circle, a
//! translucent white outline, an optional centered initial (shadow pass plus
//! white pass), and an optional expression indicator dot in the top-right
//! corner.

use ab_glyph::{point, Font, FontVec, Point, PxScale};
use image::{Rgba, RgbaImage};

use crate::persona::{Expression, Persona};
use crate::render::color::adjust_color;

/// Distance between the circle and each canvas edge, in pixels.
const CIRCLE_MARGIN: u32 = 10;

/// Stroke width of the circle outline.
const BORDER_WIDTH: u32 = 3;

/// Translucent white outline. Drawn by replacing ring pixels, alpha included.
const BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);

/// Semi-transparent black for the glyph shadow pass.
const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);

/// Solid white for the glyph itself.
const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Down-right offset of the shadow pass, in pixels.
const SHADOW_OFFSET: f32 = 2.0;

/// Distance between the indicator dot and the top/right canvas edges.
const DOT_EDGE_OFFSET: u32 = 5;

/// Render one portrait for a persona/expression pair.
///
/// `size` is the square canvas edge length. With `font` absent the initial is
/// skipped and the portrait is still produced.
pub fn render_portrait(
    persona: Persona,
    expression: Expression,
    size: u32,
    font: Option<&FontVec>,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    let fill = adjust_color(persona.base_color(), expression);

    draw_disc(&mut canvas, fill);
    if let Some(font) = font {
        draw_initial(&mut canvas, font, persona.initial(), size);
    }
    if let Some(dot_color) = expression.indicator_color() {
        draw_indicator_dot(&mut canvas, dot_color, size);
    }

    canvas
}

/// Fill the inscribed circle and overwrite its outer ring with the border.
fn draw_disc(canvas: &mut RgbaImage, fill: Rgba<u8>) {
    let size = canvas.width();
    let center = size as f32 / 2.0;
    let radius = center - CIRCLE_MARGIN as f32;
    let inner = radius - BORDER_WIDTH as f32;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        // Distances are measured from pixel centers.
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist <= inner {
            *pixel = fill;
        } else if dist <= radius {
            *pixel = BORDER_COLOR;
        }
    }
}

/// Draw the centered initial: shadow pass first, then solid white on top.
fn draw_initial(canvas: &mut RgbaImage, font: &FontVec, initial: char, size: u32) {
    let scale = PxScale::from((size / 3) as f32);

    // Measure the ink box at the origin to compute centered placement.
    let probe = font
        .glyph_id(initial)
        .with_scale_and_position(scale, point(0.0, 0.0));
    let Some(outlined) = font.outline_glyph(probe) else {
        // Whitespace or a glyph missing from the font: nothing to draw.
        return;
    };
    let bounds = outlined.px_bounds();

    let origin = point(
        (size as f32 - bounds.width()) / 2.0 - bounds.min.x,
        (size as f32 - bounds.height()) / 2.0 - bounds.min.y,
    );
    let shadow_origin = point(origin.x + SHADOW_OFFSET, origin.y + SHADOW_OFFSET);

    draw_glyph(canvas, font, initial, scale, shadow_origin, SHADOW_COLOR);
    draw_glyph(canvas, font, initial, scale, origin, GLYPH_COLOR);
}

/// Rasterize one glyph at `position`, blending coverage onto the canvas.
fn draw_glyph(
    canvas: &mut RgbaImage,
    font: &FontVec,
    ch: char,
    scale: PxScale,
    position: Point,
    ink: Rgba<u8>,
) {
    let glyph = font.glyph_id(ch).with_scale_and_position(scale, position);
    let Some(outlined) = font.outline_glyph(glyph) else {
        return;
    };
    let bounds = outlined.px_bounds();
    let (width, height) = canvas.dimensions();

    outlined.draw(|gx, gy, coverage| {
        let x = bounds.min.x as i64 + i64::from(gx);
        let y = bounds.min.y as i64 + i64::from(gy);
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return;
        }
        let pixel = canvas.get_pixel_mut(x as u32, y as u32);
        blend(pixel, ink, coverage);
    });
}

/// Source-over blend of `ink` onto `pixel`, weighted by glyph coverage.
fn blend(pixel: &mut Rgba<u8>, ink: Rgba<u8>, coverage: f32) {
    let alpha = f32::from(ink[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    for i in 0..3 {
        let base = f32::from(pixel[i]);
        pixel[i] = (base + (f32::from(ink[i]) - base) * alpha).round() as u8;
    }
    let base_a = f32::from(pixel[3]);
    pixel[3] = (base_a + (255.0 - base_a) * alpha).round() as u8;
}

/// Solid indicator dot in the top-right corner, diameter `size / 10`.
fn draw_indicator_dot(canvas: &mut RgbaImage, color: Rgba<u8>, size: u32) {
    let dot = size / 10;
    let x0 = size - dot - DOT_EDGE_OFFSET;
    let y0 = DOT_EDGE_OFFSET;
    let radius = dot as f32 / 2.0;
    let cx = x0 as f32 + radius;
    let cy = y0 as f32 + radius;

    for y in y0..y0 + dot {
        for x in x0..x0 + dot {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if (dx * dx + dy * dy).sqrt() <= radius {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 200;

    // Rendered without a font so the circle center is not covered by glyph
    // ink; font presence differs across machines.
    fn render(persona: Persona, expression: Expression) -> RgbaImage {
        render_portrait(persona, expression, SIZE, None)
    }

    #[test]
    fn test_canvas_dimensions_and_transparency() {
        let img = render(Persona::Sterling, Expression::Default);
        assert_eq!(img.dimensions(), (SIZE, SIZE));
        // Corners lie outside the circle and stay fully transparent.
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(SIZE - 1, SIZE - 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_center_pixel_is_base_color_for_default() {
        for persona in Persona::all() {
            let img = render(*persona, Expression::Default);
            let [r, g, b] = persona.base_color();
            assert_eq!(
                *img.get_pixel(SIZE / 2, SIZE / 2),
                Rgba([r, g, b, 255]),
                "center fill for {}",
                persona
            );
        }
    }

    #[test]
    fn test_center_pixel_matches_adjusted_color() {
        let img = render(Persona::Sterling, Expression::Happy);
        assert_eq!(*img.get_pixel(SIZE / 2, SIZE / 2), Rgba([91, 91, 91, 255]));

        let img = render(Persona::Sparky, Expression::Surprised);
        assert_eq!(*img.get_pixel(SIZE / 2, SIZE / 2), Rgba([255, 185, 40, 255]));
    }

    #[test]
    fn test_border_ring_is_translucent_white() {
        let img = render(Persona::Kai, Expression::Default);
        // (100, 12) sits ~87.5px from the center: inside the 90px circle,
        // outside the 87px fill region.
        assert_eq!(*img.get_pixel(100, 12), Rgba([255, 255, 255, 200]));
    }

    #[test]
    fn test_indicator_dot_present_for_non_default() {
        // Dot box top-left is (175, 5) for a 200px canvas; its center pixel
        // is (185, 15).
        let cases = [
            (Expression::Happy, Rgba([0, 255, 0, 255])),
            (Expression::Disappointed, Rgba([255, 0, 0, 255])),
            (Expression::Surprised, Rgba([255, 255, 0, 255])),
        ];
        for (expression, expected) in cases {
            let img = render(Persona::Willow, expression);
            assert_eq!(*img.get_pixel(185, 15), expected, "{}", expression);
        }
    }

    #[test]
    fn test_no_indicator_dot_for_default() {
        let img = render(Persona::Willow, Expression::Default);
        // The dot area lies outside the circle; untouched means transparent.
        assert_eq!(*img.get_pixel(185, 15), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(Persona::Sparky, Expression::Happy);
        let b = render(Persona::Sparky, Expression::Happy);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_small_canvas_renders() {
        let img = render_portrait(Persona::Kai, Expression::Surprised, 64, None);
        assert_eq!(img.dimensions(), (64, 64));
        // Dot box is 6px wide at (53, 5), centered on (56, 8).
        assert_eq!(*img.get_pixel(58, 8), Rgba([255, 255, 0, 255]));
    }
}
