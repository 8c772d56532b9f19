//! Expression color transforms.

use image::Rgba;

use crate::persona::Expression;

/// Adjust a persona base color for an expression, returning the opaque fill
/// color of the portrait circle.
///
/// Brightening and darkening truncate toward zero, matching the original
/// asset set. The surprised tint saturates at 255 on every channel; an 8-bit
/// channel cannot carry the excess.
pub fn adjust_color(base: [u8; 3], expression: Expression) -> Rgba<u8> {
    let [r, g, b] = base;
    let (r, g, b) = match expression {
        Expression::Default => (r, g, b),
        Expression::Happy => (scale(r, 1.3), scale(g, 1.3), scale(b, 1.3)),
        Expression::Disappointed => (scale(r, 0.7), scale(g, 0.7), scale(b, 0.7)),
        Expression::Surprised => (
            r.saturating_add(20),
            g.saturating_add(20),
            b.saturating_add(40),
        ),
    };
    Rgba([r, g, b, 255])
}

/// Multiply a channel by `factor`, truncating to an integer.
fn scale(channel: u8, factor: f64) -> u8 {
    // Float-to-int `as` casts truncate toward zero and saturate at the
    // target type's bounds, so 1.3x results above 255 clamp here.
    (f64::from(channel) * factor) as u8
}
