// src/rendering/painter.rs
//
// Cairo drawing for the atom view. The caller hands over the frame's
// depth-sorted point list; everything here is immediate-mode painting.

use gtk4::cairo::{self, RadialGradient};
use std::f64::consts::PI;

use super::scene::{PointKind, ProjectedPoint};
use crate::config::Style;

/// Paint one frame: background, then every point far-to-near so nearer
/// objects overdraw farther ones.
pub fn draw_frame(
    cr: &cairo::Context,
    points: &[ProjectedPoint],
    nucleus_color: (f64, f64, f64),
    style: &Style,
) {
    let (bg_r, bg_g, bg_b) = style.background_color;
    cr.set_source_rgb(bg_r, bg_g, bg_b);
    cr.paint().expect("background paint failed");

    for point in points {
        match point.kind {
            PointKind::Nucleus => draw_nucleus(cr, point, nucleus_color, style),
            PointKind::Electron => draw_electron(cr, point, style),
        }
    }
}

/// Filled circle with a white-hot core fading into the category color, plus
/// a soft halo. Radius and halo extent both follow the perspective factor.
fn draw_nucleus(
    cr: &cairo::Context,
    point: &ProjectedPoint,
    color: (f64, f64, f64),
    style: &Style,
) {
    let radius = point.size * point.scale;
    let (r, g, b) = color;

    draw_glow(cr, point.x, point.y, radius, color, 0.5 * style.glow_strength);

    let gradient = RadialGradient::new(point.x, point.y, 0.0, point.x, point.y, radius);
    gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    gradient.add_color_stop_rgb(0.35, r + (1.0 - r) * 0.4, g + (1.0 - g) * 0.4, b + (1.0 - b) * 0.4);
    gradient.add_color_stop_rgb(1.0, r, g, b);

    cr.set_source(&gradient).expect("nucleus gradient");
    cr.arc(point.x, point.y, radius, 0.0, 2.0 * PI);
    cr.fill().expect("nucleus fill failed");
}

fn draw_electron(cr: &cairo::Context, point: &ProjectedPoint, style: &Style) {
    let radius = point.size * point.scale;
    let color = style.electron_color;

    draw_glow(cr, point.x, point.y, radius, color, 0.35 * style.glow_strength);

    let (r, g, b) = color;
    cr.set_source_rgb(r, g, b);
    cr.arc(point.x, point.y, radius, 0.0, 2.0 * PI);
    cr.fill().expect("electron fill failed");
}

/// Soft glow halo: a radial gradient from the body edge out to 2.5 radii,
/// fading to transparent. Cairo has no shadow blur, so the halo is painted
/// as its own translucent disc under the body.
fn draw_glow(
    cr: &cairo::Context,
    x: f64,
    y: f64,
    radius: f64,
    color: (f64, f64, f64),
    alpha: f64,
) {
    if alpha <= 0.0 {
        return;
    }
    let extent = radius * 2.5;
    let (r, g, b) = color;

    let gradient = RadialGradient::new(x, y, radius * 0.5, x, y, extent);
    gradient.add_color_stop_rgba(0.0, r, g, b, alpha);
    gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);

    cr.set_source(&gradient).expect("glow gradient");
    cr.arc(x, y, extent, 0.0, 2.0 * PI);
    cr.fill().expect("glow fill failed");
}
