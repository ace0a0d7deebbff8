// src/rendering/export.rs

use gtk4::cairo;

use super::painter;
use super::scene::AtomScene;
use crate::config::Style;

/// Render the scene's current frame (no advance) to an image file.
/// PNG by default, PDF when `format_pdf` is set.
pub fn export_image(
    scene: &AtomScene,
    nucleus_color: (f64, f64, f64),
    style: &Style,
    path: &str,
    size: i32,
    format_pdf: bool,
) -> Result<(), String> {
    let points = scene.project(size as f64, size as f64);

    if format_pdf {
        let surface = cairo::PdfSurface::new(size as f64, size as f64, path)
            .map_err(|e| e.to_string())?;
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        painter::draw_frame(&cr, &points, nucleus_color, style);
        surface.finish();
    } else {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)
            .map_err(|e| e.to_string())?;
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        painter::draw_frame(&cr, &points, nucleus_color, style);
        drop(cr);

        let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
        surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    }
    Ok(())
}
