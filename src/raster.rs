//! Raster output surface backed by a tiny-skia pixmap
//!
//! Integer coordinates address pixel centers, and anti-aliasing is off, so a
//! width-1 horizontal line at `y` covers exactly pixel row `y`. Text is not
//! rasterized; labels are skipped.

use std::path::Path;

use glam::IVec2;
use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::errors::SurfaceError;
use crate::log::{debug, warn};
use crate::surface::Surface;
use crate::types::{Bounds, Color, Thickness};

/// Surface that rasterizes into an RGBA pixmap
pub struct RasterSurface {
    pixmap: Pixmap,
    color: Color,
    width: Thickness,
}

impl RasterSurface {
    /// Transparent pixmap of the given size
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::PixmapAlloc { width, height })?;
        Ok(Self {
            pixmap,
            color: Color::BLACK,
            width: Thickness::DEFAULT,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Opaque color at `(x, y)`, or `None` if out of range or never painted
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let px = self.pixmap.pixel(x, y)?.demultiply();
        if px.alpha() == 0 {
            return None;
        }
        Some(Color::rgb(px.red(), px.green(), px.blue()))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.pixmap.encode_png().map_err(|e| SurfaceError::PngEncode {
            message: e.to_string(),
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.color.r, self.color.g, self.color.b, 255);
        paint.anti_alias = false;
        paint
    }
}

fn pixel_center(p: IVec2) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

impl Surface for RasterSurface {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: Thickness) {
        self.width = width;
    }

    fn line_width(&self) -> Thickness {
        self.width
    }

    fn line(&mut self, from: IVec2, to: IVec2) {
        let mut pb = PathBuilder::new();
        let (x1, y1) = pixel_center(from);
        let (x2, y2) = pixel_center(to);
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        let Some(path) = pb.finish() else {
            warn!(?from, ?to, "degenerate segment not rasterized");
            return;
        };

        let stroke = Stroke {
            width: self.width.get() as f32,
            ..Stroke::default()
        };
        let paint = self.paint();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_rect(&mut self, rect: Bounds) {
        let Some(area) = Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        ) else {
            debug!(%rect, "empty fill skipped");
            return;
        };
        let paint = self.paint();
        self.pixmap
            .fill_rect(area, &paint, Transform::identity(), None);
    }

    fn text(&mut self, label: &str, at: IVec2) {
        debug!(label, ?at, "raster surface skips text");
    }
}
