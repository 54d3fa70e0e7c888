//! A retained-mode 2D drawing model.
//!
//! Shapes ([`Line`], [`Rectangle`], [`Circle`]) are bound to a pen
//! ([`SolidPen`] or [`ColorCyclingPen`]) and appended to a [`Canvas`]. Every
//! repaint redraws the background, the coordinate axes and then each shape in
//! insertion order onto any [`Surface`].
//!
//! ```
//! use shapedraw::{Canvas, Color, Line, Recorder, SolidPen};
//!
//! let mut canvas = Canvas::default();
//! canvas.add_shape(Line::new(SolidPen::new(Color::BLACK), 0, 0, 10, 0));
//!
//! let mut surface = Recorder::new();
//! canvas.draw(&mut surface);
//! assert_eq!(surface.segments().last().map(|s| s.to.x), Some(10));
//! ```

pub mod canvas;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod form;
pub mod log;
pub mod pen;
pub mod random;
pub mod raster;
pub mod shapes;
pub mod surface;
pub mod svg_surface;
pub mod types;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use errors::{ColorParseError, ConfigError, PaletteError, SurfaceError};
pub use pen::{ColorCyclingPen, DrawingPen, Pen, SolidPen};
pub use raster::RasterSurface;
pub use shapes::{CIRCLE_SEGMENTS, Circle, Draw, Line, Rectangle, Shape};
pub use surface::{DrawOp, Recorder, Segment, Surface};
pub use svg_surface::SvgSurface;
pub use types::{Bounds, Color, Thickness};

/// Repaint `canvas` onto a fresh SVG document of the default surface size
pub fn render_svg(canvas: &mut Canvas) -> String {
    let mut surface = SvgSurface::new(defaults::SURFACE_WIDTH, defaults::SURFACE_HEIGHT);
    canvas.draw(&mut surface);
    surface.finish()
}

/// Repaint `canvas` onto a fresh pixmap of the default surface size
pub fn render_raster(canvas: &mut Canvas) -> Result<RasterSurface, SurfaceError> {
    let mut surface = RasterSurface::new(defaults::SURFACE_WIDTH, defaults::SURFACE_HEIGHT)?;
    canvas.draw(&mut surface);
    Ok(surface)
}
