//! Error types with miette diagnostics
//!
//! The drawing core itself never fails. These errors live at the edges:
//! configuration, pen construction, color parsing and output surfaces.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from validating a [`CanvasConfig`](crate::config::CanvasConfig)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid canvas size: {width}x{height}")]
    #[diagnostic(
        code(shapedraw::config::invalid_size),
        help("canvas width and height must both be positive")
    )]
    InvalidSize { width: i32, height: i32 },

    #[error("tick step must be positive, got {step}")]
    #[diagnostic(code(shapedraw::config::invalid_tick_step))]
    InvalidTickStep { step: i32 },

    #[error("x tick extent must not be negative, got {extent}")]
    #[diagnostic(code(shapedraw::config::invalid_tick_extent))]
    InvalidTickExtent { extent: i32 },
}

// ============================================================================
// Pen Errors
// ============================================================================

/// Errors from building a color-cycling pen
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette is empty")]
    #[diagnostic(
        code(shapedraw::pen::empty_palette),
        help("a cycling pen needs at least one color")
    )]
    Empty,
}

/// Unknown or malformed color string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized color: {input:?}")]
#[diagnostic(
    code(shapedraw::color::unrecognized),
    help("use a color name, `#rrggbb`, or `rgb(r,g,b)`")
)]
pub struct ColorParseError {
    pub input: String,
}

// ============================================================================
// Surface Errors
// ============================================================================

/// Errors produced by output surfaces
#[derive(Error, Diagnostic, Debug)]
pub enum SurfaceError {
    #[error("cannot allocate a {width}x{height} pixmap")]
    #[diagnostic(
        code(shapedraw::surface::pixmap_alloc),
        help("both dimensions must be non-zero and fit in memory")
    )]
    PixmapAlloc { width: u32, height: u32 },

    #[error("PNG encoding failed: {message}")]
    #[diagnostic(code(shapedraw::surface::png_encode))]
    PngEncode { message: String },

    #[error("failed to write output")]
    #[diagnostic(code(shapedraw::surface::io))]
    Io(#[from] std::io::Error),
}
