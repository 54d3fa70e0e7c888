//! Pens: stroke color and thickness
//!
//! The pen set is closed ([`SolidPen`] and [`ColorCyclingPen`]), so [`Pen`] is
//! an enum dispatched through [`DrawingPen`] rather than a trait object.

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::errors::PaletteError;
use crate::log::trace;
use crate::surface::Surface;
use crate::types::{Color, Thickness};

/// Colors a [`ColorCyclingPen`] walks through by default
pub const DEFAULT_PALETTE: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Behavior shared by every pen
#[enum_dispatch]
pub trait DrawingPen {
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn thickness(&self) -> Thickness;

    fn set_thickness(&mut self, thickness: Thickness);

    /// Draw one straight segment, leaving the surface line width at its default
    fn stroke(&mut self, surface: &mut dyn Surface, from: IVec2, to: IVec2);
}

/// Any pen a shape can be bound to
#[enum_dispatch(DrawingPen)]
#[derive(Debug, Clone, PartialEq)]
pub enum Pen {
    Solid(SolidPen),
    Cycling(ColorCyclingPen),
}

impl Default for Pen {
    fn default() -> Self {
        Pen::Solid(SolidPen::default())
    }
}

/// Fixed color, fixed thickness
#[derive(Debug, Clone, PartialEq)]
pub struct SolidPen {
    color: Color,
    thickness: Thickness,
}

impl SolidPen {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            thickness: Thickness::DEFAULT,
        }
    }

    pub fn with_thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }
}

impl Default for SolidPen {
    fn default() -> Self {
        SolidPen::new(Color::BLACK)
    }
}

impl DrawingPen for SolidPen {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn thickness(&self) -> Thickness {
        self.thickness
    }

    fn set_thickness(&mut self, thickness: Thickness) {
        self.thickness = thickness;
    }

    fn stroke(&mut self, surface: &mut dyn Surface, from: IVec2, to: IVec2) {
        trace!(?from, ?to, color = %self.color, width = self.thickness.get(), "stroke");
        surface.set_color(self.color);
        surface.set_line_width(self.thickness);
        surface.line(from, to);
        surface.set_line_width(Thickness::DEFAULT);
    }
}

/// Pen that changes color on every segment it draws
///
/// The cursor belongs to the pen, not the shape or the repaint: a circle's
/// 100 chords rotate through the palette, and the next repaint continues
/// from wherever the last one stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCyclingPen {
    base: SolidPen,
    palette: Vec<Color>,
    cursor: usize,
}

impl ColorCyclingPen {
    /// Red, green, blue; starts on red with thickness 1.
    pub fn new() -> Self {
        Self {
            base: SolidPen::new(DEFAULT_PALETTE[0]),
            palette: DEFAULT_PALETTE.to_vec(),
            cursor: 0,
        }
    }

    pub fn with_palette(palette: Vec<Color>) -> Result<Self, PaletteError> {
        let first = *palette.first().ok_or(PaletteError::Empty)?;
        Ok(Self {
            base: SolidPen::new(first),
            palette,
            cursor: 0,
        })
    }

    pub fn with_thickness(mut self, thickness: Thickness) -> Self {
        self.base.thickness = thickness;
        self
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Index of the color the next stroke will use
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for ColorCyclingPen {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingPen for ColorCyclingPen {
    fn color(&self) -> Color {
        self.base.color
    }

    fn set_color(&mut self, color: Color) {
        self.base.color = color;
    }

    fn thickness(&self) -> Thickness {
        self.base.thickness
    }

    fn set_thickness(&mut self, thickness: Thickness) {
        self.base.thickness = thickness;
    }

    fn stroke(&mut self, surface: &mut dyn Surface, from: IVec2, to: IVec2) {
        self.base.color = self.palette[self.cursor];
        self.base.stroke(surface, from, to);
        self.cursor = (self.cursor + 1) % self.palette.len();
    }
}
