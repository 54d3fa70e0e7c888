//! The canvas: an ordered display list repainted in full on every refresh

use glam::ivec2;

use crate::config::CanvasConfig;
use crate::defaults::{TICK_HALF, X_LABEL_OFFSET, Y_LABEL_OFFSET};
use crate::errors::ConfigError;
use crate::log::debug;
use crate::shapes::{Draw, Shape};
use crate::surface::Surface;
use crate::types::{Bounds, Thickness};

/// Owns every shape added to it and repaints them in insertion order
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    config: CanvasConfig,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Canvas at `bounds` with default colors and axes.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            config: CanvasConfig::new(bounds),
            shapes: Vec::new(),
        }
    }

    pub fn try_with_config(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            shapes: Vec::new(),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape; it paints over everything added before it.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!(kind = shape.kind(), index = self.shapes.len(), "add shape");
        self.shapes.push(shape);
    }

    /// Repaint everything: background, axes, then every shape.
    ///
    /// Takes `&mut self` because drawing advances color-cycling pens.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        debug!(shapes = self.shapes.len(), bounds = %self.config.bounds, "repaint");
        self.draw_background(surface);
        self.draw_axes(surface);
        for shape in &mut self.shapes {
            shape.draw(surface);
        }
    }

    fn draw_background(&self, surface: &mut dyn Surface) {
        surface.set_color(self.config.background);
        surface.fill_rect(self.config.bounds);
    }

    /// Axis coordinates wrap on `i32` overflow, the same as shape vertices.
    fn draw_axes(&self, surface: &mut dyn Surface) {
        let b = self.config.bounds;
        // `new` takes the default step and `try_with_config` validates, so
        // the step is always positive here
        let step = self.config.tick_step;

        surface.set_color(self.config.axis_color);
        surface.set_line_width(Thickness::DEFAULT);
        surface.line(b.bottom_left(), b.bottom_right());
        surface.line(b.origin(), b.bottom_left());

        // Y ticks climb from the bottom edge
        for i in (0..=b.height).step_by(step as usize) {
            let label = self.config.y_label_max.wrapping_sub(i / step * step);
            let y = b.bottom().wrapping_sub(i);
            surface.text(&label.to_string(), ivec2(b.x.wrapping_sub(Y_LABEL_OFFSET), y));
            surface.line(
                ivec2(b.x.wrapping_sub(TICK_HALF), y),
                ivec2(b.x.wrapping_add(TICK_HALF), y),
            );
        }

        let label_y = b.bottom().wrapping_add(X_LABEL_OFFSET);
        let (tick_top, tick_bottom) = (
            b.bottom().wrapping_sub(TICK_HALF),
            b.bottom().wrapping_add(TICK_HALF),
        );
        for i in (0..=self.config.x_tick_extent).step_by(step as usize) {
            let label = self.config.x_label_min.wrapping_add(i / step * step);
            let x = b.x.wrapping_add(i);
            surface.text(&label.to_string(), ivec2(x, label_y));
            surface.line(ivec2(x, tick_top), ivec2(x, tick_bottom));
        }
    }
}
