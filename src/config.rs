//! Canvas configuration

use crate::defaults;
use crate::errors::ConfigError;
use crate::types::{Bounds, Color};

/// Colors and axis decoration for a canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Screen rectangle the canvas paints into
    pub bounds: Bounds,
    pub background: Color,
    pub axis_color: Color,
    /// Pixel distance between ticks (both axes)
    pub tick_step: i32,
    /// Label of the bottom-most Y tick
    pub y_label_max: i32,
    /// Label of the left-most X tick
    pub x_label_min: i32,
    /// How far right X ticks run, measured from the canvas origin
    pub x_tick_extent: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            bounds: defaults::CANVAS_BOUNDS,
            background: defaults::BACKGROUND,
            axis_color: defaults::AXIS_COLOR,
            tick_step: defaults::TICK_STEP,
            y_label_max: defaults::Y_LABEL_MAX,
            x_label_min: defaults::X_LABEL_MIN,
            x_tick_extent: defaults::X_TICK_EXTENT,
        }
    }
}

impl CanvasConfig {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    pub fn with_tick_step(mut self, step: i32) -> Self {
        self.tick_step = step;
        self
    }

    pub fn with_labels(mut self, y_label_max: i32, x_label_min: i32) -> Self {
        self.y_label_max = y_label_max;
        self.x_label_min = x_label_min;
        self
    }

    pub fn with_x_tick_extent(mut self, extent: i32) -> Self {
        self.x_tick_extent = extent;
        self
    }

    /// Reject configurations that would make the axis loops meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.width <= 0 || self.bounds.height <= 0 {
            return Err(ConfigError::InvalidSize {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if self.tick_step <= 0 {
            return Err(ConfigError::InvalidTickStep {
                step: self.tick_step,
            });
        }
        if self.x_tick_extent < 0 {
            return Err(ConfigError::InvalidTickExtent {
                extent: self.x_tick_extent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(CanvasConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_bounds() {
        let config = CanvasConfig::new(Bounds::new(0, 0, 0, 10));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn rejects_zero_tick_step() {
        let config = CanvasConfig::default().with_tick_step(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTickStep { step: 0 })
        );
    }

    #[test]
    fn rejects_negative_extent() {
        let config = CanvasConfig::default().with_x_tick_extent(-1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTickExtent { extent: -1 })
        );
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = CanvasConfig::default()
            .with_background(Color::GRAY)
            .with_labels(10, 20);
        assert_eq!(config.background, Color::GRAY);
        assert_eq!(config.axis_color, defaults::AXIS_COLOR);
        assert_eq!((config.y_label_max, config.x_label_min), (10, 20));
    }
}
