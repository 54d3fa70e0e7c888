//! Default canvas geometry and axis decoration (all in screen pixels)

use crate::types::{Bounds, Color};

/// Size of the surface a default canvas is drawn onto
pub const SURFACE_WIDTH: u32 = 800;
pub const SURFACE_HEIGHT: u32 = 600;

/// Where the canvas sits on that surface
pub const CANVAS_BOUNDS: Bounds = Bounds::new(50, 100, 700, 450);

pub const BACKGROUND: Color = Color::WHITE;
pub const AXIS_COLOR: Color = Color::BLACK;

/// Pixel distance between ticks on both axes
pub const TICK_STEP: i32 = 50;
/// Half-length of a tick mark
pub const TICK_HALF: i32 = 5;
/// Label of the bottom Y tick; labels count down by one step per tick upward
pub const Y_LABEL_MAX: i32 = 550;
/// Label at the X axis origin
pub const X_LABEL_MIN: i32 = 50;
/// How far right X ticks run from the canvas origin
pub const X_TICK_EXTENT: i32 = 750;
/// Y labels sit this far left of the axis
pub const Y_LABEL_OFFSET: i32 = 30;
/// X labels sit this far below the axis
pub const X_LABEL_OFFSET: i32 = 15;

/// Thickness range offered to users when building shapes
pub const MIN_THICKNESS: i64 = 1;
pub const MAX_THICKNESS: i64 = 5;
