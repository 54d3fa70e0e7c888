//! Shape construction from raw user input
//!
//! Input dialogs hand over free-form text for every numeric field and a
//! slider value for thickness. Nothing here can fail: text that does not start
//! with a number reads as 0, and the slider is rounded and clamped.

use crate::defaults::{MAX_THICKNESS, MIN_THICKNESS};
use crate::pen::ColorCyclingPen;
use crate::shapes::{Circle, Line, Rectangle, Shape};
use crate::types::Thickness;

/// Parse the leading integer of `text` the way C's `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is read. Anything else yields 0. Values that
/// do not fit saturate at the `i32` limits.
pub fn parse_field(text: &str) -> i32 {
    let rest = text.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Round a slider position to the nearest whole thickness within range
pub fn thickness_from_slider(value: f64) -> Thickness {
    if value.is_nan() {
        return Thickness::new(MIN_THICKNESS);
    }
    let rounded = value.round().clamp(MIN_THICKNESS as f64, MAX_THICKNESS as f64);
    Thickness::new(rounded as i64)
}

fn cycling_pen(slider: f64) -> ColorCyclingPen {
    ColorCyclingPen::new().with_thickness(thickness_from_slider(slider))
}

/// Fields of the line dialog
#[derive(Debug, Clone, Default)]
pub struct LineForm {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub thickness: f64,
}

impl LineForm {
    pub fn submit(&self) -> Shape {
        Line::new(
            cycling_pen(self.thickness),
            parse_field(&self.x1),
            parse_field(&self.y1),
            parse_field(&self.x2),
            parse_field(&self.y2),
        )
        .into()
    }
}

/// Fields of the rectangle dialog
#[derive(Debug, Clone, Default)]
pub struct RectangleForm {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub thickness: f64,
}

impl RectangleForm {
    pub fn submit(&self) -> Shape {
        Rectangle::new(
            cycling_pen(self.thickness),
            parse_field(&self.x),
            parse_field(&self.y),
            parse_field(&self.width),
            parse_field(&self.height),
        )
        .into()
    }
}

/// Fields of the circle dialog
#[derive(Debug, Clone, Default)]
pub struct CircleForm {
    pub cx: String,
    pub cy: String,
    pub radius: String,
    pub thickness: f64,
}

impl CircleForm {
    pub fn submit(&self) -> Shape {
        Circle::new(
            cycling_pen(self.thickness),
            parse_field(&self.cx),
            parse_field(&self.cy),
            parse_field(&self.radius),
        )
        .into()
    }
}
