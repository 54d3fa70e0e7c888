//! Drawing surfaces
//!
//! A [`Surface`] is an immediate-mode drawing context with shared style state:
//! the current color and the current line width stay in effect until someone
//! changes them. Pens and the canvas only ever talk to this trait, so the same
//! repaint can target the in-memory [`Recorder`], SVG, or a raster pixmap.

use std::fmt;

use glam::IVec2;

use crate::types::{Bounds, Color, Thickness};

/// Immediate-mode drawing context
pub trait Surface {
    /// Set the color used by subsequent fills, lines and text
    fn set_color(&mut self, color: Color);

    /// Set the width used by subsequent lines
    fn set_line_width(&mut self, width: Thickness);

    /// Current line width
    fn line_width(&self) -> Thickness;

    /// Draw a straight segment with the current color and width
    fn line(&mut self, from: IVec2, to: IVec2);

    /// Fill an axis-aligned rectangle with the current color
    fn fill_rect(&mut self, rect: Bounds);

    /// Draw a text label with its baseline starting at `at`
    fn text(&mut self, label: &str, at: IVec2);
}

/// One recorded drawing operation, with the style that was in effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Fill {
        rect: Bounds,
        color: Color,
    },
    Line {
        from: IVec2,
        to: IVec2,
        color: Color,
        width: Thickness,
    },
    Text {
        label: String,
        at: IVec2,
        color: Color,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Fill { rect, color } => write!(f, "fill {rect} {color}"),
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => write!(
                f,
                "line ({},{})-({},{}) {color} w{width}",
                from.x, from.y, to.x, to.y
            ),
            DrawOp::Text { label, at, color } => {
                write!(f, "text {label:?} at ({},{}) {color}", at.x, at.y)
            }
        }
    }
}

/// A segment as seen by whoever stroked it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: IVec2,
    pub to: IVec2,
    pub color: Color,
    pub width: Thickness,
}

/// Surface that keeps every operation in a display list
#[derive(Debug, Clone)]
pub struct Recorder {
    ops: Vec<DrawOp>,
    color: Color,
    width: Thickness,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            color: Color::BLACK,
            width: Thickness::DEFAULT,
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Current color state
    pub fn color(&self) -> Color {
        self.color
    }

    /// Only the line operations, in draw order
    pub fn segments(&self) -> Vec<Segment> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Line {
                    from,
                    to,
                    color,
                    width,
                } => Some(Segment {
                    from,
                    to,
                    color,
                    width,
                }),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded operations but keep the style state
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// One operation per line, for snapshots and debugging
    pub fn listing(&self) -> String {
        self.ops
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for Recorder {
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
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: self.color,
            width: self.width,
        });
    }

    fn fill_rect(&mut self, rect: Bounds) {
        self.ops.push(DrawOp::Fill {
            rect,
            color: self.color,
        });
    }

    fn text(&mut self, label: &str, at: IVec2) {
        self.ops.push(DrawOp::Text {
            label: label.to_string(),
            at,
            color: self.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    #[test]
    fn recorder_captures_style_per_op() {
        let mut rec = Recorder::new();
        rec.set_color(Color::RED);
        rec.set_line_width(Thickness::new(4));
        rec.line(ivec2(0, 0), ivec2(10, 0));
        rec.set_color(Color::BLUE);
        rec.text("hi", ivec2(1, 2));

        assert_eq!(
            rec.ops(),
            &[
                DrawOp::Line {
                    from: ivec2(0, 0),
                    to: ivec2(10, 0),
                    color: Color::RED,
                    width: Thickness::new(4),
                },
                DrawOp::Text {
                    label: "hi".to_string(),
                    at: ivec2(1, 2),
                    color: Color::BLUE,
                },
            ]
        );
        assert_eq!(rec.segments().len(), 1);
    }

    #[test]
    fn recorder_listing_format() {
        let mut rec = Recorder::new();
        rec.fill_rect(Bounds::new(1, 2, 3, 4));
        rec.line(ivec2(0, 0), ivec2(5, 5));
        insta::assert_snapshot!(rec.listing(), @r"
        fill 3x4+1+2 rgb(0,0,0)
        line (0,0)-(5,5) rgb(0,0,0) w1
        ");
    }

    #[test]
    fn clear_keeps_state() {
        let mut rec = Recorder::new();
        rec.set_line_width(Thickness::new(2));
        rec.line(ivec2(0, 0), ivec2(1, 1));
        rec.clear();
        assert!(rec.ops().is_empty());
        assert_eq!(rec.line_width(), Thickness::new(2));
    }
}
