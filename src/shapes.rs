//! Shape types
//!
//! Each shape owns its geometry and exactly one [`Pen`], and knows how to
//! decompose itself into pen strokes. Geometry and the pen binding are fixed
//! at construction; the only state that changes across draws is the pen's own
//! color cycling.
//!
//! Vertex arithmetic wraps on `i32` overflow, like 32-bit integer math on the
//! screen coordinates would, so extreme input produces stray segments instead
//! of a panic.

use std::f64::consts::TAU;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, IVec2, ivec2};

use crate::pen::{DrawingPen, Pen};
use crate::surface::Surface;

/// Number of chords used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 100;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Draw {
    /// Issue this shape's strokes, in order, through its pen
    fn draw(&mut self, surface: &mut dyn Surface);

    /// The pen this shape was built with
    fn pen(&self) -> &Pen;

    /// How many strokes one call to [`draw`](Draw::draw) issues
    fn segment_count(&self) -> usize;
}

/// Anything the canvas can hold
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
        }
    }
}

// ============================================================================
// Line
// ============================================================================

/// A single segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pen: Pen,
    start: IVec2,
    end: IVec2,
}

impl Line {
    pub fn new(pen: impl Into<Pen>, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            pen: pen.into(),
            start: ivec2(x1, y1),
            end: ivec2(x2, y2),
        }
    }

    pub fn start(&self) -> IVec2 {
        self.start
    }

    pub fn end(&self) -> IVec2 {
        self.end
    }
}

impl Draw for Line {
    fn draw(&mut self, surface: &mut dyn Surface) {
        self.pen.stroke(surface, self.start, self.end);
    }

    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn segment_count(&self) -> usize {
        1
    }
}

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned rectangle outline given by its top-left corner and size
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pen: Pen,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(pen: impl Into<Pen>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pen: pen.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Corners clockwise from the top-left
    pub fn corners(&self) -> [IVec2; 4] {
        let (x, y) = (self.x, self.y);
        let right = x.wrapping_add(self.width);
        let bottom = y.wrapping_add(self.height);
        [ivec2(x, y), ivec2(right, y), ivec2(right, bottom), ivec2(x, bottom)]
    }
}

impl Draw for Rectangle {
    fn draw(&mut self, surface: &mut dyn Surface) {
        let corners = self.corners();
        // top, right, bottom, left
        for i in 0..4 {
            self.pen.stroke(surface, corners[i], corners[(i + 1) % 4]);
        }
    }

    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn segment_count(&self) -> usize {
        4
    }
}

// ============================================================================
// Circle
// ============================================================================

/// Circle outline approximated by a closed polygon of [`CIRCLE_SEGMENTS`] chords
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pen: Pen,
    center: IVec2,
    radius: i32,
}

impl Circle {
    pub fn new(pen: impl Into<Pen>, cx: i32, cy: i32, radius: i32) -> Self {
        Self {
            pen: pen.into(),
            center: ivec2(cx, cy),
            radius,
        }
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Polygon vertices, starting and ending at the rightmost point.
    ///
    /// The first vertex is exactly `(cx + r, cy)`; the rest are offset from the
    /// center by `r·(cos θ, sin θ)` truncated toward zero, so the output is
    /// pixel-identical to an integer cast of the floating products. Returns
    /// `CIRCLE_SEGMENTS + 1` points.
    pub fn vertices(&self) -> Vec<IVec2> {
        let radius = self.radius as f64;
        let step = TAU / CIRCLE_SEGMENTS as f64;

        let mut points = Vec::with_capacity(CIRCLE_SEGMENTS + 1);
        points.push(self.center.wrapping_add(ivec2(self.radius, 0)));
        for i in 1..=CIRCLE_SEGMENTS {
            let offset = DVec2::from_angle(i as f64 * step) * radius;
            // `as` truncates toward zero (and saturates)
            points.push(self.center.wrapping_add(offset.as_ivec2()));
        }
        points
    }
}

impl Draw for Circle {
    fn draw(&mut self, surface: &mut dyn Surface) {
        let vertices = self.vertices();
        for pair in vertices.windows(2) {
            self.pen.stroke(surface, pair[0], pair[1]);
        }
    }

    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn segment_count(&self) -> usize {
        CIRCLE_SEGMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::{ColorCyclingPen, SolidPen};
    use crate::surface::Recorder;
    use crate::types::{Color, Thickness};

    fn endpoints(rec: &Recorder) -> Vec<(IVec2, IVec2)> {
        rec.segments().iter().map(|s| (s.from, s.to)).collect()
    }

    #[test]
    fn line_is_one_stroke() {
        let mut line = Line::new(SolidPen::new(Color::BLACK), 0, 0, 10, 0);
        let mut rec = Recorder::new();
        line.draw(&mut rec);

        let segs = rec.segments();
        assert_eq!(segs.len(), 1);
        assert_eq!((segs[0].from, segs[0].to), (ivec2(0, 0), ivec2(10, 0)));
        assert_eq!(segs[0].color, Color::BLACK);
        assert_eq!(segs[0].width, Thickness::new(1));
    }

    #[test]
    fn rectangle_traces_clockwise_from_top_left() {
        let mut rect = Rectangle::new(SolidPen::default(), 10, 20, 30, 40);
        let mut rec = Recorder::new();
        rect.draw(&mut rec);

        assert_eq!(
            endpoints(&rec),
            vec![
                (ivec2(10, 20), ivec2(40, 20)),
                (ivec2(40, 20), ivec2(40, 60)),
                (ivec2(40, 60), ivec2(10, 60)),
                (ivec2(10, 60), ivec2(10, 20)),
            ]
        );
    }

    #[test]
    fn rectangle_with_cycling_pen_colors() {
        let mut rect = Rectangle::new(ColorCyclingPen::new(), 0, 0, 5, 5);
        let mut rec = Recorder::new();
        rect.draw(&mut rec);

        let colors: Vec<Color> = rec.segments().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE, Color::RED]);
    }

    #[test]
    fn degenerate_rectangle_still_strokes_four_times() {
        let mut rect = Rectangle::new(SolidPen::default(), 7, 7, 0, 0);
        let mut rec = Recorder::new();
        rect.draw(&mut rec);
        assert_eq!(rec.segments().len(), 4);
        assert!(rec.segments().iter().all(|s| s.from == ivec2(7, 7) && s.to == ivec2(7, 7)));
    }

    #[test]
    fn circle_is_a_closed_hundred_gon() {
        let mut circle = Circle::new(SolidPen::default(), 100, 100, 50);
        let mut rec = Recorder::new();
        circle.draw(&mut rec);

        let segs = rec.segments();
        assert_eq!(segs.len(), CIRCLE_SEGMENTS);
        assert_eq!(segs[0].from, ivec2(150, 100));
        assert_eq!(segs.last().unwrap().to, ivec2(150, 100));
        for pair in segs.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn circle_first_chord_truncates() {
        let circle = Circle::new(SolidPen::default(), 100, 100, 50);
        let step = TAU / 100.0;
        let expected = ivec2(
            100 + (50.0 * step.cos()) as i32,
            100 + (50.0 * step.sin()) as i32,
        );
        // 50·cos(2π/100) ≈ 49.90, 50·sin(2π/100) ≈ 3.14
        assert_eq!(expected, ivec2(149, 103));
        assert_eq!(circle.vertices()[1], expected);
    }

    #[test]
    fn circle_truncates_toward_zero_in_every_quadrant() {
        let circle = Circle::new(SolidPen::default(), 0, 0, 10);
        let vertices = circle.vertices();
        // i = 30: θ = 0.6π, cos ≈ -0.309 so 10·cos ≈ -3.09 truncates to -3
        assert_eq!(vertices[30].x, -3);
        // i = 70: θ = 1.4π, sin ≈ -0.951 so 10·sin ≈ -9.51 truncates to -9
        assert_eq!(vertices[70].y, -9);
    }

    #[test]
    fn zero_radius_circle_collapses_to_center() {
        let mut circle = Circle::new(SolidPen::default(), 5, 6, 0);
        let mut rec = Recorder::new();
        circle.draw(&mut rec);
        assert_eq!(rec.segments().len(), CIRCLE_SEGMENTS);
        assert!(rec.segments().iter().all(|s| s.from == ivec2(5, 6) && s.to == ivec2(5, 6)));
    }

    #[test]
    fn negative_size_rectangle_traces_back_from_origin() {
        let mut rect = Rectangle::new(SolidPen::default(), 10, 10, -5, -5);
        let mut rec = Recorder::new();
        rect.draw(&mut rec);

        assert_eq!(
            endpoints(&rec),
            vec![
                (ivec2(10, 10), ivec2(5, 10)),
                (ivec2(5, 10), ivec2(5, 5)),
                (ivec2(5, 5), ivec2(10, 5)),
                (ivec2(10, 5), ivec2(10, 10)),
            ]
        );
    }

    #[test]
    fn negative_radius_circle_starts_on_the_left() {
        let mut circle = Circle::new(SolidPen::default(), 20, 20, -10);
        let mut rec = Recorder::new();
        circle.draw(&mut rec);

        let segs = rec.segments();
        assert_eq!(segs.len(), CIRCLE_SEGMENTS);
        assert_eq!(segs[0].from, ivec2(10, 20));
        assert_eq!(segs.last().unwrap().to, ivec2(10, 20));
        // θ = π/2 points up instead of down
        assert_eq!(circle.vertices()[25], ivec2(20, 10));
    }

    // ========================================================================
    // Extreme coordinates
    // ========================================================================

    #[test]
    fn rectangle_corners_wrap_at_i32_limits() {
        let mut rect = Rectangle::new(SolidPen::default(), i32::MAX, i32::MIN, 1, -1);
        assert_eq!(
            rect.corners(),
            [
                ivec2(i32::MAX, i32::MIN),
                ivec2(i32::MIN, i32::MIN),
                ivec2(i32::MIN, i32::MAX),
                ivec2(i32::MAX, i32::MAX),
            ]
        );

        let mut rec = Recorder::new();
        rect.draw(&mut rec);
        assert_eq!(rec.segments().len(), 4);
    }

    #[test]
    fn huge_circle_wraps_instead_of_panicking() {
        let mut circle = Circle::new(SolidPen::default(), i32::MAX, i32::MIN, i32::MAX);
        let vertices = circle.vertices();
        assert_eq!(vertices.len(), CIRCLE_SEGMENTS + 1);
        assert_eq!(vertices[0], ivec2(-2, i32::MIN));
        assert_eq!(vertices[CIRCLE_SEGMENTS], vertices[0]);

        let mut rec = Recorder::new();
        circle.draw(&mut rec);
        assert_eq!(rec.segments().len(), CIRCLE_SEGMENTS);
    }

    #[test]
    fn most_negative_radius_does_not_panic() {
        let circle = Circle::new(SolidPen::default(), 0, 0, i32::MIN);
        let vertices = circle.vertices();
        assert_eq!(vertices[0], ivec2(i32::MIN, 0));
        assert_eq!(vertices.len(), CIRCLE_SEGMENTS + 1);
    }

    // ========================================================================
    // Pen binding
    // ========================================================================

    #[test]
    fn solid_pen_binding_survives_repaints() {
        let pen = SolidPen::new(Color::BLUE).with_thickness(Thickness::new(4));
        let mut shape: Shape = Rectangle::new(pen.clone(), 0, 0, 3, 3).into();
        let mut rec = Recorder::new();
        shape.draw(&mut rec);
        shape.draw(&mut rec);
        assert_eq!(shape.pen(), &Pen::from(pen));
    }

    #[test]
    fn cycling_pen_binding_only_advances_its_cursor() {
        let mut shape: Shape = Line::new(
            ColorCyclingPen::new().with_thickness(Thickness::new(3)),
            0,
            0,
            1,
            1,
        )
        .into();
        let mut rec = Recorder::new();
        shape.draw(&mut rec);

        let Pen::Cycling(pen) = shape.pen() else {
            panic!("expected a cycling pen");
        };
        assert_eq!(pen.palette(), &[Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(pen.thickness(), Thickness::new(3));
        assert_eq!(pen.cursor(), 1);
    }

    #[test]
    fn circle_chords_rotate_pen_colors() {
        let mut circle = Circle::new(ColorCyclingPen::new(), 50, 50, 20);
        let mut rec = Recorder::new();
        circle.draw(&mut rec);
        let segs = rec.segments();
        assert_eq!(segs[0].color, Color::RED);
        assert_eq!(segs[1].color, Color::GREEN);
        assert_eq!(segs[99].color, Color::RED);
    }

    #[test]
    fn cycling_continues_across_draws() {
        let mut shape: Shape = Line::new(ColorCyclingPen::new(), 0, 0, 1, 1).into();
        let mut rec = Recorder::new();
        shape.draw(&mut rec);
        shape.draw(&mut rec);
        let colors: Vec<Color> = rec.segments().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN]);
    }

    #[test]
    fn segment_counts() {
        let shapes: Vec<Shape> = vec![
            Line::new(Pen::default(), 0, 0, 1, 1).into(),
            Rectangle::new(Pen::default(), 0, 0, 1, 1).into(),
            Circle::new(Pen::default(), 0, 0, 1).into(),
        ];
        let counts: Vec<usize> = shapes.iter().map(|s| s.segment_count()).collect();
        assert_eq!(counts, vec![1, 4, 100]);
        assert_eq!(shapes[2].kind(), "circle");
    }
}
