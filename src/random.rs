//! Randomly placed shapes
//!
//! Each shape kind cycles its own pen thickness 1, 2, 3, 4, 5, 1, ... The
//! cycle is an explicit [`ThicknessCycle`] value owned by the caller, and the
//! random source is injected so a seeded generator reproduces a drawing.

use rand::Rng;

use crate::defaults::{self, MAX_THICKNESS};
use crate::log::debug;
use crate::pen::ColorCyclingPen;
use crate::shapes::{Circle, Line, Rectangle, Shape};
use crate::types::{Bounds, Thickness};

/// Smallest side a random rectangle gets
const MIN_RECT_SIDE: i32 = 50;
const MIN_RADIUS: i32 = 20;
/// Radii are drawn from `MIN_RADIUS..MIN_RADIUS + RADIUS_SPREAD`
const RADIUS_SPREAD: i32 = 50;

/// Thickness counter stepping 1..=5 and wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThicknessCycle(i64);

impl ThicknessCycle {
    pub const fn new() -> Self {
        ThicknessCycle(1)
    }

    pub fn current(self) -> Thickness {
        Thickness::new(self.0)
    }

    #[must_use]
    pub fn advance(self) -> Self {
        ThicknessCycle(self.0 % MAX_THICKNESS + 1)
    }
}

impl Default for ThicknessCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform offset in `0..span`, or 0 when the span is empty
fn offset<R: Rng + ?Sized>(rng: &mut R, span: i32) -> i32 {
    if span <= 0 { 0 } else { rng.gen_range(0..span) }
}

fn pen(cycle: ThicknessCycle) -> ColorCyclingPen {
    ColorCyclingPen::new().with_thickness(cycle.current())
}

/// A line with both endpoints inside `area`; returns the advanced cycle
pub fn random_line<R: Rng + ?Sized>(
    rng: &mut R,
    area: Bounds,
    cycle: ThicknessCycle,
) -> (Shape, ThicknessCycle) {
    let x1 = area.x + offset(rng, area.width);
    let y1 = area.y + offset(rng, area.height);
    let x2 = area.x + offset(rng, area.width);
    let y2 = area.y + offset(rng, area.height);
    (Line::new(pen(cycle), x1, y1, x2, y2).into(), cycle.advance())
}

/// A rectangle whose top-left corner lies inside `area`, at least 50px a side
pub fn random_rectangle<R: Rng + ?Sized>(
    rng: &mut R,
    area: Bounds,
    cycle: ThicknessCycle,
) -> (Shape, ThicknessCycle) {
    let x = area.x + offset(rng, area.width - MIN_RECT_SIDE);
    let y = area.y + offset(rng, area.height - MIN_RECT_SIDE);
    let width = MIN_RECT_SIDE + offset(rng, area.right() - x);
    let height = MIN_RECT_SIDE + offset(rng, area.bottom() - y);
    (
        Rectangle::new(pen(cycle), x, y, width, height).into(),
        cycle.advance(),
    )
}

/// A circle with radius 20..70 fully inside `area` when it fits
pub fn random_circle<R: Rng + ?Sized>(
    rng: &mut R,
    area: Bounds,
    cycle: ThicknessCycle,
) -> (Shape, ThicknessCycle) {
    let radius = MIN_RADIUS + offset(rng, RADIUS_SPREAD);
    let cx = area.x + radius + offset(rng, area.width - 2 * radius);
    let cy = area.y + radius + offset(rng, area.height - 2 * radius);
    (Circle::new(pen(cycle), cx, cy, radius).into(), cycle.advance())
}

/// Random shape source keeping one thickness cycle per shape kind
#[derive(Debug, Clone)]
pub struct RandomShapes {
    area: Bounds,
    line: ThicknessCycle,
    rectangle: ThicknessCycle,
    circle: ThicknessCycle,
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new(defaults::CANVAS_BOUNDS)
    }
}

impl RandomShapes {
    pub fn new(area: Bounds) -> Self {
        Self {
            area,
            line: ThicknessCycle::new(),
            rectangle: ThicknessCycle::new(),
            circle: ThicknessCycle::new(),
        }
    }

    pub fn area(&self) -> Bounds {
        self.area
    }

    pub fn line<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Shape {
        let (shape, next) = random_line(rng, self.area, self.line);
        debug!(thickness = self.line.current().get(), "random line");
        self.line = next;
        shape
    }

    pub fn rectangle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Shape {
        let (shape, next) = random_rectangle(rng, self.area, self.rectangle);
        debug!(thickness = self.rectangle.current().get(), "random rectangle");
        self.rectangle = next;
        shape
    }

    pub fn circle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Shape {
        let (shape, next) = random_circle(rng, self.area, self.circle);
        debug!(thickness = self.circle.current().get(), "random circle");
        self.circle = next;
        shape
    }
}
