//! SVG output surface

use std::path::Path;

use glam::IVec2;
use svg::Document;
use svg::Node;
use svg::node::Text as TextContent;
use svg::node::element::{Element, Line as SvgLine, Rectangle as SvgRect};

use crate::errors::SurfaceError;
use crate::log::debug;
use crate::surface::Surface;
use crate::types::{Bounds, Color, Thickness};

const FONT_SIZE: u32 = 12;
const FONT_FAMILY: &str = "sans-serif";

/// Surface that builds an SVG document, one element per drawing call
pub struct SvgSurface {
    document: Document,
    color: Color,
    width: Thickness,
    elements: usize,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));
        Self {
            document,
            color: Color::BLACK,
            width: Thickness::DEFAULT,
            elements: 0,
        }
    }

    /// Number of elements appended so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Serialize the document
    pub fn finish(&self) -> String {
        debug!(elements = self.elements, "svg finished");
        self.document.to_string()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        svg::save(path, &self.document)?;
        Ok(())
    }

    fn push(&mut self, node: impl Node + 'static) {
        self.document.append(node);
        self.elements += 1;
    }
}

impl Surface for SvgSurface {
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
        let line = SvgLine::new()
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y)
            .set("stroke", self.color.to_hex())
            .set("stroke-width", self.width.get());
        self.push(line);
    }

    fn fill_rect(&mut self, rect: Bounds) {
        let fill = SvgRect::new()
            .set("x", rect.x)
            .set("y", rect.y)
            .set("width", rect.width.max(0))
            .set("height", rect.height.max(0))
            .set("fill", self.color.to_hex());
        self.push(fill);
    }

    fn text(&mut self, label: &str, at: IVec2) {
        let mut text = Element::new("text");
        text.assign("x", at.x);
        text.assign("y", at.y);
        text.assign("fill", self.color.to_hex());
        text.assign("font-size", FONT_SIZE);
        text.assign("font-family", FONT_FAMILY);
        text.append(TextContent::new(label));
        self.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::pen::ColorCyclingPen;
    use crate::shapes::Rectangle;
    use glam::ivec2;

    #[test]
    fn line_carries_style() {
        let mut surface = SvgSurface::new(20, 20);
        surface.set_color(Color::RED);
        surface.set_line_width(Thickness::new(3));
        surface.line(ivec2(1, 2), ivec2(3, 4));
        let out = surface.finish();

        assert!(out.contains("<line"));
        assert!(out.contains(r##"stroke="#ff0000""##));
        assert!(out.contains(r#"stroke-width="3""#));
        assert!(out.contains(r#"x1="1""#));
        assert!(out.contains(r#"y2="4""#));
    }

    #[test]
    fn text_becomes_text_element() {
        let mut surface = SvgSurface::new(20, 20);
        surface.text("550", ivec2(0, 10));
        let out = surface.finish();
        assert!(out.contains("<text"));
        assert!(out.contains("550"));
        assert!(out.contains(r#"font-size="12""#));
    }

    #[test]
    fn canvas_repaint_to_svg() {
        let mut canvas = Canvas::default();
        canvas.add_shape(Rectangle::new(ColorCyclingPen::new(), 100, 150, 200, 100));
        let mut surface = SvgSurface::new(800, 600);
        canvas.draw(&mut surface);
        let out = surface.finish();

        // background + 2 axes + 26 ticks + 26 labels + 4 edges
        assert_eq!(surface.element_count(), 1 + 2 + 26 + 26 + 4);
        assert_eq!(out.matches("<rect").count(), 1);
        assert_eq!(out.matches("<line").count(), 2 + 26 + 4);
        assert_eq!(out.matches(r##"stroke="#00ff00""##).count(), 1);
        assert_eq!(out.matches(r##"stroke="#ff0000""##).count(), 2);
    }
}
