//! Drawing surface abstraction shared by every simulator.

use hawiyat_core::{Point, Rgba, Viewport};

/// A connection line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub distance: f32,
    /// Overall line opacity, applied on top of the gradient stops.
    pub opacity: f32,
    /// Gradient color at `from`.
    pub start: Rgba,
    /// Gradient color at `to`.
    pub end: Rgba,
}

impl Link {
    /// Gradient color `t` of the way from `from` to `to`, with the line
    /// opacity folded into alpha.
    pub fn color_at(&self, t: f32) -> Rgba {
        let stop = self.start.lerp(self.end, t);
        stop.with_alpha(stop.a * self.opacity)
    }
}

/// Something simulators can paint on.
pub trait Surface {
    /// Bounds of the surface in logical units.
    fn viewport(&self) -> Viewport;

    fn clear(&mut self);

    fn draw_link(&mut self, link: &Link);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Draw a single character centered on `at`.
    fn draw_glyph(&mut self, at: Point, glyph: char, color: Rgba);

    /// Horizontal band across the whole surface.
    fn draw_band(&mut self, y: f32, thickness: f32, offset: f32, color: Rgba);
}

/// A recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Link(Link),
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    Glyph {
        at: Point,
        glyph: char,
        color: Rgba,
    },
    Band {
        y: f32,
        thickness: f32,
        offset: f32,
        color: Rgba,
    },
}

/// Surface that records shapes for a later paint pass.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    viewport: Viewport,
    shapes: Vec<Shape>,
    clears: usize,
}

impl DisplayList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            clears: 0,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of times the list was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Surface for DisplayList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.clears += 1;
    }

    fn draw_link(&mut self, link: &Link) {
        self.shapes.push(Shape::Link(*link));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_glyph(&mut self, at: Point, glyph: char, color: Rgba) {
        self.shapes.push(Shape::Glyph { at, glyph, color });
    }

    fn draw_band(&mut self, y: f32, thickness: f32, offset: f32, color: Rgba) {
        self.shapes.push(Shape::Band {
            y,
            thickness,
            offset,
            color,
        });
    }
}

/// Surface to paint on, or `None` if it can't be used.
///
/// A surface with no area is treated like a missing one.
pub fn usable(surface: Option<&mut dyn Surface>) -> Option<&mut dyn Surface> {
    surface.filter(|s| !s.viewport().is_empty())
}
