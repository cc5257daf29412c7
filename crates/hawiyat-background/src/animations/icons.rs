//! Floating icons drifting and bouncing across the screen (stateful).

use std::f32::consts::{PI, TAU};

use fastrand::Rng;
use hawiyat_core::{Point, Viewport};

use crate::chars::IconKind;
use crate::color::ICON_RED;
use crate::surface::{Surface, usable};

/// Number of icons in the field.
pub const ICON_COUNT: usize = 15;

/// Rotation per elapsed millisecond, in degrees.
const SPIN_RATE: f32 = 0.01;

/// Movement per elapsed millisecond at speed 1.
const DRIFT_RATE: f32 = 0.1;

/// A decorative floating icon.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingIcon {
    pub kind: IconKind,
    pub position: Point,
    /// Heading in radians.
    pub direction: f32,
    pub speed: f32,
    pub size: f32,
    /// Accumulated rotation in degrees.
    pub rotation: f32,
    /// +1 or -1, fixed for the icon's lifetime.
    pub spin: f32,
    pub opacity: f32,
}

impl FloatingIcon {
    fn random(rng: &mut Rng, viewport: Viewport) -> Self {
        Self {
            kind: IconKind::ALL[rng.usize(..IconKind::ALL.len())],
            position: Point::new(rng.f32() * viewport.width, rng.f32() * viewport.height),
            direction: rng.f32() * TAU,
            speed: rng.f32() * 0.5 + 0.1,
            size: rng.f32() * 20.0 + 10.0,
            rotation: rng.f32() * 360.0,
            spin: if rng.bool() { 1.0 } else { -1.0 },
            opacity: rng.f32() * 0.15 + 0.05,
        }
    }

    fn step(&mut self, viewport: Viewport, delta_ms: f32) {
        let distance = self.speed * delta_ms * DRIFT_RATE;
        let mut x = self.position.x + self.direction.cos() * distance;
        let mut y = self.position.y + self.direction.sin() * distance;

        if x < 0.0 || x > viewport.width {
            self.direction = PI - self.direction;
            x = x.clamp(0.0, viewport.width.max(0.0));
        }
        if y < 0.0 || y > viewport.height {
            self.direction = -self.direction;
            y = y.clamp(0.0, viewport.height.max(0.0));
        }

        self.position = Point::new(x, y);
        self.rotation += delta_ms * SPIN_RATE * self.spin;
    }
}

/// The set of floating icons.
#[derive(Debug, Clone)]
pub struct IconField {
    icons: Vec<FloatingIcon>,
    viewport: Viewport,
}

impl IconField {
    pub fn new(viewport: Viewport, rng: &mut Rng) -> Self {
        let icons = (0..ICON_COUNT)
            .map(|_| FloatingIcon::random(rng, viewport))
            .collect();
        Self { icons, viewport }
    }

    pub fn from_icons(viewport: Viewport, icons: Vec<FloatingIcon>) -> Self {
        Self { icons, viewport }
    }

    pub fn icons(&self) -> &[FloatingIcon] {
        &self.icons
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn advance(&mut self, delta_ms: f32) {
        if delta_ms <= 0.0 {
            return;
        }
        for icon in &mut self.icons {
            icon.step(self.viewport, delta_ms);
        }
    }

    /// Draw every icon as a dim glyph. Large icons are drawn brighter.
    pub fn render(&self, surface: Option<&mut dyn Surface>) {
        let Some(surface) = usable(surface) else {
            return;
        };
        for icon in &self.icons {
            let weight = icon.size / 20.0;
            surface.draw_glyph(
                icon.position,
                icon.kind.glyph(),
                ICON_RED.with_alpha(icon.opacity * weight),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, Shape};

    fn icon(x: f32, y: f32, direction: f32) -> FloatingIcon {
        FloatingIcon {
            kind: IconKind::Skull,
            position: Point::new(x, y),
            direction,
            speed: 0.5,
            size: 20.0,
            rotation: 0.0,
            spin: -1.0,
            opacity: 0.1,
        }
    }

    #[test]
    fn test_creates_fifteen_icons_in_ranges() {
        let viewport = Viewport::new(800.0, 600.0);
        let field = IconField::new(viewport, &mut Rng::with_seed(9));
        assert_eq!(field.icons().len(), ICON_COUNT);
        for icon in field.icons() {
            assert!(viewport.contains(icon.position));
            assert!((10.0..30.0).contains(&icon.size));
            assert!((0.05..0.2).contains(&icon.opacity));
            assert!(icon.spin == 1.0 || icon.spin == -1.0);
        }
    }

    #[test]
    fn test_moves_along_heading() {
        let mut field = IconField::from_icons(Viewport::new(1000.0, 1000.0), vec![icon(500.0, 500.0, 0.0)]);
        field.advance(100.0);
        let moved = &field.icons()[0];
        assert!((moved.position.x - 505.0).abs() < 1e-3);
        assert!((moved.position.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_bounces_off_right_edge() {
        let mut field = IconField::from_icons(Viewport::new(100.0, 100.0), vec![icon(99.0, 50.0, 0.0)]);
        field.advance(100.0);
        let bounced = &field.icons()[0];
        assert_eq!(bounced.position.x, 100.0);
        assert!((bounced.direction - PI).abs() < 1e-6);
        field.advance(100.0);
        assert!(field.icons()[0].position.x < 100.0);
    }

    #[test]
    fn test_bounces_off_top_edge() {
        let heading_up = -PI / 2.0;
        let mut field = IconField::from_icons(Viewport::new(100.0, 100.0), vec![icon(50.0, 1.0, heading_up)]);
        field.advance(100.0);
        let bounced = &field.icons()[0];
        assert_eq!(bounced.position.y, 0.0);
        assert!((bounced.direction - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_stays_in_bounds() {
        let viewport = Viewport::new(320.0, 200.0);
        let mut field = IconField::new(viewport, &mut Rng::with_seed(11));
        for _ in 0..3_000 {
            field.advance(33.0);
            for icon in field.icons() {
                assert!(viewport.contains(icon.position));
            }
        }
    }

    #[test]
    fn test_rotation_follows_fixed_spin() {
        let mut field = IconField::from_icons(Viewport::new(1000.0, 1000.0), vec![icon(500.0, 500.0, 0.0)]);
        field.advance(1000.0);
        field.advance(1000.0);
        assert!((field.icons()[0].rotation + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_render_draws_one_glyph_per_icon() {
        let viewport = Viewport::new(800.0, 600.0);
        let field = IconField::new(viewport, &mut Rng::with_seed(2));
        let mut list = DisplayList::new(viewport);
        field.render(Some(&mut list));
        assert_eq!(list.shapes().len(), ICON_COUNT);
        assert!(list.shapes().iter().all(|shape| matches!(shape, Shape::Glyph { .. })));
    }
}
