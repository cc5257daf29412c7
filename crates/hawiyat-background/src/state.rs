//! Background animation state management.

use fastrand::Rng;
use hawiyat_core::{BackgroundStyle, Point, Viewport};
use ratatui::{Frame, layout::Rect};

use crate::animations::{icons::IconField, particles::ParticleField};
use crate::canvas::paint;
use crate::surface::DisplayList;

/// Particle field and floating icons behind the page.
#[derive(Debug)]
pub struct BackgroundState {
    particles: Option<ParticleField>,
    icons: Option<IconField>,
    pointer: Option<Point>,
    /// Last known area width in cells.
    last_width: u16,
    /// Last known area height in cells.
    last_height: u16,
    rng: Rng,
}

impl BackgroundState {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: None,
            icons: None,
            pointer: None,
            last_width: 0,
            last_height: 0,
            rng: Rng::with_seed(seed),
        }
    }

    /// Follow a change of drawing area.
    ///
    /// The layers are populated the first time the area is non-empty. Later
    /// changes only move the bounds; existing positions are kept.
    pub fn sync_area(&mut self, width: u16, height: u16) {
        if width == self.last_width && height == self.last_height {
            return;
        }
        self.last_width = width;
        self.last_height = height;

        let viewport = Viewport::from_cells(width, height);
        if viewport.is_empty() {
            return;
        }

        match (&mut self.particles, &mut self.icons) {
            (Some(particles), Some(icons)) => {
                particles.resize(viewport);
                icons.resize(viewport);
                tracing::debug!(width, height, "background resized");
            }
            _ => {
                let mut particles = ParticleField::new(viewport, &mut self.rng);
                particles.set_pointer(self.pointer);
                tracing::debug!(
                    width,
                    height,
                    particles = particles.particles().len(),
                    "background initialized"
                );
                self.particles = Some(particles);
                self.icons = Some(IconField::new(viewport, &mut self.rng));
            }
        }
    }

    /// Pointer position in logical units, or `None` once it leaves.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
        if let Some(particles) = &mut self.particles {
            particles.set_pointer(pointer);
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    pub fn icons(&self) -> Option<&IconField> {
        self.icons.as_ref()
    }

    /// Step the layers `style` shows. Hidden layers stay frozen.
    pub fn advance(&mut self, delta_ms: f32, style: BackgroundStyle) {
        if let (true, Some(particles)) = (style.shows_particles(), &mut self.particles) {
            particles.advance(delta_ms);
        }
        if let (true, Some(icons)) = (style.shows_icons(), &mut self.icons) {
            icons.advance(delta_ms);
        }
    }

    /// Record the visible layers, icons over particles.
    pub fn display_list(&self, style: BackgroundStyle) -> DisplayList {
        let viewport = Viewport::from_cells(self.last_width, self.last_height);
        let mut list = DisplayList::new(viewport);
        if let (true, Some(particles)) = (style.shows_particles(), &self.particles) {
            particles.render(Some(&mut list));
        }
        if let (true, Some(icons)) = (style.shows_icons(), &self.icons) {
            icons.render(Some(&mut list));
        }
        list
    }

    /// Render the background into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, style: BackgroundStyle) {
        self.sync_area(area.width, area.height);
        if style == BackgroundStyle::None {
            return;
        }
        paint(frame, area, &self.display_list(style));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::animations::icons::ICON_COUNT;
    use crate::surface::Shape;

    #[test]
    fn test_empty_until_sized() {
        let state = BackgroundState::new(1);
        assert!(state.particles().is_none());
        assert!(state.display_list(BackgroundStyle::Full).is_empty());
    }

    #[test]
    fn test_zero_area_creates_nothing() {
        let mut state = BackgroundState::new(1);
        state.sync_area(0, 0);
        assert!(state.particles().is_none());
        assert!(state.icons().is_none());
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut state = BackgroundState::new(3);
        state.sync_area(80, 24);
        let before = state.particles().map(|p| p.particles().to_vec());
        state.sync_area(120, 40);
        let after = state.particles().map(|p| p.particles().to_vec());
        assert_eq!(before, after);
        assert_eq!(
            state.particles().map(|p| p.viewport()),
            Some(Viewport::from_cells(120, 40))
        );
    }

    #[test]
    fn test_pointer_reaches_new_field() {
        let mut state = BackgroundState::new(3);
        state.set_pointer(Some(Point::new(10.0, 10.0)));
        state.sync_area(40, 10);
        assert_eq!(
            state.particles().and_then(|p| p.pointer()),
            Some(Point::new(10.0, 10.0))
        );
        state.set_pointer(None);
        assert_eq!(state.particles().and_then(|p| p.pointer()), None);
    }

    #[test]
    fn test_style_selects_layers() {
        let mut state = BackgroundState::new(4);
        state.sync_area(80, 24);

        let icons_only = state.display_list(BackgroundStyle::Icons);
        assert_eq!(icons_only.shapes().len(), ICON_COUNT);

        let particles_only = state.display_list(BackgroundStyle::Particles);
        assert!(
            particles_only
                .shapes()
                .iter()
                .all(|shape| !matches!(shape, Shape::Glyph { .. }))
        );
        assert!(state.display_list(BackgroundStyle::None).is_empty());
    }

    #[test]
    fn test_hidden_layers_do_not_move() {
        let mut state = BackgroundState::new(5);
        state.sync_area(80, 24);
        let icons = state.icons().map(|i| i.icons().to_vec());
        state.advance(100.0, BackgroundStyle::Particles);
        assert_eq!(state.icons().map(|i| i.icons().to_vec()), icons);
    }

    #[test]
    fn test_render_paints_cells() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut state = BackgroundState::new(6);
        terminal
            .draw(|frame| {
                let area = frame.area();
                state.render(frame, area, BackgroundStyle::Full);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let painted = buffer.content().iter().filter(|cell| cell.symbol() != " ").count();
        assert!(painted > 0);
    }
}
