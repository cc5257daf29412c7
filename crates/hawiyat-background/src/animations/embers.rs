//! Rising embers and flicker lines of the titan reveal section.
//!
//! Both layers are computed from elapsed time alone once their random
//! parameters are drawn, and both are faded by scroll progress.

use fastrand::Rng;
use hawiyat_core::{Point, Rgba, interpolate};

use crate::chars::EMBER_CHARS;
use crate::color::hsl_to_rgb;
use crate::surface::{Surface, usable};

pub const EMBER_COUNT: usize = 50;
pub const FLICKER_LINE_COUNT: usize = 12;

/// Flicker line color before opacity (red-600 at 70%).
const BAND_COLOR: Rgba = Rgba::new(220, 38, 38, 0.7);

/// A glowing ember rising through the section.
#[derive(Debug, Clone, PartialEq)]
pub struct Ember {
    /// Horizontal position, percent of the width.
    pub x: f32,
    /// Starting vertical position, percent of the height.
    pub y: f32,
    pub size: f32,
    /// Rise speed; the ember climbs `100 × speed` units per loop.
    pub speed: f32,
    pub opacity: f32,
    /// Hue offset in degrees around red.
    pub hue: f32,
    /// Seconds before the first loop starts.
    pub delay: f32,
}

impl Ember {
    fn random(rng: &mut Rng, index: usize) -> Self {
        Self {
            x: rng.f32() * 100.0,
            y: rng.f32() * 100.0,
            size: rng.f32() * 4.0 + 1.0,
            speed: rng.f32() * 3.0 + 1.0,
            opacity: rng.f32() * 0.7 + 0.3,
            hue: rng.f32() * 60.0 - 20.0,
            delay: (index % 3) as f32,
        }
    }

    /// Loop duration in seconds.
    pub fn period(&self) -> f32 {
        4.0 + self.speed
    }

    /// Fraction of the current loop completed, or `None` before the first loop.
    pub fn phase(&self, elapsed_ms: u64) -> Option<f32> {
        let local = elapsed_ms as f32 / 1000.0 - self.delay;
        if local < 0.0 {
            return None;
        }
        Some(local.rem_euclid(self.period()) / self.period())
    }
}

/// A horizontal distortion line.
#[derive(Debug, Clone, PartialEq)]
pub struct FlickerLine {
    /// Vertical position, percent of the height.
    pub top: f32,
    pub thickness: f32,
    /// Seconds per half cycle.
    pub speed: f32,
    pub opacity: f32,
}

impl FlickerLine {
    fn random(rng: &mut Rng) -> Self {
        Self {
            top: rng.f32() * 100.0,
            thickness: rng.f32() * 3.0 + 0.5,
            speed: rng.f32() * 4.0 + 2.0,
            opacity: rng.f32() * 0.7 + 0.3,
        }
    }

    /// Position within a forward-then-reverse cycle, in [0, 1].
    fn yoyo(&self, elapsed_ms: u64) -> f32 {
        let cycle = (elapsed_ms as f32 / 1000.0 / self.speed).rem_euclid(2.0);
        if cycle > 1.0 { 2.0 - cycle } else { cycle }
    }

    /// Opacity keyframes 0.5, 1, 0.7 of the base opacity.
    pub fn opacity_at(&self, elapsed_ms: u64) -> f32 {
        self.opacity * interpolate(self.yoyo(elapsed_ms), &[0.0, 0.5, 1.0], &[0.5, 1.0, 0.7])
    }

    /// Horizontal jitter keyframes 0, 10, -10, 0.
    pub fn offset_at(&self, elapsed_ms: u64) -> f32 {
        interpolate(
            self.yoyo(elapsed_ms),
            &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0],
            &[0.0, 10.0, -10.0, 0.0],
        )
    }
}

/// Embers and flicker lines of one section.
#[derive(Debug, Clone)]
pub struct EmberField {
    embers: Vec<Ember>,
    lines: Vec<FlickerLine>,
}

impl EmberField {
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            embers: (0..EMBER_COUNT).map(|i| Ember::random(rng, i)).collect(),
            lines: (0..FLICKER_LINE_COUNT).map(|_| FlickerLine::random(rng)).collect(),
        }
    }

    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }

    pub fn lines(&self) -> &[FlickerLine] {
        &self.lines
    }

    /// Draw both layers at `elapsed_ms`, with every opacity scaled by `fade`.
    pub fn render(&self, surface: Option<&mut dyn Surface>, elapsed_ms: u64, fade: f32) {
        let Some(surface) = usable(surface) else {
            return;
        };
        if fade <= 0.0 {
            return;
        }
        let viewport = surface.viewport();

        for line in &self.lines {
            surface.draw_band(
                line.top / 100.0 * viewport.height,
                line.thickness,
                line.offset_at(elapsed_ms),
                BAND_COLOR.with_alpha(BAND_COLOR.a * line.opacity_at(elapsed_ms) * fade),
            );
        }

        for ember in &self.embers {
            let Some(phase) = ember.phase(elapsed_ms) else {
                continue;
            };
            let x = ember.x / 100.0 * viewport.width;
            let y = ember.y / 100.0 * viewport.height - 100.0 * ember.speed * phase;
            if y < 0.0 {
                continue;
            }
            let glyph = EMBER_CHARS[((ember.size - 1.0) as usize * EMBER_CHARS.len() / 4)
                .min(EMBER_CHARS.len() - 1)];
            let alpha = ember.opacity * (1.0 - phase) * fade;
            surface.draw_glyph(
                Point::new(x, y),
                glyph,
                hsl_to_rgb(ember.hue, 1.0, 0.5).with_alpha(alpha),
            );
        }
    }
}
