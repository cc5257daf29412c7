//! Particle field with connection lines and pointer repulsion (stateful).

use fastrand::Rng;
use hawiyat_core::{Point, Rgba, Viewport};

use crate::color::{PARTICLE_BRIGHT, PARTICLE_SOFT, link_gradient};
use crate::surface::{Link, Surface, usable};

/// Upper bound on the number of particles.
pub const MAX_PARTICLES: usize = 150;

/// Viewport area per particle.
pub const AREA_PER_PARTICLE: f32 = 8000.0;

/// Particles closer than this are connected.
pub const LINK_DISTANCE: f32 = 150.0;

/// Radius around the pointer inside which particles are pushed away.
pub const POINTER_RADIUS: f32 = 150.0;

/// Displacement per frame at zero distance from the pointer.
const POINTER_PUSH: f32 = 2.0;

/// Motion constants are per frame at this rate.
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Most frames simulated by a single advance.
const MAX_STEPS: f32 = 4.0;

/// A single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Per-frame velocity.
    pub velocity: Point,
    pub size: f32,
    pub original_size: f32,
    /// +1 while growing, -1 while shrinking.
    pub pulse_direction: f32,
    pub pulse_speed: f32,
    pub color: Rgba,
    pub alpha: f32,
}

impl Particle {
    fn random(rng: &mut Rng, viewport: Viewport) -> Self {
        let original_size = rng.f32() * 3.0 + 0.5;
        Self {
            position: Point::new(rng.f32() * viewport.width, rng.f32() * viewport.height),
            velocity: Point::new((rng.f32() - 0.5) * 0.5, (rng.f32() - 0.5) * 0.5),
            size: original_size,
            original_size,
            pulse_direction: if rng.bool() { 1.0 } else { -1.0 },
            pulse_speed: rng.f32() * 0.02 + 0.01,
            color: if rng.f32() > 0.8 {
                PARTICLE_BRIGHT
            } else {
                PARTICLE_SOFT
            },
            alpha: rng.f32() * 0.5 + 0.1,
        }
    }

    /// Smallest and largest size the pulse reaches.
    pub fn size_bounds(&self) -> (f32, f32) {
        (self.original_size * 0.5, self.original_size * 1.5)
    }

    /// Push away from `pointer` if it is within [`POINTER_RADIUS`].
    fn repel(&mut self, pointer: Point, steps: f32) {
        let dx = self.position.x - pointer.x;
        let dy = self.position.y - pointer.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= POINTER_RADIUS || distance <= f32::EPSILON {
            return;
        }
        let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
        self.position.x += dx / distance * force * POINTER_PUSH * steps;
        self.position.y += dy / distance * force * POINTER_PUSH * steps;
    }

    fn step(&mut self, viewport: Viewport, steps: f32) {
        self.position.x += self.velocity.x * steps;
        self.position.y += self.velocity.y * steps;

        let (min_size, max_size) = self.size_bounds();
        self.size += self.pulse_direction * self.pulse_speed * steps;
        if self.size >= max_size {
            self.size = max_size;
            self.pulse_direction = -1.0;
        } else if self.size <= min_size {
            self.size = min_size;
            self.pulse_direction = 1.0;
        }

        reflect(&mut self.position.x, &mut self.velocity.x, viewport.width);
        reflect(&mut self.position.y, &mut self.velocity.y, viewport.height);
    }
}

/// Mirror a coordinate that left `[0, max]` back inside and point its
/// velocity inward.
fn reflect(position: &mut f32, velocity: &mut f32, max: f32) {
    if *position < 0.0 {
        *position = (-*position).min(max);
        *velocity = velocity.abs();
    } else if *position > max {
        *position = (2.0 * max - *position).max(0.0);
        *velocity = -velocity.abs();
    }
}

/// Strength of a link at `distance`: 1 when touching, 0 at [`LINK_DISTANCE`].
pub fn link_strength(distance: f32) -> f32 {
    (1.0 - distance / LINK_DISTANCE).max(0.0)
}

/// Field of particles over the whole viewport.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    pointer: Option<Point>,
}

impl ParticleField {
    /// Number of particles for a viewport.
    pub fn particle_count(viewport: Viewport) -> usize {
        if viewport.is_empty() {
            return 0;
        }
        ((viewport.area() / AREA_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
    }

    /// Scatter particles uniformly over `viewport`.
    pub fn new(viewport: Viewport, rng: &mut Rng) -> Self {
        let count = Self::particle_count(viewport);
        let particles = (0..count).map(|_| Particle::random(rng, viewport)).collect();
        tracing::debug!(count, width = viewport.width, height = viewport.height, "particle field created");
        Self {
            particles,
            viewport,
            pointer: None,
        }
    }

    pub fn from_particles(viewport: Viewport, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            viewport,
            pointer: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the bounds. Particles keep their positions; any left outside are
    /// pulled back in by the next advance.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the pointer, or `None` once it leaves the surface.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Advance the simulation by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f32) {
        let steps = (delta_ms / FRAME_MS).clamp(0.0, MAX_STEPS);
        if steps == 0.0 {
            return;
        }
        for particle in &mut self.particles {
            if let Some(pointer) = self.pointer {
                particle.repel(pointer, steps);
            }
            particle.step(self.viewport, steps);
        }
    }

    /// Connection lines between every pair closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance >= LINK_DISTANCE {
                    continue;
                }
                let strength = link_strength(distance);
                let (start, end) = link_gradient(strength);
                links.push(Link {
                    from: a.position,
                    to: b.position,
                    distance,
                    opacity: strength * 0.4,
                    start,
                    end,
                });
            }
        }
        links
    }

    /// Clear the surface, then draw links, then particles.
    pub fn render(&self, surface: Option<&mut dyn Surface>) {
        let Some(surface) = usable(surface) else {
            return;
        };
        surface.clear();
        for link in self.links() {
            surface.draw_link(&link);
        }
        for particle in &self.particles {
            surface.fill_circle(
                particle.position,
                particle.size,
                particle.color.with_alpha(particle.alpha),
            );
        }
    }
}
