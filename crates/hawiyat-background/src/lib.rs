//! Animated backgrounds for the hawiyat landing page.
//!
//! Simulators keep their own state and draw into a [`Surface`]. The
//! terminal front end records shapes in a [`DisplayList`] and paints the
//! list onto a braille canvas with [`paint`].

mod animations;
mod canvas;
mod chars;
mod color;
mod state;
mod surface;

pub use animations::embers::{EMBER_COUNT, Ember, EmberField, FLICKER_LINE_COUNT, FlickerLine};
pub use animations::icons::{FloatingIcon, ICON_COUNT, IconField};
pub use animations::particles::{
    AREA_PER_PARTICLE, LINK_DISTANCE, MAX_PARTICLES, POINTER_RADIUS, Particle, ParticleField,
    link_strength,
};
pub use canvas::paint;
pub use chars::IconKind;
pub use color::{ICON_RED, PARTICLE_BRIGHT, PARTICLE_SOFT, hsl_to_rgb, link_gradient};
pub use state::BackgroundState;
pub use surface::{DisplayList, Link, Shape, Surface};
