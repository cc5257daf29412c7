//! Core types for the hawiyat landing page.
//!
//! Shared by the background simulators, the config loader and the app:
//! viewport geometry, colors, the frame scheduler, the scroll-progress
//! mapper and the countdown arithmetic.

mod color;
mod countdown;
mod geometry;
mod scheduler;
mod scroll;
mod style;

pub use color::Rgba;
pub use countdown::{Countdown, FlipState, TimeLeft, time_left};
pub use geometry::{CELL_HEIGHT, CELL_WIDTH, Point, Viewport};
pub use scheduler::{FrameClock, FrameTick, Scheduler, TimerId};
pub use scroll::{ScrollMapper, ScrollState, TitanVisuals, interpolate};
pub use style::{AnimationSpeed, BackgroundStyle};
