//! User-selectable animation settings.

use serde::{Deserialize, Serialize};

/// Global animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to frame deltas before they reach the simulators.
    pub fn multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Which background layers are drawn behind the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Full,
    Particles,
    Icons,
    None,
}

impl BackgroundStyle {
    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            BackgroundStyle::Full => BackgroundStyle::Particles,
            BackgroundStyle::Particles => BackgroundStyle::Icons,
            BackgroundStyle::Icons => BackgroundStyle::None,
            BackgroundStyle::None => BackgroundStyle::Full,
        }
    }

    pub fn shows_particles(self) -> bool {
        matches!(self, BackgroundStyle::Full | BackgroundStyle::Particles)
    }

    pub fn shows_icons(self) -> bool {
        matches!(self, BackgroundStyle::Full | BackgroundStyle::Icons)
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundStyle::Full => "full",
            BackgroundStyle::Particles => "particles",
            BackgroundStyle::Icons => "icons",
            BackgroundStyle::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_cycle_visits_every_style() {
        let mut style = BackgroundStyle::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(style);
            style = style.next();
        }
        assert_eq!(style, BackgroundStyle::Full);
        assert_eq!(seen.len(), 4);
        assert!(!BackgroundStyle::None.shows_particles());
        assert!(!BackgroundStyle::None.shows_icons());
        assert!(BackgroundStyle::Icons.shows_icons());
    }

    #[test]
    fn test_speed_multiplier() {
        assert_eq!(AnimationSpeed::default().multiplier(), 1.0);
        assert!(AnimationSpeed::Fast.multiplier() > AnimationSpeed::Slow.multiplier());
    }
}
