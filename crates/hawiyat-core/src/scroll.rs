//! Scroll-driven progress and the visual parameters derived from it.

/// Fraction of the section height over which progress runs from 0 to 1.
const ACTIVE_FRACTION: f32 = 0.85;

/// Maps a vertical scroll offset to progress through a fixed-height section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMapper {
    /// Offset of the section's top edge from the top of the page.
    pub top: f32,
    /// Total height of the section.
    pub height: f32,
}

/// Progress through a section at one scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Normalized progress in [0, 1].
    pub progress: f32,
    /// True while the offset is inside the active window.
    pub active: bool,
}

impl ScrollMapper {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Length of the scroll window that maps onto [0, 1].
    pub fn span(&self) -> f32 {
        self.height * ACTIVE_FRACTION
    }

    pub fn progress(&self, scroll: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return if scroll >= self.top { 1.0 } else { 0.0 };
        }
        ((scroll - self.top) / span).clamp(0.0, 1.0)
    }

    pub fn is_active(&self, scroll: f32) -> bool {
        scroll >= self.top && scroll <= self.top + self.span()
    }

    pub fn state(&self, scroll: f32) -> ScrollState {
        ScrollState {
            progress: self.progress(scroll),
            active: self.is_active(scroll),
        }
    }
}

/// Piecewise-linear interpolation through `(stops[i], values[i])`.
///
/// Inputs outside the first/last stop clamp to the first/last value. `stops`
/// must be ascending and the same length as `values`; an empty table yields 0.
pub fn interpolate(x: f32, stops: &[f32], values: &[f32]) -> f32 {
    let len = stops.len().min(values.len());
    if len == 0 {
        return 0.0;
    }
    if x <= stops[0] {
        return values[0];
    }
    for i in 1..len {
        if x <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= 0.0 {
                return values[i];
            }
            let t = (x - stops[i - 1]) / span;
            return values[i - 1] + (values[i] - values[i - 1]) * t;
        }
    }
    values[len - 1]
}

/// Visual parameters of the titan reveal section at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitanVisuals {
    pub opacity: f32,
    pub brightness: f32,
    pub text_opacity: f32,
    pub gradient_opacity: f32,
    pub red_overlay_opacity: f32,
    pub scroll_indicator_opacity: f32,
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Vertical text offset in logical units; negative moves up.
    pub text_offset: f32,
    pub glitch_intensity: f32,
    /// Multiplier for ember and flicker-line opacity, peaking mid-section.
    pub ember_fade: f32,
    /// Width of the section's own progress bar as a fraction of the screen.
    pub progress_bar: f32,
    pub progress_bar_opacity: f32,
}

impl TitanVisuals {
    pub fn from_progress(p: f32) -> Self {
        let p = p.clamp(0.0, 1.0);

        let opacity = if p < 0.1 {
            p * 10.0
        } else if p > 0.75 {
            (1.0 - p) * 4.0
        } else {
            1.0
        };

        let brightness = 0.3
            + if p < 0.3 {
                p * 1.5
            } else if p > 0.7 {
                (1.0 - p) * 1.5
            } else {
                0.45
            };

        let text_opacity = if p < 0.15 {
            (p - 0.05) * 10.0
        } else if p > 0.7 {
            (0.9 - p) * 5.0
        } else {
            1.0
        };

        let gradient_opacity = 0.8
            - if p < 0.5 {
                p * 0.6
            } else {
                (1.0 - p) * 0.6
            };

        let red_overlay_opacity = if p < 0.3 {
            p
        } else if p > 0.7 {
            1.0 - p
        } else {
            0.3
        };

        let scroll_indicator_opacity = if p < 0.15 { 1.0 - p * 6.66 } else { 0.0 };

        let text_offset = if p < 0.3 { 80.0 - p * 266.0 } else { -p * 100.0 };

        let progress_bar_opacity = if p < 0.1 {
            p * 10.0
        } else if p > 0.8 {
            (1.0 - p) * 10.0
        } else {
            1.0
        };

        Self {
            opacity: opacity.clamp(0.0, 1.0),
            brightness,
            text_opacity: text_opacity.clamp(0.0, 1.0),
            gradient_opacity: gradient_opacity.clamp(0.0, 1.0),
            red_overlay_opacity: red_overlay_opacity.clamp(0.0, 1.0),
            scroll_indicator_opacity: scroll_indicator_opacity.clamp(0.0, 1.0),
            scale: 1.0 - p * 0.2,
            rotation: p * -5.0,
            text_offset,
            glitch_intensity: 2.0 + p * 4.0,
            ember_fade: (1.0 - (p - 0.5).abs() * 1.5).clamp(0.0, 1.0),
            progress_bar: p.min(0.4),
            progress_bar_opacity: progress_bar_opacity.clamp(0.0, 1.0),
        }
    }

    /// Translation and scale of a parallax layer at `depth`.
    pub fn parallax(p: f32, depth: f32) -> (f32, f32) {
        let p = p.clamp(0.0, 1.0);
        (-(p * 100.0 * depth), 1.0 + depth * 0.2 * (1.0 - p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        let mapper = ScrollMapper::new(1000.0, 2500.0);
        assert_eq!(mapper.progress(1000.0), 0.0);
        assert_eq!(mapper.progress(1000.0 + 2500.0 * 0.85), 1.0);
        assert_eq!(mapper.progress(0.0), 0.0);
        assert_eq!(mapper.progress(10_000.0), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mapper = ScrollMapper::new(320.0, 2500.0);
        let mut last = 0.0;
        for step in 0..=300 {
            let scroll = 320.0 + step as f32 * 8.0;
            let progress = mapper.progress(scroll);
            assert!(progress >= last, "progress fell at {scroll}");
            assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
    }

    #[test]
    fn test_active_window() {
        let mapper = ScrollMapper::new(100.0, 1000.0);
        assert!(!mapper.is_active(99.0));
        assert!(mapper.is_active(100.0));
        assert!(mapper.is_active(950.0));
        assert!(!mapper.is_active(951.0));
        assert_eq!(
            mapper.state(525.0),
            ScrollState {
                progress: 0.5,
                active: true
            }
        );
    }

    #[test]
    fn test_interpolate() {
        let stops = [0.0, 0.2, 0.4];
        let values = [0.2, 0.9, 1.2];
        assert_eq!(interpolate(-1.0, &stops, &values), 0.2);
        assert!((interpolate(0.1, &stops, &values) - 0.55).abs() < 1e-6);
        assert!((interpolate(0.3, &stops, &values) - 1.05).abs() < 1e-6);
        assert_eq!(interpolate(0.9, &stops, &values), 1.2);
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn test_titan_fades_in_holds_and_fades_out() {
        assert_eq!(TitanVisuals::from_progress(0.0).opacity, 0.0);
        assert!((TitanVisuals::from_progress(0.05).opacity - 0.5).abs() < 1e-6);
        assert_eq!(TitanVisuals::from_progress(0.5).opacity, 1.0);
        assert!((TitanVisuals::from_progress(0.875).opacity - 0.5).abs() < 1e-6);
        assert_eq!(TitanVisuals::from_progress(1.0).opacity, 0.0);
    }

    #[test]
    fn test_titan_opacities_stay_in_range() {
        for step in 0..=100 {
            let v = TitanVisuals::from_progress(step as f32 / 100.0);
            for value in [
                v.opacity,
                v.text_opacity,
                v.gradient_opacity,
                v.red_overlay_opacity,
                v.scroll_indicator_opacity,
                v.ember_fade,
                v.progress_bar_opacity,
            ] {
                assert!((0.0..=1.0).contains(&value));
            }
            assert!(v.progress_bar <= 0.4);
        }
    }

    #[test]
    fn test_text_hidden_before_reveal() {
        assert_eq!(TitanVisuals::from_progress(0.0).text_opacity, 0.0);
        assert_eq!(TitanVisuals::from_progress(0.5).text_opacity, 1.0);
        assert_eq!(TitanVisuals::from_progress(0.95).text_opacity, 0.0);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(TitanVisuals::parallax(0.0, 1.0), (0.0, 1.2));
        assert_eq!(TitanVisuals::parallax(1.0, 0.5), (-50.0, 1.0));
    }
}
