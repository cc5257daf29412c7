//! RGBA colors composited over the black page background.

use ratatui::style::Color;

/// An 8-bit RGB color with a floating point alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha, clamped to [0, 1].
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear blend of both channels and alpha, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite over black and convert to a terminal color.
    pub fn over_black(self) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        Color::Rgb(
            (self.r as f32 * a) as u8,
            (self.g as f32 * a) as u8,
            (self.b as f32 * a) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_black_scales_channels() {
        assert_eq!(Rgba::new(200, 100, 50, 0.5).over_black(), Color::Rgb(100, 50, 25));
        assert_eq!(Rgba::new(200, 100, 50, 0.0).over_black(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Rgba::new(255, 51, 51, 0.5);
        let to = Rgba::new(255, 102, 102, 0.3);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.5).g, 77);
    }
}
