//! Color palette and conversions for the background layers.

use hawiyat_core::Rgba;

/// Particle color used for roughly one particle in five.
pub const PARTICLE_BRIGHT: Rgba = Rgba::rgb(0xff, 0x33, 0x33);

/// Particle color for the rest.
pub const PARTICLE_SOFT: Rgba = Rgba::rgb(0xff, 0x66, 0x66);

/// Floating icon color (red-600).
pub const ICON_RED: Rgba = Rgba::rgb(220, 38, 38);

/// Start and end stops of a link gradient at `strength` in [0, 1].
pub fn link_gradient(strength: f32) -> (Rgba, Rgba) {
    (
        Rgba::new(255, 51, 51, strength * 0.5),
        Rgba::new(255, 102, 102, strength * 0.3),
    )
}

/// Convert HSL to an opaque color. Hue in degrees, may be negative.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgba {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Rgba::rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgba::rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgba::rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgba::rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_negative_hue_wraps() {
        assert_eq!(hsl_to_rgb(-20.0, 1.0, 0.5), hsl_to_rgb(340.0, 1.0, 0.5));
    }

    #[test]
    fn test_link_gradient_fades_with_strength() {
        let (start, end) = link_gradient(0.0);
        assert_eq!(start.a, 0.0);
        assert_eq!(end.a, 0.0);
        let (start, end) = link_gradient(1.0);
        assert_eq!(start.a, 0.5);
        assert_eq!(end.a, 0.3);
    }
}
