//! Glitching headline text.

use fastrand::Rng;
use hawiyat_core::interpolate;

/// Characters a scramble draws from.
const SCRAMBLE_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+{}:\"<>?|";

/// How long scrambled characters stay before reverting.
const SCRAMBLE_MS: u64 = 100;

/// A roll glitches when the draw exceeds this.
const ROLL_THRESHOLD: f32 = 0.7;

/// Interval between rolls for [`GlitchKind::Shake`].
const SHAKE_PERIOD_MS: u64 = 2000;

/// Length of one [`GlitchKind::Shake`] swing.
const SHAKE_SWING_MS: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchKind {
    /// Rolls every `3000 / intensity` ms, lasts `150 × intensity` ms and may
    /// scramble characters when intensity is above 1.
    Scramble,
    /// Rolls every 2000 ms and lasts 150-550 ms. The swing always takes
    /// 200 ms; intensity only widens it.
    Shake,
}

#[derive(Debug, Clone)]
pub struct GlitchText {
    text: String,
    intensity: f32,
    kind: GlitchKind,
    /// Start and end of the running glitch.
    glitch: Option<(u64, u64)>,
    /// Scrambled text and when it reverts.
    scrambled: Option<(String, u64)>,
}

impl GlitchText {
    pub fn new(text: impl Into<String>, intensity: f32) -> Self {
        Self::with_kind(text, intensity, GlitchKind::Scramble)
    }

    pub fn shaking(text: impl Into<String>, intensity: f32) -> Self {
        Self::with_kind(text, intensity, GlitchKind::Shake)
    }

    fn with_kind(text: impl Into<String>, intensity: f32, kind: GlitchKind) -> Self {
        Self {
            text: text.into(),
            intensity: intensity.max(0.1),
            kind,
            glitch: None,
            scrambled: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.max(0.1);
    }

    /// Interval between rolls.
    pub fn period_ms(&self) -> u64 {
        match self.kind {
            GlitchKind::Scramble => ((3000.0 / self.intensity) as u64).max(1),
            GlitchKind::Shake => SHAKE_PERIOD_MS,
        }
    }

    /// Maybe start a glitch at `now_ms`. Returns whether one started.
    pub fn roll(&mut self, now_ms: u64, rng: &mut Rng) -> bool {
        if rng.f32() <= ROLL_THRESHOLD {
            return false;
        }
        let duration = match self.kind {
            GlitchKind::Scramble => (150.0 * self.intensity) as u64,
            GlitchKind::Shake => 150 + (rng.f32() * 400.0) as u64,
        };
        self.glitch = Some((now_ms, now_ms + duration));

        if self.kind == GlitchKind::Scramble && self.intensity > 1.0 && rng.f32() > ROLL_THRESHOLD
        {
            let scrambled = scramble(&self.text, self.intensity, rng);
            self.scrambled = Some((scrambled, now_ms + SCRAMBLE_MS));
        }
        true
    }

    pub fn is_glitching(&self, now_ms: u64) -> bool {
        matches!(self.glitch, Some((_, end)) if now_ms < end)
    }

    /// Text to show at `now_ms`.
    pub fn display(&self, now_ms: u64) -> &str {
        match &self.scrambled {
            Some((scrambled, until)) if now_ms < *until && self.is_glitching(now_ms) => scrambled,
            _ => &self.text,
        }
    }

    /// Horizontal offset of the ghost copy in logical units, 0 when idle.
    ///
    /// [`GlitchKind::Scramble`] follows the keyframes 0, -5, 3, -2, 0 (scaled
    /// by intensity) over `200 × intensity` ms. [`GlitchKind::Shake`] swings
    /// 0, -7, 0 (scaled by intensity) over a fixed 200 ms.
    pub fn shake(&self, now_ms: u64) -> f32 {
        let Some((start, end)) = self.glitch else {
            return 0.0;
        };
        if now_ms >= end {
            return 0.0;
        }
        let i = self.intensity;
        let elapsed = now_ms.saturating_sub(start) as f32;
        match self.kind {
            GlitchKind::Scramble => interpolate(
                (elapsed / (200.0 * i)).min(1.0),
                &[0.0, 0.25, 0.5, 0.75, 1.0],
                &[0.0, -5.0 * i, 3.0 * i, -2.0 * i, 0.0],
            ),
            GlitchKind::Shake => interpolate(
                (elapsed / SHAKE_SWING_MS).min(1.0),
                &[0.0, 0.5, 1.0],
                &[0.0, -7.0 * i, 0.0],
            ),
        }
    }
}

/// Replace `floor(len × 0.2 × intensity)` random positions of `text`.
///
/// The character count is unchanged.
pub fn scramble(text: &str, intensity: f32, rng: &mut Rng) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let count = (chars.len() as f32 * 0.2 * intensity).floor() as usize;
    for _ in 0..count {
        let index = rng.usize(..chars.len());
        chars[index] = SCRAMBLE_CHARS[rng.usize(..SCRAMBLE_CHARS.len())] as char;
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Roll until a glitch starts.
    fn glitch_at(text: &mut GlitchText, now_ms: u64, rng: &mut Rng) {
        for _ in 0..1000 {
            if text.roll(now_ms, rng) {
                return;
            }
        }
        panic!("no glitch in 1000 rolls");
    }

    #[test]
    fn test_scramble_keeps_length() {
        let mut rng = Rng::with_seed(3);
        let scrambled = scramble("ATTACK ON HAWIYAT", 2.0, &mut rng);
        assert_eq!(scrambled.chars().count(), "ATTACK ON HAWIYAT".chars().count());
        assert_eq!(scramble("", 2.0, &mut rng), "");
    }

    #[test]
    fn test_scramble_uses_known_characters() {
        let mut rng = Rng::with_seed(8);
        let original = "aaaaaaaaaaaaaaaaaaaa";
        let scrambled = scramble(original, 5.0, &mut rng);
        for ch in scrambled.chars() {
            assert!(ch == 'a' || SCRAMBLE_CHARS.contains(&(ch as u8)));
        }
    }

    #[test]
    fn test_period_follows_intensity() {
        assert_eq!(GlitchText::new("x", 1.0).period_ms(), 3000);
        assert_eq!(GlitchText::new("x", 2.0).period_ms(), 1500);
        assert_eq!(GlitchText::shaking("x", 5.0).period_ms(), 2000);
    }

    #[test]
    fn test_glitch_lasts_150_ms_per_intensity() {
        let mut rng = Rng::with_seed(1);
        let mut text = GlitchText::new("HAWIYAT", 2.0);
        glitch_at(&mut text, 1_000, &mut rng);
        assert!(text.is_glitching(1_000));
        assert!(text.is_glitching(1_299));
        assert!(!text.is_glitching(1_300));
    }

    #[test]
    fn test_scramble_reverts_after_100_ms() {
        let mut rng = Rng::with_seed(4);
        let mut text = GlitchText::new("ATTACK ON HAWIYAT", 2.0);
        // Keep rolling until a roll also scrambled.
        let mut now = 0;
        while text.display(now) == text.text() {
            now += 10_000;
            glitch_at(&mut text, now, &mut rng);
            assert!(now < 10_000_000, "never scrambled");
        }
        assert_eq!(text.display(now).chars().count(), text.text().chars().count());
        assert_eq!(text.display(now + 100), text.text());
    }

    #[test]
    fn test_low_intensity_never_scrambles() {
        let mut rng = Rng::with_seed(6);
        let mut text = GlitchText::new("INITIALIZING", 1.0);
        for step in 0..500 {
            let now = step * 5_000;
            text.roll(now, &mut rng);
            assert_eq!(text.display(now), "INITIALIZING");
        }
    }

    #[test]
    fn test_shake_glitch_duration_bounds() {
        let mut rng = Rng::with_seed(2);
        let mut text = GlitchText::shaking("THE RUMBLING BEGINS", 2.0);
        glitch_at(&mut text, 0, &mut rng);
        assert!(text.is_glitching(149));
        assert!(!text.is_glitching(550));
        assert_eq!(text.display(10), "THE RUMBLING BEGINS");
    }

    #[test]
    fn test_shake_returns_to_rest() {
        let mut rng = Rng::with_seed(5);
        let mut text = GlitchText::new("X", 2.0);
        assert_eq!(text.shake(0), 0.0);
        glitch_at(&mut text, 0, &mut rng);
        assert!((text.shake(100) + 10.0).abs() < 1e-4);
        assert_eq!(text.shake(10_000), 0.0);
    }

    #[test]
    fn test_headline_swing_settles_within_200_ms() {
        let mut rng = Rng::with_seed(7);
        let mut text = GlitchText::shaking("THE RUMBLING BEGINS", 6.0);
        glitch_at(&mut text, 0, &mut rng);
        assert!((text.shake(100) + 42.0).abs() < 1e-3);
        assert!((text.shake(50) + 21.0).abs() < 1e-3);
        assert_eq!(text.shake(200), 0.0);
    }
}
