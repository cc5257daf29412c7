//! The titan reveal section: pinned fullscreen while it scrolls, with
//! embers, flicker lines and lightning driven by scroll progress.

use fastrand::Rng;
use hawiyat_background::{DisplayList, EmberField, paint};
use hawiyat_core::{CELL_HEIGHT, CELL_WIDTH, Rgba, ScrollState, TitanVisuals, Viewport, interpolate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::glitch::GlitchText;
use crate::page::wrap;

/// Height of the section in logical units.
pub const TITAN_HEIGHT: f32 = 2500.0;

/// Interval between lightning rolls.
pub const LIGHTNING_PERIOD_MS: u64 = 3000;

const LIGHTNING_THRESHOLD: f32 = 0.7;

/// The headline latches visible past this progress.
const TEXT_VISIBLE_AFTER: f32 = 0.1;

const HEADLINE: &str = "THE RUMBLING BEGINS";
const SUBTITLE: &str = "Just as Eren unleashed devastation upon Marley, our Hawiyat platform will crush all who dare to challenge it.";
const BUTTON: &str = "[ WITNESS THE POWER ]";
const INDICATOR: &str = "SCROLL TO WITNESS";

/// One titan of the marching wall.
const FIGURE: [&str; 7] = [
    "   ▄▄▄   ",
    "  █▀█▀█  ",
    "  ▀███▀  ",
    " ▄█████▄ ",
    "█▀█████▀█",
    "  ██ ██  ",
    "  ██ ██  ",
];

const RED: Rgba = Rgba::rgb(220, 38, 38);
const DEEP_RED: Rgba = Rgba::rgb(127, 29, 29);
const WHITE: Rgba = Rgba::rgb(255, 255, 255);
const GRAY: Rgba = Rgba::rgb(229, 231, 235);

fn shade(color: Rgba, alpha: f32) -> ratatui::style::Color {
    color.with_alpha(alpha).over_black()
}

#[derive(Debug, Clone)]
pub struct TitanReveal {
    embers: EmberField,
    headline: GlitchText,
    progress: f32,
    active: bool,
    text_visible: bool,
    /// Start and end of the running lightning flash.
    lightning: Option<(u64, u64)>,
}

impl TitanReveal {
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            embers: EmberField::new(rng),
            headline: GlitchText::shaking(HEADLINE, 2.0),
            progress: 0.0,
            active: false,
            text_visible: false,
            lightning: None,
        }
    }

    /// Take a fresh scroll reading.
    pub fn update_scroll(&mut self, state: ScrollState) {
        if state.active != self.active {
            tracing::debug!(active = state.active, "titan section pin changed");
        }
        self.progress = state.progress;
        self.active = state.active;
        if state.progress > TEXT_VISIBLE_AFTER {
            self.text_visible = true;
        }
        self.headline
            .set_intensity(TitanVisuals::from_progress(state.progress).glitch_intensity);
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the section is pinned fullscreen.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn headline_mut(&mut self) -> &mut GlitchText {
        &mut self.headline
    }

    pub fn visuals(&self) -> TitanVisuals {
        TitanVisuals::from_progress(self.progress)
    }

    /// Maybe start a 100-200 ms flash. Only while pinned.
    pub fn roll_lightning(&mut self, now_ms: u64, rng: &mut Rng) -> bool {
        if !self.active || rng.f32() <= LIGHTNING_THRESHOLD {
            return false;
        }
        let duration = 100 + (rng.f32() * 100.0) as u64;
        self.lightning = Some((now_ms, now_ms + duration));
        true
    }

    /// Flash strength at `now_ms`, 0 when dark.
    pub fn flash(&self, now_ms: u64) -> f32 {
        match self.lightning {
            Some((start, end)) if now_ms < end => {
                let t = (now_ms.saturating_sub(start)) as f32 / (end - start).max(1) as f32;
                interpolate(t, &[0.0, 0.25, 0.5, 0.75, 1.0], &[0.0, 0.9, 0.4, 0.8, 0.0])
            }
            _ => 0.0,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: u64, platform_url: &str) {
        if area.is_empty() {
            return;
        }
        let v = self.visuals();

        let flash = self.flash(now_ms);
        let base = DEEP_RED.with_alpha(v.red_overlay_opacity * 0.6).lerp(WHITE, flash * 0.35);
        frame.render_widget(Block::new().style(Style::new().bg(base.over_black())), area);

        self.render_wall(frame, area, &v);

        let mut embers = DisplayList::new(Viewport::from_cells(area.width, area.height));
        self.embers.render(Some(&mut embers), now_ms, v.ember_fade);
        paint(frame, area, &embers);

        if self.text_visible {
            self.render_text(frame, area, &v, now_ms, platform_url);
        }

        if v.scroll_indicator_opacity > 0.0 {
            let line = Line::from(INDICATOR)
                .style(Style::new().fg(shade(GRAY, v.scroll_indicator_opacity)))
                .centered();
            put_line(frame, area, area.height as i32 - 3, line);
            let arrow = Line::from("▼")
                .style(Style::new().fg(shade(RED, v.scroll_indicator_opacity)))
                .centered();
            put_line(frame, area, area.height as i32 - 2, arrow);
        }

        let bar = (v.progress_bar * area.width as f32).round() as usize;
        if bar > 0 {
            let line = Line::from("━".repeat(bar))
                .style(Style::new().fg(shade(RED, v.progress_bar_opacity)));
            put_line(frame, area, 1, line);
        }
    }

    fn render_wall(&self, frame: &mut Frame, area: Rect, v: &TitanVisuals) {
        let (shift, _) = TitanVisuals::parallax(self.progress, 0.5);
        let shift_rows = (shift / CELL_HEIGHT).round() as i32;
        let figure_width = FIGURE[0].chars().count() + 1;
        let count = (area.width as usize / figure_width).max(1);
        let alpha = (v.opacity * v.brightness).clamp(0.0, 1.0) * (1.0 - v.gradient_opacity * 0.5);
        let style = Style::new().fg(shade(RED, alpha));
        let bottom = area.height as i32 - FIGURE.len() as i32 - 1 + shift_rows;

        for (row, part) in FIGURE.iter().enumerate() {
            let text = vec![*part; count].join(" ");
            put_line(frame, area, bottom + row as i32, Line::from(text).style(style).centered());
        }
    }

    fn render_text(&self, frame: &mut Frame, area: Rect, v: &TitanVisuals, now_ms: u64, url: &str) {
        let offset_rows = (v.text_offset / CELL_HEIGHT).round() as i32;
        let mut row = area.height as i32 / 2 - 4 + offset_rows;
        let text_style = Style::new().fg(shade(WHITE, v.text_opacity));

        let glitching = self.headline.is_glitching(now_ms);
        let headline_style = if glitching {
            Style::new().fg(shade(RED, v.text_opacity))
        } else {
            text_style
        }
        .add_modifier(Modifier::BOLD);
        let shift = (self.headline.shake(now_ms) / CELL_WIDTH).round() as i32;
        put_line(
            frame,
            area,
            row,
            shifted(self.headline.display(now_ms), shift, headline_style),
        );
        row += 2;

        let width = (area.width as usize).saturating_sub(8).clamp(20, 72);
        for part in wrap(SUBTITLE, width) {
            let line = Line::from(part)
                .style(Style::new().fg(shade(GRAY, v.text_opacity)))
                .centered();
            put_line(frame, area, row, line);
            row += 1;
        }
        row += 1;

        let button = Line::from(BUTTON)
            .style(
                Style::new()
                    .fg(shade(WHITE, v.text_opacity))
                    .bg(shade(DEEP_RED, v.text_opacity))
                    .add_modifier(Modifier::BOLD),
            )
            .centered();
        put_line(frame, area, row, button);
        put_line(
            frame,
            area,
            row + 1,
            Line::from(url.to_string())
                .style(Style::new().fg(shade(GRAY, v.text_opacity * 0.6)))
                .centered(),
        );
    }
}

/// Centered line moved `shift` columns sideways.
pub fn shifted(text: &str, shift: i32, style: Style) -> Line<'static> {
    let pad = " ".repeat(2 * shift.unsigned_abs() as usize);
    let spans = if shift > 0 {
        vec![Span::raw(pad), Span::styled(text.to_string(), style)]
    } else if shift < 0 {
        vec![Span::styled(text.to_string(), style), Span::raw(pad)]
    } else {
        vec![Span::styled(text.to_string(), style)]
    };
    Line::from(spans).centered()
}

/// Render `line` on `row` of `area`, if that row exists.
pub fn put_line(frame: &mut Frame, area: Rect, row: i32, line: Line<'static>) {
    if row < 0 || row >= area.height as i32 {
        return;
    }
    let target = Rect::new(area.x, area.y + row as u16, area.width, 1);
    frame.render_widget(Paragraph::new(line), target);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn state(progress: f32, active: bool) -> ScrollState {
        ScrollState { progress, active }
    }

    #[test]
    fn test_text_latch_stays_on() {
        let mut titan = TitanReveal::new(&mut Rng::with_seed(1));
        titan.update_scroll(state(0.05, true));
        assert!(!titan.text_visible());
        titan.update_scroll(state(0.2, true));
        assert!(titan.text_visible());
        titan.update_scroll(state(0.0, false));
        assert!(titan.text_visible());
    }

    #[test]
    fn test_headline_intensity_follows_progress() {
        let mut titan = TitanReveal::new(&mut Rng::with_seed(1));
        titan.update_scroll(state(0.5, true));
        assert!((titan.headline_mut().intensity() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_lightning_unless_pinned() {
        let mut titan = TitanReveal::new(&mut Rng::with_seed(1));
        let mut rng = Rng::with_seed(2);
        for step in 0..200 {
            assert!(!titan.roll_lightning(step * LIGHTNING_PERIOD_MS, &mut rng));
        }
        assert_eq!(titan.flash(0), 0.0);
    }

    #[test]
    fn test_lightning_flash_is_short() {
        let mut titan = TitanReveal::new(&mut Rng::with_seed(1));
        titan.update_scroll(state(0.4, true));
        let mut rng = Rng::with_seed(2);
        let mut now = 0;
        while !titan.roll_lightning(now, &mut rng) {
            now += LIGHTNING_PERIOD_MS;
        }
        assert!(titan.flash(now + 40) > 0.0);
        assert_eq!(titan.flash(now + 200), 0.0);
    }

    #[test]
    fn test_shifted_pads_opposite_side() {
        let line = shifted("AB", 2, Style::new());
        assert_eq!(line.width(), 6);
        assert_eq!(line.spans[0].content, "    ");
        let line = shifted("AB", -1, Style::new());
        assert_eq!(line.spans[1].content, "  ");
    }

    #[test]
    fn test_render_shows_headline_once_visible() {
        let mut titan = TitanReveal::new(&mut Rng::with_seed(3));
        titan.update_scroll(state(0.4, true));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                titan.render(frame, area, 10_000, "http://example.test/");
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("RUMBLING"));
        assert!(text.contains("WITNESS THE POWER"));
    }
}
