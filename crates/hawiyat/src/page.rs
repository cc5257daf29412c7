//! The landing page as a scrollable document of sections.
//!
//! Every section is built as styled lines for the current width. The titan
//! reveal section is a block of blank rows that [`crate::titan`] paints over.

use chrono::{DateTime, Utc};
use hawiyat_background::IconKind;
use hawiyat_core::{CELL_HEIGHT, Countdown, FlipState, Rgba, TimeLeft, interpolate};
use hawiyat_fonts::{GLYPH_HEIGHT, art_width, build_art, build_number_art, format_number};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::glitch::GlitchText;
use crate::terminal::{HackerTerminal, PROMPT};
use crate::titan::{TITAN_HEIGHT, shifted};

/// Rows the titan section occupies.
pub const TITAN_ROWS: u16 = 157;

/// Rows of the terminal box, borders included.
pub const TERMINAL_ROWS: u16 = 16;

/// Widest a text column gets.
const COLUMN_WIDTH: usize = 72;

/// Blank rows above and below a regular section.
const SECTION_PADDING: usize = 3;

/// Time constant of the page progress bar's easing.
const SMOOTH_MS: f32 = 120.0;

const RED: Rgba = Rgba::rgb(220, 38, 38);
const BRIGHT_RED: Rgba = Rgba::rgb(239, 68, 68);
const DARK_RED: Rgba = Rgba::rgb(127, 29, 29);
const WHITE: Rgba = Rgba::rgb(255, 255, 255);
const LIGHT_GRAY: Rgba = Rgba::rgb(209, 213, 219);
const GRAY: Rgba = Rgba::rgb(156, 163, 175);
const DIM_GRAY: Rgba = Rgba::rgb(107, 114, 128);
const GREEN: Rgba = Rgba::rgb(34, 197, 94);
const CYAN: Rgba = Rgba::rgb(6, 182, 212);

fn fg(color: Rgba) -> Style {
    Style::new().fg(color.over_black())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Intro,
    TitanReveal,
    Platform,
    Countdown,
    Prize,
    Rules,
    Quote,
    Terminal,
    CallToAction,
    Footer,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::Intro,
        Section::TitanReveal,
        Section::Platform,
        Section::Countdown,
        Section::Prize,
        Section::Rules,
        Section::Quote,
        Section::Terminal,
        Section::CallToAction,
        Section::Footer,
    ];
}

/// Where a section sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub rows: u16,
}

impl SectionSpan {
    /// Offset of the section's top edge in logical units.
    pub fn top_units(&self) -> f32 {
        self.top as f32 * CELL_HEIGHT
    }

    /// Screen rows of the section when the document is scrolled to
    /// `offset` inside `area`, or `None` if none are visible.
    pub fn visible_in(&self, offset: u16, area: Rect) -> Option<Rect> {
        let start = self.top.max(offset);
        let end = (self.top + self.rows).min(offset.saturating_add(area.height));
        (start < end).then(|| Rect::new(area.x, area.y + (start - offset), area.width, end - start))
    }
}

/// Everything a section's text depends on.
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub width: u16,
    pub viewport_rows: u16,
    pub scroll_row: u16,
    pub now_ms: u64,
    pub platform_url: &'a str,
    pub countdown: &'a Countdown,
    pub hero_title: &'a GlitchText,
    pub platform_title: &'a GlitchText,
    pub terminal: &'a HackerTerminal,
    pub terminal_focused: bool,
}

/// The built page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
}

impl Document {
    pub fn build(content: &PageContent) -> Self {
        let mut lines = Vec::new();
        let mut spans = Vec::new();
        for section in Section::ALL {
            let top = lines.len() as u16;
            let body = section_lines(section, content, top);
            spans.push(SectionSpan {
                section,
                top,
                rows: body.len() as u16,
            });
            lines.extend(body);
        }
        Self { lines, spans }
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|span| span.section == section)
    }

    /// Render the rows visible at `offset`.
    pub fn render(&self, frame: &mut Frame, area: Rect, offset: u16) {
        let start = (offset as usize).min(self.lines.len());
        let end = (start + area.height as usize).min(self.lines.len());
        frame.render_widget(Paragraph::new(self.lines[start..end].to_vec()), area);
    }
}

/// Vertical scroll position in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset: u16,
    max: u16,
}

impl Scroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Bound the offset to a document seen through `viewport_rows`.
    pub fn set_bounds(&mut self, document_rows: u16, viewport_rows: u16) {
        self.max = document_rows.saturating_sub(viewport_rows);
        self.offset = self.offset.min(self.max);
    }

    pub fn scroll_by(&mut self, rows: i32) {
        self.offset = (self.offset as i32 + rows).clamp(0, self.max as i32) as u16;
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.offset = row.min(self.max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }

    /// Offset in logical units.
    pub fn units(&self) -> f32 {
        self.offset as f32 * CELL_HEIGHT
    }

    /// Fraction of the page scrolled.
    pub fn progress(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.offset as f32 / self.max as f32
        }
    }
}

/// Eases toward a moving target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothProgress {
    value: f32,
}

impl SmoothProgress {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn advance(&mut self, target: f32, delta_ms: f32) {
        let k = 1.0 - (-delta_ms.max(0.0) / SMOOTH_MS).exp();
        self.value += (target - self.value) * k;
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }
        if used > 0 && used + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push(' ');
            used += 1;
        }
        used += chars.len();
        current.extend(chars);
    }
    if used > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Word wrap over differently styled segments, centered.
///
/// A segment that starts right after a word (no space) is glued to it, so
/// punctuation stays with the highlighted word before it.
pub fn wrap_spans(segments: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    let mut glue = false;

    for (text, style) in segments {
        let starts_tight = !text.starts_with(char::is_whitespace);
        for (i, word) in text.split_whitespace().enumerate() {
            let len = word.chars().count();
            let attach = i == 0 && starts_tight && glue && used > 0;
            if !attach && used > 0 && used + 1 + len > width {
                lines.push(Line::from(std::mem::take(&mut current)).centered());
                used = 0;
            }
            if !attach && used > 0 {
                current.push(Span::raw(" "));
                used += 1;
            }
            current.push(Span::styled(word.to_string(), *style));
            used += len;
        }
        glue = !text.is_empty() && !text.ends_with(char::is_whitespace);
    }
    if !current.is_empty() {
        lines.push(Line::from(current).centered());
    }
    lines
}

fn column_width(width: u16) -> usize {
    (width as usize).saturating_sub(4).clamp(10, COLUMN_WIDTH)
}

fn blank(count: usize) -> impl Iterator<Item = Line<'static>> {
    std::iter::repeat_with(Line::default).take(count)
}

fn centered(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.into(), style)).centered()
}

/// Section heading with an underline.
fn title(text: &str) -> Vec<Line<'static>> {
    let underline = "━".repeat(text.chars().count() + 4);
    vec![
        centered(text, fg(WHITE).add_modifier(Modifier::BOLD)),
        centered(underline, fg(RED)),
    ]
}

/// Corner ribbon of a card.
fn ribbon(text: &str) -> Line<'static> {
    centered(
        format!("« {text} »"),
        Style::new()
            .fg(Color::White)
            .bg(DARK_RED.over_black())
            .add_modifier(Modifier::BOLD),
    )
}

/// Glitch text as a centered line, red and shaken while glitching.
fn glitch_line(text: &GlitchText, now_ms: u64, style: Style) -> Line<'static> {
    if text.is_glitching(now_ms) {
        let shift = (text.shake(now_ms) / hawiyat_core::CELL_WIDTH).round() as i32;
        shifted(text.display(now_ms), shift, style.fg(RED.over_black()))
    } else {
        centered(text.text(), style)
    }
}

/// Pad `lines` to a common width so they share a left edge when centered.
fn left_column(lines: Vec<Vec<Span<'static>>>, width: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|mut spans| {
            let used: usize = spans.iter().map(|span| span.width()).sum();
            if used < width {
                spans.push(Span::raw(" ".repeat(width - used)));
            }
            Line::from(spans).centered()
        })
        .collect()
}

fn section_lines(section: Section, content: &PageContent, top: u16) -> Vec<Line<'static>> {
    let body = match section {
        Section::Hero => return fill_screen(hero(content), content.viewport_rows),
        Section::Intro => return fill_screen(intro(content, top), content.viewport_rows),
        Section::TitanReveal => return blank(TITAN_ROWS as usize).collect(),
        Section::Platform => platform(content),
        Section::Countdown => countdown(content),
        Section::Prize => prize(content),
        Section::Rules => rules(content),
        Section::Quote => quote(content),
        Section::Terminal => terminal(content),
        Section::CallToAction => call_to_action(content),
        Section::Footer => footer(content),
    };
    blank(SECTION_PADDING)
        .chain(body)
        .chain(blank(SECTION_PADDING))
        .collect()
}

/// Center `body` vertically in at least one screen of rows.
fn fill_screen(body: Vec<Line<'static>>, rows: u16) -> Vec<Line<'static>> {
    let rows = (rows as usize).max(body.len());
    let above = (rows - body.len()) / 2;
    let below = rows - body.len() - above;
    blank(above).chain(body).chain(blank(below)).collect()
}

fn hero(content: &PageContent) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let wordmark = "HAWIYAT";
    match build_art(wordmark) {
        Some(art) if art_width(wordmark) + 2 <= content.width as usize => {
            let style = fg(RED).add_modifier(Modifier::BOLD);
            lines.extend(art.into_iter().map(|row| centered(row, style)));
        }
        _ => lines.push(centered(wordmark, fg(RED).add_modifier(Modifier::BOLD))),
    }
    lines.extend(blank(1));
    lines.push(glitch_line(
        content.hero_title,
        content.now_ms,
        fg(WHITE).add_modifier(Modifier::BOLD),
    ));
    lines.push(centered("アタック・オン・ハウィヤット", fg(GRAY)));
    lines.extend(blank(2));
    lines.push(centered(
        "[ ESTIN TALENTS CTF ]",
        Style::new()
            .fg(Color::White)
            .bg(RED.over_black())
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(centered(content.platform_url, fg(DIM_GRAY)));
    lines.extend(blank(2));
    lines.push(centered("▼", fg(RED)));
    lines
}

/// Intro brightness from how far the section has travelled through the
/// screen.
fn intro_brightness(content: &PageContent, top: u16) -> f32 {
    let screen = content.viewport_rows.max(1) as f32;
    let travelled = content.scroll_row as f32 + screen - top as f32;
    let progress = (travelled / (2.0 * screen)).clamp(0.0, 1.0);
    interpolate(progress, &[0.0, 0.2, 0.4], &[0.2, 0.9, 1.2])
}

fn intro(content: &PageContent, top: u16) -> Vec<Line<'static>> {
    let brightness = intro_brightness(content, top).min(1.0);
    let text = fg(LIGHT_GRAY.with_alpha(brightness));
    let mark = fg(RED.with_alpha(brightness)).add_modifier(Modifier::BOLD);
    let width = column_width(content.width);

    let mut lines = title("THE CHALLENGE");
    lines.extend(blank(1));
    lines.extend(wrap_spans(
        &[
            ("Beyond these walls lies a world of ", text),
            ("challenges", mark),
            (", ", text),
            ("mysteries", mark),
            (", and ", text),
            ("digital titans", mark),
            (" waiting to be conquered. Organized by the ", text),
            ("Rankiha Team", mark),
            (", the ESTIN Talents CTF is calling upon the bravest hackers to ", text),
            ("unleash your hacking superpowers", mark),
            (". But let's be honest, you probably don't have what it takes.", text),
        ],
        width,
    ));
    lines.extend(blank(1));
    lines.extend(wrap_spans(
        &[
            ("Our ", text),
            ("Hawiyat Platform", mark),
            (
                " isn't just another CTF environment. It's a digital fortress built from the ground up to challenge even the most elite hackers. We've engineered security measures that make Fort Knox look like a cardboard box. Think you can penetrate our defenses? ",
                text,
            ),
            ("We're laughing already.", mark),
        ],
        width,
    ));
    lines
}

const FEATURES: [(IconKind, &str, &str); 3] = [
    (
        IconKind::Shield,
        "Impenetrable Infrastructure",
        "Our servers are fortified with security measures so advanced they make quantum encryption look like a child's toy. Good luck even finding a way in.",
    ),
    (
        IconKind::Code,
        "Deceptive Codebase",
        "Every line of code is a potential trap. Our developers have hidden vulnerabilities so subtle that even they sometimes forget where they are.",
    ),
    (
        IconKind::Server,
        "Adaptive Defense Systems",
        "Our AI-powered security adapts to your attacks in real-time. The more you try, the harder it gets. It's like fighting a hydra with a toothpick.",
    ),
];

fn platform(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = vec![glitch_line(
        content.platform_title,
        content.now_ms,
        fg(WHITE).add_modifier(Modifier::BOLD),
    )];
    lines.push(centered(
        "━".repeat(content.platform_title.text().chars().count() + 4),
        fg(RED),
    ));
    lines.push(centered("Where your hacking dreams go to die", fg(GRAY)));

    for (icon, name, description) in FEATURES {
        lines.extend(blank(2));
        lines.push(centered(
            format!("{}  {name}", icon.glyph()),
            fg(WHITE).add_modifier(Modifier::BOLD),
        ));
        lines.extend(blank(1));
        lines.extend(wrap_spans(&[(description, fg(GRAY))], width));
    }
    lines
}

const UNIT_LABELS: [&str; 4] = ["DAYS", "HOURS", "MINUTES", "SECONDS"];

/// Block-digit rows of the four units side by side.
fn countdown_art(time: TimeLeft, flipping: FlipState) -> Vec<Line<'static>> {
    let units = [time.days, time.hours, time.minutes, time.seconds];
    let flips = [
        flipping.days,
        flipping.hours,
        flipping.minutes,
        flipping.seconds,
    ];
    let blocks: Vec<(Vec<String>, usize, Style)> = units
        .iter()
        .zip(UNIT_LABELS)
        .zip(flips)
        .map(|((value, label), flip)| {
            let art = build_number_art(*value);
            let block_width = art
                .first()
                .map_or(0, |row| row.chars().count())
                .max(label.len());
            let style = if flip {
                fg(WHITE).add_modifier(Modifier::BOLD)
            } else {
                fg(RED).add_modifier(Modifier::BOLD)
            };
            (art, block_width, style)
        })
        .collect();

    let mut lines: Vec<Line<'static>> = (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, (art, block_width, style)) in blocks.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("   ", fg(DARK_RED)));
                }
                let block_width = *block_width;
                let cell = art.get(row).cloned().unwrap_or_default();
                spans.push(Span::styled(format!("{cell:^block_width$}"), *style));
            }
            Line::from(spans).centered()
        })
        .collect();

    let labels: Vec<Span<'static>> = blocks
        .iter()
        .zip(UNIT_LABELS)
        .enumerate()
        .flat_map(|(i, ((_, block_width, _), label))| {
            let block_width = *block_width;
            let gap = (i > 0).then(|| Span::raw("   "));
            gap.into_iter()
                .chain(std::iter::once(Span::styled(format!("{label:^block_width$}"), fg(GRAY))))
        })
        .collect();
    lines.push(Line::from(labels).centered());
    lines
}

fn countdown_width(time: TimeLeft) -> usize {
    let units = [time.days, time.hours, time.minutes, time.seconds];
    let blocks: usize = units
        .iter()
        .zip(UNIT_LABELS)
        .map(|(value, label)| art_width(&format_number(*value)).max(label.len()))
        .sum();
    blocks + 3 * (units.len() - 1)
}

fn target_label(target: DateTime<Utc>) -> String {
    target.format("%B %-d, %Y at %-I:%M %p UTC").to_string()
}

fn countdown(content: &PageContent) -> Vec<Line<'static>> {
    let time = content.countdown.current();
    let mut lines = vec![centered(
        "TIME LEFT TO FAIL :",
        fg(GRAY).add_modifier(Modifier::BOLD),
    )];
    lines.extend(blank(2));
    if countdown_width(time) <= content.width as usize {
        lines.extend(countdown_art(time, content.countdown.flipping()));
    } else {
        let compact = format!(
            "{}d : {}h : {}m : {}s",
            format_number(time.days),
            format_number(time.hours),
            format_number(time.minutes),
            format_number(time.seconds)
        );
        lines.push(centered(compact, fg(RED).add_modifier(Modifier::BOLD)));
    }
    lines.extend(blank(2));
    lines.push(centered(target_label(content.countdown.target()), fg(GRAY)));
    lines
}

fn prize(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = vec![ribbon("PREMIUM PRIZE")];
    lines.extend(blank(1));
    lines.push(centered(
        "WIN A PRO GAMING MOUSE",
        fg(RED).add_modifier(Modifier::BOLD),
    ));
    lines.extend(blank(1));
    lines.extend(wrap_spans(
        &[(
            "Be the first to successfully crash our site and win a legendary gaming mouse with customizable RGB lighting, precision optical sensor, and programmable buttons to elevate your gaming experience!",
            fg(LIGHT_GRAY),
        )],
        width,
    ));
    lines.push(centered(
        "Not that we expect anyone to actually win it.",
        fg(GRAY).add_modifier(Modifier::ITALIC),
    ));
    lines.extend(blank(1));
    lines.push(centered(
        "Prizes sponsored by Hawiyat Enterprise",
        fg(DIM_GRAY).add_modifier(Modifier::ITALIC),
    ));
    lines
}

const RULES: [&str; 5] = [
    "Try (and inevitably fail) to find vulnerabilities in our bulletproof Hawiyat Platform",
    "Document your pathetic attempts for our entertainment and future training materials",
    "Email your so-called \"proof\" to m_aichour@estin.dz for us to laugh at during our coffee breaks",
    "First legit submission wins - but let's be real, there probably won't be one in this century",
    "Challenge ends when the first valid submission is confirmed (or when pigs fly, whichever comes first)",
];

fn rules(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = vec![centered(
        "CHALLENGE RULES",
        fg(RED).add_modifier(Modifier::BOLD),
    )];
    lines.push(centered(
        "NOT THAT ANY OF YOU WILL GET FAR ENOUGH TO NEED THESE",
        fg(GRAY).add_modifier(Modifier::ITALIC),
    ));
    lines.extend(blank(1));

    let mut rows = Vec::new();
    for (i, rule) in RULES.iter().enumerate() {
        if i > 0 {
            rows.push(Vec::new());
        }
        for (j, part) in wrap(rule, width.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if j == 0 { "► " } else { "  " };
            rows.push(vec![
                Span::styled(bullet, fg(RED)),
                Span::styled(part, fg(LIGHT_GRAY)),
            ]);
        }
    }
    lines.extend(left_column(rows, width));
    lines
}

fn quote(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    wrap_spans(
        &[(
            "\"So you thought we were hiding behind Vercel's security? WRONG! We've rebuilt everything from zero with our Hawiyat Platform - making Vercel and AWS look like child's play. Our security engineers laugh at conventional protection measures. You don't stand a chance against our custom-built fortress.\"",
            fg(LIGHT_GRAY).add_modifier(Modifier::ITALIC),
        )],
        width,
    )
}

/// The terminal box: title bar, scrolled log, input row.
fn terminal_box(terminal: &HackerTerminal, focused: bool, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4).max(1);
    let border = if focused { fg(RED) } else { fg(DARK_RED) };
    let log_rows = TERMINAL_ROWS as usize - 3;

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let title = format!(" ● ● ●  {PROMPT} ");
    let fill = width.saturating_sub(title.chars().count() + 2);
    rows.push(vec![
        Span::styled("┌", border),
        Span::styled(title, fg(GRAY)),
        Span::styled(format!("{}┐", "─".repeat(fill)), border),
    ]);

    let wrapped: Vec<(String, bool)> = terminal
        .lines()
        .into_iter()
        .flat_map(|(text, echo)| wrap(text, inner).into_iter().map(move |part| (part, echo)))
        .collect();
    let skip = wrapped.len().saturating_sub(log_rows);
    let mut body: Vec<(String, bool)> = wrapped.into_iter().skip(skip).collect();
    body.resize(log_rows, (String::new(), false));
    for (text, echo) in body {
        let color = if echo { CYAN } else { GREEN };
        let pad = inner.saturating_sub(text.chars().count());
        rows.push(vec![
            Span::styled("│ ", border),
            Span::styled(text, fg(color)),
            Span::raw(" ".repeat(pad)),
            Span::styled(" │", border),
        ]);
    }

    let cursor = if terminal.cursor_visible() && focused { "█" } else { " " };
    let input: String = {
        let typed: Vec<char> = terminal.input().chars().collect();
        let room = inner.saturating_sub(3);
        typed[typed.len().saturating_sub(room)..].iter().collect()
    };
    let pad = inner.saturating_sub(input.chars().count() + 3);
    rows.push(vec![
        Span::styled("│ ", border),
        Span::styled("> ", fg(CYAN)),
        Span::styled(input, fg(GREEN)),
        Span::styled(cursor, fg(GREEN)),
        Span::raw(" ".repeat(pad)),
        Span::styled(" │", border),
    ]);
    rows.push(vec![Span::styled(
        format!("└{}┘", "─".repeat(width.saturating_sub(2))),
        border,
    )]);
    left_column(rows, width)
}

fn terminal(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = vec![ribbon("ELITE TECH")];
    lines.extend(blank(1));
    lines.extend(terminal_box(content.terminal, content.terminal_focused, width));
    let hint = if content.terminal_focused {
        "typing into the terminal · Esc to leave"
    } else {
        "Tab to hack in"
    };
    lines.push(centered(hint, fg(DIM_GRAY)));
    lines
}

fn call_to_action(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = wrap_spans(
        &[
            (
                "Arm yourself with your tools, sharpen your skills, and prepare for glory. Can you be the first to bring down our impenetrable Hawiyat fortress? ",
                fg(LIGHT_GRAY),
            ),
            ("We seriously doubt it.", fg(RED).add_modifier(Modifier::BOLD)),
        ],
        width,
    );
    lines.extend(blank(2));
    lines.push(centered(
        "[ HACK NOW ]",
        Style::new()
            .fg(Color::White)
            .bg(RED.over_black())
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(centered(content.platform_url, fg(DIM_GRAY)));
    lines.extend(blank(3));
    lines.push(centered(
        "Dedicate your hearts!",
        fg(BRIGHT_RED).add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ));
    lines.push(centered("Commander Erwin Smith", fg(WHITE)));
    lines.push(centered(
        "ESTIN Talents CTF Organizer & Hawiyat Platform Architect",
        fg(GRAY),
    ));
    lines
}

fn footer(content: &PageContent) -> Vec<Line<'static>> {
    let width = column_width(content.width);
    let mut lines = wrap_spans(
        &[(
            "You're receiving this because you claimed to know something about cybersecurity.",
            fg(DIM_GRAY),
        )],
        width,
    );
    lines.push(centered(
        "Spoiler alert: You don't.",
        fg(DIM_GRAY).add_modifier(Modifier::ITALIC),
    ));
    lines.extend(blank(1));
    lines.push(centered("© 2025 ESTIN Talents - Clearly Superior", fg(GRAY)));
    lines.push(centered("Unsubscribe · Privacy Policy", fg(DIM_GRAY)));
    lines
}

/// Thin bar across the top row showing how far the page is scrolled.
pub fn render_progress_bar(frame: &mut Frame, area: Rect, progress: f32) {
    let filled = (progress.clamp(0.0, 1.0) * area.width as f32).round() as u16;
    if filled == 0 || area.height == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y, filled, 1);
    let line = Line::from("▀".repeat(filled as usize)).style(fg(RED));
    frame.render_widget(Paragraph::new(line), bar);
}

/// Opaque startup overlay.
pub fn render_loading(frame: &mut Frame, area: Rect, title: &GlitchText, now_ms: u64) {
    const RING: [char; 4] = ['◜', '◝', '◞', '◟'];
    frame.render_widget(Clear, area);
    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), area);

    let ring = RING[(now_ms / 150) as usize % RING.len()];
    let lines = vec![
        centered(format!("{ring} {} {ring}", IconKind::Shield.glyph()), fg(RED)),
        Line::default(),
        glitch_line(title, now_ms, fg(RED).add_modifier(Modifier::BOLD)),
    ];
    let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect::new(area.x, top, area.width, (lines.len() as u16).min(area.height));
    frame.render_widget(Paragraph::new(lines), body);
}

/// Key hints on the bottom row.
pub fn render_help(frame: &mut Frame, area: Rect, background: &str, speed: &str) {
    if area.height == 0 {
        return;
    }
    let key = fg(RED).add_modifier(Modifier::BOLD);
    let text = fg(DIM_GRAY);
    let help = Line::from(vec![
        Span::styled("q", key),
        Span::styled(" quit  ", text),
        Span::styled("↑↓", key),
        Span::styled(" scroll  ", text),
        Span::styled("tab", key),
        Span::styled(" terminal  ", text),
        Span::styled("b", key),
        Span::styled(format!(" background: {background}  "), text),
        Span::styled("s", key),
        Span::styled(format!(" speed: {speed}"), text),
    ])
    .right_aligned();
    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(Paragraph::new(help), row);
}

/// Section top of the titan reveal, in logical units, with its height.
pub fn titan_bounds(document: &Document) -> Option<(f32, f32)> {
    document
        .span(Section::TitanReveal)
        .map(|span| (span.top_units(), TITAN_HEIGHT))
}
