//! Block-letter fonts for the hawiyat landing page.
//!
//! Glyphs are 5 lines tall and 5 columns wide. Digits cover the countdown;
//! the letter set covers the hero wordmark.

/// Height of every glyph in lines.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of every glyph in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Columns between adjacent glyphs.
const GLYPH_SPACING: usize = 1;

type Glyph = [&'static str; GLYPH_HEIGHT];

/// Digits 0-9.
pub const DIGITS: [Glyph; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

const LETTER_A: Glyph = [" ███ ", "█   █", "█████", "█   █", "█   █"];
const LETTER_H: Glyph = ["█   █", "█   █", "█████", "█   █", "█   █"];
const LETTER_I: Glyph = ["█████", "  █  ", "  █  ", "  █  ", "█████"];
const LETTER_T: Glyph = ["█████", "  █  ", "  █  ", "  █  ", "  █  "];
const LETTER_W: Glyph = ["█   █", "█   █", "█ █ █", "██ ██", "█   █"];
const LETTER_Y: Glyph = ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "];
const SPACE: Glyph = ["     "; GLYPH_HEIGHT];

/// Look up the glyph for `ch`, case-insensitively.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        d @ '0'..='9' => DIGITS.get(d as usize - '0' as usize),
        'A' => Some(&LETTER_A),
        'H' => Some(&LETTER_H),
        'I' => Some(&LETTER_I),
        'T' => Some(&LETTER_T),
        'W' => Some(&LETTER_W),
        'Y' => Some(&LETTER_Y),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Width in columns of `text` rendered with [`build_art`].
pub fn art_width(text: &str) -> usize {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    count * GLYPH_WIDTH + (count - 1) * GLYPH_SPACING
}

/// Render `text` as block letters.
///
/// Returns `None` if any character has no glyph, so callers can fall back to
/// plain text.
pub fn build_art(text: &str) -> Option<Vec<String>> {
    let glyphs: Vec<&Glyph> = text.chars().map(glyph).collect::<Option<_>>()?;

    let lines = (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|glyph| glyph[row])
                .collect::<Vec<_>>()
                .join(&" ".repeat(GLYPH_SPACING))
        })
        .collect();
    Some(lines)
}

/// Zero-pad to at least two digits.
pub fn format_number(value: u32) -> String {
    format!("{value:02}")
}

/// Render a countdown unit as block digits, zero-padded to two digits.
pub fn build_number_art(value: u32) -> Vec<String> {
    // Only digits are produced by format_number, so every glyph exists.
    build_art(&format_number(value)).unwrap_or_default()
}
