//! Character constants for background layers.

/// Icons the floating layer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Shield,
    Lock,
    Code,
    Zap,
    Skull,
    Server,
    Bomb,
    Bug,
    Cpu,
}

impl IconKind {
    pub const ALL: [IconKind; 9] = [
        IconKind::Shield,
        IconKind::Lock,
        IconKind::Code,
        IconKind::Zap,
        IconKind::Skull,
        IconKind::Server,
        IconKind::Bomb,
        IconKind::Bug,
        IconKind::Cpu,
    ];

    /// Single-width glyph standing in for the icon.
    pub fn glyph(self) -> char {
        match self {
            IconKind::Shield => '⛉',
            IconKind::Lock => '⚿',
            IconKind::Code => 'λ',
            IconKind::Zap => 'ϟ',
            IconKind::Skull => '☠',
            IconKind::Server => '▤',
            IconKind::Bomb => '◍',
            IconKind::Bug => '¤',
            IconKind::Cpu => '▣',
        }
    }
}

/// Ember characters from smallest to largest.
pub const EMBER_CHARS: &[char] = &['·', '•', '●'];

/// Flicker line characters, thin then thick.
pub const BAND_CHARS: &[char] = &['─', '━'];
