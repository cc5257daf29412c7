//! Command-line arguments.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use hawiyat_config::Config;
use hawiyat_core::BackgroundStyle;

/// Attack on Hawiyat: the ESTIN Talents CTF landing page, in your terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "hawiyat", version, about)]
pub struct Cli {
    /// Read configuration from PATH instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Countdown target as an RFC 3339 timestamp.
    #[arg(long, value_name = "RFC3339")]
    pub target: Option<DateTime<Utc>>,

    /// Seed for the background layers.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Frames per second.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=120))]
    pub fps: Option<u16>,

    /// Hide the particle field.
    #[arg(long)]
    pub no_particles: bool,

    /// Hide the floating icons.
    #[arg(long)]
    pub no_icons: bool,

    /// Write logs to PATH.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write the effective configuration and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Override `config` with the values given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(target) = self.target {
            config.countdown.target = target;
        }
        if let Some(seed) = self.seed {
            config.animation.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.animation.fps = fps;
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        config.animation.background =
            restrict(config.animation.background, self.no_particles, self.no_icons);
    }
}

/// Drop the layers the flags hide from `style`.
fn restrict(style: BackgroundStyle, no_particles: bool, no_icons: bool) -> BackgroundStyle {
    let particles = style.shows_particles() && !no_particles;
    let icons = style.shows_icons() && !no_icons;
    match (particles, icons) {
        (true, true) => BackgroundStyle::Full,
        (true, false) => BackgroundStyle::Particles,
        (false, true) => BackgroundStyle::Icons,
        (false, false) => BackgroundStyle::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "hawiyat",
            "--target",
            "2030-01-01T00:00:00Z",
            "--seed",
            "42",
            "--fps",
            "60",
            "--no-icons",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.fps, Some(60));
        assert!(cli.no_icons);
        assert!(!cli.no_particles);
        assert_eq!(
            cli.target.map(|t| t.to_rfc3339()),
            Some("2030-01-01T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_target() {
        assert!(Cli::try_parse_from(["hawiyat", "--target", "tomorrow"]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_fps() {
        assert!(Cli::try_parse_from(["hawiyat", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["hawiyat", "--fps", "500"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::try_parse_from(["hawiyat", "--seed", "7", "--fps", "12"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.animation.seed, Some(7));
        assert_eq!(config.animation.fps, 12);
        assert_eq!(config.animation.background, BackgroundStyle::Full);
    }

    #[test]
    fn test_apply_keeps_config_without_flags() {
        let cli = Cli::try_parse_from(["hawiyat"]).unwrap();
        let mut config = Config::default();
        config.animation.fps = 45;
        cli.apply(&mut config);
        assert_eq!(config.animation.fps, 45);
        assert_eq!(config.countdown, Config::default().countdown);
    }

    #[test]
    fn test_restrict_layers() {
        assert_eq!(restrict(BackgroundStyle::Full, true, false), BackgroundStyle::Icons);
        assert_eq!(restrict(BackgroundStyle::Full, false, true), BackgroundStyle::Particles);
        assert_eq!(restrict(BackgroundStyle::Particles, false, true), BackgroundStyle::Particles);
        assert_eq!(restrict(BackgroundStyle::Icons, true, false), BackgroundStyle::Icons);
        assert_eq!(restrict(BackgroundStyle::Full, true, true), BackgroundStyle::None);
    }
}
