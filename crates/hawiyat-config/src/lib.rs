//! Configuration for the hawiyat landing page.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! field has a default, so a missing file or a partial one is valid.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use directories::ProjectDirs;
use hawiyat_core::{AnimationSpeed, BackgroundStyle};
use serde::{Deserialize, Serialize};

/// Where the competition actually runs.
pub const DEFAULT_PLATFORM_URL: &str =
    "http://estintal-estin-hack-talents-yq6jbn-df8f46-34-31-201-166.traefik.me/";

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "hawiyat.log";

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Where a loaded config came from.
///
/// Loading happens before logging is set up, so the caller reports this once
/// it can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path yet; defaults were used.
    Missing(PathBuf),
    /// The platform has no config directory; defaults were used.
    NoConfigDir,
}

/// Countdown settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Moment the competition starts.
    pub target: DateTime<Utc>,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

fn default_target() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames per second of the render loop.
    pub fps: u16,
    pub speed: AnimationSpeed,
    pub background: BackgroundStyle,
    /// Fixed random seed; a fresh one is drawn on every start when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            speed: AnimationSpeed::default(),
            background: BackgroundStyle::default(),
            seed: None,
        }
    }
}

impl AnimationConfig {
    /// Frame period in milliseconds, with fps clamped to 1..=120.
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.fps.clamp(1, 120))
    }
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file; defaults to `hawiyat.log` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub platform_url: String,
    pub countdown: CountdownConfig,
    pub animation: AnimationConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform_url: DEFAULT_PLATFORM_URL.to_string(),
            countdown: CountdownConfig::default(),
            animation: AnimationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dz", "estin", "hawiyat")
    }

    /// Default location of the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Default location of the log file.
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
    }

    /// Log file to write to: the configured one, else the default location.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(Self::default_log_path)
    }

    /// Load from the default location, falling back to defaults when the
    /// platform has no config directory.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::default(), ConfigSource::NoConfigDir)),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigSource::Missing(path.to_path_buf())));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the default location and return the path written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hawiyat-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.platform_url, DEFAULT_PLATFORM_URL);
        assert_eq!(config.countdown.target.to_rfc3339(), "2025-05-15T12:00:00+00:00");
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.animation.seed, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [countdown]
            target = "2026-12-01T09:30:00Z"

            [animation]
            speed = "fast"
            background = "particles"
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.countdown.target.to_rfc3339(), "2026-12-01T09:30:00+00:00");
        assert_eq!(config.animation.speed, AnimationSpeed::Fast);
        assert_eq!(config.animation.background, BackgroundStyle::Particles);
        assert_eq!(config.animation.seed, Some(42));
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.platform_url, DEFAULT_PLATFORM_URL);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        assert!(Config::from_toml("[animation]\nspeed = \"ludicrous\"\n").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("does-not-exist.toml");
        let (config, source) = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Missing(path));
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip/config.toml");
        let mut config = Config::default();
        config.animation.seed = Some(1337);
        config.log.file = Some(PathBuf::from("/tmp/hawiyat-test.log"));
        config.save_to(&path).unwrap();

        let (loaded, source) = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(source, ConfigSource::File(path.clone()));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let path = scratch_path("broken.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "fps = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_frame_ms_clamps_fps() {
        let mut animation = AnimationConfig::default();
        assert_eq!(animation.frame_ms(), 33);
        animation.fps = 0;
        assert_eq!(animation.frame_ms(), 1000);
        animation.fps = 1000;
        assert_eq!(animation.frame_ms(), 8);
    }
}
