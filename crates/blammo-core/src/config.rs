//! Configuration types for blammo.
//!
//! [`Config::load`] layers an optional TOML file and `BLAMMO__*` environment
//! variables on top of the built-in defaults. [`Config::defaults`] returns
//! the defaults alone (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

use crate::types::Level;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[log]
name                  = "app"
terminate_empty_lines = false

[levels]
debug = false
info  = true
warn  = true
error = true

[sink]
kind = "stderr"
"#;

/// Prefix for environment overrides, e.g. `BLAMMO__LEVELS__DEBUG=true`.
pub const ENV_PREFIX: &str = "BLAMMO";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level logger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub sink: SinkConfig,
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Name of the root path segment.
    #[serde(default = "default_name")]
    pub name: String,
    /// End the line of events that carry no text.
    #[serde(default)]
    pub terminate_empty_lines: bool,
}

fn default_name() -> String { "app".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            terminate_empty_lines: false,
        }
    }
}

/// `[levels]` section: which severities get a writer.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelsConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_enabled")]
    pub info: bool,
    #[serde(default = "default_enabled")]
    pub warn: bool,
    #[serde(default = "default_enabled")]
    pub error: bool,
}

fn default_enabled() -> bool { true }

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            debug: false,
            info: default_enabled(),
            warn: default_enabled(),
            error: default_enabled(),
        }
    }
}

impl LevelsConfig {
    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warn => self.warn,
            Level::Error => self.error,
        }
    }

    /// Enables `level` and everything above it, disabling the rest.
    pub fn set_minimum(&mut self, level: Level) {
        self.debug = Level::Debug >= level;
        self.info = Level::Info >= level;
        self.warn = Level::Warn >= level;
        self.error = true;
    }
}

/// Where rendered lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Stdout,
    #[default]
    Stderr,
    File,
}

/// `[sink]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub kind: SinkKind,
    /// Target file; required when `kind = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `file` if given, then environment overrides.
    pub fn load(file: Option<&std::path::Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "loading logger config");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.sink.kind == SinkKind::File && self.sink.path.is_none() {
            anyhow::bail!("sink.kind = \"file\" requires sink.path");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
