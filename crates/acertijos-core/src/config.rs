//! Configuration types for acertijos.
//!
//! [`Config::load`] layers an optional user file over the embedded defaults.
//! The user file is `$ACERTIJOS_CONFIG` when set, otherwise
//! `$XDG_CONFIG_HOME/acertijos/config.toml`, otherwise
//! `~/.config/acertijos/config.toml`. It is never created. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[pato]
window_minutes = 60
threshold      = 30

[venganza]
placeholder       = "X"
reverse_max_words = 4

[infractores]
podium_size     = 3
yearly_output   = "infractores.txt"
historic_output = "acertijo3.txt"

[diario]
keyword       = "misterio"
factorial_cap = 12
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, one section per acertijo that has tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pato: PatoConfig,
    #[serde(default)]
    pub venganza: VenganzaConfig,
    #[serde(default)]
    pub infractores: InfractoresConfig,
    #[serde(default)]
    pub diario: DiarioConfig,
}

/// `[pato]`: acertijo 1, the sliding energy window.
#[derive(Debug, Clone, Deserialize)]
pub struct PatoConfig {
    #[serde(default = "default_window_minutes")]
    pub window_minutes: i64,
    #[serde(default = "default_threshold")]
    pub threshold: u64,
}

fn default_window_minutes() -> i64 { 60 }
fn default_threshold() -> u64 { 30 }

impl Default for PatoConfig {
    fn default() -> Self {
        Self {
            window_minutes: default_window_minutes(),
            threshold: default_threshold(),
        }
    }
}

/// `[venganza]`: acertijo 2, the lyric cipher.
#[derive(Debug, Clone, Deserialize)]
pub struct VenganzaConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
    #[serde(default = "default_reverse_max_words")]
    pub reverse_max_words: usize,
}

fn default_placeholder() -> char { 'X' }
fn default_reverse_max_words() -> usize { 4 }

impl Default for VenganzaConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            reverse_max_words: default_reverse_max_words(),
        }
    }
}

/// `[infractores]`: acertijo 3, the infraction podiums.
#[derive(Debug, Clone, Deserialize)]
pub struct InfractoresConfig {
    #[serde(default = "default_podium_size")]
    pub podium_size: usize,
    #[serde(default = "default_yearly_output")]
    pub yearly_output: String,
    #[serde(default = "default_historic_output")]
    pub historic_output: String,
}

fn default_podium_size() -> usize { 3 }
fn default_yearly_output() -> String { "infractores.txt".to_string() }
fn default_historic_output() -> String { "acertijo3.txt".to_string() }

impl Default for InfractoresConfig {
    fn default() -> Self {
        Self {
            podium_size: default_podium_size(),
            yearly_output: default_yearly_output(),
            historic_output: default_historic_output(),
        }
    }
}

/// `[diario]`: acertijo 5, keyword count and sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct DiarioConfig {
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(default = "default_factorial_cap")]
    pub factorial_cap: u32,
}

fn default_keyword() -> String { "misterio".to_string() }
fn default_factorial_cap() -> u32 { 12 }

impl Default for DiarioConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            factorial_cap: default_factorial_cap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user file (if any) layered on top of the built-in defaults.
    ///
    /// A broken user file must never stop a puzzle from running, so any
    /// failure is logged and the defaults are returned instead.
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unusable config file");
                Self::defaults()
            }
        }
    }

    /// Layer `path` over the defaults. A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("ACERTIJOS_CONFIG") {
        return PathBuf::from(explicit);
    }
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("acertijos")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
