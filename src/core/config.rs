//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termlife/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::grid::MAX_DIMENSION;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LifeConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub alive_glyph: Option<char>,
    pub dead_glyph: Option<char>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_TICK_MS: u64 = 1000 / 3;
pub const DEFAULT_ALIVE_GLYPH: char = 'x';
pub const DEFAULT_DEAD_GLYPH: char = ' ';

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub alive_glyph: char,
    pub dead_glyph: char,
}

/// Values given on the command line. `None` = flag not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub tick_ms: Option<u64>,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.termlife/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termlife").join("config.toml"))
}

/// Load config from `~/.termlife/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LifeConfig::default()`.
pub fn load_config() -> Result<LifeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LifeConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same missing-file behavior as [`load_config`].
pub fn load_config_from(path: &Path) -> Result<LifeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LifeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Parse and validate config TOML.
pub fn parse_config(contents: &str) -> Result<LifeConfig, ConfigError> {
    let config: LifeConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    if config.board.width == Some(0) || config.board.height == Some(0) {
        return Err(ConfigError::Invalid(
            "board width and height must be positive".to_string(),
        ));
    }
    let too_large = |side: Option<usize>| side.is_some_and(|n| n > MAX_DIMENSION);
    if too_large(config.board.width) || too_large(config.board.height) {
        return Err(ConfigError::Invalid(format!(
            "board width and height must be at most {MAX_DIMENSION}"
        )));
    }
    if config.timing.tick_ms == Some(0) {
        return Err(ConfigError::Invalid("tick_ms must be positive".to_string()));
    }
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# termlife Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [board]
# width = 40
# height = 20
# seed = 42                 # Fixed seed for reproducible boards (or TERMLIFE_SEED)

# [timing]
# tick_ms = 333             # Generation interval (or TERMLIFE_TICK_MS)

# [display]
# alive_glyph = "x"
# dead_glyph = " "
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: not a number ({:?})", name, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LifeConfig, cli: &CliOverrides) -> ResolvedConfig {
    let width = cli
        .width
        .or(config.board.width)
        .unwrap_or(DEFAULT_WIDTH);
    let height = cli
        .height
        .or(config.board.height)
        .unwrap_or(DEFAULT_HEIGHT);

    // Tick: CLI → env → config → default
    let tick_ms = cli
        .tick_ms
        .or_else(|| env_number("TERMLIFE_TICK_MS"))
        .or(config.timing.tick_ms)
        .unwrap_or(DEFAULT_TICK_MS)
        .max(1);

    // Seed: CLI → env → config → OS entropy
    let seed = cli
        .seed
        .or_else(|| env_number("TERMLIFE_SEED"))
        .or(config.board.seed);

    ResolvedConfig {
        width,
        height,
        seed,
        tick_interval: Duration::from_millis(tick_ms),
        alive_glyph: config.display.alive_glyph.unwrap_or(DEFAULT_ALIVE_GLYPH),
        dead_glyph: config.display.dead_glyph.unwrap_or(DEFAULT_DEAD_GLYPH),
    }
}
