//! TOML Configuration File Support
//!
//! Carousel settings live in an optional TOML file at
//! `~/.config/buddy-carousel/carousel.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Layout preset defaults
//!
//! The layout mode is resolved first (environment, then file, then the
//! windowed default) and selects the preset that the remaining values
//! override.
//!
//! # Example Configuration
//!
//! ```toml
//! [rotation]
//! tick_interval_ms = 3000
//!
//! [layout]
//! mode = "windowed"      # or "full-row"
//! window_radius = 2
//! transition_ms = 500
//! easing = "ease-in-out" # or "linear"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::EasingFunction;
use crate::window::DEFAULT_WINDOW_RADIUS;

/// Largest window radius accepted from configuration
pub const MAX_WINDOW_RADIUS: usize = 8;

/// Environment variable naming an explicit config file
pub const ENV_CONFIG_PATH: &str = "BUDDY_CAROUSEL_CONFIG";
/// Environment variable overriding the layout mode
pub const ENV_LAYOUT: &str = "BUDDY_CAROUSEL_LAYOUT";
/// Environment variable overriding the tick interval (milliseconds)
pub const ENV_TICK_MS: &str = "BUDDY_CAROUSEL_TICK_MS";
/// Environment variable overriding the window radius
pub const ENV_WINDOW_RADIUS: &str = "BUDDY_CAROUSEL_WINDOW_RADIUS";
/// Environment variable overriding the transition duration (milliseconds)
pub const ENV_TRANSITION_MS: &str = "BUDDY_CAROUSEL_TRANSITION_MS";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where the effective configuration came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Layout Mode
// =============================================================================

/// How items are laid out by a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// A window of `2 * radius + 1` items centred on the active one
    #[default]
    Windowed,
    /// Every item in one row; items themselves are clickable
    FullRow,
}

impl LayoutMode {
    /// Parse the names used in config files and the environment
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "windowed" | "window" => Some(Self::Windowed),
            "full-row" | "fullrow" | "row" => Some(Self::FullRow),
            _ => None,
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windowed => write!(f, "windowed"),
            Self::FullRow => write!(f, "full-row"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Rotation section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationToml {
    /// Time between automatic advances in milliseconds
    pub tick_interval_ms: Option<u64>,
}

/// Layout section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutToml {
    /// Layout mode
    pub mode: Option<LayoutMode>,

    /// Items shown either side of the active one (windowed layout)
    pub window_radius: Option<usize>,

    /// Slide transition duration in milliseconds (0 disables)
    pub transition_ms: Option<u64>,

    /// Slide transition easing curve
    pub easing: Option<EasingFunction>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselToml {
    /// Rotation configuration section
    pub rotation: RotationToml,

    /// Layout configuration section
    pub layout: LayoutToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Effective carousel configuration
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Layout mode
    pub layout: LayoutMode,

    /// Time between automatic advances
    pub tick_interval: Duration,

    /// Items shown either side of the active one (windowed layout)
    pub window_radius: usize,

    /// Slide transition duration
    pub transition: Duration,

    /// Slide transition easing curve
    pub easing: EasingFunction,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::windowed()
    }
}

impl CarouselConfig {
    /// Five-item window, slow rotation, long slide
    #[must_use]
    pub fn windowed() -> Self {
        Self {
            layout: LayoutMode::Windowed,
            tick_interval: Duration::from_millis(3000),
            window_radius: DEFAULT_WINDOW_RADIUS,
            transition: Duration::from_millis(500),
            easing: EasingFunction::EaseInOut,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }

    /// Every item in a row, quicker rotation, short slide
    #[must_use]
    pub fn full_row() -> Self {
        Self {
            layout: LayoutMode::FullRow,
            tick_interval: Duration::from_millis(2500),
            transition: Duration::from_millis(300),
            ..Self::windowed()
        }
    }

    /// Preset for a layout mode
    #[must_use]
    pub fn for_layout(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Windowed => Self::windowed(),
            LayoutMode::FullRow => Self::full_row(),
        }
    }

    /// Override the tick interval
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Override the window radius
    #[must_use]
    pub fn with_window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    /// Override the transition duration
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Check values that would make the carousel misbehave
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero tick interval or a
    /// window radius above [`MAX_WINDOW_RADIUS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "tick interval must be greater than zero".to_string(),
            ));
        }
        if self.window_radius > MAX_WINDOW_RADIUS {
            return Err(ConfigError::ValidationError(format!(
                "window radius {} exceeds maximum {MAX_WINDOW_RADIUS}",
                self.window_radius
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/buddy-carousel/carousel.toml` or
/// `~/.config/buddy-carousel/carousel.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("buddy-carousel").join("carousel.toml"))
}

/// Load configuration from all sources with proper priority
///
/// Uses `BUDDY_CAROUSEL_CONFIG` as the file path when set, otherwise
/// [`default_config_path`].
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if the
/// resulting values are invalid. A missing config file is not an error.
pub fn load_config() -> Result<CarouselConfig, ConfigError> {
    let path = std::env::var(ENV_CONFIG_PATH)
        .ok()
        .map(PathBuf::from)
        .or_else(default_config_path);
    load_config_from_path(path)
}

/// Load configuration from a specific path plus the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the resulting values are invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<CarouselConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<CarouselConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut file_config = None;

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;
            let toml_config: CarouselToml = toml::from_str(&toml_content)?;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
            file_config = Some((config_path.clone(), toml_config));
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    let env_layout = env(ENV_LAYOUT).and_then(|v| {
        let parsed = LayoutMode::parse(&v);
        if parsed.is_none() {
            tracing::warn!(value = %v, "Ignoring unknown {ENV_LAYOUT}");
        }
        parsed
    });
    let layout = env_layout
        .or_else(|| file_config.as_ref().and_then(|(_, t)| t.layout.mode))
        .unwrap_or_default();

    let mut config = CarouselConfig::for_layout(layout);

    if let Some((config_path, toml_config)) = file_config {
        apply_toml_config(&mut config, &toml_config);
        config.config_file_path = Some(config_path);
        config.source = ConfigSource::File;
    }

    if env_layout.is_some() {
        config.source = ConfigSource::Env;
    }
    apply_env_config(&mut config, &env);

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut CarouselConfig, toml: &CarouselToml) {
    if let Some(ms) = toml.rotation.tick_interval_ms {
        config.tick_interval = Duration::from_millis(ms);
    }
    if let Some(radius) = toml.layout.window_radius {
        config.window_radius = radius;
    }
    if let Some(ms) = toml.layout.transition_ms {
        config.transition = Duration::from_millis(ms);
    }
    if let Some(easing) = toml.layout.easing {
        config.easing = easing;
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut CarouselConfig, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ms) = parse_env::<u64, _>(env, ENV_TICK_MS) {
        config.tick_interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(radius) = parse_env::<usize, _>(env, ENV_WINDOW_RADIUS) {
        config.window_radius = radius;
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_env::<u64, _>(env, ENV_TRANSITION_MS) {
        config.transition = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
}

fn parse_env<T, F>(env: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment override");
            None
        }
    }
}
