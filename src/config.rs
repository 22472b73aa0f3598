use crate::render::{ColorMode, RenderMode};
use crate::scene::smoke::SmokeParams;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const INTERVAL_RANGE: RangeInclusive<u64> = 10..=2000;
pub const DEFAULT_TIME_STEP: f64 = 0.01;
pub const TIME_STEP_RANGE: RangeInclusive<f64> = 0.0001..=0.5;

/// User configuration loaded from config file.
/// All fields are optional — CLI flags override config, config overrides defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default render mode
    pub render: Option<RenderModeConfig>,
    /// Default color mode
    pub color: Option<ColorModeConfig>,
    /// Milliseconds between animation ticks
    pub interval_ms: Option<u64>,
    /// Time-of-day change per tick
    pub time_step: Option<f64>,
    /// Fixed random seed for reproducible smoke
    pub seed: Option<u64>,
    /// Hide status bar
    pub clean: Option<bool>,
    /// Color quantization step (0 = off, 4/8/16 = coarser colors for less output)
    pub color_quant: Option<u8>,
    /// Smoke drift tuning
    pub smoke: SmokeConfig,
}

/// `[smoke]` table. Unset keys keep the built-in drift.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    pub drift_x: Option<f64>,
    pub drift_y: Option<f64>,
    pub jitter: Option<f64>,
    pub radius_divisor: Option<f64>,
}

impl SmokeConfig {
    /// Resolve against the defaults, clamping values the animation cannot use.
    pub fn params(&self) -> SmokeParams {
        let defaults = SmokeParams::default();
        let jitter = self.jitter.unwrap_or(defaults.jitter);
        let radius_divisor = self.radius_divisor.unwrap_or(defaults.radius_divisor);
        SmokeParams {
            drift_x: self.drift_x.unwrap_or(defaults.drift_x),
            drift_y: self.drift_y.unwrap_or(defaults.drift_y),
            jitter: clamp_setting("smoke.jitter", jitter, &(0.0..=50.0)),
            radius_divisor: clamp_setting("smoke.radius_divisor", radius_divisor, &(0.1..=100.0)),
            ..defaults
        }
    }
}

/// Render mode names for config file (kebab-case friendly)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderModeConfig {
    HalfBlock,
    Ascii,
}

impl From<RenderModeConfig> for RenderMode {
    fn from(c: RenderModeConfig) -> Self {
        match c {
            RenderModeConfig::HalfBlock => RenderMode::HalfBlock,
            RenderModeConfig::Ascii => RenderMode::Ascii,
        }
    }
}

/// Color mode names for config file (kebab-case friendly)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorModeConfig {
    Mono,
    Ansi16,
    Ansi256,
    TrueColor,
}

impl From<ColorModeConfig> for ColorMode {
    fn from(c: ColorModeConfig) -> Self {
        match c {
            ColorModeConfig::Mono => ColorMode::Mono,
            ColorModeConfig::Ansi16 => ColorMode::Ansi16,
            ColorModeConfig::Ansi256 => ColorMode::Ansi256,
            ColorModeConfig::TrueColor => ColorMode::TrueColor,
        }
    }
}

/// Clamp `value` into `range`, warning on stderr when it had to move.
/// Only call this before the terminal is switched to the alternate screen.
pub fn clamp_setting<T>(name: &str, value: T, range: &RangeInclusive<T>) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let (lo, hi) = (*range.start(), *range.end());
    // NaN compares false against both bounds and lands on `lo`
    let clamped = if value > hi {
        hi
    } else if value >= lo {
        value
    } else {
        lo
    };
    if clamped != value {
        eprintln!("Warning: {name} = {value} is out of range, using {clamped}");
    }
    clamped
}

/// Get the config file path: ~/.config/cottage/config.toml
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cottage").join("config.toml"))
}

/// Parse config text. Errors carry the toml diagnostic.
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load config from file. Returns default config if file doesn't exist.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    match parse_config(&contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to parse {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Generate a default config file with all options commented out
pub fn default_config_string() -> String {
    r#"# cottage configuration
# Use --show-config to see the active config file path.
# CLI flags override these settings.

# Render mode: half-block, ascii
# render = "half-block"

# Color mode: mono, ansi16, ansi256, true-color
# color = "true-color"

# Milliseconds between animation ticks (10-2000)
# interval_ms = 100

# Time-of-day change per tick; one full day/night cycle takes 2 / time_step ticks
# time_step = 0.01

# Fixed random seed for reproducible smoke (omit for a fresh sky every run)
# seed = 42

# Hide status bar
# clean = false

# Color quantization step (0 = off, 4/8/16 = coarser colors, less output)
# color_quant = 0

[smoke]
# Drift per tick in scene units (the scene is 300 x 300)
# drift_x = 0.8
# drift_y = -0.8
# Each puff wobbles by up to +/- jitter per tick
# jitter = 0.4
# Puff radius is age / radius_divisor
# radius_divisor = 5.0
"#
    .to_string()
}
