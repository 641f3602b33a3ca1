//! Application configuration.
//!
//! Athlete defaults fill in whatever a workout leaves out; output settings
//! pick the summary format and language.

use crate::report::{Locale, OutputFormat};
use crate::training::types::{
    check_range, TrainingError, HEIGHT_CM_RANGE, LEN_STEP, STEP_LENGTH_M_RANGE, WEIGHT_KG_RANGE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Athlete defaults applied to workouts that omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteSettings {
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Step length in meters for running and walking
    pub step_length_m: f64,
}

impl Default for AthleteSettings {
    fn default() -> Self {
        Self {
            weight_kg: None,
            height_cm: None,
            step_length_m: LEN_STEP,
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Summary format
    pub format: OutputFormat,
    /// Summary language
    pub locale: Locale,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Athlete defaults
    pub athlete: AthleteSettings,
    /// Output settings
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            athlete: AthleteSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl AppConfig {
    /// Validate athlete values against the ranges workouts accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let athlete = &self.athlete;
        let invalid = |e: TrainingError| ConfigError::Invalid(format!("athlete.{}", e));

        if let Some(weight) = athlete.weight_kg {
            check_range("weight_kg", weight, &WEIGHT_KG_RANGE).map_err(invalid)?;
        }

        if let Some(height) = athlete.height_cm {
            check_range("height_cm", height, &HEIGHT_CM_RANGE).map_err(invalid)?;
        }

        check_range("step_length_m", athlete.step_length_m, &STEP_LENGTH_M_RANGE).map_err(invalid)?;

        Ok(())
    }
}

/// Get the application configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rusttrain", "RustTrain")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a file, falling back to defaults when it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
