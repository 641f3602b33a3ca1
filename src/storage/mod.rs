//! Storage module for configuration and plan files.

pub mod config;
pub mod plan;

pub use config::{load_config, load_config_from, save_config_to, AppConfig, AthleteSettings, ConfigError, OutputSettings};
pub use plan::{load_plan, Plan, PlanError};
