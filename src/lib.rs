//! RustTrain - Workout Statistics Calculator
//!
//! Computes distance, mean speed and calories burned for running, walking
//! and swimming sessions, and renders a summary of each session.

pub mod cli;
pub mod report;
pub mod storage;
pub mod training;

// Re-export commonly used types
pub use report::{InfoMessage, Locale, OutputFormat};
pub use storage::config::AppConfig;
pub use training::{read_data, CaloriesCalculator, Running, Swimming, Training, Walking, Workout};
