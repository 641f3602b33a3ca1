//! Pool swimming sessions.
//!
//! Distance is derived from the stroke count, while mean speed comes from
//! the pool geometry (pool length times lengths swum).

use super::calculator::CaloriesCalculator;
use super::types::{Training, TrainingKind, TrainingResult, M_IN_KM};
use std::time::Duration;

/// Length of one stroke in meters.
pub const SWIMMING_LEN_STEP: f64 = 1.38;
/// Shift added to mean speed.
pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Multiplier applied to body weight.
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A swimming session counted in strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub training: Training,
    /// Pool length in meters
    pub length_pool: u32,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    /// Create a swimming session with the default stroke length.
    pub fn new(strokes: u32, duration: Duration, weight: f64, length_pool: u32, count_pool: u32) -> Self {
        Self {
            training: Training::new(strokes, duration, weight).with_len_step(SWIMMING_LEN_STEP),
            length_pool,
            count_pool,
        }
    }

    /// Check the shared fields.
    pub fn validate(&self) -> TrainingResult<()> {
        self.training.validate()
    }
}

impl CaloriesCalculator for Swimming {
    fn kind(&self) -> TrainingKind {
        TrainingKind::Swimming
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn mean_speed(&self) -> f64 {
        let hours = self.training.hours();
        if hours == 0.0 {
            return 0.0;
        }
        self.length_pool as f64 * self.count_pool as f64 / M_IN_KM / hours
    }

    fn calories(&self) -> f64 {
        let t = &self.training;
        (self.mean_speed() + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
            * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
            * t.weight
            * t.hours()
    }
}
