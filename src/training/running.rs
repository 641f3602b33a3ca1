//! Running sessions.

use super::calculator::CaloriesCalculator;
use super::types::{Training, TrainingKind, TrainingResult, M_IN_KM, MIN_IN_HOURS};
use std::time::Duration;

/// Multiplier applied to mean speed.
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Shift added to the scaled mean speed.
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// A running session counted in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub training: Training,
}

impl Running {
    /// Create a running session with the default step length.
    pub fn new(steps: u32, duration: Duration, weight: f64) -> Self {
        Self {
            training: Training::new(steps, duration, weight),
        }
    }

    /// Check the shared fields.
    pub fn validate(&self) -> TrainingResult<()> {
        self.training.validate()
    }
}

impl CaloriesCalculator for Running {
    fn kind(&self) -> TrainingKind {
        TrainingKind::Running
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn calories(&self) -> f64 {
        let t = &self.training;
        let per_minute = CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT;
        per_minute * (t.weight / M_IN_KM) * t.hours() * MIN_IN_HOURS
    }
}
