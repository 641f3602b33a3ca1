//! Walking sessions.

use super::calculator::CaloriesCalculator;
use super::types::{check_range, Training, TrainingKind, TrainingResult, CM_IN_M, HEIGHT_CM_RANGE, MIN_IN_HOURS};
use std::time::Duration;

/// Multiplier applied to body weight.
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Multiplier applied to the speed/height ratio.
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// Conversion factor from km/h to m/s.
pub const KMH_IN_MSEC: f64 = 0.278;

/// A walking session counted in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub training: Training,
    /// Athlete height in meters
    pub height: f64,
}

impl Walking {
    /// Create a walking session with the default step length.
    pub fn new(steps: u32, duration: Duration, weight: f64, height: f64) -> Self {
        Self {
            training: Training::new(steps, duration, weight),
            height,
        }
    }

    /// Check the shared fields and a known height (zero means unknown).
    pub fn validate(&self) -> TrainingResult<()> {
        self.training.validate()?;
        if self.height == 0.0 {
            return Ok(());
        }
        let meters = HEIGHT_CM_RANGE.start() / CM_IN_M..=HEIGHT_CM_RANGE.end() / CM_IN_M;
        check_range("height", self.height, &meters)
    }
}

impl CaloriesCalculator for Walking {
    fn kind(&self) -> TrainingKind {
        TrainingKind::Walking
    }

    fn training(&self) -> &Training {
        &self.training
    }

    /// Zero when height is unknown.
    fn calories(&self) -> f64 {
        if self.height == 0.0 {
            return 0.0;
        }

        let t = &self.training;
        let speed_ms_squared = (self.mean_speed() * KMH_IN_MSEC).powi(2);
        let minutes = t.hours() * MIN_IN_HOURS;

        (CALORIES_WEIGHT_MULTIPLIER * t.weight
            + (speed_ms_squared / self.height) * CALORIES_SPEED_HEIGHT_MULTIPLIER * t.weight)
            * minutes
    }
}
