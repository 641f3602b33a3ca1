//! Shared training types and errors.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour.
pub const MIN_IN_HOURS: f64 = 60.0;
/// Length of one step in meters.
pub const LEN_STEP: f64 = 0.65;
/// Centimeters in one meter.
pub const CM_IN_M: f64 = 100.0;

/// Accepted athlete weight in kilograms.
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 1.0..=500.0;
/// Accepted athlete height in centimeters.
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 30.0..=300.0;
/// Accepted step length in meters.
pub const STEP_LENGTH_M_RANGE: RangeInclusive<f64> = 0.1..=3.0;
/// Accepted session length in minutes (one week).
pub const MINUTES_RANGE: RangeInclusive<f64> = 0.0..=10_080.0;

/// Kind of training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingKind {
    /// Running, counted in steps
    Running,
    /// Walking, counted in steps
    Walking,
    /// Pool swimming, counted in strokes
    Swimming,
}

impl TrainingKind {
    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            TrainingKind::Running => "Running",
            TrainingKind::Walking => "Walking",
            TrainingKind::Swimming => "Swimming",
        }
    }

    /// Russian display name.
    pub fn name_ru(&self) -> &'static str {
        match self {
            TrainingKind::Running => "Бег",
            TrainingKind::Walking => "Ходьба",
            TrainingKind::Swimming => "Плавание",
        }
    }
}

impl std::fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Common record shared by every training kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Number of actions performed (steps or strokes)
    pub action: u32,
    /// Distance covered by one action, in meters
    pub len_step: f64,
    /// Session duration
    pub duration: Duration,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl Training {
    /// Create a training record with the default step length.
    pub fn new(action: u32, duration: Duration, weight: f64) -> Self {
        Self {
            action,
            len_step: LEN_STEP,
            duration,
            weight,
        }
    }

    /// Override the distance covered by one action.
    pub fn with_len_step(mut self, len_step: f64) -> Self {
        self.len_step = len_step;
        self
    }

    /// Duration in hours.
    pub fn hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }

    /// Distance covered in kilometers.
    pub fn distance(&self) -> f64 {
        self.action as f64 * self.len_step / M_IN_KM
    }

    /// Mean speed in km/h, zero for an empty session.
    pub fn mean_speed(&self) -> f64 {
        let hours = self.hours();
        if hours == 0.0 {
            return 0.0;
        }
        self.distance() / hours
    }

    /// Check the shared fields for values no formula can use.
    pub fn validate(&self) -> TrainingResult<()> {
        check_non_negative("weight", self.weight)?;
        check_non_negative("step length", self.len_step)?;
        Ok(())
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> TrainingResult<()> {
    if !value.is_finite() {
        return Err(TrainingError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(TrainingError::Negative { field, value });
    }
    Ok(())
}

/// Reject values that are not finite or fall outside `range`.
pub fn check_range(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> TrainingResult<()> {
    if !value.is_finite() {
        return Err(TrainingError::NotFinite { field });
    }
    if !range.contains(&value) {
        return Err(TrainingError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Errors raised when a workout record cannot be evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum TrainingError {
    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A numeric field is below zero.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// A numeric field is outside its accepted range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field required by the training kind is missing.
    #[error("{kind} workout requires {field}")]
    MissingField {
        kind: TrainingKind,
        field: &'static str,
    },
}

/// Result type for training operations.
pub type TrainingResult<T> = Result<T, TrainingError>;
