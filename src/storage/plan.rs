//! Workout plan files.
//!
//! A plan is a TOML file with one `[[workout]]` table per session:
//!
//! ```toml
//! [[workout]]
//! type = "running"
//! steps = 5000
//! minutes = 30
//! weight_kg = 85
//! ```

use crate::storage::config::AthleteSettings;
use crate::training::{TrainingError, Workout, WorkoutSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Parsed plan file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, rename = "workout")]
    pub workouts: Vec<WorkoutSpec>,
}

impl Plan {
    /// Parse a plan from TOML text.
    pub fn parse(content: &str) -> Result<Self, PlanError> {
        toml::from_str(content).map_err(|e| PlanError::ParseError(e.to_string()))
    }

    /// Resolve every entry against the athlete defaults.
    pub fn resolve(self, athlete: &AthleteSettings) -> Result<Vec<Workout>, PlanError> {
        self.workouts
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.into_workout(athlete)
                    .map_err(|source| PlanError::InvalidWorkout { index: index + 1, source })
            })
            .collect()
    }
}

/// Load and resolve a plan file.
pub fn load_plan(path: &Path, athlete: &AthleteSettings) -> Result<Vec<Workout>, PlanError> {
    let content = std::fs::read_to_string(path).map_err(|e| PlanError::IoError(e.to_string()))?;
    let plan = Plan::parse(&content)?;

    if plan.workouts.is_empty() {
        tracing::warn!("Plan {} contains no workouts", path.display());
    }

    plan.resolve(athlete)
}

/// Plan loading errors.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Workout #{index}: {source}")]
    InvalidWorkout {
        index: usize,
        #[source]
        source: TrainingError,
    },
}
