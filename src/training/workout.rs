//! Workout records and their plan-file representation.

use super::calculator::CaloriesCalculator;
use super::running::Running;
use super::swimming::{Swimming, SWIMMING_LEN_STEP};
use super::types::{
    check_range, Training, TrainingError, TrainingKind, TrainingResult, CM_IN_M, HEIGHT_CM_RANGE,
    MINUTES_RANGE, STEP_LENGTH_M_RANGE, WEIGHT_KG_RANGE,
};
use super::walking::Walking;
use crate::storage::config::AthleteSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Any supported workout.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// Check every field the formulas depend on.
    pub fn validate(&self) -> TrainingResult<()> {
        match self {
            Workout::Running(w) => w.validate(),
            Workout::Walking(w) => w.validate(),
            Workout::Swimming(w) => w.validate(),
        }
    }

    fn inner(&self) -> &dyn CaloriesCalculator {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl CaloriesCalculator for Workout {
    fn kind(&self) -> TrainingKind {
        self.inner().kind()
    }

    fn training(&self) -> &Training {
        self.inner().training()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.inner().calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<Walking> for Workout {
    fn from(w: Walking) -> Self {
        Workout::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Workout as written in a plan file.
///
/// Weight, height and step length fall back to the athlete settings when
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutSpec {
    Running {
        steps: u32,
        minutes: f64,
        #[serde(default)]
        weight_kg: Option<f64>,
        #[serde(default)]
        step_length_m: Option<f64>,
    },
    Walking {
        steps: u32,
        minutes: f64,
        #[serde(default)]
        weight_kg: Option<f64>,
        #[serde(default)]
        height_cm: Option<f64>,
        #[serde(default)]
        step_length_m: Option<f64>,
    },
    Swimming {
        strokes: u32,
        minutes: f64,
        #[serde(default)]
        weight_kg: Option<f64>,
        length_pool: u32,
        count_pool: u32,
    },
}

impl WorkoutSpec {
    /// Resolve defaults and build a validated workout.
    pub fn into_workout(self, athlete: &AthleteSettings) -> TrainingResult<Workout> {
        let workout = match self {
            WorkoutSpec::Running {
                steps,
                minutes,
                weight_kg,
                step_length_m,
            } => {
                let weight = resolve_weight(TrainingKind::Running, weight_kg, athlete)?;
                let training = Training::new(steps, duration_from_minutes(minutes)?, weight)
                    .with_len_step(resolve_step_length(step_length_m, athlete)?);
                Workout::Running(Running { training })
            }
            WorkoutSpec::Walking {
                steps,
                minutes,
                weight_kg,
                height_cm,
                step_length_m,
            } => {
                let weight = resolve_weight(TrainingKind::Walking, weight_kg, athlete)?;
                let height_cm = height_cm
                    .or(athlete.height_cm)
                    .ok_or(TrainingError::MissingField {
                        kind: TrainingKind::Walking,
                        field: "height_cm",
                    })?;
                check_range("height_cm", height_cm, &HEIGHT_CM_RANGE)?;
                let training = Training::new(steps, duration_from_minutes(minutes)?, weight)
                    .with_len_step(resolve_step_length(step_length_m, athlete)?);
                Workout::Walking(Walking {
                    training,
                    height: height_cm / CM_IN_M,
                })
            }
            WorkoutSpec::Swimming {
                strokes,
                minutes,
                weight_kg,
                length_pool,
                count_pool,
            } => {
                let weight = resolve_weight(TrainingKind::Swimming, weight_kg, athlete)?;
                let training = Training::new(strokes, duration_from_minutes(minutes)?, weight)
                    .with_len_step(SWIMMING_LEN_STEP);
                Workout::Swimming(Swimming {
                    training,
                    length_pool,
                    count_pool,
                })
            }
        };

        workout.validate()?;
        Ok(workout)
    }
}

fn resolve_weight(
    kind: TrainingKind,
    weight_kg: Option<f64>,
    athlete: &AthleteSettings,
) -> TrainingResult<f64> {
    let weight = weight_kg
        .or(athlete.weight_kg)
        .ok_or(TrainingError::MissingField {
            kind,
            field: "weight_kg",
        })?;
    check_range("weight_kg", weight, &WEIGHT_KG_RANGE)?;
    Ok(weight)
}

fn resolve_step_length(step_length_m: Option<f64>, athlete: &AthleteSettings) -> TrainingResult<f64> {
    let step = step_length_m.unwrap_or(athlete.step_length_m);
    check_range("step_length_m", step, &STEP_LENGTH_M_RANGE)?;
    Ok(step)
}

/// Convert a minute count into a duration.
pub fn duration_from_minutes(minutes: f64) -> TrainingResult<Duration> {
    check_range("minutes", minutes, &MINUTES_RANGE)?;
    Duration::try_from_secs_f64(minutes * 60.0).map_err(|_| TrainingError::OutOfRange {
        field: "minutes",
        value: minutes,
        min: *MINUTES_RANGE.start(),
        max: *MINUTES_RANGE.end(),
    })
}

/// The three reference workouts: a pool swim, a long walk and a short run.
pub fn demo_workouts() -> Vec<Workout> {
    vec![
        Swimming::new(2000, Duration::from_secs(90 * 60), 85.0, 50, 5).into(),
        Walking::new(20000, Duration::from_secs(3 * 3600 + 45 * 60), 85.0, 185.0 / CM_IN_M).into(),
        Running::new(5000, Duration::from_secs(30 * 60), 85.0).into(),
    ]
}
