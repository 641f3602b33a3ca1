//! Calorie calculator trait shared by all training kinds.

use crate::report::InfoMessage;
use crate::training::types::{Training, TrainingKind};

/// Derives distance, speed and calories for a training session.
///
/// Implementors supply the kind, the shared record and the calorie formula.
/// Speed and distance default to the step-based values of [`Training`] and
/// may be overridden where a kind measures them differently.
pub trait CaloriesCalculator {
    /// Kind of training.
    fn kind(&self) -> TrainingKind;

    /// Shared training record.
    fn training(&self) -> &Training;

    /// Distance covered in kilometers.
    fn distance(&self) -> f64 {
        self.training().distance()
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.training().mean_speed()
    }

    /// Kilocalories burned during the session.
    fn calories(&self) -> f64;

    /// Summary of the session.
    fn training_info(&self) -> InfoMessage {
        InfoMessage {
            kind: self.kind(),
            duration: self.training().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

/// Compute a session summary and render it as text.
pub fn read_data(training: &dyn CaloriesCalculator) -> String {
    let info = training.training_info();

    tracing::debug!(
        kind = %info.kind,
        distance = info.distance,
        speed = info.speed,
        calories = info.calories,
        "Computed training summary"
    );

    info.to_string()
}
