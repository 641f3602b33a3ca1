//! Workout model: shared training record, per-kind formulas and dispatch.

pub mod calculator;
pub mod running;
pub mod swimming;
pub mod types;
pub mod walking;
pub mod workout;

pub use calculator::{read_data, CaloriesCalculator};
pub use running::Running;
pub use swimming::Swimming;
pub use types::{Training, TrainingError, TrainingKind, TrainingResult};
pub use walking::Walking;
pub use workout::{demo_workouts, Workout, WorkoutSpec};
