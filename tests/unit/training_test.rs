//! Unit tests for per-kind training calculations.

use rusttrain::training::running::{CALORIES_MEAN_SPEED_MULTIPLIER, CALORIES_MEAN_SPEED_SHIFT};
use rusttrain::training::swimming::SWIMMING_LEN_STEP;
use rusttrain::training::{read_data, CaloriesCalculator, Running, Swimming, TrainingKind, Walking, Workout};
use std::time::Duration;

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

#[test]
fn test_running_reference_session() {
    let run = Running::new(5000, minutes(30), 85.0);
    let info = run.training_info();

    assert_eq!(info.kind, TrainingKind::Running);
    assert!((info.distance - 3.25).abs() < 1e-9);
    assert!((info.speed - 6.5).abs() < 1e-9);
    assert!((info.calories - 302.9145).abs() < 1e-6);
}

#[test]
fn test_running_calories_scale_with_weight() {
    let light = Running::new(5000, minutes(30), 60.0);
    let heavy = Running::new(5000, minutes(30), 120.0);

    assert!((heavy.calories() - 2.0 * light.calories()).abs() < 1e-9);
}

#[test]
fn test_running_formula_components() {
    // One hour at 10 km/h for a 100 kg athlete
    let mut run = Running::new(10_000, minutes(60), 100.0);
    run.training.len_step = 1.0;

    let expected = (CALORIES_MEAN_SPEED_MULTIPLIER * 10.0 + CALORIES_MEAN_SPEED_SHIFT) * 0.1 * 60.0;
    assert!((run.calories() - expected).abs() < 1e-9);
}

#[test]
fn test_walking_reference_session() {
    let walk = Walking::new(20000, minutes(225), 85.0, 1.85);

    assert!((walk.distance() - 13.0).abs() < 1e-9);
    assert!((walk.calories() - 947.8213).abs() < 1e-3);
}

#[test]
fn test_walking_taller_athlete_burns_less() {
    let short = Walking::new(10000, minutes(90), 80.0, 1.6);
    let tall = Walking::new(10000, minutes(90), 80.0, 1.9);

    assert!(tall.calories() < short.calories());
}

#[test]
fn test_swimming_reference_session() {
    let swim = Swimming::new(2000, minutes(90), 85.0, 50, 5);

    assert_eq!(swim.training.len_step, SWIMMING_LEN_STEP);
    assert!((swim.distance() - 2.76).abs() < 1e-9);
    assert!((swim.calories() - 323.0).abs() < 1e-6);
}

#[test]
fn test_swimming_empty_pool_still_burns() {
    // No lengths swum: speed is zero but the shift term remains
    let swim = Swimming::new(0, minutes(60), 50.0, 25, 0);

    assert_eq!(swim.mean_speed(), 0.0);
    assert!((swim.calories() - 110.0).abs() < 1e-9);
}

#[test]
fn test_workout_delegates_to_variant() {
    let swim = Swimming::new(2000, minutes(90), 85.0, 50, 5);
    let workout = Workout::from(swim.clone());

    assert_eq!(workout.training_info(), swim.training_info());
}

#[test]
fn test_read_data_for_each_kind() {
    let workouts: Vec<Workout> = vec![
        Running::new(5000, minutes(30), 85.0).into(),
        Walking::new(20000, minutes(225), 85.0, 1.85).into(),
        Swimming::new(2000, minutes(90), 85.0, 50, 5).into(),
    ];

    let texts: Vec<String> = workouts.iter().map(|w| read_data(w)).collect();

    assert!(texts[0].contains("Calories burned: 302.91"));
    assert!(texts[1].contains("Calories burned: 947.82"));
    assert!(texts[2].contains("Avg. speed: 0.17 km/h"));
    assert!(texts[2].contains("Calories burned: 323.00"));
}

#[test]
fn test_validate_workout() {
    let bad: Workout = Walking::new(100, minutes(10), 70.0, f64::INFINITY).into();
    assert!(bad.validate().is_err());

    let good: Workout = Running::new(100, minutes(10), 70.0).into();
    assert!(good.validate().is_ok());
}
