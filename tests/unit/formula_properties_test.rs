//! Property tests for the training formulas.

use proptest::prelude::*;
use rusttrain::training::workout::duration_from_minutes;
use rusttrain::training::{CaloriesCalculator, Running, Swimming, Walking};
use std::time::Duration;

proptest! {
    #[test]
    fn calories_are_finite_and_non_negative(
        steps in 0u32..100_000,
        secs in 0u64..6 * 3600,
        weight in 0.0f64..250.0,
        height in 0.0f64..2.5,
        pool in 0u32..100,
        lengths in 0u32..200,
    ) {
        let duration = Duration::from_secs(secs);
        let run = Running::new(steps, duration, weight);
        let walk = Walking::new(steps, duration, weight, height);
        let swim = Swimming::new(steps, duration, weight, pool, lengths);

        for calories in [run.calories(), walk.calories(), swim.calories()] {
            prop_assert!(calories.is_finite());
            prop_assert!(calories >= 0.0);
        }
    }

    #[test]
    fn distance_is_linear_in_steps(steps in 0u32..50_000) {
        let single = Running::new(steps, Duration::from_secs(600), 70.0);
        let double = Running::new(steps * 2, Duration::from_secs(600), 70.0);

        prop_assert!((double.distance() - 2.0 * single.distance()).abs() < 1e-9);
    }

    #[test]
    fn speed_times_hours_is_distance(steps in 1u32..50_000, secs in 1u64..6 * 3600) {
        let walk = Walking::new(steps, Duration::from_secs(secs), 70.0, 1.75);
        let hours = secs as f64 / 3600.0;

        prop_assert!((walk.mean_speed() * hours - walk.distance()).abs() < 1e-9);
    }
}

#[test]
fn test_max_step_count_stays_finite() {
    let duration = Duration::from_secs(60);
    let run = Running::new(u32::MAX, duration, 500.0);
    let walk = Walking::new(u32::MAX, duration, 500.0, 0.3);
    let swim = Swimming::new(u32::MAX, duration, 500.0, u32::MAX, u32::MAX);

    for calories in [run.calories(), walk.calories(), swim.calories()] {
        assert!(calories.is_finite());
        assert!(calories > 0.0);
    }
    assert!((run.distance() - u32::MAX as f64 * 0.65 / 1000.0).abs() < 1e-3);
}

#[test]
fn test_longest_accepted_session_stays_finite() {
    let week = duration_from_minutes(10_080.0).unwrap();
    let walk = Walking::new(1, week, 1.0, 3.0);
    let swim = Swimming::new(1, week, 1.0, 0, 0);

    assert!(walk.calories().is_finite());
    assert!(swim.calories().is_finite());
    assert!(duration_from_minutes(1e300).is_err());
}

#[test]
fn test_shortest_accepted_height_stays_finite() {
    let walk = Walking::new(u32::MAX, Duration::from_secs(1), 500.0, 0.3);

    assert!(walk.validate().is_ok());
    assert!(walk.calories().is_finite());

    let shorter = Walking::new(u32::MAX, Duration::from_secs(1), 500.0, 1e-300);
    assert!(shorter.validate().is_err());
}
