//! Unit tests for summary rendering.

use rusttrain::report::{render, render_all, InfoMessage, Locale, OutputFormat};
use rusttrain::training::{demo_workouts, CaloriesCalculator};

fn demo_infos() -> Vec<InfoMessage> {
    demo_workouts().iter().map(|w| w.training_info()).collect()
}

#[test]
fn test_demo_text_russian() {
    let infos = demo_infos();
    let text = render(&infos[0], OutputFormat::Text, Locale::Ru).unwrap();

    assert_eq!(
        text,
        "Тип тренировки: Плавание\nДлительность: 90 мин\nДистанция: 2.76 км.\nСр. скорость: 0.17 км/ч\nПотрачено ккал: 323.00\n"
    );
}

#[test]
fn test_demo_walking_minutes() {
    let infos = demo_infos();
    let text = render(&infos[1], OutputFormat::Text, Locale::En).unwrap();

    assert!(text.starts_with("Training type: Walking\nDuration: 225 min\n"));
    assert!(text.contains("Distance: 13.00 km"));
    assert!(text.contains("Avg. speed: 3.47 km/h"));
}

#[test]
fn test_demo_json() {
    let json = render_all(&demo_infos(), OutputFormat::Json, Locale::En).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["training_type"], "running");
    assert_eq!(items[2]["duration_min"], 30.0);
    assert_eq!(items[2]["distance_km"], 3.25);
}

#[test]
fn test_text_layouts_share_shape() {
    let infos = demo_infos();
    let en = render_all(&infos, OutputFormat::Text, Locale::En).unwrap();
    let ru = render_all(&infos, OutputFormat::Text, Locale::Ru).unwrap();

    assert_eq!(en.lines().count(), ru.lines().count());
    assert!(!en.contains("ккал"));
    assert!(ru.contains("ккал"));
}
