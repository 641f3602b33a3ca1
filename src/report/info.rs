//! Training summary and its text layouts.

use crate::training::TrainingKind;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Language used for text summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English labels
    #[default]
    En,
    /// Russian labels
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

/// Summary of a completed training session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    /// Training kind
    #[serde(rename = "training_type")]
    pub kind: TrainingKind,
    /// Session duration, serialized in minutes
    #[serde(rename = "duration_min", serialize_with = "serialize_minutes")]
    pub duration: Duration,
    /// Distance in kilometers
    #[serde(rename = "distance_km")]
    pub distance: f64,
    /// Mean speed in km/h
    #[serde(rename = "speed_kmh")]
    pub speed: f64,
    /// Kilocalories burned
    #[serde(rename = "calories_kcal")]
    pub calories: f64,
}

fn serialize_minutes<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() / 60.0)
}

impl InfoMessage {
    /// Duration in minutes.
    pub fn minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    /// Render the summary with labels in the given language.
    pub fn to_text(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "Training type: {}\nDuration: {} min\nDistance: {:.2} km\nAvg. speed: {:.2} km/h\nCalories burned: {:.2}\n",
                self.kind.name(),
                self.minutes(),
                self.distance,
                self.speed,
                self.calories,
            ),
            Locale::Ru => format!(
                "Тип тренировки: {}\nДлительность: {} мин\nДистанция: {:.2} км.\nСр. скорость: {:.2} км/ч\nПотрачено ккал: {:.2}\n",
                self.kind.name_ru(),
                self.minutes(),
                self.distance,
                self.speed,
                self.calories,
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Locale::En))
    }
}
