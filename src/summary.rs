//! Immutable training summary and its fixed-precision report
//!
//! The report template is a compatibility contract: every numeric field is
//! printed with exactly three decimals and the field order never changes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    /// Default report template
    #[default]
    #[value(alias = "ru")]
    Russian,
    #[value(alias = "en")]
    English,
}

/// Computed metrics of one completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Activity label ("Running", "SportsWalking", "Swimming")
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometres
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Spent energy in kilocalories
    pub calories: f64,
}

impl TrainingSummary {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the report with the default Russian template
    pub fn render(&self) -> String {
        self.render_with(MessageLocale::Russian)
    }

    /// Render the report in the given locale
    pub fn render_with(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLocale::English => format!(
                "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
                 Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
