//! Summary formatting
//!
//! Renders a [`MetricsSummary`] as the single display line shown to the user.
//! Numbers are always fixed-point with three decimals; no locale-aware number
//! formatting is applied, only the labels change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MetricsSummary;

/// Label language for the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

struct Labels {
    kind: &'static str,
    duration: &'static str,
    hours: &'static str,
    distance: &'static str,
    km: &'static str,
    speed: &'static str,
    kmh: &'static str,
    calories: &'static str,
}

impl Locale {
    fn labels(&self) -> Labels {
        match self {
            Locale::English => Labels {
                kind: "Workout type",
                duration: "Duration",
                hours: "h",
                distance: "Distance",
                km: "km",
                speed: "Mean speed",
                kmh: "km/h",
                calories: "Calories burned",
            },
            Locale::Russian => Labels {
                kind: "Тип тренировки",
                duration: "Длительность",
                hours: "ч.",
                distance: "Дистанция",
                km: "км",
                speed: "Ср. скорость",
                kmh: "км/ч",
                calories: "Потрачено ккал",
            },
        }
    }
}

/// Format a summary with English labels
pub fn format_summary(summary: &MetricsSummary) -> String {
    format_summary_localized(summary, Locale::English)
}

/// Format a summary with the labels of `locale`
pub fn format_summary_localized(summary: &MetricsSummary, locale: Locale) -> String {
    let l = locale.labels();
    format!(
        "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
        l.kind,
        summary.workout_kind,
        l.duration,
        summary.duration_hours,
        l.hours,
        l.distance,
        summary.distance_km,
        l.km,
        l.speed,
        summary.mean_speed_kmh,
        l.kmh,
        l.calories,
        summary.calories_kcal,
    )
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_summary(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_summary() -> MetricsSummary {
        MetricsSummary {
            workout_kind: "Swimming".to_string(),
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_format_english() {
        assert_eq!(
            format_summary(&make_summary()),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_format_russian() {
        assert_eq!(
            format_summary_localized(&make_summary(), Locale::Russian),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_display_matches_format() {
        let summary = make_summary();
        assert_eq!(summary.to_string(), format_summary(&summary));
    }

    #[test]
    fn test_three_decimals_regardless_of_magnitude() {
        let summary = MetricsSummary {
            workout_kind: "Running".to_string(),
            duration_hours: 0.0005,
            distance_km: 123456.0,
            mean_speed_kmh: 2.0 / 3.0,
            calories_kcal: -12.34567,
        };

        let line = format_summary(&summary);
        assert_eq!(
            line,
            "Workout type: Running; Duration: 0.001 h; Distance: 123456.000 km; \
             Mean speed: 0.667 km/h; Calories burned: -12.346."
        );

        let fields: Vec<&str> = line.split("; ").collect();
        assert_eq!(fields.len(), 5);
    }
}
