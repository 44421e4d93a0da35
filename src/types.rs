//! Core types for the Workout Flux pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: workout type tags, raw workout records, computed summaries and the
//! report payload.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ComputeError;

/// Workout type identifier, parsed from the three-letter sensor code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutType {
    /// All supported workout types, in code-listing order
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::Walking,
    ];

    /// Three-letter code used by the sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Label rendered as the workout kind in summaries
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Walking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Positional parameter names, in the order the package must supply them
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::Running => &["action_count", "duration_hours", "weight_kg"],
            WorkoutType::Walking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            WorkoutType::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }
}

impl FromStr for WorkoutType {
    type Err = ComputeError;

    /// Exact, case-sensitive match on the three-letter code
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::Walking),
            "SWM" => Ok(WorkoutType::Swimming),
            other => Err(ComputeError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Number of atomic movements (steps or strokes)
    pub action_count: i64,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Metrics computed for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Workout kind label (e.g. "Running")
    pub workout_kind: String,
    /// Duration (hours)
    pub duration_hours: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}

/// A computed summary tagged with the workout type that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutResult {
    pub workout_type: WorkoutType,
    pub summary: MetricsSummary,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// One workout entry in a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub workout_type: WorkoutType,
    pub message: String,
    pub summary: MetricsSummary,
}

/// Complete report payload for a batch of workouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub workouts: Vec<ReportEntry>,
}
