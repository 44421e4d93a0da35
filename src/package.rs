//! Workout package input
//!
//! A package is the JSON form of one sensor reading: a workout code plus its
//! positional parameters, e.g. `{"workout_type": "RUN", "data": [15000, 1, 75]}`.
//! Packages arrive as a JSON array or as NDJSON (one package per line).

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;

/// One sensor package: workout code plus positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<serde_json::Value>,
}

impl WorkoutPackage {
    /// Build a package from numeric readings
    pub fn new(workout_type: impl Into<String>, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.iter().map(|v| serde_json::json!(v)).collect(),
        }
    }

    /// Numeric view of the readings; any non-number entry is rejected
    pub fn parameters(&self) -> Result<Vec<f64>, ComputeError> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.as_f64().ok_or_else(|| {
                    ComputeError::InvalidPackage(format!(
                        "{} parameter #{} is not a number: {}",
                        self.workout_type, index, value
                    ))
                })
            })
            .collect()
    }
}

/// Parser for package batches
pub struct PackageAdapter;

impl PackageAdapter {
    /// Parse a JSON array of packages
    pub fn parse_array(json: &str) -> Result<Vec<WorkoutPackage>, ComputeError> {
        let packages: Vec<WorkoutPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (newline-delimited JSON) packages
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<WorkoutPackage>, ComputeError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<WorkoutPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(ComputeError::InvalidPackage(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }
}

/// The demonstration packages: one swim, one run, one walk
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", &[15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}
