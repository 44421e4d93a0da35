//! Report encoding
//!
//! This module wraps computed workout results into a JSON report payload with
//! producer metadata and the computation timestamp.

use crate::error::ComputeError;
use crate::formatter::{format_summary_localized, Locale};
use crate::types::{ReportEntry, ReportProducer, WorkoutReport, WorkoutResult};
use crate::{FLUX_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report encoder for producing JSON payloads
pub struct ReportEncoder {
    instance_id: String,
    locale: Locale,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            locale: Locale::default(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            instance_id,
            locale: Locale::default(),
        }
    }

    /// Set the label language used for entry messages
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Encode workout results into a report payload
    pub fn encode(&self, results: &[WorkoutResult]) -> WorkoutReport {
        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: FLUX_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let workouts = results
            .iter()
            .map(|result| ReportEntry {
                workout_type: result.workout_type,
                message: format_summary_localized(&result.summary, self.locale),
                summary: result.summary.clone(),
            })
            .collect();

        WorkoutReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            computed_at_utc: Utc::now().to_rfc3339(),
            workouts,
        }
    }

    /// Encode workout results to a JSON string
    pub fn encode_to_json(&self, results: &[WorkoutResult]) -> Result<String, ComputeError> {
        let report = self.encode(results);
        Ok(serde_json::to_string(&report)?)
    }
}
