//! Pipeline orchestration
//!
//! This module provides the public API for Workout Flux.
//! It orchestrates the path from a sensor package to a summary line or report.

use crate::calculator::WorkoutCalculator;
use crate::encoder::ReportEncoder;
use crate::error::ComputeError;
use crate::factory::read_package;
use crate::formatter::{format_summary_localized, Locale};
use crate::package::{PackageAdapter, WorkoutPackage};
use crate::types::{MetricsSummary, WorkoutResult};

/// Compute the summary line for one sensor package.
///
/// # Arguments
/// * `code` - Workout code (`"RUN"`, `"WLK"` or `"SWM"`)
/// * `params` - Positional readings for that workout type
///
/// # Example
/// ```
/// let line = workout_flux::workout_to_message("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
/// assert!(line.ends_with("Calories burned: 336.000."));
/// ```
pub fn workout_to_message(code: &str, params: &[f64]) -> Result<String, ComputeError> {
    let summary = workout_to_summary(code, params)?;
    Ok(summary.to_string())
}

/// Compute the metrics summary for one sensor package.
pub fn workout_to_summary(code: &str, params: &[f64]) -> Result<MetricsSummary, ComputeError> {
    read_package(code, params)?.summary()
}

/// Convert a JSON array of packages into a JSON report.
///
/// # Arguments
/// * `raw_json` - JSON array of `{"workout_type": ..., "data": [...]}` packages
///
/// # Returns
/// Report JSON with one entry per package, in input order
pub fn packages_to_report(raw_json: String) -> Result<String, ComputeError> {
    let packages = PackageAdapter::parse_array(&raw_json)?;
    WorkoutProcessor::new().report_json(&packages)
}

/// Processor for batches of packages.
///
/// Packages are processed in input order; the first failing package aborts the
/// batch and no partial output is produced.
pub struct WorkoutProcessor {
    encoder: ReportEncoder,
    locale: Locale,
}

impl Default for WorkoutProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutProcessor {
    /// Create a processor with English labels
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    /// Create a processor rendering labels in `locale`
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            encoder: ReportEncoder::new().with_locale(locale),
            locale,
        }
    }

    /// Compute the result for a single package
    pub fn process_package(&self, package: &WorkoutPackage) -> Result<WorkoutResult, ComputeError> {
        let params = package.parameters()?;
        let workout = read_package(&package.workout_type, &params)?;
        let summary = workout.summary()?;

        Ok(WorkoutResult {
            workout_type: workout.workout_type(),
            summary,
        })
    }

    /// Compute results for all packages, in input order
    pub fn process_all(
        &self,
        packages: &[WorkoutPackage],
    ) -> Result<Vec<WorkoutResult>, ComputeError> {
        tracing::debug!(packages = packages.len(), "processing workout batch");
        packages
            .iter()
            .map(|package| self.process_package(package))
            .collect()
    }

    /// One summary line per package
    pub fn messages(&self, packages: &[WorkoutPackage]) -> Result<Vec<String>, ComputeError> {
        Ok(self
            .process_all(packages)?
            .iter()
            .map(|result| format_summary_localized(&result.summary, self.locale))
            .collect())
    }

    /// Report JSON for all packages
    pub fn report_json(&self, packages: &[WorkoutPackage]) -> Result<String, ComputeError> {
        let results = self.process_all(packages)?;
        self.encoder.encode_to_json(&results)
    }
}
