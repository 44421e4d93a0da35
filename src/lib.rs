//! Workout Flux - compute engine for workout summaries
//!
//! Flux turns raw wearable sensor packages into workout summaries through a
//! deterministic pipeline: package dispatch → workout calculation → summary
//! formatting → (optionally) report encoding.
//!
//! ## Workouts
//!
//! - **RUN**: running, `[action_count, duration_hours, weight_kg]`
//! - **WLK**: race-walking, adds `height_cm`
//! - **SWM**: pool swimming, adds `pool_length_m, pool_laps`

pub mod calculator;
pub mod encoder;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod package;
pub mod pipeline;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use calculator::{Running, SportsWalking, Swimming, Workout, WorkoutCalculator};
pub use error::ComputeError;
pub use factory::read_package;
pub use formatter::{format_summary, Locale};
pub use package::WorkoutPackage;
pub use pipeline::{packages_to_report, workout_to_message, WorkoutProcessor};
pub use types::{MetricsSummary, WorkoutType};

/// Flux version embedded in all reports
pub const FLUX_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "workout-flux";
