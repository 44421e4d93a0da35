//! Workout calculators
//!
//! Each workout kind derives distance, mean speed and spent calories from its
//! raw readings. The shared formulas live as default methods on
//! [`WorkoutCalculator`]; calorie formulas are required per kind.

use crate::error::ComputeError;
use crate::types::{MetricsSummary, WorkoutRecord, WorkoutType};

/// Meters per kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length for running and walking (m)
pub const STEP_LENGTH_M: f64 = 0.65;
/// Stroke length for swimming (m)
pub const STROKE_LENGTH_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Divide, failing instead of yielding `inf`/`NaN` on a zero divisor
pub(crate) fn checked_div(
    numerator: f64,
    denominator: f64,
    divisor_name: &'static str,
) -> Result<f64, ComputeError> {
    if denominator == 0.0 {
        return Err(ComputeError::DivisionByZero(divisor_name));
    }
    Ok(numerator / denominator)
}

/// Floor division rounded the way CPython's `float // float` rounds it.
///
/// The quotient is taken from `x - x % y`, so it can differ from
/// `(x / y).floor()` when the real quotient rounds onto an integer
/// (`169.0 // 0.1 == 1689.0`).
pub(crate) fn floor_div(
    numerator: f64,
    denominator: f64,
    divisor_name: &'static str,
) -> Result<f64, ComputeError> {
    if denominator == 0.0 {
        return Err(ComputeError::DivisionByZero(divisor_name));
    }

    let rem = numerator % denominator;
    let mut div = (numerator - rem) / denominator;
    if rem != 0.0 && (denominator < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Ok(0.0_f64.copysign(numerator / denominator));
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}

/// Trait for workout metric calculators
pub trait WorkoutCalculator {
    /// Workout type this calculator handles
    fn workout_type(&self) -> WorkoutType;

    /// Raw readings shared by every kind
    fn record(&self) -> &WorkoutRecord;

    /// Distance attributed to one action (m)
    fn action_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered (km)
    fn distance(&self) -> f64 {
        self.record().action_count as f64 * self.action_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout (km/h)
    fn mean_speed(&self) -> Result<f64, ComputeError> {
        checked_div(self.distance(), self.record().duration_hours, "duration_hours")
    }

    /// Energy spent (kcal)
    fn calories_burned(&self) -> Result<f64, ComputeError>;

    /// Collect all metrics into a summary
    fn summary(&self) -> Result<MetricsSummary, ComputeError> {
        Ok(MetricsSummary {
            workout_kind: self.workout_type().label().to_string(),
            duration_hours: self.record().duration_hours,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed()?,
            calories_kcal: self.calories_burned()?,
        })
    }
}

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub record: WorkoutRecord,
}

impl Running {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl WorkoutCalculator for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        let record = &self.record;
        Ok(
            (RUN_SPEED_MULTIPLIER * self.mean_speed()? - RUN_SPEED_SHIFT) * record.weight_kg
                / M_IN_KM
                * (record.duration_hours * MIN_IN_H),
        )
    }
}

/// Race-walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub record: WorkoutRecord,
    /// Athlete height (cm)
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl WorkoutCalculator for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Walking
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        let record = &self.record;
        // speed^2 / height is floored, not a real division
        let speed_term = floor_div(self.mean_speed()?.powi(2), self.height_cm, "height_cm")?;
        Ok((WALK_WEIGHT_MULTIPLIER * record.weight_kg
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * record.weight_kg)
            * (record.duration_hours * MIN_IN_H))
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub record: WorkoutRecord,
    /// Pool length (m)
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_laps: i64,
}

impl Swimming {
    pub fn new(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: i64,
    ) -> Self {
        Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

impl WorkoutCalculator for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn action_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// Pool geometry speed; intentionally not derived from [`Self::distance`]
    fn mean_speed(&self) -> Result<f64, ComputeError> {
        checked_div(
            self.pool_length_m * self.pool_laps as f64 / M_IN_KM,
            self.record.duration_hours,
            "duration_hours",
        )
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        let speed = self.mean_speed()?;
        Ok((speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.record.weight_kg)
    }
}

/// A workout of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Borrow the variant as a calculator
    pub fn calculator(&self) -> &dyn WorkoutCalculator {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl WorkoutCalculator for Workout {
    fn workout_type(&self) -> WorkoutType {
        self.calculator().workout_type()
    }

    fn record(&self) -> &WorkoutRecord {
        self.calculator().record()
    }

    fn action_length_m(&self) -> f64 {
        self.calculator().action_length_m()
    }

    fn distance(&self) -> f64 {
        self.calculator().distance()
    }

    fn mean_speed(&self) -> Result<f64, ComputeError> {
        self.calculator().mean_speed()
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        self.calculator().calories_burned()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
