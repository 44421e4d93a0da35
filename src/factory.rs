//! Workout factory
//!
//! Maps a three-letter sensor code to the matching calculator and builds it
//! from a positional parameter list. The parameter list is checked against the
//! variant's shape (count, finiteness, integral counts) before construction.

use crate::calculator::{Running, SportsWalking, Swimming, Workout};
use crate::error::ComputeError;
use crate::types::WorkoutType;

/// Build a workout from a sensor package.
///
/// # Arguments
/// * `code` - Three-letter workout code (`"RUN"`, `"WLK"` or `"SWM"`)
/// * `params` - Positional readings in the order of [`WorkoutType::parameter_names`]
///
/// # Example
/// ```
/// use workout_flux::factory::read_package;
/// use workout_flux::calculator::WorkoutCalculator;
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert!((workout.distance() - 9.75).abs() < 1e-9);
/// ```
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout, ComputeError> {
    let workout_type: WorkoutType = code.parse()?;
    tracing::debug!(code, params = params.len(), "dispatching workout package");
    build_workout(workout_type, params)
}

/// Build a workout of a known type from positional readings
pub fn build_workout(workout_type: WorkoutType, params: &[f64]) -> Result<Workout, ComputeError> {
    let reader = ParamReader::new(workout_type, params)?;

    let workout = match workout_type {
        WorkoutType::Running => Workout::Running(Running::new(
            reader.count(0)?,
            reader.real(1)?,
            reader.real(2)?,
        )),
        WorkoutType::Walking => Workout::Walking(SportsWalking::new(
            reader.count(0)?,
            reader.real(1)?,
            reader.real(2)?,
            reader.real(3)?,
        )),
        WorkoutType::Swimming => Workout::Swimming(Swimming::new(
            reader.count(0)?,
            reader.real(1)?,
            reader.real(2)?,
            reader.real(3)?,
            reader.count(4)?,
        )),
    };

    Ok(workout)
}

/// Positional access to a parameter list whose length has been checked
struct ParamReader<'a> {
    workout_type: WorkoutType,
    params: &'a [f64],
}

impl<'a> ParamReader<'a> {
    fn new(workout_type: WorkoutType, params: &'a [f64]) -> Result<Self, ComputeError> {
        let expected = workout_type.parameter_names().len();
        if params.len() != expected {
            return Err(ComputeError::ArityMismatch {
                workout_type: workout_type.code(),
                expected,
                actual: params.len(),
            });
        }
        Ok(Self {
            workout_type,
            params,
        })
    }

    fn invalid(&self, index: usize, reason: String) -> ComputeError {
        ComputeError::InvalidParameter {
            workout_type: self.workout_type.code(),
            index,
            name: self.workout_type.parameter_names()[index],
            reason,
        }
    }

    fn real(&self, index: usize) -> Result<f64, ComputeError> {
        let value = self.params[index];
        if !value.is_finite() {
            return Err(self.invalid(index, format!("{value} is not a finite number")));
        }
        Ok(value)
    }

    fn count(&self, index: usize) -> Result<i64, ComputeError> {
        let value = self.real(index)?;
        // i64::MAX is not representable; 2^63 is the first f64 past it
        if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(self.invalid(index, format!("{value} is not an integer")));
        }
        Ok(value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::WorkoutCalculator;

    #[test]
    fn test_dispatch_known_codes() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim, Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40)));

        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run, Workout::Running(Running::new(15000, 1.0, 75.0)));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk, Workout::Walking(SportsWalking::new(9000, 1.0, 75.0, 180.0)));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in ["XYZ", "swm", "RU", "run", "WALK", ""] {
            let result = read_package(code, &[15000.0, 1.0, 75.0]);
            assert!(
                matches!(result, Err(ComputeError::UnknownWorkoutType(ref c)) if c == code),
                "code {code:?} should be unknown"
            );
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let result = read_package("WLK", &[9000.0, 1.0, 75.0]);
        assert!(matches!(
            result,
            Err(ComputeError::ArityMismatch {
                workout_type: "WLK",
                expected: 4,
                actual: 3
            })
        ));

        let result = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]);
        assert!(matches!(result, Err(ComputeError::ArityMismatch { .. })));
    }

    #[test]
    fn test_fractional_count_rejected() {
        let result = read_package("RUN", &[150.5, 1.0, 75.0]);
        assert!(matches!(
            result,
            Err(ComputeError::InvalidParameter {
                index: 0,
                name: "action_count",
                ..
            })
        ));

        let result = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]);
        assert!(matches!(
            result,
            Err(ComputeError::InvalidParameter {
                index: 4,
                name: "pool_laps",
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_count_rejected() {
        let two_pow_63 = 9_223_372_036_854_775_808.0;
        let result = read_package("RUN", &[two_pow_63, 1.0, 75.0]);
        assert!(matches!(
            result,
            Err(ComputeError::InvalidParameter { index: 0, .. })
        ));

        let run = read_package("RUN", &[-two_pow_63, 1.0, 75.0]).unwrap();
        assert_eq!(run.record().action_count, i64::MIN);
    }

    #[test]
    fn test_negative_counts_accepted() {
        let run = read_package("RUN", &[-100.0, 1.0, 75.0]).unwrap();
        assert!((run.distance() - -0.065).abs() < 1e-9);

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap();
        assert_eq!(swim, Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, -40)));
        assert!((swim.mean_speed().unwrap() - -1.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = read_package("WLK", &[9000.0, 1.0, f64::NAN, 180.0]);
        assert!(matches!(
            result,
            Err(ComputeError::InvalidParameter { index: 2, .. })
        ));
    }

    #[test]
    fn test_no_bounds_checks_on_reals() {
        // Zero duration builds fine and fails only when speed is computed
        let run = read_package("RUN", &[1000.0, 0.0, -75.0]).unwrap();
        assert!(matches!(
            run.mean_speed(),
            Err(ComputeError::DivisionByZero(_))
        ));
    }
}
