//! End-to-end tests over the public API

use pretty_assertions::assert_eq;
use workout_flux::package::{sample_packages, PackageAdapter};
use workout_flux::{
    read_package, workout_to_message, ComputeError, Locale, WorkoutCalculator, WorkoutProcessor,
    WorkoutType,
};

#[test]
fn sample_packages_produce_expected_lines() {
    let lines: Vec<String> = sample_packages()
        .iter()
        .map(|p| workout_to_message(&p.workout_type, &p.parameters().unwrap()).unwrap())
        .collect();

    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn distance_follows_action_length() {
    for (code, params, length) in [
        ("RUN", vec![4321.0, 0.5, 60.0], 0.65),
        ("WLK", vec![4321.0, 0.5, 60.0, 170.0], 0.65),
        ("SWM", vec![4321.0, 0.5, 60.0, 50.0, 10.0], 1.38),
    ] {
        let workout = read_package(code, &params).unwrap();
        assert!((workout.distance() - 4321.0 * length / 1000.0).abs() < 1e-9);
    }
}

#[test]
fn walking_speed_term_is_truncated() {
    // 5.85^2 / 180 = 0.19; a real division would add ~24.8 kcal
    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let calories = walk.calories_burned().unwrap();

    assert!((calories - 157.5).abs() < 1e-9);
    let untruncated = (0.035 * 75.0 + (5.85_f64.powi(2) / 180.0) * 0.029 * 75.0) * 60.0;
    assert!(untruncated - calories > 20.0);
}

#[test]
fn walking_floor_div_matches_remainder_rounding() {
    // 169 / 0.1 is 1690.0 after rounding; the floored quotient is 1689
    let walk = read_package("WLK", &[20000.0, 1.0, 80.0, 0.1]).unwrap();
    assert!((walk.calories_burned().unwrap() - 235276.8).abs() < 1e-6);
}

#[test]
fn negative_step_counts_are_computed() {
    let line = workout_to_message("RUN", &[-100.0, 1.0, 75.0]).unwrap();
    assert!(line.contains("Distance: -0.065 km"));
}

#[test]
fn unknown_codes_fail_without_output() {
    for code in ["XYZ", "swm", "RU"] {
        assert!(matches!(
            workout_to_message(code, &[1.0, 1.0, 1.0]),
            Err(ComputeError::UnknownWorkoutType(_))
        ));
    }
}

#[test]
fn ndjson_batch_to_report() {
    let ndjson = r#"{"workout_type": "RUN", "data": [15000, 1, 75]}
{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}"#;
    let packages = PackageAdapter::parse_ndjson(ndjson).unwrap();

    let processor = WorkoutProcessor::with_locale(Locale::Russian);
    let results = processor.process_all(&packages).unwrap();
    assert_eq!(results[0].workout_type, WorkoutType::Running);
    assert_eq!(results[1].workout_type, WorkoutType::Swimming);

    let report: serde_json::Value =
        serde_json::from_str(&processor.report_json(&packages).unwrap()).unwrap();
    assert_eq!(report["producer"]["name"], "workout-flux");
    assert_eq!(report["workouts"].as_array().unwrap().len(), 2);
    assert!(report["workouts"][1]["message"]
        .as_str()
        .unwrap()
        .starts_with("Тип тренировки: Swimming;"));
}
