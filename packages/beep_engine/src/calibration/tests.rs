use super::*;
use crate::test_support::{ScriptedSource, SteppingClock};

const CONFIG: CalibrationConfig = CalibrationConfig {
    duration_ms: 3_000,
    multiplier: 5,
    min_threshold: 100,
};

#[test]
fn all_zero_samples_calibrate_to_the_floor() {
    let mut source = ScriptedSource::constant(Some(0));
    let clock = SteppingClock::new(0, 10);

    let calibration = calibrate(&mut source, &clock, &CONFIG);

    assert_eq!(calibration.baseline, 0);
    assert!(calibration.reads > 0);
    assert_eq!(calibration.threshold, Threshold::floor(CONFIG.min_threshold));
    assert!(calibration.clamped_to_floor(&CONFIG));
}

#[test]
fn window_without_reads_falls_back_to_floor() {
    let mut source = ScriptedSource::constant(None);
    let clock = SteppingClock::new(500, 25);

    let calibration = calibrate(&mut source, &clock, &CONFIG);

    assert_eq!(calibration.reads, 0);
    assert_eq!(calibration.baseline, 0);
    assert_eq!(calibration.threshold.value(), 100);
    assert!(source.pulls > 0);
}

#[test]
fn baseline_is_scaled_by_multiplier_above_floor() {
    let mut source = ScriptedSource::constant(Some(48));
    let clock = SteppingClock::new(0, 10);

    let calibration = calibrate(&mut source, &clock, &CONFIG);

    assert_eq!(calibration.baseline, 48);
    assert_eq!(calibration.threshold.value(), 240);
    assert!(!calibration.clamped_to_floor(&CONFIG));
}

#[test]
fn baseline_is_integer_mean_of_successful_reads() {
    let mut source = ScriptedSource::new(vec![Some(10), None, Some(15), None, Some(20), Some(0)]);
    // One clock read for the start, then one per loop check: 8 pulls fit.
    let clock = SteppingClock::new(0, 1);

    let reading = measure_baseline(&mut source, &clock, 9);

    // reads: 10, 15, 20, 0, 0, 0 -> 45 / 6
    assert_eq!(reading.reads, 6);
    assert_eq!(reading.baseline, 7);
}

#[test]
fn calibration_stops_once_window_elapsed() {
    let mut source = ScriptedSource::constant(Some(30));
    let clock = SteppingClock::new(1_000, 100);

    let reading = measure_baseline(&mut source, &clock, 3_000);

    // Loop checks run at +100 ..= +2_900.
    assert_eq!(source.pulls, 29);
    assert_eq!(reading.reads, 29);
    assert_eq!(reading.baseline, 30);
}

#[test]
fn huge_baseline_saturates_instead_of_wrapping() {
    let threshold = Threshold::from_baseline(u32::MAX / 2, 5, 100);
    assert_eq!(threshold.value(), u32::MAX);
}

#[test]
fn threshold_comparison_is_strict() {
    let threshold = Threshold::floor(100);
    assert!(!threshold.is_loud(100));
    assert!(threshold.is_loud(101));
}
