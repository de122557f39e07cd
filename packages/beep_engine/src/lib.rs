//! Beep-sequence detection engine.
//!
//! Turns a stream of rectified amplitude readings into a single
//! "sequence complete" signal: a startup calibration derives the loudness
//! threshold, a debounce filter confirms sustained loud/quiet conditions and a
//! timed state machine counts confirmed beeps.

#![cfg_attr(not(test), no_std)]

pub mod calibration;
pub mod config;
pub mod debounce;
pub mod detector;
pub mod magnitude;
mod sequence_hsm;
pub mod source;
#[cfg(test)]
mod test_support;
pub mod trace;
pub mod types;

pub use calibration::{calibrate, measure_baseline, BaselineReading, Calibration, Threshold};
pub use config::{CalibrationConfig, DebouncePolicy, DetectorConfig, SequenceConfig};
pub use debounce::DebounceFilter;
pub use detector::{BeepDetector, DetectorOutput};
pub use magnitude::{adc_code_to_sample, rectified_magnitude};
pub use source::{AmplitudeSource, MonotonicClock, SequenceNotifier};
pub use trace::DetectorTraceSample;
pub use types::{
    ActionBuffer, AmplitudeSample, Classification, Condition, DetectionState, EngineAction,
    ResetReason, SequenceComplete, StateTransition,
};
