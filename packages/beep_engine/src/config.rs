#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CalibrationConfig {
    pub duration_ms: u64,
    pub multiplier: u32,
    /// Floor applied after scaling the baseline.
    pub min_threshold: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequenceConfig {
    pub beep_count: u8,
    pub max_beep_duration_ms: u64,
    pub max_beep_interval_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DebouncePolicy {
    ConsecutiveSamples { confirm_samples: u16 },
    ElapsedSilence { min_gap_ms: u64 },
}

impl DebouncePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConsecutiveSamples { .. } => "consecutive_samples",
            Self::ElapsedSilence { .. } => "elapsed_silence",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DetectorConfig {
    pub calibration: CalibrationConfig,
    pub sequence: SequenceConfig,
    pub debounce: DebouncePolicy,
}
