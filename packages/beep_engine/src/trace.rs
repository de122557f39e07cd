use crate::types::{Classification, DetectionState, ResetReason};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DetectorTraceSample {
    pub now_ms: u64,
    pub magnitude: u32,
    pub threshold: u32,
    pub is_loud: bool,
    pub classification: Classification,
    pub state: DetectionState,
    pub beep_count: u8,
    /// Time spent in `state` as of `now_ms`.
    pub state_elapsed_ms: u32,
    pub reset_reason: ResetReason,
}
