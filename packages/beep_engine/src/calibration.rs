use super::{
    config::CalibrationConfig,
    source::{AmplitudeSource, MonotonicClock},
};

/// Loudness threshold; never below the floor it was built with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Threshold(u32);

impl Threshold {
    pub const fn floor(min_threshold: u32) -> Self {
        Self(min_threshold)
    }

    pub const fn from_baseline(baseline: u32, multiplier: u32, min_threshold: u32) -> Self {
        let scaled = baseline.saturating_mul(multiplier);
        if scaled < min_threshold {
            Self(min_threshold)
        } else {
            Self(scaled)
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_loud(self, magnitude: u32) -> bool {
        magnitude > self.0
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BaselineReading {
    pub baseline: u32,
    pub reads: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Calibration {
    pub baseline: u32,
    pub reads: u32,
    pub threshold: Threshold,
}

impl Calibration {
    /// True when the floor, not the measured baseline, set the threshold.
    pub const fn clamped_to_floor(&self, config: &CalibrationConfig) -> bool {
        self.threshold.value() == config.min_threshold
    }
}

/// Averages every amplitude read during `duration_ms`.
///
/// Blocks the caller for the whole window. Failed reads are skipped; a window
/// without a single read yields a baseline of 0.
pub fn measure_baseline<S, C>(source: &mut S, clock: &C, duration_ms: u64) -> BaselineReading
where
    S: AmplitudeSource + ?Sized,
    C: MonotonicClock + ?Sized,
{
    let start_ms = clock.now_ms();
    let mut total: u64 = 0;
    let mut reads: u32 = 0;

    while clock.now_ms().saturating_sub(start_ms) < duration_ms {
        if let Some(magnitude) = source.next_amplitude() {
            total = total.saturating_add(u64::from(magnitude));
            reads = reads.saturating_add(1);
        }
    }

    if reads == 0 {
        return BaselineReading::default();
    }

    BaselineReading {
        baseline: (total / u64::from(reads)).min(u64::from(u32::MAX)) as u32,
        reads,
    }
}

pub fn calibrate<S, C>(source: &mut S, clock: &C, config: &CalibrationConfig) -> Calibration
where
    S: AmplitudeSource + ?Sized,
    C: MonotonicClock + ?Sized,
{
    let reading = measure_baseline(source, clock, config.duration_ms);
    Calibration {
        baseline: reading.baseline,
        reads: reading.reads,
        threshold: Threshold::from_baseline(
            reading.baseline,
            config.multiplier,
            config.min_threshold,
        ),
    }
}

#[cfg(test)]
mod tests;
