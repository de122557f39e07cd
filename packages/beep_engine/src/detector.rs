use super::{
    calibration::{calibrate, Calibration, Threshold},
    config::DetectorConfig,
    debounce::DebounceFilter,
    sequence_hsm::{SampleTick, SequenceMachine},
    source::{AmplitudeSource, MonotonicClock, SequenceNotifier},
    trace::DetectorTraceSample,
    types::{ActionBuffer, AmplitudeSample, Condition, DetectionState},
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DetectorOutput {
    pub actions: ActionBuffer,
    pub trace: DetectorTraceSample,
}

/// Threshold, debounce filter and sequence state machine for one microphone.
///
/// Every call to [`BeepDetector::step`] runs to completion before the next
/// sample is considered; the detector owns all of its state.
pub struct BeepDetector {
    threshold: Threshold,
    filter: DebounceFilter,
    machine: SequenceMachine,
}

impl BeepDetector {
    pub fn new(config: &DetectorConfig, threshold: Threshold) -> Self {
        Self {
            threshold,
            filter: DebounceFilter::new(config.debounce),
            machine: SequenceMachine::new(config.sequence),
        }
    }

    /// Runs the blocking startup calibration, then builds a detector around it.
    pub fn calibrated<S, C>(
        config: &DetectorConfig,
        source: &mut S,
        clock: &C,
    ) -> (Self, Calibration)
    where
        S: AmplitudeSource + ?Sized,
        C: MonotonicClock + ?Sized,
    {
        let calibration = calibrate(source, clock, &config.calibration);
        (Self::new(config, calibration.threshold), calibration)
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn state(&self) -> DetectionState {
        self.machine.state_id()
    }

    pub fn beep_count(&self) -> u8 {
        self.machine.beep_count()
    }

    pub fn confirmed(&self) -> Condition {
        self.filter.confirmed()
    }

    pub fn step(&mut self, sample: AmplitudeSample) -> DetectorOutput {
        let is_loud = self.threshold.is_loud(sample.magnitude);
        let classification = self.filter.classify(is_loud, sample.now_ms);
        let tick = SampleTick {
            now_ms: sample.now_ms,
            magnitude: sample.magnitude,
            threshold: self.threshold.value(),
            is_loud,
            classification,
        };

        let actions = self.machine.handle(&tick);
        DetectorOutput {
            actions,
            trace: self.machine.trace(),
        }
    }

    /// Pulls one sample and forwards a completed sequence to `notifier`.
    ///
    /// Returns `None` without touching any state when the source had nothing.
    pub fn poll<S, C, N>(
        &mut self,
        source: &mut S,
        clock: &C,
        notifier: &mut N,
    ) -> Option<DetectorOutput>
    where
        S: AmplitudeSource + ?Sized,
        C: MonotonicClock + ?Sized,
        N: SequenceNotifier + ?Sized,
    {
        let magnitude = source.next_amplitude()?;
        let output = self.step(AmplitudeSample::new(clock.now_ms(), magnitude));
        if let Some(done) = output.actions.completion() {
            notifier.on_sequence_complete(done.beep_count);
        }
        Some(output)
    }
}
