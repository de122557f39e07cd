/// Synchronous pull interface onto the acquisition subsystem.
pub trait AmplitudeSource {
    /// Returns `None` when nothing could be read this cycle.
    fn next_amplitude(&mut self) -> Option<u32>;
}

pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

/// Receives one call per completed beep sequence.
pub trait SequenceNotifier {
    fn on_sequence_complete(&mut self, beep_count: u8);
}

impl<F> SequenceNotifier for F
where
    F: FnMut(u8),
{
    fn on_sequence_complete(&mut self, beep_count: u8) {
        self(beep_count)
    }
}

impl<S: AmplitudeSource + ?Sized> AmplitudeSource for &mut S {
    fn next_amplitude(&mut self) -> Option<u32> {
        (**self).next_amplitude()
    }
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
