use core::cell::Cell;

use super::source::{AmplitudeSource, MonotonicClock};

/// Clock that advances by `step_ms` every time it is read.
pub(crate) struct SteppingClock {
    now_ms: Cell<u64>,
    step_ms: u64,
}

impl SteppingClock {
    pub(crate) fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
            step_ms,
        }
    }
}

impl MonotonicClock for SteppingClock {
    fn now_ms(&self) -> u64 {
        let now = self.now_ms.get();
        self.now_ms.set(now + self.step_ms);
        now
    }
}

/// Replays a fixed list of reads, then repeats the last one forever.
pub(crate) struct ScriptedSource {
    reads: Vec<Option<u32>>,
    cursor: usize,
    pub(crate) pulls: usize,
}

impl ScriptedSource {
    pub(crate) fn new(reads: Vec<Option<u32>>) -> Self {
        Self {
            reads,
            cursor: 0,
            pulls: 0,
        }
    }

    pub(crate) fn constant(value: Option<u32>) -> Self {
        Self::new(vec![value])
    }
}

impl AmplitudeSource for ScriptedSource {
    fn next_amplitude(&mut self) -> Option<u32> {
        self.pulls += 1;
        let read = self
            .reads
            .get(self.cursor)
            .or_else(|| self.reads.last())
            .copied()
            .flatten();
        if self.cursor < self.reads.len() {
            self.cursor += 1;
        }
        read
    }
}
