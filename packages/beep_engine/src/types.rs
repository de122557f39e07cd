#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AmplitudeSample {
    pub now_ms: u64,
    pub magnitude: u32,
}

impl AmplitudeSample {
    pub const fn new(now_ms: u64, magnitude: u32) -> Self {
        Self { now_ms, magnitude }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Condition {
    #[default]
    Quiet = 0,
    Loud = 1,
}

impl Condition {
    pub const fn from_loud(is_loud: bool) -> Self {
        if is_loud {
            Self::Loud
        } else {
            Self::Quiet
        }
    }
}

/// Debounce output for one sample.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Classification {
    #[default]
    NoChange = 0,
    LoudConfirmed = 1,
    QuietConfirmed = 2,
}

impl Classification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoChange => "none",
            Self::LoudConfirmed => "loud",
            Self::QuietConfirmed => "quiet",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum DetectionState {
    #[default]
    Idle = 0,
    BeepConfirmed = 1,
    GapConfirmed = 2,
}

impl DetectionState {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::BeepConfirmed => "beep",
            Self::GapConfirmed => "gap",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum ResetReason {
    #[default]
    None = 0,
    BeepTooLong = 1,
    GapTooLong = 2,
    Completed = 3,
}

impl ResetReason {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BeepTooLong => "beep_too_long",
            Self::GapTooLong => "gap_too_long",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StateTransition {
    pub at_ms: u64,
    pub from: DetectionState,
    pub to: DetectionState,
    /// Progress after the transition.
    pub beep_count: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequenceComplete {
    pub at_ms: u64,
    pub beep_count: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineAction {
    Transition(StateTransition),
    SequenceComplete(SequenceComplete),
    SequenceReset { reason: ResetReason, beep_count: u8 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionBuffer {
    len: usize,
    slots: [Option<EngineAction>; Self::MAX],
}

impl ActionBuffer {
    pub const MAX: usize = 4;

    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: [None; Self::MAX],
        }
    }

    pub fn push(&mut self, action: EngineAction) {
        if self.len >= Self::MAX {
            return;
        }
        self.slots[self.len] = Some(action);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineAction> {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    pub fn completion(&self) -> Option<SequenceComplete> {
        self.iter().find_map(|action| match action {
            EngineAction::SequenceComplete(done) => Some(*done),
            _ => None,
        })
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.iter().filter_map(|action| match action {
            EngineAction::Transition(transition) => Some(transition),
            _ => None,
        })
    }
}

impl Default for ActionBuffer {
    fn default() -> Self {
        Self::new()
    }
}
