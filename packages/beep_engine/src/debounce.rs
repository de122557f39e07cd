use super::{
    config::DebouncePolicy,
    types::{Classification, Condition},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PolicyState {
    ConsecutiveSamples {
        confirm_samples: u16,
        loud_run: u16,
        quiet_run: u16,
    },
    ElapsedSilence {
        min_gap_ms: u64,
        gap_started_at_ms: Option<u64>,
    },
}

/// Turns raw loud/quiet samples into confirmed condition changes.
///
/// The filter starts with quiet confirmed and only reports a classification
/// when the confirmed condition flips.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DebounceFilter {
    confirmed: Condition,
    state: PolicyState,
}

impl DebounceFilter {
    pub const fn new(policy: DebouncePolicy) -> Self {
        let state = match policy {
            DebouncePolicy::ConsecutiveSamples { confirm_samples } => {
                PolicyState::ConsecutiveSamples {
                    confirm_samples,
                    loud_run: 0,
                    quiet_run: 0,
                }
            }
            DebouncePolicy::ElapsedSilence { min_gap_ms } => PolicyState::ElapsedSilence {
                min_gap_ms,
                gap_started_at_ms: None,
            },
        };

        Self {
            confirmed: Condition::Quiet,
            state,
        }
    }

    pub const fn confirmed(&self) -> Condition {
        self.confirmed
    }

    /// Length of the pending silence, if a gap timer is running.
    pub fn pending_gap_ms(&self, now_ms: u64) -> Option<u64> {
        match self.state {
            PolicyState::ElapsedSilence {
                gap_started_at_ms: Some(started),
                ..
            } => Some(now_ms.saturating_sub(started)),
            _ => None,
        }
    }

    pub fn classify(&mut self, is_loud: bool, now_ms: u64) -> Classification {
        let candidate = match &mut self.state {
            PolicyState::ConsecutiveSamples {
                confirm_samples,
                loud_run,
                quiet_run,
            } => {
                let threshold = (*confirm_samples).max(1);
                if is_loud {
                    *quiet_run = 0;
                    *loud_run = loud_run.saturating_add(1);
                    (*loud_run >= threshold).then_some(Condition::Loud)
                } else {
                    *loud_run = 0;
                    *quiet_run = quiet_run.saturating_add(1);
                    (*quiet_run >= threshold).then_some(Condition::Quiet)
                }
            }
            PolicyState::ElapsedSilence {
                min_gap_ms,
                gap_started_at_ms,
            } => {
                if is_loud {
                    *gap_started_at_ms = None;
                    Some(Condition::Loud)
                } else if self.confirmed == Condition::Loud {
                    let started = *gap_started_at_ms.get_or_insert(now_ms);
                    if now_ms.saturating_sub(started) > *min_gap_ms {
                        *gap_started_at_ms = None;
                        Some(Condition::Quiet)
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
        };

        match candidate {
            Some(condition) if condition != self.confirmed => {
                self.confirmed = condition;
                match condition {
                    Condition::Loud => Classification::LoudConfirmed,
                    Condition::Quiet => Classification::QuietConfirmed,
                }
            }
            _ => Classification::NoChange,
        }
    }
}
