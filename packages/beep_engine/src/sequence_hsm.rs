use core::cmp::min;

use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{
    config::SequenceConfig,
    trace::DetectorTraceSample,
    types::{
        ActionBuffer, Classification, DetectionState, EngineAction, ResetReason,
        SequenceComplete, StateTransition,
    },
};

/// One debounced sample as seen by the state machine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct SampleTick {
    pub(crate) now_ms: u64,
    pub(crate) magnitude: u32,
    pub(crate) threshold: u32,
    pub(crate) is_loud: bool,
    pub(crate) classification: Classification,
}

#[derive(Default)]
struct DispatchContext {
    actions: ActionBuffer,
}

pub(crate) struct SequenceMachine {
    machine: statig::blocking::StateMachine<SequenceHsm>,
}

impl SequenceMachine {
    pub(crate) fn new(config: SequenceConfig) -> Self {
        Self {
            machine: SequenceHsm::new(config).state_machine(),
        }
    }

    pub(crate) fn handle(&mut self, tick: &SampleTick) -> ActionBuffer {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(tick, &mut context);
        context.actions
    }

    pub(crate) fn state_id(&self) -> DetectionState {
        self.machine.inner().state_id
    }

    pub(crate) fn beep_count(&self) -> u8 {
        self.machine.inner().beep_count
    }

    pub(crate) fn trace(&self) -> DetectorTraceSample {
        self.machine.inner().trace()
    }
}

struct SequenceHsm {
    config: SequenceConfig,
    state_id: DetectionState,
    beep_count: u8,
    last_state_change_ms: u64,
    last_tick: SampleTick,
    reset_reason: ResetReason,
}

impl SequenceHsm {
    fn new(config: SequenceConfig) -> Self {
        Self {
            config,
            state_id: DetectionState::Idle,
            beep_count: 0,
            last_state_change_ms: 0,
            last_tick: SampleTick::default(),
            reset_reason: ResetReason::None,
        }
    }

    fn trace(&self) -> DetectorTraceSample {
        let tick = self.last_tick;
        DetectorTraceSample {
            now_ms: tick.now_ms,
            magnitude: tick.magnitude,
            threshold: tick.threshold,
            is_loud: tick.is_loud,
            classification: tick.classification,
            state: self.state_id,
            beep_count: self.beep_count,
            state_elapsed_ms: min(self.elapsed_ms(tick.now_ms), u32::MAX as u64) as u32,
            reset_reason: self.reset_reason,
        }
    }

    fn begin_tick(&mut self, tick: &SampleTick) {
        self.last_tick = *tick;
        self.reset_reason = ResetReason::None;
    }

    fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_state_change_ms)
    }

    fn move_to(&mut self, context: &mut DispatchContext, now_ms: u64, to: DetectionState) {
        context.actions.push(EngineAction::Transition(StateTransition {
            at_ms: now_ms,
            from: self.state_id,
            to,
            beep_count: self.beep_count,
        }));
        self.state_id = to;
        self.last_state_change_ms = now_ms;
    }

    fn reset_sequence(&mut self, context: &mut DispatchContext, now_ms: u64, reason: ResetReason) {
        let lost = self.beep_count;
        self.beep_count = 0;
        self.reset_reason = reason;
        if reason != ResetReason::Completed {
            context.actions.push(EngineAction::SequenceReset {
                reason,
                beep_count: lost,
            });
        }
        self.move_to(context, now_ms, DetectionState::Idle);
    }

    /// Completes the sequence once the freshly confirmed beep reaches the
    /// required count, otherwise stays in the beep.
    fn count_beep(&mut self, context: &mut DispatchContext, now_ms: u64) -> Outcome<State> {
        if self.beep_count < self.config.beep_count {
            return Transition(State::beep_confirmed());
        }

        context
            .actions
            .push(EngineAction::SequenceComplete(SequenceComplete {
                at_ms: now_ms,
                beep_count: self.beep_count,
            }));
        self.reset_sequence(context, now_ms, ResetReason::Completed);
        Transition(State::idle())
    }
}

#[state_machine(initial = "State::idle()")]
impl SequenceHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &SampleTick) -> Outcome<State> {
        self.begin_tick(event);
        if event.classification != Classification::LoudConfirmed {
            return Handled;
        }

        self.beep_count = 1;
        self.move_to(context, event.now_ms, DetectionState::BeepConfirmed);
        self.count_beep(context, event.now_ms)
    }

    #[state]
    fn beep_confirmed(
        &mut self,
        context: &mut DispatchContext,
        event: &SampleTick,
    ) -> Outcome<State> {
        self.begin_tick(event);
        if event.classification == Classification::QuietConfirmed {
            self.move_to(context, event.now_ms, DetectionState::GapConfirmed);
            return Transition(State::gap_confirmed());
        }

        // Pending silence does not count as beep time.
        if event.is_loud && self.elapsed_ms(event.now_ms) > self.config.max_beep_duration_ms {
            self.reset_sequence(context, event.now_ms, ResetReason::BeepTooLong);
            return Transition(State::idle());
        }

        Handled
    }

    #[state]
    fn gap_confirmed(
        &mut self,
        context: &mut DispatchContext,
        event: &SampleTick,
    ) -> Outcome<State> {
        self.begin_tick(event);
        if event.classification == Classification::LoudConfirmed {
            self.beep_count = self.beep_count.saturating_add(1);
            self.move_to(context, event.now_ms, DetectionState::BeepConfirmed);
            return self.count_beep(context, event.now_ms);
        }

        if !event.is_loud && self.elapsed_ms(event.now_ms) > self.config.max_beep_interval_ms {
            self.reset_sequence(context, event.now_ms, ResetReason::GapTooLong);
            return Transition(State::idle());
        }

        Handled
    }
}
