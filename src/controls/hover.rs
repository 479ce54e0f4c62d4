use std::time::Duration;

use log::{debug, error};

use crate::timer::{Scheduler, TaskHandle};
use crate::{Animation, AnimationSink, DebounceOptions, InteractionError, PointerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Forward animation is considered active, waiting for its reverse pair.
    Entered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceState {
    pub enter_timestamp: Option<Duration>,
    pub phase: Phase,
}

impl Default for DebounceState {
    fn default() -> Self {
        Self {
            enter_timestamp: None,
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PendingTrigger {
    animation: Animation,
    origin: [f32; 2],
}

/// Plays the ripple "out" animation on pointer enter and its "in" reverse on
/// leave. The reverse never starts before the forward animation has been
/// visible for the minimum duration.
pub struct HoverAnimationDebouncer<S> {
    sink: S,
    options: DebounceOptions,
    state: DebounceState,
    scheduler: Scheduler<PendingTrigger>,
    pending: Option<TaskHandle>,
}

impl<S: AnimationSink> HoverAnimationDebouncer<S> {
    pub fn new(sink: S, options: DebounceOptions) -> Result<Self, InteractionError> {
        options.validate()?;
        Ok(Self {
            sink,
            options,
            state: DebounceState::default(),
            scheduler: Scheduler::new(),
            pending: None,
        })
    }

    /// Attaches the debouncer to the surface found by the host under `selector`.
    pub fn attach(
        selector: &str,
        sink: Option<S>,
        options: DebounceOptions,
    ) -> Result<Self, InteractionError> {
        let sink = match sink {
            Some(sink) => sink,
            None => {
                error!("unable to attach hover animation, surface {selector} not found");
                return Err(InteractionError::SurfaceNotFound(selector.to_string()));
            }
        };
        Self::new(sink, options)
    }

    pub fn on_pointer_enter(&mut self, now: Duration, event: PointerEvent) {
        if !event.is_well_formed() {
            error!("unable to handle pointer enter, malformed event {event:?}");
            return;
        }
        if self.state.phase != Phase::Idle {
            debug!("pointer enter ignored, forward animation already active");
            return;
        }
        if self.options.cancel_on_reenter {
            if let Some(handle) = self.pending.take() {
                if self.scheduler.cancel(handle) {
                    debug!("pending reverse animation cancelled on re-enter");
                }
            }
        }
        self.state.enter_timestamp = Some(now);
        let animation = Animation::ripple_out(self.options.duration);
        self.sink.apply_animation(&animation, event.origin());
        self.state.phase = Phase::Entered;
    }

    /// Returns the deadline of the reverse animation when it was deferred,
    /// the host must call [`Self::update`] once that time is reached.
    pub fn on_pointer_leave(&mut self, now: Duration, event: PointerEvent) -> Option<Duration> {
        if !event.is_well_formed() {
            error!("unable to handle pointer leave, malformed event {event:?}");
            return None;
        }
        if self.state.phase != Phase::Entered {
            debug!("pointer leave ignored, no forward animation to reverse");
            return None;
        }
        let entered = self.state.enter_timestamp.unwrap_or(now);
        let elapsed = now.saturating_sub(entered);
        let trigger = PendingTrigger {
            animation: Animation::ripple_in(self.options.duration),
            origin: event.origin(),
        };
        self.state.phase = Phase::Idle;
        if elapsed < self.options.min_visible {
            let delay = self.options.min_visible - elapsed;
            debug!("reverse animation deferred by {delay:?}");
            self.pending = Some(self.scheduler.schedule(now, delay, trigger));
            Some(now + delay)
        } else {
            self.sink.apply_animation(&trigger.animation, trigger.origin);
            None
        }
    }

    /// Plays deferred reverse animations due at `now`, returns how many were played.
    pub fn update(&mut self, now: Duration) -> usize {
        let due = self.scheduler.poll(now);
        for trigger in &due {
            self.sink.apply_animation(&trigger.animation, trigger.origin);
        }
        if let Some(handle) = self.pending {
            if !self.scheduler.is_pending(handle) {
                self.pending = None;
            }
        }
        due.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }
}

impl<S> HoverAnimationDebouncer<S> {
    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn options(&self) -> &DebounceOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
