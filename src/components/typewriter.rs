//! Typewriter text effect.
//!
//! The effect is a timed state machine: [`Typewriter::step`] advances one
//! tick and stamps the delay until the next one, and
//! [`Typewriter::transition`] folds an arbitrary amount of elapsed time into
//! the state. [`start`] drives it with self-rescheduling one-shot timers, so
//! the delay between ticks varies with the phase.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::rc::Rc;

use crate::config::TypewriterConfig;
use crate::dom::{Element, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing one character per tick.
    Typing,
    /// Whole phrase visible; the next tick starts deleting.
    HoldingFull,
    /// Removing one character per tick.
    Deleting,
    /// Nothing visible and the index already on the next phrase.
    HoldingEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterState {
    pub phrase_index: usize,
    /// Number of visible characters; always within `0..=phrase_len`.
    pub char_index: usize,
    pub phase: Phase,
    /// Milliseconds until the next tick.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    lengths: Vec<usize>,
    timing: TypewriterConfig,
}

impl Typewriter {
    /// Build the machine, or `None` when there is nothing to type.
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        let lengths = config.phrases.iter().map(|p| p.chars().count()).collect();
        Some(Self { phrases: config.phrases.clone(), lengths, timing: config.clone() })
    }

    /// State before the first tick; the first delay is the start delay.
    pub fn initial(&self) -> TypewriterState {
        TypewriterState { phrase_index: 0, char_index: 0, phase: Phase::Typing, delay_ms: self.timing.start_delay_ms }
    }

    pub fn phrase_len(&self, index: usize) -> usize {
        self.lengths.get(index).copied().unwrap_or(0)
    }

    /// Advance exactly one tick.
    #[must_use]
    pub fn step(&self, state: TypewriterState) -> TypewriterState {
        let len = self.phrase_len(state.phrase_index);
        let next = match state.phase {
            Phase::Typing | Phase::HoldingEmpty => {
                let char_index = (state.char_index + 1).min(len);
                if char_index == len {
                    TypewriterState { char_index, phase: Phase::HoldingFull, delay_ms: self.timing.hold_full_ms, ..state }
                } else {
                    TypewriterState { char_index, phase: Phase::Typing, delay_ms: self.timing.type_delay_ms, ..state }
                }
            }
            Phase::Deleting | Phase::HoldingFull => {
                let char_index = state.char_index.min(len).saturating_sub(1);
                if char_index == 0 {
                    TypewriterState {
                        phrase_index: (state.phrase_index + 1) % self.phrases.len(),
                        char_index: 0,
                        phase: Phase::HoldingEmpty,
                        delay_ms: self.timing.hold_empty_ms,
                    }
                } else {
                    TypewriterState { char_index, phase: Phase::Deleting, delay_ms: self.timing.delete_delay_ms, ..state }
                }
            }
        };
        // A zero delay would stall `transition`.
        TypewriterState { delay_ms: next.delay_ms.max(1), ..next }
    }

    /// Fold `elapsed_ms` into the machine. Returns the new state and the
    /// time remaining until its next tick.
    pub fn transition(&self, mut state: TypewriterState, elapsed_ms: u32) -> (TypewriterState, u32) {
        let mut elapsed = elapsed_ms;
        while elapsed >= state.delay_ms {
            elapsed -= state.delay_ms;
            state = self.step(state);
        }
        state.delay_ms -= elapsed;
        (state, state.delay_ms)
    }

    pub fn visible_text(&self, state: &TypewriterState) -> String {
        self.phrases
            .get(state.phrase_index)
            .map(|phrase| phrase.chars().take(state.char_index).collect())
            .unwrap_or_default()
    }
}

/// Run the effect on `target` forever.
pub fn start<E: Element, S: Scheduler>(typewriter: Typewriter, target: E, scheduler: S) {
    let typewriter = Rc::new(typewriter);
    let state = typewriter.initial();
    schedule_tick(typewriter, target, scheduler, state);
}

fn schedule_tick<E: Element, S: Scheduler>(typewriter: Rc<Typewriter>, target: E, scheduler: S, state: TypewriterState) {
    let delay = state.delay_ms;
    let next_scheduler = scheduler.clone();
    scheduler.after(
        delay,
        Box::new(move || {
            let (next, _) = typewriter.transition(state, delay);
            target.set_text(&typewriter.visible_text(&next));
            schedule_tick(typewriter, target, next_scheduler, next);
        }),
    );
}
