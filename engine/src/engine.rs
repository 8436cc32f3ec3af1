//! The reactive engine state machine.
//!
//! State is two fields created once at startup: a hidden counter and the
//! observable output valuation. Each iteration consumes one input symbol:
//! the distinguished symbol acknowledges immediately and leaves the counter
//! alone; every other symbol bumps the counter and either stays silent or,
//! once the counter has escalated past the threshold, leaks it verbatim.
//! The loop has no terminal state; the driver decides how many iterations
//! to run.

use crate::source::InputSource;
use eca_types::{Input, Output, StepRecord, Trace};
use tracing::trace;

/// Counter values at or below this stay silent; above it, the counter is
/// leaked as the output. Fixed by the benchmark, not a tuning knob.
pub const ESCALATION_THRESHOLD: u64 = 10;

/// The reactive input/output state machine.
///
/// Initial state is `(counter = 0, output = Idle)`. The counter never
/// decreases and grows by at most one per iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    counter: u64,
    output: Output,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            counter: 0,
            output: Output::Idle,
        }
    }

    /// Consume one input symbol and return the new observable output.
    ///
    /// Total: every alphabet symbol has a defined successor state.
    pub fn step(&mut self, input: Input) -> Output {
        self.output = if input.is_distinguished() {
            Output::Ack
        } else {
            self.counter += 1;
            if self.counter > ESCALATION_THRESHOLD {
                Output::Counter(self.counter)
            } else {
                Output::Silent
            }
        };
        trace!(input = %input, output = %self.output, counter = self.counter, "step");
        self.output
    }

    /// The output left observable by the most recent step (or the sentinel
    /// before the first one).
    pub fn output(&self) -> Output {
        self.output
    }

    /// Diagnostic view of the hidden counter. The checker's property surface
    /// only ever uses [`Engine::output`].
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `engine` with symbols drawn from `source`, recording one
/// [`StepRecord`] per iteration.
///
/// Stops after `max_steps` iterations or when the source is exhausted,
/// whichever comes first; the contractually infinite loop is bounded here
/// and only here.
pub fn run(engine: &mut Engine, source: &mut impl InputSource, max_steps: u64) -> Trace {
    let mut recorded = Trace::new();
    for index in 0..max_steps {
        let Some(input) = source.next_input() else {
            break;
        };
        let output = engine.step(input);
        recorded.push(StepRecord {
            index,
            input,
            output,
        });
    }
    recorded
}
