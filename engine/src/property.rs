//! Bounded evaluation of temporal properties over trace prefixes.
//!
//! The benchmark exists to probe one property of the infinite trace:
//! "eventually, output == 26". A finite prefix can witness an eventuality
//! but never refute it, so evaluation returns a [`Verdict`] that is either
//! `Satisfied` (with the witnessing iteration) or `Open`.

use eca_types::{Output, Trace, ACK_VALUE};

/// Outcome of evaluating an eventuality over a finite prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The predicate held at iteration `at` (first witness).
    Satisfied { at: u64 },
    /// No witness in this prefix; a longer run could still produce one.
    Open,
}

impl Verdict {
    pub fn is_satisfied(self) -> bool {
        matches!(self, Verdict::Satisfied { .. })
    }
}

/// Evaluate "eventually `predicate`" over a trace prefix.
pub fn eventually(trace: &Trace, predicate: impl Fn(&Output) -> bool) -> Verdict {
    for record in trace {
        if predicate(&record.output) {
            return Verdict::Satisfied { at: record.index };
        }
    }
    Verdict::Open
}

/// Whether `predicate` held at every iteration of the prefix.
pub fn always(trace: &Trace, predicate: impl Fn(&Output) -> bool) -> bool {
    trace.into_iter().all(|record| predicate(&record.output))
}

/// The benchmark property: eventually the observable output equals 26.
pub fn eventually_ack(trace: &Trace) -> Verdict {
    eventually(trace, |output| output.value() == ACK_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RandomSource, ScriptedSource};
    use crate::{run, Engine};
    use eca_types::Input;

    fn record(inputs: Vec<Input>) -> Trace {
        let mut engine = Engine::new();
        let mut source = ScriptedSource::new(inputs);
        run(&mut engine, &mut source, u64::MAX)
    }

    #[test]
    fn test_prefix_with_distinguished_symbol_satisfies() {
        let trace = record(vec![Input::A, Input::B, Input::D, Input::D]);
        assert_eq!(eventually_ack(&trace), Verdict::Satisfied { at: 2 });
    }

    #[test]
    fn test_prefix_without_distinguished_symbol_stays_open() {
        let trace = record(vec![Input::A; 20]);
        assert_eq!(eventually_ack(&trace), Verdict::Open);
    }

    #[test]
    fn test_empty_prefix_stays_open() {
        assert_eq!(eventually_ack(&Trace::new()), Verdict::Open);
    }

    #[test]
    fn test_counter_reaching_ack_valuation_is_a_witness() {
        // The checker only sees valuations: the 26th non-distinguished step
        // leaks counter 26 and satisfies "output == 26" without any
        // distinguished input.
        let trace = record(vec![Input::A; 26]);
        assert_eq!(eventually_ack(&trace), Verdict::Satisfied { at: 25 });
    }

    #[test]
    fn test_always_holds_for_output_range_invariant() {
        let mut engine = Engine::new();
        let mut source = RandomSource::new(99);
        let trace = run(&mut engine, &mut source, 500);

        assert!(always(&trace, |output| {
            let value = output.value();
            value == 0 || value == 26 || value >= 11
        }));
        assert!(always(&trace, |output| !(1..=10).contains(&output.value())));
    }

    #[test]
    fn test_always_detects_violation() {
        let trace = record(vec![Input::A, Input::D]);
        assert!(!always(&trace, |output| output.value() == 0));
    }

    #[test]
    fn test_random_runs_almost_surely_satisfy() {
        // With a uniform source, 200 steps without the distinguished symbol
        // would be a (5/6)^200 event; each seed should find a witness.
        for seed in 0..10 {
            let mut engine = Engine::new();
            let mut source = RandomSource::new(seed);
            let trace = run(&mut engine, &mut source, 200);
            assert!(eventually_ack(&trace).is_satisfied());
        }
    }
}
