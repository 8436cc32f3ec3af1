//! Deterministic trace replay verification.
//!
//! The engine is deterministic given its inputs, so any recorded trace can
//! be re-executed from a fresh engine and checked record by record. A trace
//! produced by [`crate::run`] always replays cleanly; a trace that was
//! reordered, truncated in the middle, or had a valuation tampered with is
//! rejected at the first divergent record.
//!
//! Comparison is on valuations, not classifications: an emitted trace only
//! carries integers, and once the counter reaches the acknowledgement
//! valuation the two are indistinguishable to an observer.

use crate::Engine;
use eca_types::Trace;
use thiserror::Error as ThisError;

/// Error during trace replay.
#[derive(Debug, Clone, Copy, ThisError, PartialEq, Eq)]
pub enum ReplayError {
    /// Records are not consecutively indexed from zero.
    #[error("non-sequential record index (expected {expected}, got {got})")]
    NonSequentialIndex { expected: u64, got: u64 },
    /// A recorded valuation diverges from recomputation.
    #[error("output mismatch at index {index} (expected {expected}, got {got})")]
    OutputMismatch {
        index: u64,
        expected: i64,
        got: i64,
    },
}

/// Re-execute `trace` from a fresh engine, verifying every record.
///
/// Returns the engine in its post-trace state, ready to continue stepping
/// from where the recording stopped.
pub fn replay(trace: &Trace) -> Result<Engine, ReplayError> {
    let mut engine = Engine::new();

    for (expected_index, record) in trace.records().iter().enumerate() {
        let expected_index = expected_index as u64;
        if record.index != expected_index {
            return Err(ReplayError::NonSequentialIndex {
                expected: expected_index,
                got: record.index,
            });
        }

        let recomputed = engine.step(record.input);
        if recomputed.value() != record.output.value() {
            return Err(ReplayError::OutputMismatch {
                index: record.index,
                expected: recomputed.value(),
                got: record.output.value(),
            });
        }
    }

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RandomSource, ScriptedSource};
    use crate::run;
    use eca_types::{Input, Output, StepRecord, Trace};

    #[test]
    fn test_recorded_trace_replays_cleanly() {
        let mut engine = Engine::new();
        let mut source = RandomSource::new(1234);
        let recorded = run(&mut engine, &mut source, 100);

        let replayed = replay(&recorded).unwrap();
        assert_eq!(replayed, engine);
    }

    #[test]
    fn test_empty_trace_replays_to_initial_state() {
        let replayed = replay(&Trace::new()).unwrap();
        assert_eq!(replayed, Engine::new());
    }

    #[test]
    fn test_tampered_output_is_rejected() {
        let mut engine = Engine::new();
        let mut source = ScriptedSource::new(vec![Input::A, Input::D]);
        let recorded = run(&mut engine, &mut source, 10);

        let mut records = recorded.records().to_vec();
        records[1].output = Output::Silent; // was Ack
        let tampered = Trace::from(records);

        assert_eq!(
            replay(&tampered),
            Err(ReplayError::OutputMismatch {
                index: 1,
                expected: 26,
                got: 0,
            })
        );
    }

    #[test]
    fn test_reordered_records_are_rejected() {
        let records = vec![
            StepRecord {
                index: 1,
                input: Input::A,
                output: Output::Silent,
            },
            StepRecord {
                index: 0,
                input: Input::A,
                output: Output::Silent,
            },
        ];

        assert_eq!(
            replay(&Trace::from(records)),
            Err(ReplayError::NonSequentialIndex {
                expected: 0,
                got: 1,
            })
        );
    }

    #[test]
    fn test_replay_survives_json_roundtrip() {
        // Serialization flattens classifications to valuations; replay must
        // still accept the decoded trace, including a counter that has
        // reached the acknowledgement valuation.
        let mut engine = Engine::new();
        let mut source = ScriptedSource::new(vec![Input::A; 30]);
        let recorded = run(&mut engine, &mut source, 30);

        let encoded = serde_json::to_string(&recorded).unwrap();
        let decoded: Trace = serde_json::from_str(&encoded).unwrap();
        let replayed = replay(&decoded).unwrap();
        assert_eq!(replayed.counter(), 30);
    }

    #[test]
    fn test_replayed_engine_continues_stepping() {
        let mut engine = Engine::new();
        let mut source = ScriptedSource::new(vec![Input::A; 10]);
        let recorded = run(&mut engine, &mut source, 10);

        let mut replayed = replay(&recorded).unwrap();
        assert_eq!(replayed.step(Input::A), Output::Counter(11));
    }
}
