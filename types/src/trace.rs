//! Recorded traces.
//!
//! A trace is the sequence of observable valuations produced across the
//! iterations of the reactive loop, paired with the inputs that produced
//! them. The external checker evaluates its temporal property against this
//! sequence.

use crate::{Input, Output};
use serde::{Deserialize, Serialize};

/// One observable iteration of the reactive loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based iteration index.
    pub index: u64,
    /// The symbol the environment supplied.
    pub input: Input,
    /// The output left observable until the next iteration.
    pub output: Output,
}

/// An ordered prefix of the (conceptually infinite) loop's trace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace(Vec<StepRecord>);

impl Trace {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append the next iteration's record.
    ///
    /// Records are expected in iteration order; the replay verifier rejects
    /// traces with gaps or reordering.
    pub fn push(&mut self, record: StepRecord) {
        self.0.push(record);
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The observable valuations, in iteration order.
    pub fn outputs(&self) -> impl Iterator<Item = Output> + '_ {
        self.0.iter().map(|record| record.output)
    }
}

impl From<Vec<StepRecord>> for Trace {
    fn from(records: Vec<StepRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
