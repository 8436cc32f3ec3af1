//! Common types used throughout the ECA benchmark.
//!
//! The engine, the input sources, and the driver all speak in terms of the
//! types defined here: the closed input alphabet ([`Input`]), the observable
//! output valuations ([`Output`]), and the recorded trace ([`Trace`]).
//!
//! On the wire (and in emitted traces) both symbols and valuations are plain
//! integers, matching what an external checker observes; the enums exist so
//! that out-of-alphabet inputs and unreachable valuations are
//! unrepresentable inside the workspace.

pub mod symbol;
pub mod trace;
pub mod valuation;

pub use symbol::{Input, SymbolError};
pub use trace::{StepRecord, Trace};
pub use valuation::{Output, ValuationError, ACK_VALUE, SENTINEL_VALUE};
