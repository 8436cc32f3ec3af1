//! ECA reactive engine.
//!
//! This crate contains the deterministic input/output state machine at the
//! heart of the benchmark ([`Engine`]), the injected nondeterministic input
//! sources that drive it ([`InputSource`]), trace replay verification, and
//! bounded evaluation of the benchmark's temporal property.
//!
//! ## Determinism requirements
//! - `Engine::step` is pure integer arithmetic on the two state fields; it
//!   never fails and never touches a clock, randomness, or I/O.
//! - All nondeterminism lives in the injected [`InputSource`]; the seeded
//!   random source reproduces the same symbol sequence for the same seed.
//! - Replaying a recorded trace from a fresh engine must reproduce every
//!   recorded valuation.
//!
//! The primary entrypoint is [`Engine`], driven either directly via
//! [`Engine::step`] or for a bounded number of iterations via [`run`].

mod engine;

pub mod property;
pub mod replay;
pub mod source;

pub use engine::{run, Engine, ESCALATION_THRESHOLD};
pub use property::{always, eventually, eventually_ack, Verdict};
pub use replay::{replay, ReplayError};
pub use source::{InputSource, RandomSource, ScriptedSource};
