//! Observable output valuations.
//!
//! The engine's output variable only ever holds one of four kinds of value:
//! the startup sentinel (-1), silence (0), the acknowledgement (26), or the
//! raw counter once it has escalated past the threshold (>= 11). Values in
//! `1..=10` are unreachable.
//!
//! Once the counter itself reaches 26, its valuation collides with the
//! acknowledgement valuation. The classification below keeps the two cases
//! distinct in memory; on the wire both are the integer 26, and decoding 26
//! always yields [`Output::Ack`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// Valuation of the startup sentinel ("no output yet").
pub const SENTINEL_VALUE: i64 = -1;

/// Valuation of the acknowledgement emitted for the distinguished symbol.
pub const ACK_VALUE: i64 = 26;

/// Error raised when an external integer is not a reachable valuation.
#[derive(Debug, Clone, Copy, ThisError, PartialEq, Eq)]
pub enum ValuationError {
    #[error("valuation {got} is unreachable (expected -1, 0, 26, or >= 11)")]
    Unreachable { got: i64 },
}

/// Classification of an observable output valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    /// No output has been produced yet (valuation -1).
    Idle,
    /// A non-distinguished input arrived while the counter was at or below
    /// the escalation threshold (valuation 0).
    Silent,
    /// The distinguished symbol was the input this iteration (valuation 26).
    Ack,
    /// The escalated counter, leaked verbatim. Only constructed with values
    /// strictly above the threshold, so the payload is always >= 11.
    Counter(u64),
}

impl Output {
    /// The integer valuation an external observer sees.
    pub fn value(self) -> i64 {
        match self {
            Output::Idle => SENTINEL_VALUE,
            Output::Silent => 0,
            Output::Ack => ACK_VALUE,
            Output::Counter(n) => n as i64,
        }
    }

    /// Whether this valuation satisfies the benchmark's target predicate
    /// (`output == 26`), regardless of how it was produced.
    pub fn is_ack_valuation(self) -> bool {
        self.value() == ACK_VALUE
    }
}

impl TryFrom<i64> for Output {
    type Error = ValuationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            SENTINEL_VALUE => Ok(Output::Idle),
            0 => Ok(Output::Silent),
            ACK_VALUE => Ok(Output::Ack),
            v if v >= 11 => Ok(Output::Counter(v as u64)),
            got => Err(ValuationError::Unreachable { got }),
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for Output {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Output::try_from(value).map_err(serde::de::Error::custom)
    }
}
