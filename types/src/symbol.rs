//! The closed input alphabet.
//!
//! The environment supplies one of six symbols per iteration. Symbols are
//! letters `A` through `F` with wire valuations `1` through `6`; `D` (wire
//! value 4) is the distinguished symbol that triggers an acknowledgement.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// Error raised when an external integer is not a member of the alphabet.
#[derive(Debug, Clone, Copy, ThisError, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol {got} is outside the alphabet (expected 1..=6)")]
    OutsideAlphabet { got: i64 },
}

/// One symbol of the input alphabet.
///
/// Discriminants are the wire valuations, so `Input::D as u8 == 4`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    A = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    F = 6,
}

impl Input {
    /// Every symbol of the alphabet, in wire order.
    pub const ALL: [Input; 6] = [
        Input::A,
        Input::B,
        Input::C,
        Input::D,
        Input::E,
        Input::F,
    ];

    /// The integer valuation an external observer sees.
    pub fn value(self) -> i64 {
        self as u8 as i64
    }

    /// Whether this is the distinguished symbol that triggers an
    /// acknowledgement.
    pub fn is_distinguished(self) -> bool {
        matches!(self, Input::D)
    }
}

impl TryFrom<i64> for Input {
    type Error = SymbolError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Input::A),
            2 => Ok(Input::B),
            3 => Ok(Input::C),
            4 => Ok(Input::D),
            5 => Ok(Input::E),
            6 => Ok(Input::F),
            got => Err(SymbolError::OutsideAlphabet { got }),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Input::A => 'A',
            Input::B => 'B',
            Input::C => 'C',
            Input::D => 'D',
            Input::E => 'E',
            Input::F => 'F',
        };
        write!(f, "{letter}")
    }
}

// Traces carry integer valuations, not letters.
impl Serialize for Input {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for Input {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Input::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_valuations() {
        let values: Vec<i64> = Input::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_distinguished_symbol() {
        for symbol in Input::ALL {
            assert_eq!(symbol.is_distinguished(), symbol.value() == 4);
        }
    }

    #[test]
    fn test_try_from_roundtrip() {
        for symbol in Input::ALL {
            assert_eq!(Input::try_from(symbol.value()), Ok(symbol));
        }
    }

    #[test]
    fn test_try_from_rejects_outside_alphabet() {
        for value in [i64::MIN, -1, 0, 7, 26, i64::MAX] {
            assert_eq!(
                Input::try_from(value),
                Err(SymbolError::OutsideAlphabet { got: value })
            );
        }
    }

    #[test]
    fn test_serde_uses_valuations() {
        let encoded = serde_json::to_string(&Input::D).unwrap();
        assert_eq!(encoded, "4");
        let decoded: Input = serde_json::from_str("6").unwrap();
        assert_eq!(decoded, Input::F);
        assert!(serde_json::from_str::<Input>("0").is_err());
    }
}
