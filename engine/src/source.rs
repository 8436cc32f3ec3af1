//! Injected nondeterministic input sources.
//!
//! The benchmark's "nondeterministic input" is an external oracle
//! constrained to the alphabet. Rather than hard-coding a choice mechanism,
//! the run loop takes any [`InputSource`]: a seeded random source for
//! exploratory runs, or a scripted source replaying a fixed sequence.
//!
//! Alphabet membership is enforced exactly once, where external integers
//! enter the system ([`ScriptedSource::from_values`]); everything past that
//! boundary works with [`Input`] and cannot produce an invalid symbol.

use eca_types::{Input, SymbolError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// An external source of input symbols.
///
/// `None` means the source is exhausted; the run loop stops early. Sources
/// backed by a generator never exhaust.
pub trait InputSource {
    fn next_input(&mut self) -> Option<Input>;
}

/// Uniform random symbols from a seeded generator.
///
/// The same seed always reproduces the same symbol sequence.
#[derive(Debug)]
pub struct RandomSource {
    rng: ChaCha20Rng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl InputSource for RandomSource {
    fn next_input(&mut self) -> Option<Input> {
        let index = self.rng.gen_range(0..Input::ALL.len());
        Some(Input::ALL[index])
    }
}

/// Replays a fixed symbol sequence, then exhausts.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Input>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Input>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// Build a script from raw integer valuations, rejecting anything
    /// outside the alphabet.
    pub fn from_values(values: &[i64]) -> Result<Self, SymbolError> {
        let script = values
            .iter()
            .map(|&value| Input::try_from(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(script))
    }

    /// Symbols not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.position
    }
}

impl InputSource for ScriptedSource {
    fn next_input(&mut self) -> Option<Input> {
        let input = self.script.get(self.position).copied()?;
        self.position += 1;
        Some(input)
    }
}
