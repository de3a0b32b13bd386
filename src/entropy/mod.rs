//! Random sources for password generation.
//!
//! The generator never reaches for an ambient RNG. Every draw goes through a
//! [`RandomSource`] handed in by the caller, so tests can pin the sequence and
//! the CLI can pick between the thread RNG, the OS source, or a fixed seed.

use std::fmt;

use rand::rngs::{OsRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Uniform index selection.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..upper`. `upper` is at least 1.
    fn below(&mut self, upper: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

// =============================================================================
// rand-backed sources
// =============================================================================

/// Adapts any `rand` generator into a [`RandomSource`].
pub struct RngSource<R: RngCore>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl RngSource<OsRng> {
    pub fn os() -> Self {
        RngSource(OsRng)
    }
}

impl RngSource<ChaCha20Rng> {
    /// Deterministic source: the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        RngSource(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

// =============================================================================
// Source selection
// =============================================================================

/// Which random source the CLI should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Thread,
    Os,
    Seeded(u64),
}

impl Source {
    pub fn build(self) -> Box<dyn RandomSource> {
        match self {
            Source::Thread => Box::new(RngSource::thread()),
            Source::Os => Box::new(RngSource::os()),
            Source::Seeded(seed) => Box::new(RngSource::seeded(seed)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Thread => write!(f, "thread-rng"),
            Source::Os => write!(f, "os (/dev/urandom)"),
            Source::Seeded(seed) => write!(f, "chacha20 (seed {seed})"),
        }
    }
}
