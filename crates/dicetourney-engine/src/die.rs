use std::str::FromStr;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform, Uniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Something that produces die outcomes.
///
/// Implementors must only return values in `1..=6`.
pub trait OutcomeSource {
    /// Produces the next outcome.
    fn next_outcome(&mut self) -> u8;
}

/// Seed for deterministic die sequences.
///
/// A 128-bit (16-byte) seed used to initialize the die's random number
/// generator. Using the same seed produces the same sequence of outcomes,
/// so a simulated tournament can be reproduced exactly.
///
/// Serialized as a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use dicetourney_engine::{Die, DieSeed, OutcomeSource as _};
/// use rand::Rng as _;
///
/// let seed: DieSeed = rand::rng().random();
/// let mut a = Die::with_seed(seed);
/// let mut b = Die::with_seed(seed);
/// assert_eq!(a.next_outcome(), b.next_outcome());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieSeed([u8; 16]);

impl DieSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

/// Error returned when parsing a [`DieSeed`] from a hex string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDieSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid hex: {input}")]
    InvalidDigit { input: String },
}

impl FromStr for DieSeed {
    type Err = ParseDieSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseDieSeedError::InvalidLength { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseDieSeedError::InvalidDigit {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl std::fmt::Display for DieSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for DieSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DieSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `DieSeed` values with `rng.random()`.
impl Distribution<DieSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DieSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DieSeed(seed)
    }
}

/// A fair six-sided die.
///
/// Outcomes are drawn uniformly from `1..=6` using a PCG generator.
#[derive(Debug, Clone)]
pub struct Die {
    seed: DieSeed,
    rng: Pcg32,
    faces: Uniform<u8>,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    /// Creates a die with a random seed.
    ///
    /// For reproducible sequences, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: DieSeed) -> Self {
        let rng = Pcg32::from_seed(seed.0);
        let faces = Uniform::new_inclusive(1, 6).expect("1..=6 is a valid range");
        Self { seed, rng, faces }
    }

    /// Returns the seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> DieSeed {
        self.seed
    }

    /// Rolls the die.
    pub fn roll(&mut self) -> u8 {
        self.faces.sample(&mut self.rng)
    }
}

impl OutcomeSource for Die {
    fn next_outcome(&mut self) -> u8 {
        self.roll()
    }
}
