//! Output records: [`GeneratedNumber`] and the [`Sequence`] that holds them.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::arith::ratio;
use crate::registry::Algorithm;

/// One step of a generator.
///
/// `random` is always `seed / normalizer` for the sequence the record
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNumber {
    /// 1-based position in the sequence.
    pub index: u64,
    /// Raw integer state `x_i`.
    #[serde(with = "decimal")]
    pub seed: BigUint,
    /// Normalized value `r_i`.
    pub random: f64,
    /// Digit width `D` for the digit-window methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<u32>,
}

impl GeneratedNumber {
    /// Build a record, deriving `random` from `seed / normalizer`.
    #[must_use]
    pub fn new(index: u64, seed: BigUint, normalizer: &BigUint, digits: Option<u32>) -> Self {
        let random = ratio(&seed, normalizer);
        Self {
            index,
            seed,
            random,
            digits,
        }
    }
}

/// A fully materialized generator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    algorithm: Algorithm,
    #[serde(serialize_with = "decimal::serialize")]
    normalizer: BigUint,
    numbers: Vec<GeneratedNumber>,
}

impl Sequence {
    pub(crate) fn new(algorithm: Algorithm, normalizer: BigUint, numbers: Vec<GeneratedNumber>) -> Self {
        Self {
            algorithm,
            normalizer,
            numbers,
        }
    }

    /// Algorithm that produced the sequence.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Divisor mapping each seed to its random value.
    #[must_use]
    pub fn normalizer(&self) -> &BigUint {
        &self.normalizer
    }

    /// Records in generation order.
    #[must_use]
    pub fn numbers(&self) -> &[GeneratedNumber] {
        &self.numbers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedNumber> {
        self.numbers.iter()
    }

    /// Seeds in generation order.
    pub fn seeds(&self) -> impl Iterator<Item = &BigUint> {
        self.numbers.iter().map(|n| &n.seed)
    }

    /// Consume the sequence, returning its records.
    #[must_use]
    pub fn into_numbers(self) -> Vec<GeneratedNumber> {
        self.numbers
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a GeneratedNumber;
    type IntoIter = std::slice::Iter<'a, GeneratedNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = GeneratedNumber;
    type IntoIter = std::vec::IntoIter<GeneratedNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

/// Serialize big integers as decimal strings so JSON consumers keep full precision.
mod decimal {
    use std::str::FromStr;

    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        BigUint::from_str(&text).map_err(de::Error::custom)
    }
}
