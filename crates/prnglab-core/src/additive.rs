//! Additive congruential method: extends a starting sequence
//! `x_1..x_L` with `x_i = (x_{i-1} + x_{i-L}) mod m`.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::GenerateError;
use crate::generator::{capacity, Generator};
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditiveCongruential {
    /// Starting values. Generation works on a copy and never mutates them.
    pub values: Vec<BigUint>,
    pub modulus: BigUint,
    pub count: u64,
}

impl AdditiveCongruential {
    #[must_use]
    pub fn new(values: Vec<BigUint>, modulus: impl Into<BigUint>, count: u64) -> Self {
        Self {
            values,
            modulus: modulus.into(),
            count,
        }
    }
}

impl Generator for AdditiveCongruential {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AdditiveCongruential
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.values.is_empty() {
            return Err(GenerateError::InvalidState(
                "the starting sequence needs at least one value".into(),
            ));
        }
        // m - 1 is the normalizer, so m = 1 is as unusable as m = 0.
        if self.modulus <= BigUint::one() {
            return Err(GenerateError::InvalidState(format!(
                "modulus must be greater than 1, got {}",
                self.modulus
            )));
        }
        if self.count == 0 {
            return Err(GenerateError::InvalidState(
                "at least one value must be requested".into(),
            ));
        }
        Ok(())
    }

    fn output_len(&self) -> Option<u64> {
        Some(self.count)
    }

    fn normalizer(&self) -> BigUint {
        &self.modulus - 1u32
    }

    fn run(
        &self,
        count: u64,
        normalizer: &BigUint,
        _opts: &Options,
    ) -> Result<Vec<GeneratedNumber>, GenerateError> {
        let lag = self.values.len();
        let mut working = Vec::with_capacity(lag.saturating_add(capacity(count)));
        working.extend_from_slice(&self.values);
        let mut numbers = Vec::with_capacity(capacity(count));

        for index in 1..=count {
            let len = working.len();
            let next = (&working[len - 1] + &working[len - lag]) % &self.modulus;
            numbers.push(GeneratedNumber::new(index, next.clone(), normalizer, None));
            working.push(next);
        }

        Ok(numbers)
    }
}
