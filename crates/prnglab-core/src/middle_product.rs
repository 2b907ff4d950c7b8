//! Middle-product method: the next seed is the middle `D` digits of the
//! product of the two most recent seeds.

use num_bigint::BigUint;

use crate::constants::MIN_SEED_DIGITS;
use crate::digits::{digit_count, pow10, window_step};
use crate::error::GenerateError;
use crate::generator::{capacity, Generator};
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleProduct {
    pub x0: BigUint,
    pub x1: BigUint,
    pub count: u64,
}

impl MiddleProduct {
    #[must_use]
    pub fn new(x0: impl Into<BigUint>, x1: impl Into<BigUint>, count: u64) -> Self {
        Self {
            x0: x0.into(),
            x1: x1.into(),
            count,
        }
    }

    /// Digit width `D`, taken from `x0`.
    #[must_use]
    pub fn digits(&self) -> u32 {
        digit_count(&self.x0)
    }
}

impl Generator for MiddleProduct {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MiddleProduct
    }

    fn validate(&self) -> Result<(), GenerateError> {
        let digits = self.digits();
        if digits < MIN_SEED_DIGITS {
            return Err(GenerateError::InvalidSeed(format!(
                "x0 must have at least {MIN_SEED_DIGITS} digits, got {digits}"
            )));
        }
        let other = digit_count(&self.x1);
        if other != digits {
            return Err(GenerateError::InvalidSeed(format!(
                "x0 and x1 must have the same number of digits, got {digits} and {other}"
            )));
        }
        if self.count == 0 {
            return Err(GenerateError::InvalidCount(
                "at least one value must be requested".into(),
            ));
        }
        Ok(())
    }

    fn output_len(&self) -> Option<u64> {
        Some(self.count)
    }

    fn normalizer(&self) -> BigUint {
        pow10(self.digits())
    }

    fn run(
        &self,
        count: u64,
        normalizer: &BigUint,
        opts: &Options,
    ) -> Result<Vec<GeneratedNumber>, GenerateError> {
        let digits = self.digits();
        let mut previous = self.x0.clone();
        let mut current = self.x1.clone();
        let mut numbers = Vec::with_capacity(capacity(count));

        for index in 1..=count {
            let product = &previous * &current;
            let next = window_step(&product, digits, opts.window_policy, index)?;
            numbers.push(GeneratedNumber::new(
                index,
                next.clone(),
                normalizer,
                Some(digits),
            ));
            previous = std::mem::replace(&mut current, next);
        }

        Ok(numbers)
    }
}
