//! Multiplicative congruential method: `x_{i+1} = (a * x_i) mod m` with
//! `a = 3 + 8k` (or `5 + 8k`) and `m = 2^g`, run for the maximum period
//! `m / 4`.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::arith::pow2;
use crate::error::GenerateError;
use crate::generator::{capacity, check_exponent_fits, Generator, MAX_MODULUS_EXPONENT};
use crate::iterator::CongruentialIter;
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

/// Residue class of the multiplier modulo 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplierForm {
    /// `a = 3 + 8k`
    #[default]
    ThreePlus8k,
    /// `a = 5 + 8k`
    FivePlus8k,
}

impl MultiplierForm {
    fn offset(self) -> u32 {
        match self {
            Self::ThreePlus8k => 3,
            Self::FivePlus8k => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicativeCongruential {
    pub seed: BigInt,
    /// Modulus exponent `g`.
    pub g: i64,
    /// Multiplier parameter `k`.
    pub k: i64,
    pub form: MultiplierForm,
}

impl MultiplicativeCongruential {
    #[must_use]
    pub fn new(seed: impl Into<BigInt>, g: i64, k: i64) -> Self {
        Self {
            seed: seed.into(),
            g,
            k,
            form: MultiplierForm::default(),
        }
    }

    #[must_use]
    pub fn with_form(mut self, form: MultiplierForm) -> Self {
        self.form = form;
        self
    }

    /// `a = 3 + 8k` or `a = 5 + 8k`.
    #[must_use]
    pub fn multiplier(&self) -> BigUint {
        BigUint::from(self.k.unsigned_abs()) * 8u32 + self.form.offset()
    }

    /// `m = 2^g`, or `None` when `g` is not a usable exponent.
    #[must_use]
    pub fn modulus(&self) -> Option<BigUint> {
        let g = u32::try_from(self.g).ok()?;
        (g > 0 && g <= MAX_MODULUS_EXPONENT).then(|| pow2(g))
    }
}

impl Generator for MultiplicativeCongruential {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MultiplicativeCongruential
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if !self.seed.is_positive() {
            return Err(GenerateError::InvalidSeed(format!(
                "seed must be greater than 0, got {}",
                self.seed
            )));
        }
        if self.g <= 0 {
            return Err(GenerateError::InvalidModulusExponent(format!(
                "g must be a positive integer, got {}",
                self.g
            )));
        }
        if self.k <= 0 {
            return Err(GenerateError::InvalidMultiplierParam(format!(
                "k must be a positive integer, got {}",
                self.k
            )));
        }
        check_exponent_fits(u32::try_from(self.g).unwrap_or(u32::MAX))
    }

    /// `m / 4`, rounded up so that `g = 1` still yields one value.
    fn output_len(&self) -> Option<u64> {
        let g = u32::try_from(self.g).ok()?;
        1u64.checked_shl(g.saturating_sub(2))
    }

    fn normalizer(&self) -> BigUint {
        self.modulus().unwrap_or_default() - 1u32
    }

    fn run(
        &self,
        count: u64,
        normalizer: &BigUint,
        _opts: &Options,
    ) -> Result<Vec<GeneratedNumber>, GenerateError> {
        let iter = CongruentialIter::multiplicative(
            self.multiplier(),
            self.modulus().unwrap_or_default(),
            self.seed.magnitude().clone(),
        );

        let mut numbers = Vec::with_capacity(capacity(count));
        numbers.extend(
            (1..=count)
                .zip(iter)
                .map(|(index, seed)| GeneratedNumber::new(index, seed, normalizer, None)),
        );
        Ok(numbers)
    }
}
