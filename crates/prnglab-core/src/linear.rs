//! Linear congruential method: `x_{i+1} = (a * x_i + c) mod m` with
//! `a = 1 + 4k` and `m = 2^g`, run for its full period of `m` steps.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arith::{gcd, pow2};
use crate::error::GenerateError;
use crate::generator::{capacity, check_exponent_fits, Generator, MAX_MODULUS_EXPONENT};
use crate::iterator::CongruentialIter;
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruential {
    pub seed: BigInt,
    /// Modulus exponent `g`.
    pub g: i64,
    /// Multiplier parameter `k`.
    pub k: i64,
    /// Additive constant `c`.
    pub c: BigInt,
}

impl LinearCongruential {
    #[must_use]
    pub fn new(seed: impl Into<BigInt>, g: i64, k: i64, c: impl Into<BigInt>) -> Self {
        Self {
            seed: seed.into(),
            g,
            k,
            c: c.into(),
        }
    }

    /// `a = 1 + 4k`.
    #[must_use]
    pub fn multiplier(&self) -> BigInt {
        BigInt::from(self.k) * 4 + 1
    }

    /// `m = 2^g`, or `None` when `g` is not a usable exponent.
    #[must_use]
    pub fn modulus(&self) -> Option<BigUint> {
        let g = u32::try_from(self.g).ok()?;
        (g > 0 && g <= MAX_MODULUS_EXPONENT).then(|| pow2(g))
    }
}

impl Generator for LinearCongruential {
    fn algorithm(&self) -> Algorithm {
        Algorithm::LinearCongruential
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.seed.is_zero() {
            return Err(GenerateError::InvalidSeed("seed must not be zero".into()));
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
        let g = u32::try_from(self.g).unwrap_or(u32::MAX);
        // gcd(c, 2^g) = 1 exactly when c is odd, so a clamped power of two
        // decides it for exponents too large to materialize.
        let divisor = gcd(&self.c, &BigInt::from(pow2(g.min(MAX_MODULUS_EXPONENT))));
        if !divisor.is_one() {
            return Err(GenerateError::InvalidAdditiveConstant(format!(
                "c = {} is not relatively prime to m = 2^{g}",
                self.c
            )));
        }
        check_exponent_fits(g)
    }

    fn output_len(&self) -> Option<u64> {
        let g = u32::try_from(self.g).ok()?;
        1u64.checked_shl(g)
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
        let modulus = BigInt::from(self.modulus().unwrap_or_default());
        // Negative inputs are reduced into [0, m) up front.
        let reduce = |value: &BigInt| value.mod_floor(&modulus).magnitude().clone();
        let iter = CongruentialIter::new(
            reduce(&self.multiplier()),
            reduce(&self.c),
            modulus.magnitude().clone(),
            reduce(&self.seed),
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
