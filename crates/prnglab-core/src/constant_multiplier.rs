//! Constant-multiplier method: the next seed is the middle `D` digits of
//! `a * x_i` for a fixed `D`-digit constant `a`.

use num_bigint::BigUint;

use crate::constants::MIN_SEED_DIGITS;
use crate::digits::{digit_count, pow10, window_step};
use crate::error::GenerateError;
use crate::generator::{capacity, Generator};
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantMultiplier {
    pub seed: BigUint,
    /// The constant `a`; must have as many digits as the seed.
    pub constant: BigUint,
    pub count: u64,
}

impl ConstantMultiplier {
    #[must_use]
    pub fn new(seed: impl Into<BigUint>, constant: impl Into<BigUint>, count: u64) -> Self {
        Self {
            seed: seed.into(),
            constant: constant.into(),
            count,
        }
    }

    #[must_use]
    pub fn digits(&self) -> u32 {
        digit_count(&self.seed)
    }
}

impl Generator for ConstantMultiplier {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ConstantMultiplier
    }

    fn validate(&self) -> Result<(), GenerateError> {
        let digits = self.digits();
        let constant_digits = digit_count(&self.constant);
        if constant_digits != digits {
            return Err(GenerateError::InvalidDigitMismatch(format!(
                "a has {constant_digits} digits but the seed has {digits}"
            )));
        }
        if digits < MIN_SEED_DIGITS {
            return Err(GenerateError::InvalidSeed(format!(
                "seed must have at least {MIN_SEED_DIGITS} digits, got {digits}"
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
        let mut seed = self.seed.clone();
        let mut numbers = Vec::with_capacity(capacity(count));

        for index in 1..=count {
            let product = &self.constant * &seed;
            seed = window_step(&product, digits, opts.window_policy, index)?;
            numbers.push(GeneratedNumber::new(
                index,
                seed.clone(),
                normalizer,
                Some(digits),
            ));
        }

        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::WindowPolicy;
    use crate::generator::generate;

    fn seeds(gen: &ConstantMultiplier, opts: &Options) -> Vec<u64> {
        generate(gen, opts)
            .unwrap()
            .seeds()
            .map(|s| u64::try_from(s).unwrap())
            .collect()
    }

    #[test]
    fn textbook_example() {
        // 6965 * 9803 = 68277895 -> 2778
        assert_eq!(
            seeds(&ConstantMultiplier::new(9803u32, 6965u32, 6), &Options::default()),
            [2778, 3487, 2869, 9825, 4311, 261]
        );
    }

    #[test]
    fn odd_length_product_uses_floored_offset() {
        // 1234 * 5678 = 7006652 (7 digits) -> start 1 -> "0066"
        assert_eq!(
            seeds(&ConstantMultiplier::new(1234u32, 5678u32, 5), &Options::default()),
            [66, 7474, 4373, 8298, 1160]
        );
    }

    #[test]
    fn records_are_zero_padded_width() {
        let seq = generate(&ConstantMultiplier::new(9803u32, 6965u32, 6), &Options::default()).unwrap();
        let last = &seq.numbers()[5];
        assert_eq!(last.seed, BigUint::from(261u32));
        assert_eq!(last.digits, Some(4));
        assert!((last.random - 0.0261).abs() < 1e-12);
    }

    #[test]
    fn digit_mismatch_rejected() {
        let err = generate(&ConstantMultiplier::new(1234u32, 567u32, 5), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidDigitMismatch(_)));
    }

    #[test]
    fn mismatch_checked_before_seed_length() {
        let err = generate(&ConstantMultiplier::new(12u32, 5678u32, 5), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidDigitMismatch(_)));
    }

    #[test]
    fn short_seed_rejected() {
        let err = generate(&ConstantMultiplier::new(123u32, 456u32, 5), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidSeed(_)));
    }

    #[test]
    fn zero_count_rejected() {
        let err = generate(&ConstantMultiplier::new(1234u32, 5678u32, 0), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidCount(_)));
    }

    #[test]
    fn zero_pad_policy_never_fails() {
        let opts = Options {
            window_policy: WindowPolicy::ZeroPad,
            ..Default::default()
        };
        let seq = generate(&ConstantMultiplier::new(1000u32, 1000u32, 10), &opts).unwrap();
        assert_eq!(seq.len(), 10);
    }
}
