//! Von Neumann's middle-square method.

use num_bigint::BigUint;

use crate::constants::MIN_SEED_DIGITS;
use crate::digits::{digit_count, pow10, window_step};
use crate::error::GenerateError;
use crate::generator::{capacity, Generator};
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::GeneratedNumber;

/// Middle-square parameters: `x_{i+1}` is the middle `D` digits of `x_i^2`,
/// where `D` is the digit length of the initial seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSquare {
    pub seed: BigUint,
    pub count: u64,
}

impl MiddleSquare {
    #[must_use]
    pub fn new(seed: impl Into<BigUint>, count: u64) -> Self {
        Self {
            seed: seed.into(),
            count,
        }
    }

    /// Digit width `D`.
    #[must_use]
    pub fn digits(&self) -> u32 {
        digit_count(&self.seed)
    }
}

impl Generator for MiddleSquare {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MiddleSquare
    }

    fn validate(&self) -> Result<(), GenerateError> {
        let digits = self.digits();
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
            let square = &seed * &seed;
            seed = window_step(&square, digits, opts.window_policy, index)?;
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

    fn seeds(gen: &MiddleSquare, opts: &Options) -> Result<Vec<u64>, GenerateError> {
        let seq = generate(gen, opts)?;
        Ok(seq.seeds().map(|s| u64::try_from(s).unwrap()).collect())
    }

    #[test]
    fn first_step_of_1234() {
        let seq = generate(&MiddleSquare::new(1234u32, 1), &Options::default()).unwrap();
        let first = &seq.numbers()[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.seed, BigUint::from(5227u32));
        assert_eq!(first.digits, Some(4));
        assert!((first.random - 0.5227).abs() < 1e-12);
    }

    #[test]
    fn eight_steps_of_1234() {
        assert_eq!(
            seeds(&MiddleSquare::new(1234u32, 8), &Options::default()).unwrap(),
            [5227, 3215, 3362, 3030, 1809, 2724, 4201, 6484]
        );
    }

    #[test]
    fn leading_zero_windows_shrink_the_value() {
        // 319^2 = 101761 -> "0176"
        assert_eq!(
            seeds(&MiddleSquare::new(5735u32, 5), &Options::default()).unwrap(),
            [8902, 2456, 319, 176, 3097]
        );
    }

    #[test]
    fn six_digit_seed() {
        assert_eq!(
            seeds(&MiddleSquare::new(123_456u32, 3), &Options::default()).unwrap(),
            [241_383, 265_752, 624_125]
        );
    }

    #[test]
    fn fixed_point() {
        assert_eq!(
            seeds(&MiddleSquare::new(3792u32, 3), &Options::default()).unwrap(),
            [3792, 3792, 3792]
        );
    }

    #[test]
    fn collapse_to_zero_rejected_by_default() {
        let err = generate(&MiddleSquare::new(1000u32, 4), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidState(msg) if msg.starts_with("step 2")));
    }

    #[test]
    fn collapse_to_zero_padded() {
        let opts = Options {
            window_policy: WindowPolicy::ZeroPad,
            ..Default::default()
        };
        assert_eq!(seeds(&MiddleSquare::new(1000u32, 4), &opts).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn short_seed_rejected() {
        let err = generate(&MiddleSquare::new(999u32, 5), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidSeed(_)));
    }

    #[test]
    fn zero_count_rejected() {
        let err = generate(&MiddleSquare::new(1234u32, 0), &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidCount(_)));
    }

    #[test]
    fn huge_seed_does_not_overflow() {
        let seed = pow10(40) - 1u32;
        let seq = generate(&MiddleSquare::new(seed, 3), &Options::default()).unwrap();
        assert_eq!(seq.len(), 3);
        for n in &seq {
            assert_eq!(n.digits, Some(40));
            assert!((0.0..1.0).contains(&n.random));
        }
    }
}
