//! The `Generator` trait and the validated entry point that drives it.
//!
//! Every algorithm implements `Generator`. Callers go through
//! [`generate`], which validates, enforces the output cap, and only then
//! runs the recurrence, so a failure never yields a partial sequence.

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::constants::DEFAULT_MAX_OUTPUTS;
use crate::error::GenerateError;
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::{GeneratedNumber, Sequence};

/// Largest modulus exponent whose full period is still indexable by `u64`.
pub(crate) const MAX_MODULUS_EXPONENT: u32 = 64;

/// A deterministic, stateless pseudo-random sequence generator.
pub trait Generator {
    /// Algorithm implemented by this parameter set.
    fn algorithm(&self) -> Algorithm;

    /// Check the parameters without iterating.
    fn validate(&self) -> Result<(), GenerateError>;

    /// Number of records a valid call produces, or `None` if it does not
    /// fit in `u64`. Only called after `validate` succeeded.
    fn output_len(&self) -> Option<u64>;

    /// Divisor mapping seeds to random values. Only called after
    /// `validate` succeeded.
    fn normalizer(&self) -> BigUint;

    /// Run the recurrence for `count` steps.
    fn run(
        &self,
        count: u64,
        normalizer: &BigUint,
        opts: &Options,
    ) -> Result<Vec<GeneratedNumber>, GenerateError>;
}

/// Validate `generator` and materialize its sequence.
pub fn generate<G: Generator + ?Sized>(
    generator: &G,
    opts: &Options,
) -> Result<Sequence, GenerateError> {
    let algorithm = generator.algorithm();
    generator.validate()?;

    let opts = opts.normalize();
    let count = match generator.output_len() {
        Some(count) if count <= opts.max_outputs => count,
        requested => {
            let requested = requested.map_or_else(|| "2^64 or more".to_string(), |n| n.to_string());
            warn!(%algorithm, %requested, limit = opts.max_outputs, "output cap exceeded");
            return Err(GenerateError::TooManyOutputs {
                requested,
                limit: opts.max_outputs,
            });
        }
    };

    let normalizer = generator.normalizer();
    let numbers = generator.run(count, &normalizer, &opts)?;
    debug!(%algorithm, count = numbers.len(), %normalizer, "sequence generated");
    Ok(Sequence::new(algorithm, normalizer, numbers))
}

/// Reject modulus exponents whose period cannot be materialized at all.
pub(crate) fn check_exponent_fits(g: u32) -> Result<(), GenerateError> {
    if g > MAX_MODULUS_EXPONENT {
        return Err(GenerateError::TooManyOutputs {
            requested: format!("2^{g}"),
            limit: u64::MAX,
        });
    }
    Ok(())
}

/// Capacity hint for a sequence of `count` records, bounded by the default
/// cap so a raised `max_outputs` grows the buffer instead of reserving it.
pub(crate) fn capacity(count: u64) -> usize {
    usize::try_from(count.min(DEFAULT_MAX_OUTPUTS)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::pow10;

    /// Emits `0, 1, 2, ...` over a fixed normalizer.
    struct Counter {
        count: u64,
        fail: bool,
    }

    impl Generator for Counter {
        fn algorithm(&self) -> Algorithm {
            Algorithm::MiddleSquare
        }

        fn validate(&self) -> Result<(), GenerateError> {
            if self.fail {
                return Err(GenerateError::InvalidCount("rejected".into()));
            }
            Ok(())
        }

        fn output_len(&self) -> Option<u64> {
            Some(self.count)
        }

        fn normalizer(&self) -> BigUint {
            pow10(2)
        }

        fn run(
            &self,
            count: u64,
            normalizer: &BigUint,
            _opts: &Options,
        ) -> Result<Vec<GeneratedNumber>, GenerateError> {
            Ok((1..=count)
                .map(|i| GeneratedNumber::new(i, BigUint::from(i), normalizer, None))
                .collect())
        }
    }

    #[test]
    fn generate_runs_valid_generator() {
        let seq = generate(&Counter { count: 3, fail: false }, &Options::default()).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.normalizer(), &BigUint::from(100u32));
    }

    #[test]
    fn generate_stops_on_validation_error() {
        let err = generate(&Counter { count: 3, fail: true }, &Options::default()).unwrap_err();
        assert_eq!(err, GenerateError::InvalidCount("rejected".into()));
    }

    #[test]
    fn generate_enforces_cap() {
        let opts = Options {
            max_outputs: 2,
            ..Default::default()
        };
        let err = generate(&Counter { count: 3, fail: false }, &opts).unwrap_err();
        assert_eq!(
            err,
            GenerateError::TooManyOutputs {
                requested: "3".into(),
                limit: 2
            }
        );
    }

    #[test]
    fn capacity_hint_is_bounded() {
        assert_eq!(capacity(3), 3);
        assert_eq!(capacity(u64::MAX), usize::try_from(DEFAULT_MAX_OUTPUTS).unwrap());
    }

    #[test]
    fn unbounded_cap_with_huge_count_does_not_preallocate() {
        use crate::constant_multiplier::ConstantMultiplier;
        use crate::middle_square::MiddleSquare;

        // Both collapse to 0 after one step, then the short window fails.
        let opts = Options {
            max_outputs: u64::MAX,
            ..Default::default()
        };
        let err = generate(&MiddleSquare::new(1000u32, u64::MAX), &opts).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidState(_)));
        let err = generate(&ConstantMultiplier::new(1000u32, 1000u32, u64::MAX), &opts).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidState(_)));
    }

    #[test]
    fn exponent_limit() {
        assert!(check_exponent_fits(64).is_ok());
        assert!(check_exponent_fits(65).is_err());
    }
}
