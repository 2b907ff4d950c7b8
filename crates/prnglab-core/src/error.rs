//! Validation error taxonomy shared by every generator.

/// Error returned when a generator rejects its parameters.
///
/// Validation always happens before the first iteration, so an error
/// never comes with a partial sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Seed missing, zero, negative, or shorter than the digit minimum.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// Requested count is zero or not a number.
    #[error("invalid count: {0}")]
    InvalidCount(String),

    /// Modulus exponent `g` is not a positive integer.
    #[error("invalid modulus exponent: {0}")]
    InvalidModulusExponent(String),

    /// Multiplier parameter `k` is not a positive integer.
    #[error("invalid multiplier parameter: {0}")]
    InvalidMultiplierParam(String),

    /// Additive constant `c` is not relatively prime to the modulus.
    #[error("invalid additive constant: {0}")]
    InvalidAdditiveConstant(String),

    /// Two values that must share a digit length do not.
    #[error("digit mismatch: {0}")]
    InvalidDigitMismatch(String),

    /// Not enough prior state to run the recurrence.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Output length exceeds the configured cap.
    #[error("sequence of {requested} values exceeds the limit of {limit}")]
    TooManyOutputs {
        /// Number of records the parameters would produce.
        requested: String,
        /// Configured maximum.
        limit: u64,
    },
}

impl GenerateError {
    /// Whether the error comes from parameter validation rather than the
    /// output cap.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::TooManyOutputs { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GenerateError::InvalidSeed("seed must have at least 4 digits".into());
        assert_eq!(
            err.to_string(),
            "invalid seed: seed must have at least 4 digits"
        );

        let err = GenerateError::TooManyOutputs {
            requested: "65536".into(),
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "sequence of 65536 values exceeds the limit of 1024"
        );
    }

    #[test]
    fn cap_is_not_a_validation_error() {
        assert!(GenerateError::InvalidCount("zero".into()).is_validation());
        assert!(!GenerateError::TooManyOutputs {
            requested: "2".into(),
            limit: 1
        }
        .is_validation());
    }
}
