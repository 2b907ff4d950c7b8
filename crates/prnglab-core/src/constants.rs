//! Constants shared by the generators and the CLI.

/// Minimum number of decimal digits a seed needs for the digit-window
/// methods (middle-square, middle-product, constant-multiplier).
pub const MIN_SEED_DIGITS: u32 = 4;

/// Default cap on the number of records a single invocation may produce.
///
/// The two congruential generators run their full period (`2^g` or
/// `2^g / 4`), so a careless `g` would otherwise allocate without bound.
pub const DEFAULT_MAX_OUTPUTS: u64 = 1 << 20;

/// Decimal places used to render `random` when a record has no digit count.
pub const DEFAULT_RANDOM_PRECISION: usize = 6;

/// Bits kept when reducing a big ratio to `f64`.
pub(crate) const RATIO_PRECISION_BITS: u64 = 64;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// Parameters rejected by validation.
    pub const ERROR_INVALID_INPUT: i32 = 4;
    /// Requested sequence is longer than the configured cap.
    pub const ERROR_TOO_MANY_OUTPUTS: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_a_power_of_two() {
        assert!(DEFAULT_MAX_OUTPUTS.is_power_of_two());
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_INPUT,
            exit_codes::ERROR_TOO_MANY_OUTPUTS,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
