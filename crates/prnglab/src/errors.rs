//! Error handling and exit codes.

use prnglab_core::constants::exit_codes;
use prnglab_core::GenerateError;

/// Map a generator error to the process exit code.
#[must_use]
pub fn handle_error(err: &GenerateError) -> i32 {
    match err {
        GenerateError::TooManyOutputs { .. } => exit_codes::ERROR_TOO_MANY_OUTPUTS,
        GenerateError::InvalidSeed(_)
        | GenerateError::InvalidCount(_)
        | GenerateError::InvalidModulusExponent(_)
        | GenerateError::InvalidMultiplierParam(_)
        | GenerateError::InvalidAdditiveConstant(_)
        | GenerateError::InvalidDigitMismatch(_)
        | GenerateError::InvalidState(_) => exit_codes::ERROR_INVALID_INPUT,
    }
}
