//! Parsing of raw text fields into typed generator parameters.
//!
//! Each parser maps a malformed field onto the error variant of the
//! parameter it feeds, so a non-integer `g` is reported as
//! `InvalidModulusExponent` rather than a generic parse failure.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};

use crate::error::GenerateError;

fn parse_field<T: FromStr>(
    text: &str,
    field: &str,
    expected: &str,
    err: fn(String) -> GenerateError,
) -> Result<T, GenerateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(err(format!("{field} is required")));
    }
    text.parse()
        .map_err(|_| err(format!("{field} must be {expected}, got {text:?}")))
}

/// Seed for the digit-window methods (non-negative integer).
pub fn parse_seed(text: &str) -> Result<BigUint, GenerateError> {
    parse_field(text, "seed", "a non-negative integer", GenerateError::InvalidSeed)
}

/// Seed for the congruential methods (any integer; sign checked later).
pub fn parse_signed_seed(text: &str) -> Result<BigInt, GenerateError> {
    parse_field(text, "seed", "an integer", GenerateError::InvalidSeed)
}

/// Number of values to generate.
pub fn parse_count(text: &str) -> Result<u64, GenerateError> {
    parse_field(text, "n", "a non-negative integer", GenerateError::InvalidCount)
}

/// Modulus exponent `g`.
pub fn parse_modulus_exponent(text: &str) -> Result<i64, GenerateError> {
    parse_field(text, "g", "an integer", GenerateError::InvalidModulusExponent)
}

/// Multiplier parameter `k`.
pub fn parse_multiplier_param(text: &str) -> Result<i64, GenerateError> {
    parse_field(text, "k", "an integer", GenerateError::InvalidMultiplierParam)
}

/// Additive constant `c` of the linear method.
pub fn parse_additive_constant(text: &str) -> Result<BigInt, GenerateError> {
    parse_field(text, "c", "an integer", GenerateError::InvalidAdditiveConstant)
}

/// Constant `a` of the constant-multiplier method.
pub fn parse_constant(text: &str) -> Result<BigUint, GenerateError> {
    parse_field(
        text,
        "a",
        "a non-negative integer",
        GenerateError::InvalidDigitMismatch,
    )
}

/// One entry of the additive method's starting sequence.
pub fn parse_sequence_value(text: &str) -> Result<BigUint, GenerateError> {
    parse_field(
        text,
        "sequence value",
        "a non-negative integer",
        GenerateError::InvalidState,
    )
}

/// Modulus of the additive method.
pub fn parse_modulus(text: &str) -> Result<BigUint, GenerateError> {
    parse_field(text, "modulus", "a non-negative integer", GenerateError::InvalidState)
}

/// Count for the additive method, which reports every problem as `InvalidState`.
pub fn parse_additive_count(text: &str) -> Result<u64, GenerateError> {
    parse_field(text, "n", "a non-negative integer", GenerateError::InvalidState)
}
