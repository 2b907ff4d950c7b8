//! Decimal digit helpers for the digit-window methods.
//!
//! Middle-square, middle-product and constant-multiplier all take the
//! middle `D` decimal digits of an intermediate value as the next seed.
//! The window starts at `floor((len - D) / 2)` for every method.

use num_bigint::BigUint;

use crate::error::GenerateError;

/// Behaviour when an intermediate value has fewer than `D` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Fail the invocation with `InvalidState`.
    #[default]
    Reject,
    /// Left-pad the intermediate value with zeros to `D` digits.
    ZeroPad,
}

/// Number of decimal digits in `value` (`0` has one digit).
#[must_use]
pub fn digit_count(value: &BigUint) -> u32 {
    u32::try_from(value.to_str_radix(10).len()).unwrap_or(u32::MAX)
}

/// `10^digits`.
#[must_use]
pub fn pow10(digits: u32) -> BigUint {
    BigUint::from(10u32).pow(digits)
}

/// Extract the middle `width` decimal digits of `value`.
///
/// Returns `None` when `value` is shorter than `width` and the policy is
/// [`WindowPolicy::Reject`].
#[must_use]
pub fn middle_window(value: &BigUint, width: u32, policy: WindowPolicy) -> Option<BigUint> {
    let width = usize::try_from(width).ok()?;
    let mut text = value.to_str_radix(10);
    if text.len() < width {
        match policy {
            WindowPolicy::Reject => return None,
            WindowPolicy::ZeroPad => text = format!("{text:0>width$}"),
        }
    }
    let start = (text.len() - width) / 2;
    BigUint::parse_bytes(&text.as_bytes()[start..start + width], 10)
}

/// [`middle_window`] for step `index` of a run, as a `Result`.
pub(crate) fn window_step(
    value: &BigUint,
    width: u32,
    policy: WindowPolicy,
    index: u64,
) -> Result<BigUint, GenerateError> {
    middle_window(value, width, policy).ok_or_else(|| {
        GenerateError::InvalidState(format!(
            "step {index}: intermediate value {value} has fewer than {width} digits"
        ))
    })
}
