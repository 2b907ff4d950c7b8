//! Arbitrary-precision helpers: gcd, powers of two, and big ratios.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use crate::constants::RATIO_PRECISION_BITS;

/// Greatest common divisor (always non-negative, `gcd(a, 0) = |a|`).
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use prnglab_core::arith::gcd;
/// assert_eq!(gcd(&BigInt::from(12), &BigInt::from(18)), BigInt::from(6));
/// ```
#[must_use]
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// `2^exponent`.
#[must_use]
pub fn pow2(exponent: u32) -> BigUint {
    BigUint::one() << exponent
}

/// `numerator / denominator` as `f64`.
///
/// Both operands are shifted down to at most 64 significant bits of the
/// denominator first, so values far beyond `f64::MAX` still yield a
/// finite ratio. A zero denominator gives `NaN` or infinity.
#[must_use]
pub fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    let shift = denominator.bits().saturating_sub(RATIO_PRECISION_BITS);
    let num = (numerator >> shift).to_f64().unwrap_or(f64::INFINITY);
    let den = (denominator >> shift).to_f64().unwrap_or(f64::INFINITY);
    num / den
}
