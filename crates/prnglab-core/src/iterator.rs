//! Lazy congruential recurrence shared by the linear and multiplicative methods.

use num_bigint::BigUint;
use num_traits::Zero;

/// Infinite iterator over `x_{i+1} = (a * x_i + c) mod m`.
///
/// Yields `x_1, x_2, ...`; the seed `x_0` itself is not emitted.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prnglab_core::iterator::CongruentialIter;
/// let xs: Vec<u32> = CongruentialIter::new(5u32.into(), 3u32.into(), 16u32.into(), 1u32.into())
///     .take(4)
///     .map(|x| u32::try_from(x).unwrap())
///     .collect();
/// assert_eq!(xs, [8, 11, 10, 5]);
/// ```
pub struct CongruentialIter {
    multiplier: BigUint,
    increment: BigUint,
    modulus: BigUint,
    state: BigUint,
}

impl CongruentialIter {
    /// A zero `modulus` yields nothing.
    #[must_use]
    pub fn new(multiplier: BigUint, increment: BigUint, modulus: BigUint, seed: BigUint) -> Self {
        Self {
            multiplier,
            increment,
            modulus,
            state: seed,
        }
    }

    /// Multiplicative form (`c = 0`).
    #[must_use]
    pub fn multiplicative(multiplier: BigUint, modulus: BigUint, seed: BigUint) -> Self {
        Self::new(multiplier, BigUint::zero(), modulus, seed)
    }
}

impl Iterator for CongruentialIter {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.modulus.is_zero() {
            return None;
        }
        let next = (&self.multiplier * &self.state + &self.increment) % &self.modulus;
        self.state = next.clone();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(iter: CongruentialIter, n: usize) -> Vec<u64> {
        iter.take(n).map(|x| u64::try_from(x).unwrap()).collect()
    }

    #[test]
    fn linear_small_modulus() {
        let iter = CongruentialIter::new(5u32.into(), 3u32.into(), 16u32.into(), 1u32.into());
        assert_eq!(
            take(iter, 16),
            [8, 11, 10, 5, 12, 15, 14, 9, 0, 3, 2, 13, 4, 7, 6, 1]
        );
    }

    #[test]
    fn multiplicative_small_modulus() {
        // a = 11, m = 32, x0 = 1
        let iter = CongruentialIter::multiplicative(11u32.into(), 32u32.into(), 1u32.into());
        assert_eq!(take(iter, 8), [11, 25, 19, 17, 27, 9, 3, 1]);
    }

    #[test]
    fn zero_modulus_is_empty() {
        let mut iter = CongruentialIter::new(5u32.into(), 3u32.into(), BigUint::zero(), 1u32.into());
        assert!(iter.next().is_none());
    }
}
