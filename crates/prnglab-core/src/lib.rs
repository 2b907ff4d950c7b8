//! # prnglab-core
//!
//! Classic pseudo-random number generators as taught in simulation
//! courses: middle-square, middle-product, linear, multiplicative and
//! additive congruential, and constant-multiplier.
//!
//! Every generator is a pure function of its parameters. A call either
//! fails validation without iterating or returns the whole sequence.

pub mod additive;
pub mod arith;
pub mod constant_multiplier;
pub mod constants;
pub mod digits;
pub mod error;
pub mod generator;
pub mod input;
pub mod iterator;
pub mod linear;
pub mod middle_product;
pub mod middle_square;
pub mod multiplicative;
pub mod options;
pub mod params;
pub mod registry;
pub mod sequence;

// Re-exports
pub use additive::AdditiveCongruential;
pub use arith::gcd;
pub use constant_multiplier::ConstantMultiplier;
pub use constants::{exit_codes, DEFAULT_MAX_OUTPUTS, DEFAULT_RANDOM_PRECISION, MIN_SEED_DIGITS};
pub use digits::WindowPolicy;
pub use error::GenerateError;
pub use generator::Generator;
pub use linear::LinearCongruential;
pub use middle_product::MiddleProduct;
pub use middle_square::MiddleSquare;
pub use multiplicative::{MultiplicativeCongruential, MultiplierForm};
pub use options::Options;
pub use params::GeneratorParams;
pub use registry::{Algorithm, AlgorithmInfo};
pub use sequence::{GeneratedNumber, Sequence};

/// Generate a sequence with default options.
///
/// This is a convenience function for simple use cases. To change the
/// output cap or the short-window policy, call
/// [`GeneratorParams::generate`] with explicit [`Options`].
///
/// # Example
/// ```
/// use prnglab_core::{generate, MiddleSquare};
/// let seq = generate(MiddleSquare::new(1234u32, 1)).unwrap();
/// assert_eq!(seq.numbers()[0].seed.to_string(), "5227");
/// ```
pub fn generate(params: impl Into<GeneratorParams>) -> Result<Sequence, GenerateError> {
    params.into().generate(&Options::default())
}
