//! `GeneratorParams`: one variant per algorithm, dispatched by `match`.

use crate::additive::AdditiveCongruential;
use crate::constant_multiplier::ConstantMultiplier;
use crate::error::GenerateError;
use crate::generator::generate;
use crate::linear::LinearCongruential;
use crate::middle_product::MiddleProduct;
use crate::middle_square::MiddleSquare;
use crate::multiplicative::MultiplicativeCongruential;
use crate::options::Options;
use crate::registry::Algorithm;
use crate::sequence::Sequence;

/// Parameters for any of the six generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorParams {
    MiddleSquare(MiddleSquare),
    MiddleProduct(MiddleProduct),
    LinearCongruential(LinearCongruential),
    MultiplicativeCongruential(MultiplicativeCongruential),
    AdditiveCongruential(AdditiveCongruential),
    ConstantMultiplier(ConstantMultiplier),
}

impl GeneratorParams {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::MiddleSquare(_) => Algorithm::MiddleSquare,
            Self::MiddleProduct(_) => Algorithm::MiddleProduct,
            Self::LinearCongruential(_) => Algorithm::LinearCongruential,
            Self::MultiplicativeCongruential(_) => Algorithm::MultiplicativeCongruential,
            Self::AdditiveCongruential(_) => Algorithm::AdditiveCongruential,
            Self::ConstantMultiplier(_) => Algorithm::ConstantMultiplier,
        }
    }

    /// Validate and run the selected generator.
    pub fn generate(&self, opts: &Options) -> Result<Sequence, GenerateError> {
        match self {
            Self::MiddleSquare(p) => generate(p, opts),
            Self::MiddleProduct(p) => generate(p, opts),
            Self::LinearCongruential(p) => generate(p, opts),
            Self::MultiplicativeCongruential(p) => generate(p, opts),
            Self::AdditiveCongruential(p) => generate(p, opts),
            Self::ConstantMultiplier(p) => generate(p, opts),
        }
    }
}

macro_rules! impl_from_params {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for GeneratorParams {
                fn from(params: $variant) -> Self {
                    Self::$variant(params)
                }
            }
        )*
    };
}

impl_from_params!(
    MiddleSquare,
    MiddleProduct,
    LinearCongruential,
    MultiplicativeCongruential,
    AdditiveCongruential,
    ConstantMultiplier,
);
