//! Algorithm registry.
//!
//! A closed enum replaces a name-to-function map: every algorithm is a
//! variant, and lookups by key go through [`Algorithm::from_str`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GenerateError;

/// The six supported generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    MiddleSquare,
    MiddleProduct,
    LinearCongruential,
    MultiplicativeCongruential,
    AdditiveCongruential,
    ConstantMultiplier,
}

/// Reference card for an algorithm, as shown by `prnglab info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub summary: &'static str,
    pub recurrence: &'static str,
    pub conditions: &'static [&'static str],
    pub length: &'static str,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::MiddleSquare,
        Algorithm::MiddleProduct,
        Algorithm::LinearCongruential,
        Algorithm::MultiplicativeCongruential,
        Algorithm::AdditiveCongruential,
        Algorithm::ConstantMultiplier,
    ];

    /// Stable kebab-case key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::MiddleSquare => "middle-square",
            Self::MiddleProduct => "middle-product",
            Self::LinearCongruential => "linear-congruential",
            Self::MultiplicativeCongruential => "multiplicative-congruential",
            Self::AdditiveCongruential => "additive-congruential",
            Self::ConstantMultiplier => "constant-multiplier",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MiddleSquare => "Middle square",
            Self::MiddleProduct => "Middle product",
            Self::LinearCongruential => "Linear congruential",
            Self::MultiplicativeCongruential => "Multiplicative congruential",
            Self::AdditiveCongruential => "Additive congruential",
            Self::ConstantMultiplier => "Constant multiplier",
        }
    }

    /// Whether records carry a digit width.
    #[must_use]
    pub fn uses_digit_window(self) -> bool {
        matches!(
            self,
            Self::MiddleSquare | Self::MiddleProduct | Self::ConstantMultiplier
        )
    }

    #[must_use]
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::MiddleSquare => AlgorithmInfo {
                summary: "Proposed by John von Neumann in 1949. Easy to understand and \
                          implement, but limited in period and prone to collapsing to zero.",
                recurrence: "x_{i+1} = middle D digits of x_i^2,  r_i = x_i / 10^D",
                conditions: &["x_0 has D > 3 digits", "n > 0 values are requested"],
                length: "n",
            },
            Self::MiddleProduct => AlgorithmInfo {
                summary: "Like middle square, but multiplies the two most recent seeds.",
                recurrence: "x_{i+2} = middle D digits of x_i * x_{i+1},  r = x / 10^D",
                conditions: &[
                    "x_0 and x_1 both have D > 3 digits",
                    "n > 0 values are requested",
                ],
                length: "n",
            },
            Self::LinearCongruential => AlgorithmInfo {
                summary: "Generates a sequence of integers with a linear recurrence \
                          modulo a power of two.",
                recurrence: "x_{i+1} = (a * x_i + c) mod m,  r_i = x_i / (m - 1)",
                conditions: &[
                    "m = 2^g with g a positive integer",
                    "a = 1 + 4k with k a positive integer",
                    "c relatively prime to m",
                    "x_0 != 0",
                ],
                length: "N = m = 2^g (full period)",
            },
            Self::MultiplicativeCongruential => AlgorithmInfo {
                summary: "The linear congruential method with the additive constant \
                          dropped (c = 0).",
                recurrence: "x_{i+1} = (a * x_i) mod m,  r_i = x_i / (m - 1)",
                conditions: &[
                    "m = 2^g with g a positive integer",
                    "a = 3 + 8k or a = 5 + 8k with k a positive integer",
                    "x_0 > 0",
                ],
                length: "N = m / 4 = 2^(g-2) (maximum period)",
            },
            Self::AdditiveCongruential => AlgorithmInfo {
                summary: "Extends a user-supplied sequence x_1..x_L by adding the last \
                          value to the value L positions back.",
                recurrence: "x_i = (x_{i-1} + x_{i-L}) mod m,  r_i = x_i / (m - 1)",
                conditions: &["L >= 1 starting values", "m > 1", "n > 0"],
                length: "n",
            },
            Self::ConstantMultiplier => AlgorithmInfo {
                summary: "Similar to middle product, but one factor is a fixed constant a.",
                recurrence: "x_{i+1} = middle D digits of a * x_i,  r_i = x_i / 10^D",
                conditions: &[
                    "x_0 has D > 3 digits",
                    "a has exactly D digits",
                    "n > 0 values are requested",
                ],
                length: "n",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "middle-square" | "ms" => Ok(Self::MiddleSquare),
            "middle-product" | "mp" => Ok(Self::MiddleProduct),
            "linear-congruential" | "linear" | "lcg" => Ok(Self::LinearCongruential),
            "multiplicative-congruential" | "multiplicative" | "mcg" => {
                Ok(Self::MultiplicativeCongruential)
            }
            "additive-congruential" | "additive" => Ok(Self::AdditiveCongruential),
            "constant-multiplier" | "cm" => Ok(Self::ConstantMultiplier),
            _ => Err(GenerateError::InvalidState(format!("unknown algorithm: {s}"))),
        }
    }
}
