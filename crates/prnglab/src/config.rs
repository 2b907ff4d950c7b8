//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use prnglab_cli::{OutputMode, WorkingSequence};
use prnglab_core::input;
use prnglab_core::{
    AdditiveCongruential, ConstantMultiplier, GenerateError, GeneratorParams, LinearCongruential,
    MiddleProduct, MiddleSquare, MultiplicativeCongruential, MultiplierForm, Options,
    WindowPolicy,
};

/// Explore classic pseudo-random number generators.
#[derive(Parser, Debug)]
#[command(name = "prnglab", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the sequence as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode (only output the random values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write the sequence to this file.
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Maximum number of values a single run may produce (0 = default).
    #[arg(long, global = true, default_value = "0", env = "PRNGLAB_MAX_OUTPUTS")]
    pub max_outputs: u64,

    /// Zero-pad squares/products shorter than the digit window instead of failing.
    #[arg(long, global = true)]
    pub pad_short_window: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Generate(GeneratorCommand),

    /// List the available algorithms.
    List,

    /// Describe an algorithm: recurrence, conditions and period.
    Info {
        /// Algorithm key, e.g. `linear-congruential`.
        algorithm: String,
    },
}

/// One subcommand per generator. Fields are raw text so that malformed
/// values are reported with the error of the parameter they feed.
#[derive(Subcommand, Debug)]
pub enum GeneratorCommand {
    /// Middle-square method.
    #[command(visible_alias = "ms")]
    MiddleSquare {
        /// Seed x0 (at least 4 digits).
        #[arg(short, long)]
        seed: String,
        /// Number of values.
        #[arg(short)]
        n: String,
    },

    /// Middle-product method.
    #[command(visible_alias = "mp")]
    MiddleProduct {
        /// First seed x0 (at least 4 digits).
        #[arg(long = "x0")]
        x0: String,
        /// Second seed x1 (same digit count as x0).
        #[arg(long = "x1")]
        x1: String,
        /// Number of values.
        #[arg(short)]
        n: String,
    },

    /// Linear congruential method (runs the full period m = 2^g).
    #[command(visible_aliases = ["linear", "lcg"])]
    LinearCongruential {
        /// Seed x0 (non-zero).
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,
        /// Modulus exponent: m = 2^g.
        #[arg(short, allow_hyphen_values = true)]
        g: String,
        /// Multiplier parameter: a = 1 + 4k.
        #[arg(short, allow_hyphen_values = true)]
        k: String,
        /// Additive constant, relatively prime to m.
        #[arg(short, allow_hyphen_values = true)]
        c: String,
    },

    /// Multiplicative congruential method (runs the period m / 4).
    #[command(visible_aliases = ["multiplicative", "mcg"])]
    MultiplicativeCongruential {
        /// Seed x0 (positive).
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,
        /// Modulus exponent: m = 2^g.
        #[arg(short, allow_hyphen_values = true)]
        g: String,
        /// Multiplier parameter: a = 3 + 8k.
        #[arg(short, allow_hyphen_values = true)]
        k: String,
        /// Use a = 5 + 8k instead.
        #[arg(long)]
        five: bool,
    },

    /// Additive congruential method.
    #[command(visible_alias = "additive")]
    AdditiveCongruential {
        /// Starting value; repeat or separate with commas.
        #[arg(long = "value", value_delimiter = ',')]
        values: Vec<String>,
        /// 0-based index of a starting value to drop before generating.
        #[arg(long = "remove")]
        remove: Vec<usize>,
        /// Modulus m.
        #[arg(short, long)]
        modulus: String,
        /// Number of values.
        #[arg(short)]
        n: String,
    },

    /// Constant-multiplier method.
    #[command(visible_alias = "cm")]
    ConstantMultiplier {
        /// Seed x0 (at least 4 digits).
        #[arg(short, long)]
        seed: String,
        /// Constant a (same digit count as the seed).
        #[arg(short)]
        a: String,
        /// Number of values.
        #[arg(short)]
        n: String,
    },
}

impl GeneratorCommand {
    /// Parse the raw fields into generator parameters.
    pub fn to_params(&self) -> Result<GeneratorParams, GenerateError> {
        let params = match self {
            Self::MiddleSquare { seed, n } => {
                MiddleSquare::new(input::parse_seed(seed)?, input::parse_count(n)?).into()
            }
            Self::MiddleProduct { x0, x1, n } => MiddleProduct::new(
                input::parse_seed(x0)?,
                input::parse_seed(x1)?,
                input::parse_count(n)?,
            )
            .into(),
            Self::LinearCongruential { seed, g, k, c } => LinearCongruential::new(
                input::parse_signed_seed(seed)?,
                input::parse_modulus_exponent(g)?,
                input::parse_multiplier_param(k)?,
                input::parse_additive_constant(c)?,
            )
            .into(),
            Self::MultiplicativeCongruential { seed, g, k, five } => {
                let form = if *five {
                    MultiplierForm::FivePlus8k
                } else {
                    MultiplierForm::ThreePlus8k
                };
                MultiplicativeCongruential::new(
                    input::parse_signed_seed(seed)?,
                    input::parse_modulus_exponent(g)?,
                    input::parse_multiplier_param(k)?,
                )
                .with_form(form)
                .into()
            }
            Self::AdditiveCongruential {
                values,
                remove,
                modulus,
                n,
            } => {
                let mut working = values
                    .iter()
                    .map(|v| input::parse_sequence_value(v))
                    .collect::<Result<WorkingSequence, _>>()?;
                working
                    .remove_all(remove)
                    .map_err(|e| GenerateError::InvalidState(e.to_string()))?;
                AdditiveCongruential::new(
                    working.to_vec(),
                    input::parse_modulus(modulus)?,
                    input::parse_additive_count(n)?,
                )
                .into()
            }
            Self::ConstantMultiplier { seed, a, n } => ConstantMultiplier::new(
                input::parse_seed(seed)?,
                input::parse_constant(a)?,
                input::parse_count(n)?,
            )
            .into(),
        };
        Ok(params)
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Core options derived from the global flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            max_outputs: self.max_outputs,
            window_policy: if self.pad_short_window {
                WindowPolicy::ZeroPad
            } else {
                WindowPolicy::Reject
            },
        }
        .normalize()
    }

    /// Output mode; `--json` wins over `--quiet`.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
