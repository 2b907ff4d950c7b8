//! CLI sequence presenter.

use std::io::{self, Write};
use std::time::Duration;

use prnglab_core::{Algorithm, Sequence};

use crate::output::{format_duration, format_random, write_json, write_records};
use crate::ui::{print_error, print_field, print_header};

/// Trait for presenting generator output to the user.
pub trait SequencePresenter {
    /// Present a generated sequence.
    fn present_sequence(&self, sequence: &Sequence, duration: Duration) -> io::Result<()>;

    /// Present the reference card of an algorithm.
    fn present_info(&self, algorithm: Algorithm);

    /// Present the list of available algorithms.
    fn present_list(&self);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Header plus one label pair per record.
    #[default]
    Normal,
    /// Only the formatted random values.
    Quiet,
    /// The whole sequence as JSON.
    Json,
}

/// CLI presenter writing to stdout.
pub struct CLISequencePresenter {
    mode: OutputMode,
    verbose: bool,
}

impl CLISequencePresenter {
    #[must_use]
    pub fn new(mode: OutputMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }

    /// Write the records of `sequence` to `out` in the body format of the
    /// current mode (everything except the styled header).
    pub fn render_body(&self, out: &mut dyn Write, sequence: &Sequence) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => write_json(out, sequence),
            OutputMode::Quiet => {
                for number in sequence {
                    writeln!(out, "{}", format_random(number))?;
                }
                Ok(())
            }
            OutputMode::Normal => write_records(out, sequence),
        }
    }
}

impl SequencePresenter for CLISequencePresenter {
    fn present_sequence(&self, sequence: &Sequence, duration: Duration) -> io::Result<()> {
        if self.mode == OutputMode::Normal {
            print_header(sequence.algorithm().name());
            print_field("Values", &sequence.len().to_string());
            print_field("Normalizer", &sequence.normalizer().to_string());
            if self.verbose {
                print_field("Duration", &format_duration(duration));
            }
        }

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.render_body(&mut out, sequence)?;
        out.flush()
    }

    fn present_info(&self, algorithm: Algorithm) {
        let info = algorithm.info();
        print_header(algorithm.name());
        println!("{}", info.summary);
        print_field("Recurrence", info.recurrence);
        for condition in info.conditions {
            print_field("Condition", condition);
        }
        print_field("Length", info.length);
    }

    fn present_list(&self) {
        for algorithm in Algorithm::ALL {
            if self.mode == OutputMode::Quiet {
                println!("{}", algorithm.key());
            } else {
                println!("{:<30} {}", algorithm.key(), algorithm.name());
            }
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
