//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use prnglab_cli::output::write_to_file;
use prnglab_cli::{CLISequencePresenter, SequencePresenter};
use prnglab_core::{Algorithm, GenerateError};

use crate::config::{AppConfig, Command, GeneratorCommand};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        prnglab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CLISequencePresenter::new(config.output_mode(), config.verbose);
    match &config.command {
        Some(Command::Generate(cmd)) => run_generator(config, cmd, &presenter),
        Some(Command::List) => {
            presenter.present_list();
            Ok(())
        }
        Some(Command::Info { algorithm }) => {
            let algorithm: Algorithm = algorithm
                .parse()
                .map_err(|e: GenerateError| report(&presenter, e))?;
            presenter.present_info(algorithm);
            Ok(())
        }
        None => {
            <AppConfig as clap::CommandFactory>::command().print_help()?;
            Ok(())
        }
    }
}

fn run_generator(
    config: &AppConfig,
    cmd: &GeneratorCommand,
    presenter: &dyn SequencePresenter,
) -> Result<()> {
    if config.verbose {
        debug!(version = %full_version(), "starting");
    }
    let params = cmd.to_params().map_err(|e| report(presenter, e))?;
    let opts = config.options();

    let start = Instant::now();
    let sequence = params.generate(&opts).map_err(|e| report(presenter, e))?;
    let duration = start.elapsed();
    debug!(
        algorithm = %params.algorithm(),
        records = sequence.len(),
        ?duration,
        "generation complete"
    );

    presenter.present_sequence(&sequence, duration)?;

    if let Some(ref path) = config.output {
        write_to_file(path, &sequence, config.json)?;
    }

    Ok(())
}

fn report(presenter: &dyn SequencePresenter, err: GenerateError) -> anyhow::Error {
    presenter.present_error(&err.to_string());
    err.into()
}
