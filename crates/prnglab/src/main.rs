//! prnglab: classic pseudo-random number generators on the command line.

use anyhow::Result;
use prnglab_core::GenerateError;
use prnglab_lib::{app, config, errors};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<GenerateError>() {
            // Already presented by the app.
            Some(gen_err) => std::process::exit(errors::handle_error(gen_err)),
            None => Err(err),
        },
    }
}
