#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! gncli — search and inspect records in a `GeoNetwork` catalog.

mod catalog;
mod cli;
mod commands;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog::CatalogConfig;
use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = CatalogConfig::default();
    if let Some(endpoint) = &cli.endpoint {
        config.base_url.clone_from(endpoint);
    }

    let ctx = OutputCtx::new(cli.output, cli.json);

    match commands::dispatch(&cli.command, &config, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_catalog_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gncli=debug" } else { "gncli=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
