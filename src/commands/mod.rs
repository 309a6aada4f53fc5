/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod get;
pub mod list;
pub mod search;
pub mod stats;

use crate::catalog::{CatalogConfig, CatalogError};
use crate::cli::OutputCtx;
use crate::cli::args::Command;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CatalogError` on any command failure.
pub fn dispatch(
    command: &Command,
    config: &CatalogConfig,
    ctx: &OutputCtx,
) -> Result<(), CatalogError> {
    match command {
        Command::Search(args) => search::run(args, config, ctx),
        Command::List(args) => list::run(args, config, ctx),
        Command::Get(args) => get::run(args, config, ctx),
        Command::Stats => stats::run(config, ctx),
    }
}
