/// `list` command: page through the catalog without a query filter.
use tracing::debug;

use crate::catalog::{CatalogClient, CatalogConfig, CatalogError};
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::write_results;

/// Run `gncli list`.
///
/// A listing is a search with an empty query, which the service treats as
/// match-all; `--from`/`--size` page through it.
///
/// # Errors
///
/// Returns `CatalogError` when the request fails or the response cannot
/// be decoded.
pub fn run(args: &ListArgs, config: &CatalogConfig, ctx: &OutputCtx) -> Result<(), CatalogError> {
    debug!(from = args.from, size = args.size, "listing catalog records");

    let client = CatalogClient::new(config.clone())?;
    let results = client.search("", args.from, args.size)?;

    write_results(&results, ctx);
    Ok(())
}
