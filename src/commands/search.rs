/// `search` command: free-text query against the catalog.
use tracing::debug;

use crate::catalog::{CatalogClient, CatalogConfig, CatalogError};
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::write_results;

/// Run `gncli search`.
///
/// Multiple query words are joined into a single term string, so quoting
/// on the command line is optional.
///
/// # Errors
///
/// Returns `CatalogError` when the request fails or the response cannot
/// be decoded.
pub fn run(args: &SearchArgs, config: &CatalogConfig, ctx: &OutputCtx) -> Result<(), CatalogError> {
    let query = args.query.join(" ");
    debug!(query = %query, from = args.from, size = args.size, "searching catalog");

    let client = CatalogClient::new(config.clone())?;
    let results = client.search(&query, args.from, args.size)?;

    write_results(&results, ctx);
    Ok(())
}
