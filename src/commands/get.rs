/// `get` command: fetch one record by UUID.
use tracing::debug;

use crate::catalog::{CatalogClient, CatalogConfig, CatalogError, SearchResults};
use crate::cli::args::GetArgs;
use crate::cli::output::write_results;
use crate::cli::{OutputCtx, OutputFormat};

/// Run `gncli get`.
///
/// The UUID is sent as a regular query term and the first hit is reported.
/// A missing record is not an error: human formats get a notice, JSON
/// consumers get the empty result set.
///
/// # Errors
///
/// Returns `CatalogError` when the request fails or the response cannot
/// be decoded.
pub fn run(args: &GetArgs, config: &CatalogConfig, ctx: &OutputCtx) -> Result<(), CatalogError> {
    debug!(uuid = %args.uuid, "fetching record");

    let client = CatalogClient::new(config.clone())?;
    let results = client.search(&args.uuid, 0, 1)?;

    match no_match_notice(&results, ctx.format, &args.uuid) {
        Some(notice) => println!("{notice}"),
        None => write_results(&results, ctx),
    }
    Ok(())
}

/// The notice a missing record prints, or `None` when the results should
/// be written normally. JSON consumers always get the result set, so an
/// empty window stays machine-readable.
fn no_match_notice(results: &SearchResults, format: OutputFormat, uuid: &str) -> Option<String> {
    if results.hits.hits.is_empty() && format != OutputFormat::Json {
        Some(format!("No record found for UUID: {uuid}"))
    } else {
        None
    }
}
