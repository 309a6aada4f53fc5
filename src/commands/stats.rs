/// `stats` command: fetch a window of records and summarize the catalog.
use tracing::debug;

use crate::catalog::{CatalogClient, CatalogConfig, CatalogError, aggregate};
use crate::cli::OutputCtx;
use crate::cli::output::write_stats;

/// How many records one stats run examines.
const STATS_WINDOW: usize = 100;

/// Run `gncli stats`.
///
/// Issues a match-all search for the first [`STATS_WINDOW`] records and
/// aggregates them. The reported total comes from the service's summary,
/// so it covers the whole catalog even when fewer records are sampled.
///
/// # Errors
///
/// Returns `CatalogError` when the request fails or the response cannot
/// be decoded.
pub fn run(config: &CatalogConfig, ctx: &OutputCtx) -> Result<(), CatalogError> {
    debug!(window = STATS_WINDOW, "collecting catalog statistics");

    let client = CatalogClient::new(config.clone())?;
    let results = client.search("", 0, STATS_WINDOW)?;
    let stats = aggregate(&results);

    write_stats(&stats, ctx);
    Ok(())
}
