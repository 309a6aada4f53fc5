/// Aggregation of a result page into catalog statistics.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::records::SearchResults;

/// Maximum number of sample titles collected.
pub const TITLE_SAMPLES: usize = 10;

/// Aggregated statistics over one page of search results.
///
/// Maps are ordered so repeated runs against the same catalog render
/// identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total records the catalog reports for the match-all query.
    pub total: u64,
    /// Number of records actually examined.
    pub sampled: usize,
    /// Record count per resource type (first `resourceType` entry).
    pub resource_types: BTreeMap<String, u64>,
    /// Record count per metadata schema.
    pub schemas: BTreeMap<String, u64>,
    /// Up to [`TITLE_SAMPLES`] titles, in result order.
    pub sample_titles: Vec<String>,
}

/// Aggregate a page of results into [`CatalogStats`].
///
/// Records without a resource type or schema are simply not counted in the
/// respective map; untitled records contribute no sample title.
#[must_use]
pub fn aggregate(results: &SearchResults) -> CatalogStats {
    let mut resource_types: BTreeMap<String, u64> = BTreeMap::new();
    let mut schemas: BTreeMap<String, u64> = BTreeMap::new();
    let mut sample_titles = Vec::new();

    for hit in &results.hits.hits {
        if let Some(kind) = hit.source.resource_type.first() {
            if !kind.is_empty() {
                *resource_types.entry(kind.clone()).or_default() += 1;
            }
        }
        if let Some(schema) = &hit.source.schema {
            if !schema.is_empty() {
                *schemas.entry(schema.clone()).or_default() += 1;
            }
        }
        if sample_titles.len() < TITLE_SAMPLES {
            if let Some(title) = &hit.source.title {
                if !title.is_empty() {
                    sample_titles.push(title.clone());
                }
            }
        }
    }

    CatalogStats {
        total: results.hits.total.value,
        sampled: results.hits.hits.len(),
        resource_types,
        schemas,
        sample_titles,
    }
}
