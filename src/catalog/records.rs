/// Normalized search records in a uniform, index-style shape.
///
/// The legacy XML wire format is translated into this envelope so every
/// output format works from one stable model. The shape mirrors a search
/// index response: a total, an optional maximum score, and a list of hits
/// each carrying a typed `_source` record.
use serde::{Deserialize, Serialize};

/// Index name stamped on every hit.
pub const INDEX_NAME: &str = "gn-records";

/// Document type stamped on every hit.
pub const DOC_TYPE: &str = "_doc";

/// Relevance score assigned to every hit. The legacy service does not
/// score matches, so all hits share this fixed value.
pub const HIT_SCORE: f64 = 1.0;

/// A complete, normalized search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The hit envelope.
    pub hits: HitList,
}

/// Hit envelope: total count plus the returned page of hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitList {
    /// Total number of catalog records matching the query.
    pub total: TotalHits,
    /// Highest score in the page. The service provides no scoring, so this
    /// stays at its zero value; kept for wire-shape compatibility.
    pub max_score: f64,
    /// Hits in service-returned order.
    pub hits: Vec<Hit>,
}

/// Total match count with its relation qualifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalHits {
    /// The count itself.
    pub value: u64,
    /// How `value` relates to the true total. Always `"eq"` here.
    pub relation: String,
}

/// One normalized catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// Synthetic index name ([`INDEX_NAME`]).
    #[serde(rename = "_index")]
    pub index: String,
    /// Synthetic document type ([`DOC_TYPE`]).
    #[serde(rename = "_type")]
    pub doc_type: String,
    /// Catalog UUID of the record. Empty when the service omits it.
    #[serde(rename = "_id")]
    pub id: String,
    /// Fixed relevance score ([`HIT_SCORE`]).
    #[serde(rename = "_score")]
    pub score: f64,
    /// The record fields.
    #[serde(rename = "_source")]
    pub source: RecordSource,
}

/// Typed record fields extracted from one `metadata` element.
///
/// Absent or empty fields are omitted from serialization rather than
/// defaulted, so consumers can distinguish "not provided" from "empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSource {
    /// Catalog UUID (duplicated from the hit identifier).
    pub uuid: String,
    /// Record title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Abstract text describing the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,
    /// Last modification timestamp, as reported by the service.
    #[serde(rename = "changeDate", skip_serializing_if = "Option::is_none")]
    pub change_date: Option<String>,
    /// Creation timestamp, as reported by the service.
    #[serde(rename = "createDate", skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    /// Resource type. At most one entry; a list for wire-shape
    /// compatibility with multi-valued index mappings.
    #[serde(
        rename = "resourceType",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resource_type: Vec<String>,
    /// Metadata schema identifier (e.g. `iso19139`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Identifier of the catalog node the record originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_hit() -> Hit {
        Hit {
            index: INDEX_NAME.to_owned(),
            doc_type: DOC_TYPE.to_owned(),
            id: "abc-123".to_owned(),
            score: HIT_SCORE,
            source: RecordSource {
                uuid: "abc-123".to_owned(),
                title: Some("Hydrography".to_owned()),
                ..RecordSource::default()
            },
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let value = serde_json::to_value(sparse_hit()).unwrap();
        let source = &value["_source"];

        assert_eq!(source["uuid"], "abc-123");
        assert_eq!(source["title"], "Hydrography");
        let keys: Vec<&String> = source.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "absent fields must be omitted: {keys:?}");
    }

    #[test]
    fn test_hit_envelope_field_names() {
        let value = serde_json::to_value(sparse_hit()).unwrap();

        assert_eq!(value["_index"], INDEX_NAME);
        assert_eq!(value["_type"], DOC_TYPE);
        assert_eq!(value["_id"], "abc-123");
        assert!((value["_score"].as_f64().unwrap() - HIT_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialization_preserves_full_abstract() {
        let mut hit = sparse_hit();
        hit.source.r#abstract = Some("a".repeat(500));

        let value = serde_json::to_value(hit).unwrap();

        assert_eq!(value["_source"]["abstract"].as_str().unwrap().len(), 500);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let mut hit = sparse_hit();
        hit.source.change_date = Some("2024-01-01".to_owned());
        hit.source.create_date = Some("2020-06-15".to_owned());
        hit.source.resource_type = vec!["dataset".to_owned()];

        let value = serde_json::to_value(hit).unwrap();
        let source = &value["_source"];

        assert_eq!(source["changeDate"], "2024-01-01");
        assert_eq!(source["createDate"], "2020-06-15");
        assert_eq!(source["resourceType"][0], "dataset");
    }
}
