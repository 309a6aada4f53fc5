/// Decoding of the legacy `xml.search` response into normalized records.
///
/// The service speaks GeoNetwork's pre-JSON wire format: a `response` root
/// holding a `summary` element (whose `count` attribute carries the total
/// match count) and one `metadata` element per record. Record fields are
/// matched by local name, so both the namespaced `<geonet:info>` block and
/// an unprefixed `<geonet><info>` nesting resolve to the same fields.
///
/// Decoding is strict about the document and lenient about its content: a
/// body that is not well-formed XML (or whose root is not `response`) is
/// rejected, while missing attributes, empty elements and unparseable
/// counts degrade to absent fields or zero.
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use super::errors::CatalogError;
use super::records::{
    DOC_TYPE, HIT_SCORE, Hit, HitList, INDEX_NAME, RecordSource, SearchResults, TotalHits,
};

/// Text-bearing elements recognized inside a `metadata` record.
#[derive(Debug, Clone, Copy)]
enum RecordField {
    Title,
    Abstract,
    Uuid,
    Schema,
    CreateDate,
    ChangeDate,
    Source,
    Type,
}

impl RecordField {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"abstract" => Some(Self::Abstract),
            b"uuid" => Some(Self::Uuid),
            b"schema" => Some(Self::Schema),
            b"createDate" => Some(Self::CreateDate),
            b"changeDate" => Some(Self::ChangeDate),
            b"source" => Some(Self::Source),
            b"type" => Some(Self::Type),
            _ => None,
        }
    }
}

/// Field values collected for one `metadata` element.
#[derive(Debug, Default)]
struct PartialRecord {
    title: Option<String>,
    abstract_text: Option<String>,
    uuid: Option<String>,
    schema: Option<String>,
    create_date: Option<String>,
    change_date: Option<String>,
    source: Option<String>,
    resource_type: Option<String>,
}

impl PartialRecord {
    fn set(&mut self, field: RecordField, raw: &str) {
        let value = raw.trim();
        // Empty elements stay absent rather than becoming "".
        if value.is_empty() {
            return;
        }
        let value = value.to_owned();
        match field {
            RecordField::Title => self.title = Some(value),
            RecordField::Abstract => self.abstract_text = Some(value),
            RecordField::Uuid => self.uuid = Some(value),
            RecordField::Schema => self.schema = Some(value),
            RecordField::CreateDate => self.create_date = Some(value),
            RecordField::ChangeDate => self.change_date = Some(value),
            RecordField::Source => self.source = Some(value),
            RecordField::Type => self.resource_type = Some(value),
        }
    }

    fn into_hit(self) -> Hit {
        let uuid = self.uuid.unwrap_or_default();
        Hit {
            index: INDEX_NAME.to_owned(),
            doc_type: DOC_TYPE.to_owned(),
            id: uuid.clone(),
            score: HIT_SCORE,
            source: RecordSource {
                uuid,
                title: self.title,
                r#abstract: self.abstract_text,
                change_date: self.change_date,
                create_date: self.create_date,
                resource_type: self.resource_type.into_iter().collect(),
                schema: self.schema,
                source: self.source,
            },
        }
    }
}

/// A text field being collected, tagged with the depth it opened at.
struct OpenField {
    field: RecordField,
    depth: u32,
    text: String,
}

/// A `metadata` element being collected.
struct OpenRecord {
    depth: u32,
    partial: PartialRecord,
}

/// Accumulates totals and hits while the event stream is walked.
#[derive(Default)]
struct Collector {
    total: u64,
    hits: Vec<Hit>,
    record: Option<OpenRecord>,
    field: Option<OpenField>,
}

impl Collector {
    fn open(&mut self, e: &BytesStart, depth: u32) {
        if self.record.is_none() {
            match e.local_name().as_ref() {
                b"summary" => self.total = summary_count(e),
                b"metadata" => {
                    self.record = Some(OpenRecord {
                        depth,
                        partial: PartialRecord::default(),
                    });
                }
                _ => {}
            }
        } else if self.field.is_none() {
            if let Some(name) = RecordField::from_local_name(e.local_name().as_ref()) {
                self.field = Some(OpenField {
                    field: name,
                    depth,
                    text: String::new(),
                });
            }
        }
    }

    fn open_empty(&mut self, e: &BytesStart) {
        if self.record.is_none() {
            match e.local_name().as_ref() {
                b"summary" => self.total = summary_count(e),
                // A record with no fields still yields a hit.
                b"metadata" => self.hits.push(PartialRecord::default().into_hit()),
                _ => {}
            }
        }
    }

    /// Handle an end tag. `depth` is the depth after the close.
    fn close(&mut self, depth: u32) {
        if let Some(open) = self.field.take() {
            if depth < open.depth {
                if let Some(rec) = self.record.as_mut() {
                    rec.partial.set(open.field, &open.text);
                }
            } else {
                // Closed an element nested inside the field.
                self.field = Some(open);
            }
        }
        if let Some(open) = self.record.take() {
            if depth < open.depth {
                self.hits.push(open.partial.into_hit());
            } else {
                self.record = Some(open);
            }
        }
    }

    fn text(&mut self, raw: &str) {
        if let Some(open) = self.field.as_mut() {
            open.text.push_str(raw);
        }
    }
}

/// Translate raw `xml.search` response bytes into [`SearchResults`].
///
/// Records appear in document order. Every hit gets the synthetic index
/// name, document type and fixed score from [`super::records`]. Decoding
/// covers exactly one document element; anything after the root closes is
/// ignored.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the bytes are not a well-formed
/// catalog document: truncated input, mismatched tags, or a root element
/// other than `response`. Content problems inside a well-formed document
/// never fail the translation.
pub fn translate(body: &[u8]) -> Result<SearchResults, CatalogError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();

    let mut state = Collector::default();
    let mut root_seen = false;
    let mut depth: u32 = 0;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                if root_seen {
                    state.open(&e, depth);
                } else {
                    check_root(&e)?;
                    root_seen = true;
                }
            }
            Event::Empty(e) => {
                if root_seen {
                    state.open_empty(&e);
                } else {
                    // An empty root is a complete document.
                    check_root(&e)?;
                    break;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                state.close(depth);
                // Decoding stops where the first document element closes.
                if depth == 0 {
                    break;
                }
            }
            Event::Text(t) => match t.unescape() {
                Ok(text) => state.text(&text),
                // Undecodable entities degrade to raw text.
                Err(_) => state.text(&String::from_utf8_lossy(&t)),
            },
            Event::CData(t) => state.text(&String::from_utf8_lossy(&t)),
            Event::Eof => {
                if !root_seen {
                    return Err(CatalogError::Parse {
                        reason: "document has no root element".to_owned(),
                    });
                }
                if depth > 0 {
                    return Err(CatalogError::Parse {
                        reason: "unexpected end of document".to_owned(),
                    });
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(SearchResults {
        hits: HitList {
            total: TotalHits {
                value: state.total,
                relation: "eq".to_owned(),
            },
            max_score: 0.0,
            hits: state.hits,
        },
    })
}

fn check_root(e: &BytesStart) -> Result<(), CatalogError> {
    if e.local_name().as_ref() == b"response" {
        Ok(())
    } else {
        Err(CatalogError::Parse {
            reason: "root element is not <response>".to_owned(),
        })
    }
}

/// Read the total match count from a `summary` element's `count` attribute.
///
/// A missing attribute is zero; a non-numeric value is logged and treated
/// as zero rather than failing the whole response.
fn summary_count(e: &BytesStart) -> u64 {
    let Some(raw) = e
        .try_get_attribute("count")
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
    else {
        return 0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or_else(|_| {
        debug!(count = %raw, "summary count is not numeric, treating as zero");
        0
    })
}
