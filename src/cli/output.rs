/// Output formatting: JSON, pretty and compact modes. TTY detection.
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{IsTerminal, Write as _};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::catalog::stats::TITLE_SAMPLES;
use crate::catalog::{CatalogStats, SearchResults};

/// Maximum abstract length (in characters) in the pretty listing.
const ABSTRACT_PREVIEW_CHARS: usize = 200;
/// Maximum sample title length (in characters) in the stats listing.
const TITLE_PREVIEW_CHARS: usize = 70;
/// Appended to previews that were cut.
const TRUNCATION_MARKER: &str = "...";
/// Shown in the compact listing for records without a title.
const NO_TITLE_PLACEHOLDER: &str = "no title";
/// Width of the horizontal rules around pretty record blocks.
const RULE_WIDTH: usize = 80;

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Pretty
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }
}

// --- Search results ---

/// Write normalized search results to stdout.
pub fn write_results(results: &SearchResults, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Compact => print!("{}", render_compact(results)),
        OutputFormat::Pretty | OutputFormat::Auto => print!("{}", render_pretty(results)),
    }
}

/// Render multi-line record blocks with rulers between records.
#[must_use]
pub fn render_pretty(results: &SearchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTotal records: {}", results.hits.total.value);
    let _ = writeln!(out, "Showing: {}\n", results.hits.hits.len());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for (i, hit) in results.hits.hits.iter().enumerate() {
        let _ = writeln!(out, "\n[Record #{}]", i + 1);
        let _ = writeln!(out, "   UUID: {}", hit.id);
        let _ = writeln!(out, "   Score: {:.2}", hit.score);
        let _ = writeln!(out, "   ---");
        if let Some(title) = &hit.source.title {
            let _ = writeln!(out, "   Title: {title}");
        }
        if let Some(text) = &hit.source.r#abstract {
            let _ = writeln!(
                out,
                "   Abstract: {}",
                truncate_chars(text, ABSTRACT_PREVIEW_CHARS)
            );
        }
        if let Some(kind) = hit.source.resource_type.first() {
            let _ = writeln!(out, "   Type: {kind}");
        }
        if let Some(date) = &hit.source.change_date {
            let _ = writeln!(out, "   Modified: {date}");
        }
        if let Some(schema) = &hit.source.schema {
            let _ = writeln!(out, "   Schema: {schema}");
        }
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    }
    out
}

/// Render one line per record: `[uuid] title`.
#[must_use]
pub fn render_compact(results: &SearchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total: {} records\n", results.hits.total.value);
    for hit in &results.hits.hits {
        let title = hit
            .source
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_TITLE_PLACEHOLDER);
        let _ = writeln!(out, "[{}] {title}", hit.id);
    }
    out
}

// --- Stats ---

/// Write catalog statistics to stdout.
pub fn write_stats(stats: &CatalogStats, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Compact => print!("{}", render_stats_compact(stats)),
        OutputFormat::Pretty | OutputFormat::Auto => print!("{}", render_stats_pretty(stats)),
    }
}

/// Render the stats report: counts, frequency tables, sample titles and
/// a short usage trailer.
#[must_use]
pub fn render_stats_pretty(stats: &CatalogStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nCatalog statistics");
    let _ = writeln!(out, "Total records: {}", stats.total);
    let _ = writeln!(out, "Records sampled: {}\n", stats.sampled);

    let _ = writeln!(out, "Resource types:");
    let _ = writeln!(out, "{}", frequency_table("TYPE", &stats.resource_types));

    let _ = writeln!(out, "\nSchemas:");
    let _ = writeln!(out, "{}", frequency_table("SCHEMA", &stats.schemas));

    let _ = writeln!(out, "\nSample titles (up to {TITLE_SAMPLES}):");
    for (i, title) in stats.sample_titles.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}",
            i + 1,
            truncate_chars(title, TITLE_PREVIEW_CHARS)
        );
    }

    let _ = writeln!(out, "\nSearch tips:");
    let _ = writeln!(out, "  single keyword:       gncli search hidrografia");
    let _ = writeln!(out, "  multiple words:       gncli search uso do solo");
    let _ = writeln!(out, "  a specific record:    gncli get <uuid>");
    out
}

/// Render stats as plain `key: value` lines.
#[must_use]
pub fn render_stats_compact(stats: &CatalogStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "total: {}", stats.total);
    let _ = writeln!(out, "sampled: {}", stats.sampled);
    for (name, count) in &stats.resource_types {
        let _ = writeln!(out, "type {name}: {count}");
    }
    for (name, count) in &stats.schemas {
        let _ = writeln!(out, "schema {name}: {count}");
    }
    out
}

fn frequency_table(label: &str, counts: &BTreeMap<String, u64>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header([label, "RECORDS"]);
    for (name, count) in counts {
        table.add_row([name.as_str(), &count.to_string()]);
    }
    table
}

// --- Text helpers ---

/// Truncate to at most `max` characters, appending a marker when cut.
/// Operates on character boundaries, so multi-byte text never splits.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}{TRUNCATION_MARKER}", &text[..idx]),
        None => text.to_owned(),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::{
        DOC_TYPE, HIT_SCORE, Hit, HitList, INDEX_NAME, RecordSource, TotalHits,
    };

    fn hit(uuid: &str, title: Option<&str>) -> Hit {
        Hit {
            index: INDEX_NAME.to_owned(),
            doc_type: DOC_TYPE.to_owned(),
            id: uuid.to_owned(),
            score: HIT_SCORE,
            source: RecordSource {
                uuid: uuid.to_owned(),
                title: title.map(str::to_owned),
                ..RecordSource::default()
            },
        }
    }

    fn results(total: u64, hits: Vec<Hit>) -> SearchResults {
        SearchResults {
            hits: HitList {
                total: TotalHits {
                    value: total,
                    relation: "eq".to_owned(),
                },
                max_score: 0.0,
                hits,
            },
        }
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_chars("short", 200), "short");
        let exact = "x".repeat(200);
        assert_eq!(truncate_chars(&exact, 200), exact);
    }

    #[test]
    fn test_truncate_cuts_on_char_boundaries() {
        let long = "ã".repeat(250);
        let cut = truncate_chars(&long, 200);

        assert_eq!(cut.chars().count(), 200 + TRUNCATION_MARKER.len());
        assert!(cut.ends_with(TRUNCATION_MARKER));
        assert!(cut.starts_with(&"ã".repeat(200)));
    }

    #[test]
    fn test_compact_uses_placeholder_for_untitled() {
        let page = results(2, vec![hit("aaa", Some("Vias")), hit("bbb", None)]);
        let rendered = render_compact(&page);

        assert!(rendered.contains("Total: 2 records"));
        assert!(rendered.contains("[aaa] Vias"));
        assert!(rendered.contains("[bbb] no title"));
    }

    #[test]
    fn test_pretty_truncates_long_abstracts() {
        let mut one = hit("aaa", Some("Vias"));
        one.source.r#abstract = Some("x".repeat(250));
        let rendered = render_pretty(&results(1, vec![one]));

        let expected = format!("Abstract: {}{TRUNCATION_MARKER}", "x".repeat(200));
        assert!(rendered.contains(&expected));
        assert!(!rendered.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_pretty_keeps_short_abstracts() {
        let mut one = hit("aaa", Some("Vias"));
        one.source.r#abstract = Some("curto".to_owned());
        let rendered = render_pretty(&results(1, vec![one]));

        assert!(rendered.contains("Abstract: curto\n"));
    }

    #[test]
    fn test_pretty_skips_absent_fields() {
        let rendered = render_pretty(&results(1, vec![hit("aaa", None)]));

        assert!(rendered.contains("Total records: 1"));
        assert!(rendered.contains("Showing: 1"));
        assert!(rendered.contains("[Record #1]"));
        assert!(rendered.contains("UUID: aaa"));
        assert!(rendered.contains("Score: 1.00"));
        assert!(!rendered.contains("Title:"));
        assert!(!rendered.contains("Abstract:"));
        assert!(!rendered.contains("Schema:"));
    }

    #[test]
    fn test_stats_pretty_sections() {
        let mut page = results(120, vec![hit("a", Some("T".repeat(80).as_str()))]);
        page.hits.hits[0].source.resource_type = vec!["dataset".to_owned()];
        page.hits.hits[0].source.schema = Some("iso19139".to_owned());
        let stats = crate::catalog::aggregate(&page);

        let rendered = render_stats_pretty(&stats);

        assert!(rendered.contains("Total records: 120"));
        assert!(rendered.contains("Records sampled: 1"));
        assert!(rendered.contains("dataset"));
        assert!(rendered.contains("iso19139"));
        let expected_title = format!("{}{TRUNCATION_MARKER}", "T".repeat(70));
        assert!(rendered.contains(&expected_title));
        assert!(rendered.contains("Search tips:"));
    }

    #[test]
    fn test_stats_compact_lines() {
        let mut page = results(9, vec![hit("a", None), hit("b", None)]);
        page.hits.hits[0].source.resource_type = vec!["map".to_owned()];
        page.hits.hits[1].source.resource_type = vec!["map".to_owned()];
        let stats = crate::catalog::aggregate(&page);

        let rendered = render_stats_compact(&stats);

        assert!(rendered.contains("total: 9"));
        assert!(rendered.contains("sampled: 2"));
        assert!(rendered.contains("map: 2"));
    }

    #[test]
    fn test_json_flag_wins_over_format() {
        assert_eq!(
            resolve_format(OutputFormat::Pretty, true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Compact, false),
            OutputFormat::Compact
        );
    }
}
