//! QuakeML to JSON conversion pipeline

use tracing::debug;

use crate::catalog::extract_events;
use crate::filter::EventFilter;
use crate::json::render_records;
use crate::xml::{Config, Parser};

/// Sentinel returned when the input is not well-formed XML
pub const PARSE_FAILURE_SENTINEL: &str = "{}";

/// Convert a QuakeML document to a JSON array of event objects.
///
/// Malformed XML yields the literal `{}` — an empty object rather than
/// an array — which callers rely on to tell "bad XML" apart from "no
/// events" (`[]`). A well-formed document without the expected
/// `q:quakeml` root or `eventParameters` container degrades to `[]`
/// with a logged diagnostic. The function is pure and reentrant: the
/// same input always produces byte-identical output.
pub fn convert(input: &str) -> String {
    convert_with_config(input, Config::default())
}

/// Convert with custom parser limits
pub fn convert_with_config(input: &str, config: Config) -> String {
    let mut parser = Parser::with_config(input.as_bytes(), config);
    let doc = match parser.parse() {
        Ok(doc) => doc,
        Err(err) => {
            debug!("XML parse failed: {}", err);
            return PARSE_FAILURE_SENTINEL.to_string();
        }
    };

    let records = extract_events(&doc);
    debug!("Extracted {} events", records.len());
    render_records(&records)
}

/// Convert a QuakeML document, keeping only the records that match the
/// filter. Failure and degradation behavior are the same as [`convert`].
pub fn convert_filtered(input: &str, filter: &EventFilter) -> String {
    let mut parser = Parser::new(input.as_bytes());
    let doc = match parser.parse() {
        Ok(doc) => doc,
        Err(err) => {
            debug!("XML parse failed: {}", err);
            return PARSE_FAILURE_SENTINEL.to_string();
        }
    };

    let records = filter.apply(extract_events(&doc));
    debug!("Extracted {} events after filtering", records.len());
    render_records(&records)
}
