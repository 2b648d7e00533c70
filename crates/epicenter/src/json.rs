//! Compact JSON rendering of event records

use crate::catalog::EventRecord;

/// Serialize records as a compact JSON array of objects.
///
/// Fields appear in extraction order, omitted keys are skipped entirely,
/// and every value is a JSON string.
pub fn render_records(records: &[EventRecord]) -> String {
    let mut output = String::from("[");
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            output.push(',');
        }
        render_record(record, &mut output);
    }
    output.push(']');
    output
}

fn render_record(record: &EventRecord, output: &mut String) {
    output.push('{');
    let mut first = true;
    for (key, value) in record.fields() {
        let Some(value) = value else { continue };
        if !first {
            output.push(',');
        }
        first = false;
        output.push('"');
        output.push_str(key);
        output.push_str("\":\"");
        output.push_str(&escape_json(value));
        output.push('"');
    }
    output.push('}');
}

/// Escape special characters in a string for JSON. Covers the short
/// escapes and renders the remaining C0 control characters as `\uXXXX`,
/// so verbatim XML text always serializes to valid JSON.
fn escape_json(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\u{20}' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
