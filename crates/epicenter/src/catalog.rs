//! Seismic event extraction from parsed QuakeML documents

use tracing::warn;

use crate::xml::{Document, Element};

/// Fixed QuakeML root tag, namespace prefix included
const ROOT_TAG: &str = "q:quakeml";
/// Container element holding the event list
const EVENT_PARAMETERS_TAG: &str = "eventParameters";
/// Repeating per-event element
const EVENT_TAG: &str = "event";

/// One seismic event, extracted from a QuakeML `event` element.
///
/// Every field holds verbatim source text. `None` means the field's
/// lookup chain was broken before reaching the value-holding element, so
/// the key is omitted from serialized output; `Some("")` means the value
/// element was present with no text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventRecord {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub time: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lng: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lat: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub depth: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub magnitude: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub place: Option<String>,
}

impl EventRecord {
    /// Key/value pairs in extraction order; `None` marks an omitted key.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("time", self.time.as_deref()),
            ("lng", self.lng.as_deref()),
            ("lat", self.lat.as_deref()),
            ("depth", self.depth.as_deref()),
            ("magnitude", self.magnitude.as_deref()),
            ("place", self.place.as_deref()),
        ]
    }

    /// True when every key is omitted
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }
}

/// Extract event records from a parsed QuakeML document, in document
/// order.
///
/// The root element must be named `q:quakeml` and hold an
/// `eventParameters` child. When either is missing the document yields
/// zero records and a diagnostic is logged; neither case is an error.
pub fn extract_events(doc: &Document) -> Vec<EventRecord> {
    if doc.root.name != ROOT_TAG {
        warn!("Unexpected root element: {}", doc.root.name);
        return Vec::new();
    }

    let Some(event_parameters) = doc.root.child(EVENT_PARAMETERS_TAG) else {
        warn!("No eventParameters element found");
        return Vec::new();
    };

    event_parameters
        .children_named(EVENT_TAG)
        .map(extract_event)
        .collect()
}

/// Build one record from an `event` element. The six fields are extracted
/// independently; a broken chain omits that field and never aborts the
/// others.
fn extract_event(event: &Element) -> EventRecord {
    EventRecord {
        time: value_text(event, "origin", "time"),
        lng: value_text(event, "origin", "longitude"),
        lat: value_text(event, "origin", "latitude"),
        depth: value_text(event, "origin", "depth"),
        magnitude: value_text(event, "magnitude", "mag"),
        place: leaf_text(event, "description", "text"),
    }
}

/// Walk `event -> parent -> field -> value` and read the value element's
/// text.
fn value_text(event: &Element, parent: &str, field: &str) -> Option<String> {
    let value = event.child(parent)?.child(field)?.child("value")?;
    Some(value.text().unwrap_or_default().to_string())
}

/// Walk `event -> parent -> leaf` where the leaf element itself holds the
/// text (the `description`/`text` shape).
fn leaf_text(event: &Element, parent: &str, leaf: &str) -> Option<String> {
    let element = event.child(parent)?.child(leaf)?;
    Some(element.text().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Parser;

    fn parse(input: &str) -> Document {
        let mut parser = Parser::new(input.as_bytes());
        match parser.parse() {
            Ok(doc) => doc,
            Err(err) => panic!("fixture must parse: {err}"),
        }
    }

    #[test]
    fn test_full_event() {
        let doc = parse(
            "<q:quakeml><eventParameters><event>\
             <origin>\
             <time><value>2024-01-02T03:04:05Z</value></time>\
             <longitude><value>-70.123</value></longitude>\
             <latitude><value>-33.456</value></latitude>\
             <depth><value>10000</value></depth>\
             </origin>\
             <magnitude><mag><value>4.5</value></mag></magnitude>\
             <description><text>30 km W of Santiago</text></description>\
             </event></eventParameters></q:quakeml>",
        );

        let records = extract_events(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            EventRecord {
                time: Some("2024-01-02T03:04:05Z".to_string()),
                lng: Some("-70.123".to_string()),
                lat: Some("-33.456".to_string()),
                depth: Some("10000".to_string()),
                magnitude: Some("4.5".to_string()),
                place: Some("30 km W of Santiago".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_origin_omits_coordinate_fields() {
        let doc = parse(
            "<q:quakeml><eventParameters><event>\
             <magnitude><mag><value>3.2</value></mag></magnitude>\
             </event></eventParameters></q:quakeml>",
        );

        let records = extract_events(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, None);
        assert_eq!(records[0].lng, None);
        assert_eq!(records[0].lat, None);
        assert_eq!(records[0].depth, None);
        assert_eq!(records[0].magnitude, Some("3.2".to_string()));
    }

    #[test]
    fn test_missing_value_element_omits_key() {
        let doc = parse(
            "<q:quakeml><eventParameters><event>\
             <origin><time><value>t0</value></time><longitude/></origin>\
             </event></eventParameters></q:quakeml>",
        );

        let records = extract_events(&doc);
        assert_eq!(records[0].time, Some("t0".to_string()));
        // longitude exists but holds no value element
        assert_eq!(records[0].lng, None);
    }

    #[test]
    fn test_empty_value_element_yields_empty_string() {
        let doc = parse(
            "<q:quakeml><eventParameters><event>\
             <origin><time><value></value></time></origin>\
             </event></eventParameters></q:quakeml>",
        );

        let records = extract_events(&doc);
        assert_eq!(records[0].time, Some(String::new()));
    }

    #[test]
    fn test_event_with_nothing_extractable() {
        let doc = parse(
            "<q:quakeml><eventParameters><event><foo/></event></eventParameters></q:quakeml>",
        );

        let records = extract_events(&doc);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_wrong_root_yields_no_records() {
        let doc = parse("<quakeml><eventParameters><event/></eventParameters></quakeml>");
        assert!(extract_events(&doc).is_empty());
    }

    #[test]
    fn test_missing_event_parameters_yields_no_records() {
        let doc = parse("<q:quakeml><other/></q:quakeml>");
        assert!(extract_events(&doc).is_empty());
    }

    #[test]
    fn test_events_keep_document_order() {
        let doc = parse(
            "<q:quakeml><eventParameters>\
             <event><description><text>first</text></description></event>\
             <event><description><text>second</text></description></event>\
             <event><description><text>third</text></description></event>\
             </eventParameters></q:quakeml>",
        );

        let places: Vec<_> = extract_events(&doc)
            .into_iter()
            .map(|record| record.place)
            .collect();
        assert_eq!(
            places,
            vec![
                Some("first".to_string()),
                Some("second".to_string()),
                Some("third".to_string()),
            ]
        );
    }
}
