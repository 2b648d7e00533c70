//! epicenter - QuakeML seismic event feeds to map-ready JSON
//!
//! # Quick Start
//!
//! ```
//! let feed = r#"<q:quakeml><eventParameters><event>
//!     <origin>
//!         <longitude><value>-70.123</value></longitude>
//!         <latitude><value>-33.456</value></latitude>
//!     </origin>
//!     <magnitude><mag><value>4.5</value></mag></magnitude>
//! </event></eventParameters></q:quakeml>"#;
//!
//! let json = epicenter::convert(feed);
//! assert_eq!(json, r#"[{"lng":"-70.123","lat":"-33.456","magnitude":"4.5"}]"#);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;
pub use cursor::Cursor;

pub mod xml;
pub use xml::{Config, Content, Document, Element, Parser};

pub mod catalog;
pub use catalog::{extract_events, EventRecord};

pub mod json;
pub use json::render_records;

pub mod convert;
pub use convert::{convert, convert_filtered, convert_with_config, PARSE_FAILURE_SENTINEL};

pub mod geo;
pub use geo::{shaking_radius_km, Continent};

pub mod filter;
pub use filter::EventFilter;

/// Parse a QuakeML document from a string
pub fn from_xml_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse a QuakeML document from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Document> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}
