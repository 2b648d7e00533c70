//! Browser bindings for the QuakeML converter.
//!
//! Exports `parse_quakeml`, which takes the raw feed text and returns
//! the JSON string described by [`epicenter::convert`]. wasm-bindgen
//! handles the string copy across the boundary, so the JS side never
//! sees linear-memory pointers and the returned buffer is freed exactly
//! once by the glue code.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
}

/// Convert a QuakeML document to a JSON array of event objects.
///
/// Malformed XML yields the literal `{}`; a well-formed document with
/// no recognizable event container yields `[]`.
#[wasm_bindgen]
pub fn parse_quakeml(input: &str) -> String {
    epicenter::convert(input)
}

/// Estimated shaking radius in kilometers for a magnitude, for sizing
/// map overlays next to the parsed events.
#[wasm_bindgen]
pub fn shaking_radius_km(magnitude: f64) -> f64 {
    epicenter::shaking_radius_km(magnitude)
}
