//! WASM bindings for object search.

use wasm_bindgen::prelude::*;

use crate::to_js;

/// Look up an object by free text.
///
/// # Returns
/// A SearchResult, or `null` when nothing matches.
#[wasm_bindgen]
pub fn search_object(query: &str) -> Result<JsValue, JsError> {
    to_js(&object_search::search_object(query))
}

/// Names of every searchable object, for "try ..." hints.
#[wasm_bindgen]
pub fn search_suggestions() -> Result<JsValue, JsError> {
    to_js(&object_search::suggestions())
}
