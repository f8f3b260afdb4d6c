//! WASM bindings for scene configuration and composition queries.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use scene::{CompositionResult, Material, SceneConfig, Zone, DEFAULT_TOP_ELEMENTS};

use crate::{from_js, to_js};

/// Element symbol with its percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ElementPercentage {
    pub symbol: String,
    pub percentage: f64,
}

/// Limit for a top-N query; absent means the summary default, negative means none
pub(crate) fn top_limit(limit: Option<i32>) -> usize {
    match limit {
        None => DEFAULT_TOP_ELEMENTS,
        Some(l) => usize::try_from(l).unwrap_or(0),
    }
}

pub(crate) fn element_percentages(entries: Vec<(String, f64)>) -> Vec<ElementPercentage> {
    entries
        .into_iter()
        .map(|(symbol, percentage)| ElementPercentage { symbol, percentage })
        .collect()
}

// =============================================================================
// Configuration
// =============================================================================

/// The built-in demo scene.
///
/// # Returns
/// A SceneConfig with `elements`, `materials` and `zones`.
#[wasm_bindgen]
pub fn sample_scene() -> Result<JsValue, JsError> {
    to_js(&SceneConfig::sample())
}

/// Parse a scene configuration from JSON text.
///
/// Throws when the text is not a valid configuration document.
#[wasm_bindgen]
pub fn parse_scene_config(json: &str) -> Result<JsValue, JsError> {
    let config = SceneConfig::from_json_str(json).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&config)
}

/// Check a configuration for authoring mistakes.
///
/// Each warning is also echoed to the browser console.
///
/// # Returns
/// Array of warnings, each tagged with a `kind` field.
#[wasm_bindgen]
pub fn validate_scene(config: JsValue) -> Result<JsValue, JsError> {
    let config: SceneConfig = from_js(config)?;
    let warnings = scene::validate_scene(&config);
    for warning in &warnings {
        web_sys::console::warn_1(&JsValue::from_str(&warning.to_string()));
    }
    to_js(&warnings)
}

// =============================================================================
// Aggregation
// =============================================================================

/// Compute per-zone and scene-wide element composition.
///
/// # Arguments
/// * `zones` - Array of Zone objects
/// * `materials` - Array of Material objects
#[wasm_bindgen]
pub fn compute_scene_compositions(zones: JsValue, materials: JsValue) -> Result<JsValue, JsError> {
    let zones: Vec<Zone> = from_js(zones)?;
    let materials: Vec<Material> = from_js(materials)?;
    to_js(&scene::compute_scene_compositions(&zones, &materials))
}

/// Highest-percentage elements of a zone.
///
/// # Arguments
/// * `zone_id` - Zone to summarize
/// * `result` - A CompositionResult
/// * `limit` - How many elements to return (defaults to 2, zero or
///   negative returns none)
#[wasm_bindgen]
pub fn zone_top_elements(
    zone_id: &str,
    result: JsValue,
    limit: Option<i32>,
) -> Result<JsValue, JsError> {
    let result: CompositionResult = from_js(result)?;
    let top = scene::zone_top_elements(zone_id, &result, top_limit(limit));
    to_js(&element_percentages(top))
}

/// Every element of a zone, highest percentage first.
#[wasm_bindgen]
pub fn zone_elements_sorted(zone_id: &str, result: JsValue) -> Result<JsValue, JsError> {
    let result: CompositionResult = from_js(result)?;
    to_js(&element_percentages(result.zone_elements_sorted(zone_id)))
}

/// Symbols present in the scene, highest percentage first.
#[wasm_bindgen]
pub fn detected_elements(result: JsValue) -> Result<JsValue, JsError> {
    let result: CompositionResult = from_js(result)?;
    to_js(&result.detected_elements())
}

/// Break an element's scene total down by zone.
///
/// # Returns
/// Object with `totalElem` and `zoneRows`, largest contribution first.
#[wasm_bindgen]
pub fn element_zone_info(symbol: &str, zones: JsValue, result: JsValue) -> Result<JsValue, JsError> {
    let zones: Vec<Zone> = from_js(zones)?;
    let result: CompositionResult = from_js(result)?;
    to_js(&scene::element_zone_info(symbol, &zones, &result))
}

/// Objects that may appear in a zone, from its materials' object lists.
#[wasm_bindgen]
pub fn zone_candidate_objects(zone: JsValue, materials: JsValue) -> Result<JsValue, JsError> {
    let zone: Zone = from_js(zone)?;
    let materials: Vec<Material> = from_js(materials)?;
    to_js(&zone.candidate_objects(&materials))
}
