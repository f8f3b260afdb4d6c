//! WASM bindings for the multispectral scene explorer.
//!
//! Exposes composition aggregation, band filtering, configuration checks and
//! object search to the browser UI. Plain objects cross the boundary through
//! `serde-wasm-bindgen`; maps keyed by symbol or zone id arrive in JavaScript
//! as ordinary objects.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     sample_scene,
//!     compute_scene_compositions,
//!     zone_top_elements,
//! } from 'scene-wasm';
//!
//! await init();
//!
//! const scene = sample_scene();
//! const result = compute_scene_compositions(scene.zones, scene.materials);
//! console.log(zone_top_elements("zone3", result));
//! // [{ symbol: "Si", percentage: 76 }, { symbol: "Fe", percentage: 24 }]
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod bands;
mod composition;
mod search;


#[wasm_bindgen(typescript_custom_section)]
const TS_FILTER_TYPES: &'static str = r#"
/** Band filter option: "ALL" or a single band */
export type BandFilterOption = "ALL" | Band;
/** Element symbol with its percentage (0-100) */
export interface ElementPercentage {
    symbol: string;
    percentage: number;
}
"#;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        log::warn!("could not decode {}: {}", std::any::type_name::<T>(), e);
        JsError::new(&e.to_string())
    })
}
