//! Scene configuration: the read-only tables every consumer is handed
//!
//! A `SceneConfig` is built once, either from the compiled-in sample catalog
//! or from a JSON document, and then passed by reference. JSON keys follow
//! the browser data model:
//!
//! ```json
//! {
//!   "elements": [{ "symbol": "Fe", "atomicNumber": 26, "nameTh": "เหล็ก", "nameEn": "Iron",
//!                  "groups": [], "bands": ["VIS", "NIR"] }],
//!   "materials": [{ "id": "iron_soil", "label": "Laterite", "elements": { "Fe": 0.8, "Si": 0.2 } }],
//!   "zones": [{ "id": "zone1", "label": "Zone 1", "color": "#22c55e",
//!               "areaFraction": 1.0, "materialMix": { "iron_soil": 1.0 } }]
//! }
//! ```

use std::io::Read;

use elements::ElementTable;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::composition::{compute_scene_compositions, CompositionResult};
use crate::error::SceneError;
use crate::material::Material;
use crate::validation::{validate_scene, ConfigWarning};
use crate::zone::Zone;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SceneConfig {
    /// Element reference table; optional in JSON
    #[serde(default)]
    pub elements: ElementTable,
    pub materials: Vec<Material>,
    pub zones: Vec<Zone>,
}

impl SceneConfig {
    pub fn new(elements: ElementTable, materials: Vec<Material>, zones: Vec<Zone>) -> Self {
        Self {
            elements,
            materials,
            zones,
        }
    }

    /// The built-in demo scene: six elements, five materials, four zones
    pub fn sample() -> Self {
        Self::new(
            ElementTable::sample(),
            Material::sample_library(),
            Zone::sample_zones(),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!(
            "loaded scene config: {} elements, {} materials, {} zones",
            config.elements.len(),
            config.materials.len(),
            config.zones.len()
        );
        Ok(config)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, SceneError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the aggregator over this configuration
    pub fn compositions(&self) -> CompositionResult {
        compute_scene_compositions(&self.zones, &self.materials)
    }

    /// Check the tables for authoring mistakes, logging each one
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_scene(self)
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Last definition wins, as in aggregation
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().rev().find(|m| m.id == id)
    }
}
