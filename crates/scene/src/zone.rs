//! Scene zones: contiguous regions described by area share and material mix

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::SceneError;
use crate::material::Material;

/// One region of the scene
///
/// `area_fraction` is the zone's share of the whole scene and should lie in
/// [0, 1]. Fractions across zones are expected, but not required, to sum
/// to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Zone {
    pub id: String,
    pub label: String,
    /// CSS color used by the map renderer (e.g. "#22c55e")
    pub color: String,
    pub area_fraction: f64,
    /// Material id -> fraction of this zone's area covered by that material
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, number>"))]
    pub material_mix: IndexMap<String, f64>,
}

impl Zone {
    /// Create a zone, enforcing `area_fraction` in [0, 1] and non-negative
    /// finite mix fractions
    ///
    /// Mix fractions are not required to sum to 1.
    pub fn new<M>(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        area_fraction: f64,
        material_mix: impl IntoIterator<Item = (M, f64)>,
    ) -> Result<Self, SceneError>
    where
        M: Into<String>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(SceneError::EmptyId { kind: "zone" });
        }
        if !(0.0..=1.0).contains(&area_fraction) {
            return Err(SceneError::AreaFractionOutOfRange {
                zone: id,
                value: area_fraction,
            });
        }

        let mut mix = IndexMap::new();
        for (material, fraction) in material_mix {
            let material = material.into();
            if !fraction.is_finite() || fraction < 0.0 {
                return Err(SceneError::InvalidMaterialFraction {
                    zone: id,
                    material,
                    fraction,
                });
            }
            *mix.entry(material).or_insert(0.0) += fraction;
        }

        Ok(Self {
            id,
            label: label.into(),
            color: color.into(),
            area_fraction,
            material_mix: mix,
        })
    }

    /// Area share as a percentage of the scene
    pub fn area_percent(&self) -> f64 {
        self.area_fraction * 100.0
    }

    /// Sum of the material mix fractions
    pub fn mix_total(&self) -> f64 {
        self.material_mix.values().sum()
    }

    /// Resolve the material mix against a library
    ///
    /// Returns `(material, fraction)` in mix order. Ids missing from the
    /// library come back as `None` so a detail view can still list them.
    pub fn materials_in<'a>(&self, materials: &'a [Material]) -> Vec<(Option<&'a Material>, f64)> {
        self.material_mix
            .iter()
            .map(|(id, fraction)| (find_material(materials, id), *fraction))
            .collect()
    }

    /// Object names from every resolved material, de-duplicated in first-seen order
    pub fn candidate_objects(&self, materials: &[Material]) -> Vec<String> {
        let mut objects: Vec<String> = Vec::new();
        for (material, _) in self.materials_in(materials) {
            let Some(material) = material else {
                continue;
            };
            for object in &material.objects {
                if !objects.contains(object) {
                    objects.push(object.clone());
                }
            }
        }
        objects
    }
}

/// Last definition wins, matching the aggregator's lookup
fn find_material<'a>(materials: &'a [Material], id: &str) -> Option<&'a Material> {
    materials.iter().rev().find(|m| m.id == id)
}
