//! Element composition of a scene
//!
//! Zones are mixtures of materials and materials are mixtures of elements.
//! Aggregation pushes each zone's area share through both levels:
//!
//! ```text
//! contribution = zone.area_fraction * material_fraction * element_weight
//! ```
//!
//! Contributions are summed per element, once for the whole scene and once
//! per zone, then normalized to percentages. Inputs are never renormalized:
//! a material whose weights sum to 0.6 simply contributes less.

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::material::Material;
use crate::zone::Zone;

/// Number of elements shown in a zone summary chip row
pub const DEFAULT_TOP_ELEMENTS: usize = 2;

/// Per-element totals and percentages for a scene and each of its zones
///
/// Derived from `(zones, materials)` and never mutated afterwards; a new
/// result is produced whenever the inputs change. Symbols appear in the
/// order they were first met (zone order, then mix order, then element
/// order) and zones in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CompositionResult {
    /// Symbol -> raw weighted contribution across the whole scene
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, number>"))]
    pub scene_element_totals: IndexMap<String, f64>,
    /// Symbol -> percentage of the scene-wide total (0-100)
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, number>"))]
    pub scene_element_perc: IndexMap<String, f64>,
    /// Zone id -> symbol -> raw weighted contribution within that zone
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, Record<string, number>>"))]
    pub zone_element_totals: IndexMap<String, IndexMap<String, f64>>,
    /// Zone id -> symbol -> percentage of that zone's total (0-100)
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, Record<string, number>>"))]
    pub zone_element_perc: IndexMap<String, IndexMap<String, f64>>,
}

/// Compute per-zone and scene-wide element composition
///
/// Never fails: material ids missing from `materials` contribute nothing,
/// and zero totals yield all-zero percentages instead of NaN. When
/// `materials` repeats an id the last definition is used. Zones sharing an
/// id are merged into one entry.
///
/// # Example
/// ```
/// use scene::{compute_scene_compositions, Material, Zone};
///
/// let materials = vec![Material::new("m1", "Laterite", [("Fe", 0.8), ("Si", 0.2)], ["red soil"]).unwrap()];
/// let zones = vec![Zone::new("z1", "Zone 1", "#f97316", 1.0, [("m1", 1.0)]).unwrap()];
///
/// let result = compute_scene_compositions(&zones, &materials);
/// assert!((result.zone_element_perc["z1"]["Fe"] - 80.0).abs() < 1e-9);
/// assert!((result.scene_element_perc["Si"] - 20.0).abs() < 1e-9);
/// ```
pub fn compute_scene_compositions(zones: &[Zone], materials: &[Material]) -> CompositionResult {
    // collect() keeps the last value for a repeated key
    let library: HashMap<&str, &Material> = materials.iter().map(|m| (m.id.as_str(), m)).collect();

    let mut scene_element_totals: IndexMap<String, f64> = IndexMap::new();
    let mut zone_element_totals: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();

    for zone in zones {
        let zone_totals = zone_element_totals.entry(zone.id.clone()).or_default();

        for (material_id, material_fraction) in &zone.material_mix {
            let Some(material) = library.get(material_id.as_str()) else {
                log::debug!(
                    "zone {:?}: skipping unknown material {:?}",
                    zone.id,
                    material_id
                );
                continue;
            };

            for (symbol, element_weight) in &material.elements {
                let contribution = zone.area_fraction * material_fraction * element_weight;
                *scene_element_totals.entry(symbol.clone()).or_insert(0.0) += contribution;
                *zone_totals.entry(symbol.clone()).or_insert(0.0) += contribution;
            }
        }
    }

    let scene_element_perc = to_percentages(&scene_element_totals);
    let zone_element_perc = zone_element_totals
        .iter()
        .map(|(zone_id, totals)| (zone_id.clone(), to_percentages(totals)))
        .collect();

    CompositionResult {
        scene_element_totals,
        scene_element_perc,
        zone_element_totals,
        zone_element_perc,
    }
}

/// Highest-percentage elements of one zone, descending
///
/// Ties keep the zone's element order. An unknown zone, an empty zone or a
/// `limit` of 0 all yield an empty list; a limit beyond the number of
/// elements returns everything.
pub fn zone_top_elements(
    zone_id: &str,
    result: &CompositionResult,
    limit: usize,
) -> Vec<(String, f64)> {
    let Some(percentages) = result.zone_element_perc.get(zone_id) else {
        return Vec::new();
    };

    let mut entries: Vec<(String, f64)> = percentages
        .iter()
        .map(|(symbol, perc)| (symbol.clone(), *perc))
        .collect();
    entries.sort_by(|a, b| descending(a.1, b.1));
    entries.truncate(limit);
    entries
}

/// Where an element comes from across the scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ElementZoneInfo {
    /// Scene-wide raw total for the element (0 when absent)
    pub total_elem: f64,
    /// Contributing zones, largest share of `total_elem` first
    pub zone_rows: Vec<ZoneRow>,
}

/// One zone's contribution to a single element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ZoneRow {
    pub zone: Zone,
    /// Element's share of this zone's own total
    pub within_zone_percent: f64,
    /// This zone's share of the element's scene-wide total
    pub contribution_percent: f64,
}

/// Break an element's scene total down by zone
///
/// Zones with no contribution are left out rather than listed at 0. When
/// the element is absent from the scene there is nothing to break down and
/// `zone_rows` is empty.
pub fn element_zone_info(
    symbol: &str,
    zones: &[Zone],
    result: &CompositionResult,
) -> ElementZoneInfo {
    let total_elem = result
        .scene_element_totals
        .get(symbol)
        .copied()
        .unwrap_or(0.0);
    if is_zero(total_elem) {
        return ElementZoneInfo::default();
    }

    let mut zone_rows: Vec<ZoneRow> = zones
        .iter()
        .filter_map(|zone| {
            let totals = result.zone_element_totals.get(&zone.id)?;
            let value = totals.get(symbol).copied().unwrap_or(0.0);
            if is_zero(value) {
                return None;
            }
            Some(ZoneRow {
                zone: zone.clone(),
                within_zone_percent: value / denominator(totals) * 100.0,
                contribution_percent: value / total_elem * 100.0,
            })
        })
        .collect();
    zone_rows.sort_by(|a, b| descending(a.contribution_percent, b.contribution_percent));

    ElementZoneInfo {
        total_elem,
        zone_rows,
    }
}

impl CompositionResult {
    /// Shorthand for [`compute_scene_compositions`]
    pub fn compute(zones: &[Zone], materials: &[Material]) -> Self {
        compute_scene_compositions(zones, materials)
    }

    /// Scene-wide percentage for `symbol`, 0 when not detected
    pub fn scene_percentage(&self, symbol: &str) -> f64 {
        self.scene_element_perc.get(symbol).copied().unwrap_or(0.0)
    }

    /// Percentage of `symbol` within one zone, 0 when not detected
    pub fn zone_percentage(&self, zone_id: &str, symbol: &str) -> f64 {
        self.zone_element_perc
            .get(zone_id)
            .and_then(|perc| perc.get(symbol))
            .copied()
            .unwrap_or(0.0)
    }

    /// Raw sum of every element contribution in the scene
    pub fn scene_total(&self) -> f64 {
        self.scene_element_totals.values().sum()
    }

    /// Raw sum of every element contribution in one zone
    pub fn zone_total(&self, zone_id: &str) -> f64 {
        self.zone_element_totals
            .get(zone_id)
            .map(|totals| totals.values().sum())
            .unwrap_or(0.0)
    }

    /// Every element of a zone, highest percentage first
    pub fn zone_elements_sorted(&self, zone_id: &str) -> Vec<(String, f64)> {
        zone_top_elements(zone_id, self, usize::MAX)
    }

    /// Symbols with a positive scene total, highest percentage first
    pub fn detected_elements(&self) -> Vec<String> {
        let mut detected: Vec<(&String, f64)> = self
            .scene_element_totals
            .iter()
            .filter(|(_, total)| **total > 0.0)
            .map(|(symbol, _)| (symbol, self.scene_percentage(symbol)))
            .collect();
        detected.sort_by(|a, b| descending(a.1, b.1));
        detected.into_iter().map(|(symbol, _)| symbol.clone()).collect()
    }
}

fn to_percentages(totals: &IndexMap<String, f64>) -> IndexMap<String, f64> {
    let total = denominator(totals);
    totals
        .iter()
        .map(|(symbol, value)| (symbol.clone(), value / total * 100.0))
        .collect()
}

/// Sum of the totals, or 1 when there is nothing to divide by
fn denominator(totals: &IndexMap<String, f64>) -> f64 {
    let sum: f64 = totals.values().sum();
    if is_zero(sum) {
        1.0
    } else {
        sum
    }
}

fn is_zero(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Larger values first, as a total order (NaN sorts ahead of everything)
fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
