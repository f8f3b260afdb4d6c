//! Configuration checks for hand-authored scene data
//!
//! Aggregation is permissive and never rejects input. This pass reports
//! what looks like an authoring mistake so it can be fixed in the data; it
//! logs each finding at `warn` level and returns them, it never fails.

use std::collections::HashSet;

use elements::ElementTable;
use serde::Serialize;
use thiserror::Error;

use crate::config::SceneConfig;
use crate::material::Material;
use crate::zone::Zone;

/// Allowed deviation of the summed zone area fractions from 1
pub const AREA_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConfigWarning {
    #[error("material {material:?}: weight {weight} for {symbol} is negative or not finite")]
    InvalidElementWeight {
        material: String,
        symbol: String,
        weight: f64,
    },
    #[error("zone {zone:?}: fraction {fraction} for material {material:?} is negative or not finite")]
    InvalidMaterialFraction {
        zone: String,
        material: String,
        fraction: f64,
    },
    #[error("zone {zone:?}: area fraction {value} is outside [0, 1]")]
    AreaFractionOutOfRange { zone: String, value: f64 },
    #[error("zone {zone:?}: material {material:?} is not in the library")]
    UnknownMaterial { zone: String, material: String },
    #[error("material {material:?}: element {symbol:?} is not in the element table")]
    UnknownElement { material: String, symbol: String },
    #[error("material id {id:?} is defined more than once; the last definition is used")]
    DuplicateMaterialId { id: String },
    #[error("zone id {id:?} is defined more than once; contributions are merged")]
    DuplicateZoneId { id: String },
    #[error("zone area fractions sum to {total}, expected 1")]
    AreaFractionSum { total: f64 },
}

/// Validate a whole configuration
///
/// Unknown element symbols are only reported when the configuration carries
/// an element table.
pub fn validate_scene(config: &SceneConfig) -> Vec<ConfigWarning> {
    let elements = (!config.elements.is_empty()).then_some(&config.elements);
    validate_inputs(&config.zones, &config.materials, elements)
}

/// Validate zones and materials, optionally against an element table
pub fn validate_inputs(
    zones: &[Zone],
    materials: &[Material],
    elements: Option<&ElementTable>,
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    check_materials(materials, elements, &mut warnings);
    check_zones(zones, materials, &mut warnings);

    for warning in &warnings {
        log::warn!("scene configuration: {}", warning);
    }
    warnings
}

fn check_materials(
    materials: &[Material],
    elements: Option<&ElementTable>,
    warnings: &mut Vec<ConfigWarning>,
) {
    let mut seen = HashSet::new();
    for material in materials {
        if !seen.insert(material.id.as_str()) {
            warnings.push(ConfigWarning::DuplicateMaterialId {
                id: material.id.clone(),
            });
        }

        for (symbol, weight) in &material.elements {
            if !weight.is_finite() || *weight < 0.0 {
                warnings.push(ConfigWarning::InvalidElementWeight {
                    material: material.id.clone(),
                    symbol: symbol.clone(),
                    weight: *weight,
                });
            }
            if let Some(table) = elements {
                if !table.contains(symbol) {
                    warnings.push(ConfigWarning::UnknownElement {
                        material: material.id.clone(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }
    }
}

fn check_zones(zones: &[Zone], materials: &[Material], warnings: &mut Vec<ConfigWarning>) {
    let known: HashSet<&str> = materials.iter().map(|m| m.id.as_str()).collect();
    let mut seen = HashSet::new();

    for zone in zones {
        if !seen.insert(zone.id.as_str()) {
            warnings.push(ConfigWarning::DuplicateZoneId {
                id: zone.id.clone(),
            });
        }

        if !(0.0..=1.0).contains(&zone.area_fraction) {
            warnings.push(ConfigWarning::AreaFractionOutOfRange {
                zone: zone.id.clone(),
                value: zone.area_fraction,
            });
        }

        for (material, fraction) in &zone.material_mix {
            if !fraction.is_finite() || *fraction < 0.0 {
                warnings.push(ConfigWarning::InvalidMaterialFraction {
                    zone: zone.id.clone(),
                    material: material.clone(),
                    fraction: *fraction,
                });
            }
            if !known.contains(material.as_str()) {
                warnings.push(ConfigWarning::UnknownMaterial {
                    zone: zone.id.clone(),
                    material: material.clone(),
                });
            }
        }
    }

    if !zones.is_empty() {
        let total: f64 = zones.iter().map(|z| z.area_fraction).sum();
        let deviation = (total - 1.0).abs();
        if deviation.is_nan() || deviation > AREA_SUM_TOLERANCE {
            warnings.push(ConfigWarning::AreaFractionSum { total });
        }
    }
}
