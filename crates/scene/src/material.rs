//! Materials as weighted mixtures of elements
//!
//! Weights are elemental mass fractions actually accounted for. They are not
//! required to sum to 1: whatever is missing is treated as unmodeled matter
//! and is never renormalized away.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::SceneError;

/// A physical substance in the material library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Material {
    /// Unique id referenced by zone material mixes
    pub id: String,
    pub label: String,
    /// Element symbol -> weight (non-negative), in authoring order
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, number>"))]
    pub elements: IndexMap<String, f64>,
    /// Objects this material is typically found in, display order
    #[serde(default)]
    pub objects: Vec<String>,
}

impl Material {
    /// Create a material, rejecting empty ids and negative or non-finite weights
    ///
    /// # Example
    /// ```
    /// use scene::Material;
    ///
    /// let laterite = Material::new(
    ///     "iron_soil",
    ///     "Iron-rich soil / laterite",
    ///     [("Fe", 0.8), ("Si", 0.2)],
    ///     ["red soil"],
    /// )
    /// .unwrap();
    /// assert_eq!(laterite.weight_of("Fe"), 0.8);
    ///
    /// assert!(Material::new("bad", "Bad", [("Fe", -0.1)], [] as [&str; 0]).is_err());
    /// ```
    pub fn new<S, O>(
        id: impl Into<String>,
        label: impl Into<String>,
        elements: impl IntoIterator<Item = (S, f64)>,
        objects: impl IntoIterator<Item = O>,
    ) -> Result<Self, SceneError>
    where
        S: Into<String>,
        O: Into<String>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(SceneError::EmptyId { kind: "material" });
        }

        let mut weights = IndexMap::new();
        for (symbol, weight) in elements {
            let symbol = symbol.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(SceneError::InvalidElementWeight {
                    material: id,
                    symbol,
                    weight,
                });
            }
            *weights.entry(symbol).or_insert(0.0) += weight;
        }

        Ok(Self {
            id,
            label: label.into(),
            elements: weights,
            objects: objects.into_iter().map(Into::into).collect(),
        })
    }

    /// Weight of `symbol` in this material, 0 when absent
    pub fn weight_of(&self, symbol: &str) -> f64 {
        self.elements.get(symbol).copied().unwrap_or(0.0)
    }

    /// Sum of all element weights
    pub fn total_weight(&self) -> f64 {
        self.elements.values().sum()
    }

    /// Mass fraction not attributed to any listed element (never negative)
    pub fn unmodeled_fraction(&self) -> f64 {
        (1.0 - self.total_weight()).max(0.0)
    }

    pub fn contains_element(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }
}
