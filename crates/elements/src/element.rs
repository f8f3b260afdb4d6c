//! Element reference records
//!
//! Elements are joined against composition results by symbol for display.
//! They carry no weights of their own.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::band::{Band, BandFilter};

/// Descriptive record for one chemical element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Element {
    /// Chemical symbol, the join key used everywhere else (e.g. "Fe")
    pub symbol: String,
    pub atomic_number: u8,
    /// Thai display name
    pub name_th: String,
    /// English display name
    pub name_en: String,
    /// Chemical groups (e.g. "Transition metal")
    pub groups: Vec<String>,
    /// Bands in which the element is considered observable
    pub bands: Vec<Band>,
    /// Free-text note per band on how the element shows up there
    #[serde(default)]
    pub spectral_hints: BTreeMap<Band, String>,
    #[serde(default)]
    pub typical_materials: Vec<String>,
    #[serde(default)]
    pub typical_objects: Vec<String>,
}

impl Element {
    pub fn has_band(&self, band: Band) -> bool {
        self.bands.contains(&band)
    }

    pub fn hint(&self, band: Band) -> Option<&str> {
        self.spectral_hints.get(&band).map(String::as_str)
    }
}

/// Ordered, read-only table of elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ElementTable(Vec<Element>);

impl ElementTable {
    pub fn new(elements: Vec<Element>) -> Self {
        Self(elements)
    }

    /// Finds an element by symbol. The first entry wins on duplicates.
    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.0.iter().find(|e| e.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }

    /// Symbols of every element observable in `band`, in table order
    pub fn symbols_in_band(&self, band: Band) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.has_band(band))
            .map(|e| e.symbol.as_str())
            .collect()
    }

    /// Whether `symbol` passes `filter`
    ///
    /// Unknown symbols only pass when the filter is `All`.
    pub fn admits(&self, symbol: &str, filter: BandFilter) -> bool {
        match filter {
            BandFilter::All => true,
            BandFilter::Only(_) => self.get(symbol).is_some_and(|e| filter.admits(&e.bands)),
        }
    }
}

impl From<Vec<Element>> for ElementTable {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl<'a> IntoIterator for &'a ElementTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Restrict a symbol -> percentage map to the elements admitted by `filter`
///
/// Values are passed through untouched; no renormalization happens, so a
/// filtered map usually sums to less than 100.
/// Entries keep their input order.
pub fn filter_by_band(
    percentages: &IndexMap<String, f64>,
    filter: BandFilter,
    table: &ElementTable,
) -> IndexMap<String, f64> {
    percentages
        .iter()
        .filter(|(symbol, _)| table.admits(symbol, filter))
        .map(|(symbol, value)| (symbol.clone(), *value))
        .collect()
}
