//! WASM bindings for band filtering.

use indexmap::IndexMap;
use wasm_bindgen::prelude::*;

use elements::{filter_by_band, BandFilter, ElementTable};

use crate::{from_js, to_js};

pub(crate) fn parse_filter(filter: &str) -> Result<BandFilter, JsError> {
    filter
        .parse::<BandFilter>()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Symbols shown under `filter`, in table order
pub(crate) fn symbols_for(table: &ElementTable, filter: BandFilter) -> Vec<String> {
    match filter {
        BandFilter::All => table.iter().map(|e| e.symbol.clone()).collect(),
        BandFilter::Only(band) => table
            .symbols_in_band(band)
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Filter options for the band selector: "ALL", "VIS", "NIR", "SWIR", "TIR".
#[wasm_bindgen]
pub fn band_options() -> Result<JsValue, JsError> {
    let options: Vec<String> = BandFilter::options().iter().map(|f| f.to_string()).collect();
    to_js(&options)
}

/// Symbols of the elements observable under a filter.
///
/// # Arguments
/// * `elements` - Element table (array of Element objects)
/// * `filter` - "ALL" or a band name
#[wasm_bindgen]
pub fn elements_in_band(elements: JsValue, filter: &str) -> Result<JsValue, JsError> {
    let table: ElementTable = from_js(elements)?;
    let filter = parse_filter(filter)?;
    to_js(&symbols_for(&table, filter))
}

/// Restrict a zone's symbol -> percentage map to one band.
///
/// Percentages are not renormalized.
#[wasm_bindgen]
pub fn filter_zone_elements_by_band(
    percentages: JsValue,
    filter: &str,
    elements: JsValue,
) -> Result<JsValue, JsError> {
    let percentages: IndexMap<String, f64> = from_js(percentages)?;
    let filter = parse_filter(filter)?;
    let table: ElementTable = from_js(elements)?;
    to_js(&filter_by_band(&percentages, filter, &table))
}
