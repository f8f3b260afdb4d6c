//! Spectral bands used to describe where an element is observable.
//!
//! Bands are descriptive only: they never enter composition arithmetic, but
//! the map and detail views use them to restrict which elements are shown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Named spectral range of a multispectral sensor
///
/// | Band | Range            |
/// |------|------------------|
/// | VIS  | 0.4 – 0.7 µm     |
/// | NIR  | 0.7 – 1.0 µm     |
/// | SWIR | 1.0 – 2.5 µm     |
/// | TIR  | 8 – 14 µm        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Band {
    /// Visible light
    Vis,
    /// Near infrared
    Nir,
    /// Shortwave infrared
    Swir,
    /// Thermal infrared
    Tir,
}

impl Band {
    /// All bands in display order
    pub const ALL: [Band; 4] = [Band::Vis, Band::Nir, Band::Swir, Band::Tir];

    pub fn name(&self) -> &'static str {
        match self {
            Band::Vis => "VIS",
            Band::Nir => "NIR",
            Band::Swir => "SWIR",
            Band::Tir => "TIR",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spectral band: {0:?}")]
pub struct ParseBandError(pub String);

impl FromStr for Band {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VIS" => Ok(Band::Vis),
            "NIR" => Ok(Band::Nir),
            "SWIR" => Ok(Band::Swir),
            "TIR" => Ok(Band::Tir),
            _ => Err(ParseBandError(s.to_string())),
        }
    }
}

/// Band selection applied by the viewers
///
/// `All` disables filtering; `Only` keeps elements observable in that band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BandFilter {
    #[default]
    All,
    Only(Band),
}

impl BandFilter {
    /// Options offered by the band selector, "ALL" first
    pub fn options() -> Vec<BandFilter> {
        std::iter::once(BandFilter::All)
            .chain(Band::ALL.into_iter().map(BandFilter::Only))
            .collect()
    }

    /// Whether an element listing `bands` passes this filter
    pub fn admits(&self, bands: &[Band]) -> bool {
        match self {
            BandFilter::All => true,
            BandFilter::Only(band) => bands.contains(band),
        }
    }
}

impl fmt::Display for BandFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BandFilter::All => write!(f, "ALL"),
            BandFilter::Only(band) => write!(f, "{}", band),
        }
    }
}

impl FromStr for BandFilter {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(BandFilter::All);
        }
        s.parse().map(BandFilter::Only)
    }
}

impl From<Band> for BandFilter {
    fn from(band: Band) -> Self {
        BandFilter::Only(band)
    }
}
