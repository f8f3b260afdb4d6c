//! Reference reflectance curves for broad land-cover signatures

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Sample wavelengths in nanometers, from blue through SWIR-2
pub const WAVELENGTHS_NM: [f64; 11] = [
    450.0, 550.0, 650.0, 750.0, 850.0, 950.0, 1050.0, 1250.0, 1450.0, 1650.0, 2150.0,
];

/// Overall shape of an object's reflectance spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralPattern {
    /// Vegetation: red edge and a strong NIR plateau
    HighNir,
    /// Falls off steadily into the infrared
    LowNir,
    Mixed,
    /// Bright across the board (sand, snow)
    Bright,
    /// Dark across the board (asphalt)
    Dark,
    /// Absorbs almost everything past the visible
    Water,
}

impl SpectralPattern {
    /// Reflectance in percent at each of [`WAVELENGTHS_NM`]
    pub fn reflectance(&self) -> [f64; 11] {
        match self {
            Self::HighNir => [8.0, 10.0, 6.0, 15.0, 45.0, 48.0, 50.0, 45.0, 42.0, 38.0, 25.0],
            Self::LowNir => [12.0, 15.0, 10.0, 8.0, 5.0, 4.0, 3.0, 2.0, 2.0, 2.0, 1.0],
            Self::Water => [15.0, 12.0, 5.0, 2.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            Self::Bright => [70.0, 75.0, 78.0, 80.0, 82.0, 83.0, 80.0, 75.0, 70.0, 68.0, 50.0],
            Self::Dark => [8.0, 10.0, 12.0, 13.0, 14.0, 15.0, 14.0, 13.0, 12.0, 11.0, 10.0],
            Self::Mixed => [20.0, 25.0, 22.0, 30.0, 28.0, 26.0, 24.0, 20.0, 18.0, 16.0, 12.0],
        }
    }

    pub fn curve(&self) -> SpectralCurve {
        SpectralCurve {
            wavelengths: WAVELENGTHS_NM.to_vec(),
            reflectance: self.reflectance().to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HighNir => "high-nir",
            Self::LowNir => "low-nir",
            Self::Mixed => "mixed",
            Self::Bright => "bright",
            Self::Dark => "dark",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for SpectralPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Paired wavelength / reflectance samples for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SpectralCurve {
    /// Nanometers
    pub wavelengths: Vec<f64>,
    /// Percent
    pub reflectance: Vec<f64>,
}

impl SpectralCurve {
    /// Reflectance at the sample closest to `wavelength_nm`
    pub fn nearest(&self, wavelength_nm: f64) -> Option<f64> {
        self.wavelengths
            .iter()
            .zip(&self.reflectance)
            .min_by(|(a, _), (b, _)| {
                (*a - wavelength_nm)
                    .abs()
                    .total_cmp(&(*b - wavelength_nm).abs())
            })
            .map(|(_, r)| *r)
    }

    /// Wavelength of peak reflectance
    pub fn peak(&self) -> Option<f64> {
        self.wavelengths
            .iter()
            .zip(&self.reflectance)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(w, _)| *w)
    }
}
