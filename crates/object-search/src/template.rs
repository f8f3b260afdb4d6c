//! Knowledge base of land-cover objects and how they look to a
//! multispectral sensor

use elements::Band;
use serde::Serialize;

use crate::spectral::SpectralPattern;

/// Reference entry for one kind of object
///
/// `element_composition` is a typical bulk composition in percent, listed in
/// authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTemplate {
    pub name: &'static str,
    /// Lower-case words a query is matched against
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub primary_bands: &'static [Band],
    pub secondary_bands: &'static [Band],
    pub element_composition: &'static [(&'static str, f64)],
    pub spectral_pattern: SpectralPattern,
    pub applications: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

impl ObjectTemplate {
    /// Display name with a leading capital ("forest" -> "Forest")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether `query` (already lower-cased and trimmed) hits a keyword
    ///
    /// A keyword hits when it appears inside the query or the query appears
    /// inside it, so both "dense forest" and "fore" find the forest entry.
    pub fn matches(&self, query: &str) -> bool {
        !query.is_empty()
            && self
                .keywords
                .iter()
                .any(|keyword| query.contains(keyword) || keyword.contains(query))
    }
}

/// Look up a template by its name
pub fn template(name: &str) -> Option<&'static ObjectTemplate> {
    OBJECT_TEMPLATES.iter().find(|t| t.name == name)
}

/// All templates in match priority order
pub static OBJECT_TEMPLATES: [ObjectTemplate; 8] = [
    ObjectTemplate {
        name: "forest",
        keywords: &["forest", "tree", "jungle", "woods", "vegetation"],
        description: "Dense forest areas are characterized by high chlorophyll content and complex canopy structure. \
Multispectral imaging leverages the strong near-infrared reflectance of healthy vegetation, combined with chlorophyll \
absorption in the visible red band, to accurately identify and monitor forest health. The spectral signature shows a \
distinctive 'red edge' transition between visible and NIR wavelengths, making forests easily distinguishable from \
other land cover types.",
        primary_bands: &[Band::Nir, Band::Vis],
        secondary_bands: &[Band::Swir, Band::Tir],
        element_composition: &[("C", 45.0), ("O", 30.0), ("H", 15.0), ("N", 5.0), ("Fe", 3.0), ("Si", 2.0)],
        spectral_pattern: SpectralPattern::HighNir,
        applications: &[
            "Forest health monitoring and disease detection through changes in NIR reflectance patterns",
            "Deforestation tracking using temporal analysis of vegetation indices like NDVI",
            "Biomass estimation by correlating NIR reflectance with canopy density and structure",
            "Species classification using unique spectral signatures in multiple bands",
        ],
        challenges: &[
            "Shadow effects from topography can reduce NIR reflectance and complicate interpretation",
            "Seasonal variations in leaf area and moisture content affect spectral signatures",
            "Mixed pixels at forest edges create ambiguity between forest and non-forest classes",
            "Atmospheric effects can distort the red edge position and NIR values",
        ],
    },
    ObjectTemplate {
        name: "lake",
        keywords: &["lake", "water", "river", "pond", "reservoir"],
        description: "Water bodies exhibit unique spectral properties with very low reflectance across most wavelengths \
due to strong absorption. Clean water shows slightly higher reflectance in the blue-green visible spectrum while \
absorbing almost all near-infrared radiation. This distinctive pattern makes water one of the easiest features to \
detect in multispectral imagery. Water quality, depth, and suspended sediment content all influence the spectral \
signature, enabling detailed aquatic ecosystem monitoring.",
        primary_bands: &[Band::Vis, Band::Nir],
        secondary_bands: &[Band::Swir],
        element_composition: &[("O", 50.0), ("H", 40.0), ("C", 5.0), ("Na", 2.0), ("Cl", 2.0), ("Ca", 1.0)],
        spectral_pattern: SpectralPattern::Water,
        applications: &[
            "Water quality assessment by detecting chlorophyll-a and suspended sediments in visible bands",
            "Shoreline mapping using the sharp water-land boundary in NIR imagery",
            "Flood extent monitoring through temporal NIR analysis showing water expansion",
            "Bathymetry estimation in shallow water using blue-green band penetration ratios",
        ],
        challenges: &[
            "Turbid water with high sediment load can increase reflectance and mimic soil signatures",
            "Submerged vegetation may show partial NIR reflectance, complicating water classification",
            "Sun glint on water surfaces creates bright spots that can be misclassified",
            "Shallow water allows bottom reflectance to influence the observed spectral signature",
        ],
    },
    ObjectTemplate {
        name: "building",
        keywords: &["building", "urban", "city", "construction", "roof"],
        description: "Urban structures composed of concrete, metal, and synthetic materials display moderate to high \
reflectance across visible and near-infrared wavelengths. Building roofs exhibit diverse spectral signatures depending \
on materials used - metal roofs show high brightness across all bands, while dark asphalt shows low reflectance. The \
thermal infrared band is particularly valuable for detecting buildings through their distinct thermal signatures \
caused by heat absorption and retention in construction materials.",
        primary_bands: &[Band::Vis, Band::Swir],
        secondary_bands: &[Band::Nir, Band::Tir],
        element_composition: &[("Si", 35.0), ("Ca", 25.0), ("Fe", 20.0), ("C", 10.0), ("Al", 5.0), ("O", 5.0)],
        spectral_pattern: SpectralPattern::Mixed,
        applications: &[
            "Urban growth monitoring by tracking new construction through temporal change detection",
            "Building material identification using SWIR and TIR signatures of different roof types",
            "Energy efficiency assessment through thermal imaging showing heat loss patterns",
            "3D building extraction combining spectral data with height information from shadows",
        ],
        challenges: &[
            "Spectral confusion with bare rock or concrete pavements sharing similar signatures",
            "Shadow effects from tall buildings obscure adjacent structures and reduce accuracy",
            "Mixed materials within single buildings create complex, variable spectral responses",
            "Seasonal heating/cooling affects thermal signatures and can cause temporal inconsistency",
        ],
    },
    ObjectTemplate {
        name: "road",
        keywords: &["road", "highway", "street", "pavement", "asphalt"],
        description: "Paved roads, predominantly made of asphalt or concrete, show characteristically low to moderate \
reflectance patterns. Asphalt roads appear very dark in visible and NIR bands due to hydrocarbon content and \
carbon-black additives, while concrete roads show brighter signatures similar to bare soil. The linear geometry and \
consistent spectral signature make roads relatively easy to extract from imagery. Road condition and age affect \
reflectance, with older degraded surfaces showing higher reflectance due to weathering.",
        primary_bands: &[Band::Vis, Band::Nir],
        secondary_bands: &[Band::Swir],
        element_composition: &[("C", 40.0), ("Si", 25.0), ("Ca", 15.0), ("Fe", 10.0), ("O", 5.0), ("H", 5.0)],
        spectral_pattern: SpectralPattern::Dark,
        applications: &[
            "Road network mapping for transportation planning using automated extraction algorithms",
            "Pavement condition monitoring detecting cracks and deterioration through texture analysis",
            "Traffic flow estimation using thermal signatures from vehicle heat in TIR bands",
            "Road surface classification distinguishing asphalt, concrete, and unpaved roads",
        ],
        challenges: &[
            "Shadow effects from trees and buildings can completely obscure road segments",
            "Spectral similarity with dark roofs and other impervious surfaces causes confusion",
            "Wet pavement shows dramatically different reflectance, appearing similar to water",
            "Lane markings and road paint create high-contrast features that complicate analysis",
        ],
    },
    ObjectTemplate {
        name: "cropland",
        keywords: &["cropland", "farm", "agriculture", "field", "crop"],
        description: "Agricultural fields exhibit highly variable spectral signatures depending on crop type, growth \
stage, and management practices. Like forests, crops show elevated NIR reflectance when actively growing due to \
chlorophyll content and leaf structure. However, cropland displays more temporal variability with distinct seasonal \
patterns from bare soil (low NIR) to peak vegetation (high NIR) and back to harvest (low NIR). Different crops can be \
distinguished by their unique phenological cycles and spectral characteristics in multiple bands.",
        primary_bands: &[Band::Nir, Band::Vis],
        secondary_bands: &[Band::Swir, Band::Tir],
        element_composition: &[
            ("C", 35.0),
            ("O", 25.0),
            ("H", 15.0),
            ("N", 10.0),
            ("K", 5.0),
            ("Fe", 5.0),
            ("Si", 5.0),
        ],
        spectral_pattern: SpectralPattern::Mixed,
        applications: &[
            "Crop type classification using multi-temporal NIR and SWIR signatures throughout growing season",
            "Yield prediction by correlating vegetation indices with crop health and biomass accumulation",
            "Irrigation monitoring detecting stressed crops through reduced NIR reflectance and elevated TIR",
            "Precision agriculture identifying within-field variability for targeted management interventions",
        ],
        challenges: &[
            "Bare soil exposure during planting and harvest creates dramatic spectral changes",
            "Crop type confusion when different species are at similar phenological stages",
            "Weed presence can alter the overall field spectral signature and mask crop condition",
            "Cloud cover during critical growth periods may prevent consistent monitoring",
        ],
    },
    ObjectTemplate {
        name: "desert",
        keywords: &["desert", "sand", "dune", "arid", "dry"],
        description: "Desert landscapes dominated by exposed sand and rock exhibit high reflectance across visible, \
NIR, and SWIR wavelengths due to minimal vegetation cover and light-colored mineral surfaces. Quartz-rich sand shows \
particularly strong reflectance with a characteristic absorption feature near 2.2 micrometers in the SWIR band. The \
thermal infrared band reveals extreme temperature variations, with deserts showing high daytime temperatures and \
rapid nighttime cooling, creating distinct diurnal thermal signatures.",
        primary_bands: &[Band::Vis, Band::Swir],
        secondary_bands: &[Band::Nir, Band::Tir],
        element_composition: &[("Si", 45.0), ("O", 30.0), ("Fe", 10.0), ("Al", 8.0), ("Ca", 4.0), ("Na", 3.0)],
        spectral_pattern: SpectralPattern::Bright,
        applications: &[
            "Sand dune movement tracking using temporal analysis of surface texture and position",
            "Mineral mapping exploiting SWIR absorption features diagnostic of specific minerals",
            "Drought monitoring detecting changes in sparse vegetation and soil moisture through SWIR",
            "Archaeological site detection identifying subtle soil and vegetation anomalies from buried structures",
        ],
        challenges: &[
            "Atmospheric scattering effects are amplified over bright surfaces, requiring careful correction",
            "Sparse vegetation can be difficult to detect against bright sand backgrounds",
            "Sand ripples and dune shadows create texture that may be confused with land cover changes",
            "Extreme thermal conditions can affect sensor performance and data quality",
        ],
    },
    ObjectTemplate {
        name: "snow",
        keywords: &["snow", "ice", "glacier", "frozen"],
        description: "Snow and ice surfaces display the highest reflectance of any natural material in the visible \
spectrum, appearing brilliant white due to scattering from ice crystals. However, snow shows a dramatic reflectance \
decrease in the near-infrared and strong absorption in the shortwave infrared, particularly around 1.5 micrometers. \
This unique spectral pattern allows reliable snow mapping even in cloudy conditions. Snow grain size, liquid water \
content, and contamination all affect the spectral signature, enabling snow property estimation.",
        primary_bands: &[Band::Vis, Band::Swir],
        secondary_bands: &[Band::Nir],
        element_composition: &[("O", 50.0), ("H", 45.0), ("C", 3.0), ("Si", 1.0), ("Fe", 1.0)],
        spectral_pattern: SpectralPattern::Bright,
        applications: &[
            "Snow cover mapping for water resource management using SWIR to distinguish snow from clouds",
            "Glacier extent monitoring tracking changes in permanent ice cover over time",
            "Snow water equivalent estimation correlating grain size (from SWIR) with water content",
            "Avalanche risk assessment detecting snow property changes through multi-band analysis",
        ],
        challenges: &[
            "Cloud confusion as both clouds and snow are bright in visible bands",
            "Shadow effects in mountainous terrain can darken snow signatures significantly",
            "Wet snow shows reduced reflectance and may be confused with rock or vegetation",
            "Mixed pixels at snow-vegetation boundaries create ambiguous spectral signatures",
        ],
    },
    ObjectTemplate {
        name: "wetland",
        keywords: &["wetland", "marsh", "swamp", "bog"],
        description: "Wetlands represent a complex mixture of water, vegetation, and saturated soil, creating unique \
spectral signatures that vary seasonally and spatially. Emergent vegetation shows typical high NIR reflectance while \
standing water shows low NIR, resulting in intermediate values for wetland pixels. The combination of vegetation \
indices and water indices helps distinguish wetlands from upland forests or open water. Wetland spectral signatures \
are highly dynamic, changing with water level fluctuations and vegetation phenology.",
        primary_bands: &[Band::Nir, Band::Swir],
        secondary_bands: &[Band::Vis, Band::Tir],
        element_composition: &[("O", 40.0), ("H", 30.0), ("C", 20.0), ("N", 5.0), ("Fe", 3.0), ("Si", 2.0)],
        spectral_pattern: SpectralPattern::Mixed,
        applications: &[
            "Wetland extent mapping combining water and vegetation indices for boundary delineation",
            "Hydrological monitoring tracking seasonal inundation patterns through temporal NIR analysis",
            "Wetland health assessment detecting stressed vegetation through changes in red edge position",
            "Methane emission estimation correlating wetland extent and condition with greenhouse gas production",
        ],
        challenges: &[
            "Spectral confusion with irrigated cropland showing similar water-vegetation mixtures",
            "Seasonal variations cause dramatic signature changes, requiring multi-date imagery",
            "Dense canopy can obscure underlying water, leading to classification as upland forest",
            "Small wetland features may be missed due to spatial resolution limitations",
        ],
    },
];
