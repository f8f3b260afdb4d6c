//! Free-text lookup against the object knowledge base

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use elements::Band;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::spectral::SpectralCurve;
use crate::template::{ObjectTemplate, OBJECT_TEMPLATES};

/// Range of the reported match confidence, in percent
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 85..=97;

/// One element of a search result's typical composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ElementShare {
    pub symbol: String,
    pub emoji: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SearchResult {
    pub object_name: String,
    pub description: String,
    pub primary_bands: Vec<Band>,
    pub secondary_bands: Vec<Band>,
    /// Highest percentage first
    pub elements: Vec<ElementShare>,
    /// Stable per object, within [`CONFIDENCE_RANGE`]
    pub confidence: u8,
    pub spectral_data: SpectralCurve,
    pub applications: Vec<String>,
    pub challenges: Vec<String>,
}

impl SearchResult {
    pub fn from_template(template: &ObjectTemplate) -> Self {
        let mut elements: Vec<ElementShare> = template
            .element_composition
            .iter()
            .map(|(symbol, percentage)| ElementShare {
                symbol: (*symbol).to_string(),
                emoji: element_emoji(symbol).to_string(),
                percentage: *percentage,
            })
            .collect();
        elements.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

        Self {
            object_name: template.display_name(),
            description: template.description.to_string(),
            primary_bands: template.primary_bands.to_vec(),
            secondary_bands: template.secondary_bands.to_vec(),
            elements,
            confidence: confidence(template.name),
            spectral_data: template.spectral_pattern.curve(),
            applications: template.applications.iter().map(|s| s.to_string()).collect(),
            challenges: template.challenges.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Find the first template whose keywords match `query`
///
/// Matching is case-insensitive and ignores surrounding whitespace. A blank
/// query matches nothing.
pub fn search_object(query: &str) -> Option<SearchResult> {
    let query = query.trim().to_lowercase();
    let found = OBJECT_TEMPLATES.iter().find(|t| t.matches(&query));
    match found {
        Some(template) => {
            log::debug!("object search {:?} matched {}", query, template.name);
            Some(SearchResult::from_template(template))
        }
        None => {
            log::debug!("object search {:?} matched nothing", query);
            None
        }
    }
}

/// Display names of every searchable object, in match priority order
pub fn suggestions() -> Vec<String> {
    OBJECT_TEMPLATES.iter().map(|t| t.display_name()).collect()
}

/// Pictograph shown next to an element symbol
pub fn element_emoji(symbol: &str) -> &'static str {
    match symbol {
        "Fe" => "🔴",
        "Si" => "💎",
        "C" => "🌿",
        "Ca" => "🪨",
        "Na" | "Cl" => "🧂",
        "O" => "💨",
        "H" => "💧",
        "N" => "🌾",
        "Al" => "⚙️",
        "Mg" => "✨",
        "K" => "🌱",
        _ => "⚛️",
    }
}

fn confidence(name: &str) -> u8 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let mut rng = ChaCha8Rng::seed_from_u64(hasher.finish());
    rng.random_range(CONFIDENCE_RANGE)
}
