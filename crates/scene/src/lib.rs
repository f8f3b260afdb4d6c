//! Scene model and element composition aggregation
//!
//! A scene is a set of zones, each covered by a mixture of materials, and
//! each material is a mixture of elements. This crate derives how much of
//! each element is present per zone and across the whole scene, and answers
//! the queries the map and detail views need on top of that.
//!
//! ```
//! use scene::{zone_top_elements, SceneConfig, DEFAULT_TOP_ELEMENTS};
//!
//! let config = SceneConfig::sample();
//! let composition = config.compositions();
//!
//! let top = zone_top_elements("zone3", &composition, DEFAULT_TOP_ELEMENTS);
//! assert_eq!(top[0].0, "Si");
//! ```

pub mod catalog;
pub mod composition;
pub mod config;
pub mod error;
pub mod material;
pub mod validation;
pub mod zone;

// Re-export key types at crate root
pub use composition::{
    compute_scene_compositions, element_zone_info, zone_top_elements, CompositionResult,
    ElementZoneInfo, ZoneRow, DEFAULT_TOP_ELEMENTS,
};
pub use config::SceneConfig;
pub use error::SceneError;
pub use material::Material;
pub use validation::{validate_inputs, validate_scene, ConfigWarning};
pub use zone::Zone;

// Re-export element types for convenience
pub use elements::{Band, BandFilter, Element, ElementTable};

#[cfg(test)]
mod composition_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod validation_test;
#[cfg(test)]
mod zone_test;
