//! Land-cover object search
//!
//! A small knowledge base of objects seen in multispectral imagery (forest,
//! lake, building, ...) with the bands that reveal them, a typical bulk
//! composition and a reference reflectance curve.
//!
//! ```
//! use object_search::search_object;
//!
//! let result = search_object("Tropical Jungle").unwrap();
//! assert_eq!(result.object_name, "Forest");
//! assert_eq!(result.elements[0].symbol, "C");
//! ```

pub mod search;
pub mod spectral;
pub mod template;

pub use search::{element_emoji, search_object, suggestions, ElementShare, SearchResult};
pub use spectral::{SpectralCurve, SpectralPattern, WAVELENGTHS_NM};
pub use template::{template, ObjectTemplate, OBJECT_TEMPLATES};
