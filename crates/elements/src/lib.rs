//! Chemical element reference data and spectral band filtering
//!
//! This crate holds the read-only element table that the viewers join
//! against composition results by symbol, plus the band filter used to
//! restrict which elements are displayed.

pub mod band;
pub mod catalog;
pub mod element;

// Re-export key types at crate root
pub use band::{Band, BandFilter, ParseBandError};
pub use element::{filter_by_band, Element, ElementTable};
