use thiserror::Error;

/// Errors raised by checked constructors and configuration loading
///
/// The aggregator itself never fails; these only surface when a caller asks
/// for validated construction or parses a configuration file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("material {material:?}: weight for {symbol} must be a finite non-negative number, got {weight}")]
    InvalidElementWeight {
        material: String,
        symbol: String,
        weight: f64,
    },
    #[error("zone {zone:?}: area fraction must lie in [0, 1], got {value}")]
    AreaFractionOutOfRange { zone: String, value: f64 },
    #[error("zone {zone:?}: fraction for material {material:?} must be a finite non-negative number, got {fraction}")]
    InvalidMaterialFraction {
        zone: String,
        material: String,
        fraction: f64,
    },
    #[error("{kind} id must not be empty")]
    EmptyId { kind: &'static str },
    #[error("failed to parse scene configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
