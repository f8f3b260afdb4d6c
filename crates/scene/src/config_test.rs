use approx::assert_relative_eq;

use crate::config::SceneConfig;
use crate::error::SceneError;

const MINIMAL: &str = r##"{
    "materials": [
        { "id": "m1", "label": "Laterite", "elements": { "Fe": 0.8, "Si": 0.2 } }
    ],
    "zones": [
        { "id": "z1", "label": "Zone", "color": "#22c55e", "areaFraction": 1.0,
          "materialMix": { "m1": 1.0 } }
    ]
}"##;

#[test]
fn test_parse_minimal_config() {
    let config = SceneConfig::from_json_str(MINIMAL).unwrap();

    assert!(config.elements.is_empty());
    assert_eq!(config.materials.len(), 1);
    assert_eq!(config.zone("z1").unwrap().color, "#22c55e");

    let result = config.compositions();
    assert_relative_eq!(result.zone_percentage("z1", "Fe"), 80.0, epsilon = 1e-9);
}

#[test]
fn test_from_reader() {
    let config = SceneConfig::from_reader(MINIMAL.as_bytes()).unwrap();
    assert_eq!(config.zones.len(), 1);
}

#[test]
fn test_parse_error_is_reported() {
    let err = SceneConfig::from_json_str(r#"{ "zones": [] }"#).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse scene configuration"));
}

#[test]
fn test_sample_survives_json() {
    let sample = SceneConfig::sample();
    let json = sample.to_json_pretty().unwrap();
    let parsed = SceneConfig::from_json_str(&json).unwrap();

    assert_eq!(parsed, sample);
    assert_eq!(parsed.compositions(), sample.compositions());
}

#[test]
fn test_material_lookup_last_wins() {
    let mut config = SceneConfig::sample();
    let mut replacement = config.material("quartz_sand").unwrap().clone();
    replacement.label = "Replacement".to_string();
    config.materials.push(replacement);

    assert_eq!(config.material("quartz_sand").unwrap().label, "Replacement");
    assert!(config.material("ghost").is_none());
}
