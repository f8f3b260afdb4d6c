use crate::config::SceneConfig;
use crate::material::Material;
use crate::validation::{validate_inputs, validate_scene, ConfigWarning};
use crate::zone::Zone;

fn bare_zone(id: &str, area_fraction: f64, mix: &[(&str, f64)]) -> Zone {
    Zone {
        id: id.to_string(),
        label: id.to_string(),
        color: "#fff".to_string(),
        area_fraction,
        material_mix: mix.iter().map(|(m, f)| (m.to_string(), *f)).collect(),
    }
}

#[test_log::test]
fn test_sample_scene_is_clean() {
    assert!(validate_scene(&SceneConfig::sample()).is_empty());
}

#[test]
fn test_flags_unknown_material() {
    let zones = vec![bare_zone("z", 1.0, &[("iron_soil", 0.5), ("ghost", 0.5)])];
    let warnings = validate_inputs(&zones, &Material::sample_library(), None);

    assert_eq!(
        warnings,
        vec![ConfigWarning::UnknownMaterial {
            zone: "z".to_string(),
            material: "ghost".to_string(),
        }]
    );
}

#[test]
fn test_flags_bad_numbers() {
    let mut material = Material::iron_soil();
    material.elements.insert("Si".to_string(), -0.2);
    let zones = vec![bare_zone("z", 1.4, &[("iron_soil", -1.0)])];

    let warnings = validate_inputs(&zones, &[material], None);

    assert!(warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::InvalidElementWeight { symbol, .. } if symbol == "Si")));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::InvalidMaterialFraction { .. })));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::AreaFractionOutOfRange { .. })));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::AreaFractionSum { .. })));
}

#[test]
fn test_flags_duplicates() {
    let materials = vec![Material::quartz_sand(), Material::quartz_sand()];
    let zones = vec![
        bare_zone("z", 0.5, &[("quartz_sand", 1.0)]),
        bare_zone("z", 0.5, &[("quartz_sand", 1.0)]),
    ];

    let warnings = validate_inputs(&zones, &materials, None);

    assert_eq!(
        warnings,
        vec![
            ConfigWarning::DuplicateMaterialId {
                id: "quartz_sand".to_string()
            },
            ConfigWarning::DuplicateZoneId { id: "z".to_string() },
        ]
    );
}

#[test]
fn test_unknown_elements_need_a_table() {
    let mut config = SceneConfig::sample();
    config.materials.push(Material {
        id: "rust".to_string(),
        label: "Rust".to_string(),
        elements: [("O".to_string(), 0.3), ("Fe".to_string(), 0.7)].into_iter().collect(),
        objects: Vec::new(),
    });

    let warnings = validate_scene(&config);
    assert_eq!(
        warnings,
        vec![ConfigWarning::UnknownElement {
            material: "rust".to_string(),
            symbol: "O".to_string(),
        }]
    );

    config.elements = Default::default();
    assert!(validate_scene(&config).is_empty());
}

#[test]
fn test_area_sum_within_tolerance_is_accepted() {
    let zones = vec![
        bare_zone("a", 0.1, &[]),
        bare_zone("b", 0.2, &[]),
        bare_zone("c", 0.7, &[]),
    ];
    assert!(validate_inputs(&zones, &[], None).is_empty());
}

#[test]
fn test_no_zones_no_sum_warning() {
    assert!(validate_inputs(&[], &Material::sample_library(), None).is_empty());
}

#[test]
fn test_warning_messages_and_json() {
    let warning = ConfigWarning::AreaFractionOutOfRange {
        zone: "z".to_string(),
        value: 1.5,
    };
    assert_eq!(
        warning.to_string(),
        "zone \"z\": area fraction 1.5 is outside [0, 1]"
    );

    let json = serde_json::to_value(&warning).unwrap();
    assert_eq!(json["kind"], "areaFractionOutOfRange");
    assert_eq!(json["zone"], "z");
    assert_eq!(json["value"], 1.5);
}
