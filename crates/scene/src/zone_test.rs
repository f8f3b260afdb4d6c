use approx::assert_relative_eq;

use crate::error::SceneError;
use crate::material::Material;
use crate::zone::Zone;

#[test]
fn test_new_accepts_valid_zone() {
    let zone = Zone::new(
        "zone3",
        "Bare ground",
        "#eab308",
        0.2,
        [("quartz_sand", 0.7), ("iron_soil", 0.3)],
    )
    .unwrap();

    assert_relative_eq!(zone.area_percent(), 20.0);
    assert_relative_eq!(zone.mix_total(), 1.0);
}

#[test]
fn test_new_rejects_area_out_of_range() {
    for value in [-0.1, 1.5, f64::NAN] {
        let err = Zone::new("z", "Z", "#fff", value, [("m", 1.0)]).unwrap_err();
        assert!(matches!(err, SceneError::AreaFractionOutOfRange { .. }));
    }
}

#[test]
fn test_new_accepts_area_bounds() {
    assert!(Zone::new("z", "Z", "#fff", 0.0, [("m", 1.0)]).is_ok());
    assert!(Zone::new("z", "Z", "#fff", 1.0, [("m", 1.0)]).is_ok());
}

#[test]
fn test_new_rejects_negative_fraction() {
    let err = Zone::new("z", "Z", "#fff", 0.5, [("m", -0.5)]).unwrap_err();
    assert!(matches!(
        err,
        SceneError::InvalidMaterialFraction { ref material, .. } if material == "m"
    ));
}

#[test]
fn test_mix_need_not_sum_to_one() {
    let zone = Zone::new("z", "Z", "#fff", 0.5, [("a", 0.3), ("b", 0.2)]).unwrap();
    assert_relative_eq!(zone.mix_total(), 0.5);
}

#[test]
fn test_materials_in_reports_unknown_ids() {
    let library = Material::sample_library();
    let zone = Zone::new("z", "Z", "#fff", 0.5, [("iron_soil", 0.6), ("ghost", 0.4)]).unwrap();

    let resolved = zone.materials_in(&library);

    assert_eq!(resolved.len(), 2);
    // Mix order is authoring order
    assert_eq!(resolved[0].0.map(|m| m.id.as_str()), Some("iron_soil"));
    assert_relative_eq!(resolved[0].1, 0.6);
    assert!(resolved[1].0.is_none());
    assert_relative_eq!(resolved[1].1, 0.4);
}

#[test]
fn test_candidate_objects_deduplicated() {
    let mut library = Material::sample_library();
    library.push(Material {
        id: "red_clay".to_string(),
        label: "Red clay".to_string(),
        elements: [("Fe".to_string(), 0.5)].into_iter().collect(),
        objects: vec!["ดินแดง".to_string(), "brick kiln".to_string()],
    });
    let zone = Zone::new("z", "Z", "#fff", 0.5, [("iron_soil", 0.5), ("red_clay", 0.5)]).unwrap();

    let objects = zone.candidate_objects(&library);

    assert_eq!(
        objects,
        ["ดินแดง", "เหมืองเปิดหน้า", "ไหล่เขาดินแดง", "brick kiln"]
    );
}

#[test]
fn test_zone_json_uses_camel_case() {
    let json = serde_json::to_value(Zone::healthy_forest()).unwrap();
    assert_eq!(json["areaFraction"], 0.4);
    assert_eq!(json["materialMix"]["healthy_veg"], 0.8);
}
