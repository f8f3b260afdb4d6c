use approx::assert_relative_eq;
use indexmap::IndexMap;

use crate::composition::{
    compute_scene_compositions, element_zone_info, zone_top_elements, CompositionResult,
    DEFAULT_TOP_ELEMENTS,
};
use crate::material::Material;
use crate::zone::Zone;

fn material(id: &str, elements: &[(&str, f64)]) -> Material {
    Material {
        id: id.to_string(),
        label: id.to_string(),
        elements: elements.iter().map(|(s, w)| (s.to_string(), *w)).collect(),
        objects: Vec::new(),
    }
}

fn zone(id: &str, area_fraction: f64, mix: &[(&str, f64)]) -> Zone {
    Zone {
        id: id.to_string(),
        label: id.to_string(),
        color: "#000000".to_string(),
        area_fraction,
        material_mix: mix.iter().map(|(m, f)| (m.to_string(), *f)).collect(),
    }
}

fn sum(map: &IndexMap<String, f64>) -> f64 {
    map.values().sum()
}

#[test]
fn test_single_zone_scenario() {
    let materials = vec![material("m1", &[("Fe", 0.8), ("Si", 0.2)])];
    let zones = vec![zone("z1", 1.0, &[("m1", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    assert_relative_eq!(result.zone_element_perc["z1"]["Fe"], 80.0, epsilon = 1e-9);
    assert_relative_eq!(result.zone_element_perc["z1"]["Si"], 20.0, epsilon = 1e-9);
    assert_relative_eq!(result.scene_element_perc["Fe"], 80.0, epsilon = 1e-9);
    assert_relative_eq!(result.scene_element_perc["Si"], 20.0, epsilon = 1e-9);
}

#[test]
fn test_percentages_sum_to_hundred() {
    let materials = vec![
        material("veg", &[("C", 0.9)]),
        material("soil", &[("Fe", 0.5), ("Si", 0.3), ("Al", 0.1)]),
        material("salt", &[("Na", 0.4), ("Cl", 0.6)]),
    ];
    let zones = vec![
        zone("a", 0.5, &[("veg", 0.7), ("soil", 0.3)]),
        zone("b", 0.3, &[("soil", 1.0)]),
        zone("c", 0.2, &[("salt", 0.5), ("veg", 0.25)]),
    ];

    let result = compute_scene_compositions(&zones, &materials);

    for z in &zones {
        assert_relative_eq!(sum(&result.zone_element_perc[&z.id]), 100.0, epsilon = 1e-6);
    }
    assert_relative_eq!(sum(&result.scene_element_perc), 100.0, epsilon = 1e-6);
}

#[test]
fn test_weights_are_not_renormalized() {
    // Material only accounts for 60% of its mass
    let materials = vec![material("partial", &[("Fe", 0.4), ("Si", 0.2)])];
    let zones = vec![zone("z", 0.5, &[("partial", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    assert_relative_eq!(result.zone_element_totals["z"]["Fe"], 0.2, epsilon = 1e-12);
    assert_relative_eq!(result.zone_element_totals["z"]["Si"], 0.1, epsilon = 1e-12);
    assert_relative_eq!(result.zone_element_perc["z"]["Fe"], 200.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_empty_mix_yields_empty_zone_maps() {
    let materials = vec![material("m1", &[("Fe", 1.0)])];
    let zones = vec![zone("empty", 0.5, &[]), zone("full", 0.5, &[("m1", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    assert!(result.zone_element_totals["empty"].is_empty());
    assert!(result.zone_element_perc["empty"].is_empty());
    assert_relative_eq!(result.zone_element_perc["full"]["Fe"], 100.0);
}

#[test]
fn test_zero_contributions_give_zero_percentages() {
    let materials = vec![material("m1", &[("Fe", 0.0), ("Si", 0.0)])];
    let zones = vec![zone("z", 0.0, &[("m1", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    for perc in result.zone_element_perc["z"].values() {
        assert_eq!(*perc, 0.0);
    }
    for perc in result.scene_element_perc.values() {
        assert_eq!(*perc, 0.0);
    }
}

#[test]
fn test_empty_scene() {
    let result = compute_scene_compositions(&[], &[]);
    assert_eq!(result, CompositionResult::default());
}

#[test]
fn test_contributions_add_across_materials() {
    let materials = vec![
        material("soil", &[("Fe", 0.8), ("Si", 0.2)]),
        material("rust", &[("Fe", 0.5), ("O", 0.5)]),
    ];
    let zones = vec![zone("z", 0.4, &[("soil", 0.6), ("rust", 0.3)])];

    let result = compute_scene_compositions(&zones, &materials);

    let expected = 0.4 * 0.6 * 0.8 + 0.4 * 0.3 * 0.5;
    assert_relative_eq!(result.zone_element_totals["z"]["Fe"], expected, epsilon = 1e-12);
}

#[test]
fn test_scene_totals_equal_sum_of_zone_totals() {
    let config = crate::SceneConfig::sample();
    let result = config.compositions();

    for (symbol, scene_total) in &result.scene_element_totals {
        let from_zones: f64 = result
            .zone_element_totals
            .values()
            .map(|totals| totals.get(symbol).copied().unwrap_or(0.0))
            .sum();
        assert_relative_eq!(*scene_total, from_zones, epsilon = 1e-12);
    }
}

#[test_log::test]
fn test_missing_material_is_skipped() {
    let materials = vec![material("m1", &[("Fe", 0.8), ("Si", 0.2)])];
    let with_ghost = vec![zone("z", 0.7, &[("m1", 0.5), ("ghost", 0.5)])];
    let without_ghost = vec![zone("z", 0.7, &[("m1", 0.5)])];

    let a = compute_scene_compositions(&with_ghost, &materials);
    let b = compute_scene_compositions(&without_ghost, &materials);

    assert_eq!(a, b);
}

#[test]
fn test_duplicate_material_last_wins() {
    let materials = vec![
        material("m", &[("Fe", 1.0)]),
        material("m", &[("Si", 1.0)]),
    ];
    let zones = vec![zone("z", 1.0, &[("m", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    assert!(!result.scene_element_totals.contains_key("Fe"));
    assert_relative_eq!(result.scene_element_perc["Si"], 100.0);
}

#[test]
fn test_duplicate_zone_ids_merge() {
    let materials = vec![material("m", &[("Fe", 1.0)])];
    let zones = vec![zone("z", 0.3, &[("m", 1.0)]), zone("z", 0.2, &[("m", 1.0)])];

    let result = compute_scene_compositions(&zones, &materials);

    assert_eq!(result.zone_element_totals.len(), 1);
    assert_relative_eq!(result.zone_element_totals["z"]["Fe"], 0.5, epsilon = 1e-12);
}

#[test]
fn test_repeated_calls_are_identical() {
    let config = crate::SceneConfig::sample();
    let first = compute_scene_compositions(&config.zones, &config.materials);
    let second = compute_scene_compositions(&config.zones, &config.materials);
    assert_eq!(first, second);
}

fn fixed_result() -> CompositionResult {
    let perc: IndexMap<String, f64> = [("Fe", 60.0), ("Na", 10.0), ("Si", 30.0)]
        .iter()
        .map(|(s, v)| (s.to_string(), *v))
        .collect();
    let mut result = CompositionResult::default();
    result.zone_element_perc.insert("z".to_string(), perc);
    result
}

#[test]
fn test_top_elements_ordering() {
    let result = fixed_result();
    let top = zone_top_elements("z", &result, 2);
    assert_eq!(top, vec![("Fe".to_string(), 60.0), ("Si".to_string(), 30.0)]);
}

#[test]
fn test_top_elements_limits() {
    let result = fixed_result();
    assert!(zone_top_elements("z", &result, 0).is_empty());
    assert_eq!(zone_top_elements("z", &result, 10).len(), 3);
    assert_eq!(zone_top_elements("z", &result, DEFAULT_TOP_ELEMENTS).len(), 2);
    assert!(zone_top_elements("missing", &result, 5).is_empty());
}

#[test]
fn test_top_elements_ties_keep_insertion_order() {
    let perc: IndexMap<String, f64> = [("Na", 35.0), ("Cl", 35.0), ("Si", 30.0)]
        .iter()
        .map(|(s, v)| (s.to_string(), *v))
        .collect();
    let mut result = CompositionResult::default();
    result.zone_element_perc.insert("salt".to_string(), perc);

    let top = zone_top_elements("salt", &result, 3);
    let symbols: Vec<&str> = top.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(symbols, ["Na", "Cl", "Si"]);
}

#[test]
fn test_top_elements_ties_follow_material_authoring_order() {
    let config = crate::SceneConfig::sample();
    let result = config.compositions();

    let top = zone_top_elements("zone4", &result, DEFAULT_TOP_ELEMENTS);
    let symbols: Vec<&str> = top.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(symbols, ["Na", "Cl"]);
}

#[test]
fn test_json_key_order_survives_aggregation() {
    let materials: Vec<Material> = serde_json::from_str(
        r#"[{ "id": "m", "label": "M", "elements": { "Si": 0.5, "Al": 0.5 } }]"#,
    )
    .unwrap();
    let zones = vec![zone("z", 1.0, &[("m", 1.0)])];
    let result = compute_scene_compositions(&zones, &materials);

    let top = zone_top_elements("z", &result, 1);
    assert_eq!(top, vec![("Si".to_string(), 50.0)]);
    let symbols: Vec<&String> = result.scene_element_totals.keys().collect();
    assert_eq!(symbols, ["Si", "Al"]);
}

#[test]
fn test_sorting_tolerates_nan_percentages() {
    // An infinite weight makes the zone total infinite and its share NaN
    let materials = vec![material("m", &[("Fe", f64::INFINITY), ("Si", 1.0), ("C", 2.0)])];
    let zones = vec![zone("z", 1.0, &[("m", 1.0)])];
    let result = compute_scene_compositions(&zones, &materials);
    assert!(result.zone_element_perc["z"]["Fe"].is_nan());

    let all = result.zone_elements_sorted("z");
    assert_eq!(all.len(), 3);
    let finite: Vec<&str> = all
        .iter()
        .filter(|(_, p)| !p.is_nan())
        .map(|(s, _)| s.as_str())
        .collect();
    assert_eq!(finite, ["Si", "C"]);
    assert_eq!(result.detected_elements().len(), 3);
}

#[test]
fn test_element_zone_info_ranking() {
    let materials = vec![material("fe30", &[("Fe", 30.0)]), material("fe70", &[("Fe", 70.0)])];
    let zones = vec![zone("small", 1.0, &[("fe30", 1.0)]), zone("large", 1.0, &[("fe70", 1.0)])];
    let result = compute_scene_compositions(&zones, &materials);

    let info = element_zone_info("Fe", &zones, &result);

    assert_relative_eq!(info.total_elem, 100.0);
    assert_eq!(info.zone_rows.len(), 2);
    assert_eq!(info.zone_rows[0].zone.id, "large");
    assert_relative_eq!(info.zone_rows[0].contribution_percent, 70.0, epsilon = 1e-9);
    assert_eq!(info.zone_rows[1].zone.id, "small");
    assert_relative_eq!(info.zone_rows[1].contribution_percent, 30.0, epsilon = 1e-9);
    // Fe is the only element in each zone
    assert_relative_eq!(info.zone_rows[0].within_zone_percent, 100.0);
}

#[test]
fn test_element_zone_info_omits_zero_zones() {
    let materials = vec![material("fe", &[("Fe", 1.0)]), material("si", &[("Si", 1.0)])];
    let zones = vec![
        zone("iron", 0.5, &[("fe", 0.5), ("si", 0.5)]),
        zone("sand", 0.5, &[("si", 1.0)]),
    ];
    let result = compute_scene_compositions(&zones, &materials);

    let info = element_zone_info("Fe", &zones, &result);

    assert_eq!(info.zone_rows.len(), 1);
    assert_eq!(info.zone_rows[0].zone.id, "iron");
    assert_relative_eq!(info.zone_rows[0].within_zone_percent, 50.0, epsilon = 1e-9);
    assert_relative_eq!(info.zone_rows[0].contribution_percent, 100.0, epsilon = 1e-9);
}

#[test]
fn test_element_zone_info_absent_element() {
    let config = crate::SceneConfig::sample();
    let result = config.compositions();

    let info = element_zone_info("Au", &config.zones, &result);

    assert_eq!(info.total_elem, 0.0);
    assert!(info.zone_rows.is_empty());
}

#[test]
fn test_result_lookups_default_to_zero() {
    let result = fixed_result();
    assert_eq!(result.zone_percentage("z", "Fe"), 60.0);
    assert_eq!(result.zone_percentage("z", "Au"), 0.0);
    assert_eq!(result.zone_percentage("nowhere", "Fe"), 0.0);
    assert_eq!(result.scene_percentage("Fe"), 0.0);
    assert_eq!(result.zone_total("nowhere"), 0.0);
}

#[test]
fn test_zone_elements_sorted_returns_everything() {
    let result = fixed_result();
    let all = result.zone_elements_sorted("z");
    let symbols: Vec<&str> = all.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(symbols, ["Fe", "Si", "Na"]);
}

#[test]
fn test_detected_elements_skip_zero_totals() {
    let materials = vec![material("m", &[("Fe", 0.7), ("Si", 0.3), ("Au", 0.0)])];
    let zones = vec![zone("z", 1.0, &[("m", 1.0)])];
    let result = compute_scene_compositions(&zones, &materials);

    assert_eq!(result.detected_elements(), ["Fe", "Si"]);
}

#[test]
fn test_result_serializes_camel_case() {
    let result = crate::SceneConfig::sample().compositions();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["sceneElementTotals"].is_object());
    assert!(json["sceneElementPerc"]["C"].is_number());
    assert!(json["zoneElementTotals"]["zone1"].is_object());
    assert!(json["zoneElementPerc"]["zone4"]["Na"].is_number());
}
