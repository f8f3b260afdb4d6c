//! Sample material library and scene zones
//!
//! Hand-authored data for the demo scene: a forest edge grading into bare
//! ground and a salt pan. Zone area fractions sum to 1.

use indexmap::IndexMap;

use crate::material::Material;
use crate::zone::Zone;

fn mix(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
    entries.iter().map(|(key, value)| (key.to_string(), *value)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Material {
    /// Healthy green vegetation (all carbon)
    pub fn healthy_vegetation() -> Self {
        Self {
            id: "healthy_veg".to_string(),
            label: "Healthy green vegetation".to_string(),
            elements: mix(&[("C", 1.0)]),
            objects: strings(&["ป่าเขียวสมบูรณ์", "สวนเกษตรเขียว"]),
        }
    }

    /// Stressed or dry vegetation with exposed iron-bearing soil
    pub fn stressed_vegetation() -> Self {
        Self {
            id: "stressed_veg".to_string(),
            label: "Stressed / dry vegetation".to_string(),
            elements: mix(&[("C", 0.7), ("Fe", 0.3)]),
            objects: strings(&["ป่าเสื่อมโทรม", "พื้นที่ไฟไหม้เก่า"]),
        }
    }

    /// Iron-rich laterite soil
    pub fn iron_soil() -> Self {
        Self {
            id: "iron_soil".to_string(),
            label: "Iron-rich soil / laterite".to_string(),
            elements: mix(&[("Fe", 0.8), ("Si", 0.2)]),
            objects: strings(&["ดินแดง", "เหมืองเปิดหน้า", "ไหล่เขาดินแดง"]),
        }
    }

    /// Quartz sand and bright bare ground
    pub fn quartz_sand() -> Self {
        Self {
            id: "quartz_sand".to_string(),
            label: "Quartz sand / bright bare ground".to_string(),
            elements: mix(&[("Si", 1.0)]),
            objects: strings(&["ชายหาดทราย", "ลานหินทราย", "ถนนลูกรังสีอ่อน"]),
        }
    }

    /// Surface salt crust (halite)
    pub fn salt_crust() -> Self {
        Self {
            id: "salt_crust".to_string(),
            label: "Surface salt / evaporite".to_string(),
            elements: mix(&[("Na", 0.5), ("Cl", 0.5)]),
            objects: strings(&["salt flats", "บ่อระเหยเกลือ"]),
        }
    }

    /// The full sample material library
    pub fn sample_library() -> Vec<Self> {
        vec![
            Self::healthy_vegetation(),
            Self::stressed_vegetation(),
            Self::iron_soil(),
            Self::quartz_sand(),
            Self::salt_crust(),
        ]
    }
}

impl Zone {
    /// Zone 1: healthy forest (40% of the scene)
    pub fn healthy_forest() -> Self {
        Self {
            id: "zone1".to_string(),
            label: "Zone 1 – Healthy forest".to_string(),
            color: "#22c55e".to_string(),
            area_fraction: 0.4,
            material_mix: mix(&[("healthy_veg", 0.8), ("iron_soil", 0.2)]),
        }
    }

    /// Zone 2: damaged or dry forest (25%)
    pub fn damaged_forest() -> Self {
        Self {
            id: "zone2".to_string(),
            label: "Zone 2 – Damaged / dry forest".to_string(),
            color: "#f97316".to_string(),
            area_fraction: 0.25,
            material_mix: mix(&[("stressed_veg", 0.6), ("iron_soil", 0.3), ("quartz_sand", 0.1)]),
        }
    }

    /// Zone 3: bright bare ground (20%)
    pub fn bare_ground() -> Self {
        Self {
            id: "zone3".to_string(),
            label: "Zone 3 – Bright bare ground".to_string(),
            color: "#eab308".to_string(),
            area_fraction: 0.2,
            material_mix: mix(&[("quartz_sand", 0.7), ("iron_soil", 0.3)]),
        }
    }

    /// Zone 4: salt / disturbed area (15%)
    pub fn salt_area() -> Self {
        Self {
            id: "zone4".to_string(),
            label: "Zone 4 – Salt / disturbed area".to_string(),
            color: "#38bdf8".to_string(),
            area_fraction: 0.15,
            material_mix: mix(&[("salt_crust", 0.7), ("quartz_sand", 0.3)]),
        }
    }

    /// All four sample zones in map order
    pub fn sample_zones() -> Vec<Self> {
        vec![
            Self::healthy_forest(),
            Self::damaged_forest(),
            Self::bare_ground(),
            Self::salt_area(),
        ]
    }
}
