//! Built-in element catalog for the sample scene

use std::collections::BTreeMap;

use crate::band::Band;
use crate::element::{Element, ElementTable};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hints(items: [(Band, &str); 4]) -> BTreeMap<Band, String> {
    items
        .into_iter()
        .map(|(band, text)| (band, text.to_string()))
        .collect()
}

impl Element {
    /// Iron: red soils, iron ore, rust
    pub fn iron() -> Self {
        Self {
            symbol: "Fe".to_string(),
            atomic_number: 26,
            name_th: "เหล็ก".to_string(),
            name_en: "Iron".to_string(),
            groups: strings(&["Transition metal"]),
            bands: vec![Band::Vis, Band::Nir, Band::Swir],
            spectral_hints: hints([
                (Band::Vis, "iron oxides ทำให้ดิน/หินสีแดง-น้ำตาลเข้ม สะท้อนในแถบแดงสูงเมื่อเทียบกับน้ำเงิน/เขียว"),
                (Band::Nir, "ดินที่มี Fe สูงมัก reflectance ต่ำใน NIR เมื่อเทียบกับ quartz-rich sand/rock"),
                (Band::Swir, "ร่วมกับแร่ดิน/ซิลิเกต ใช้ band ratio แยก lateritic soil / iron ore"),
                (Band::Tir, "ใช้ thermal emissivity แยกชนิดแร่เหล็กกับหินรอบข้าง"),
            ]),
            typical_materials: strings(&["Hematite (Fe₂O₃)", "Goethite (FeO(OH))", "Laterite / red soil"]),
            typical_objects: strings(&["ดินแดงในเขตร้อน", "เหมืองแร่เหล็ก", "สนิมเหล็กบนโครงสร้าง/หลังคา"]),
        }
    }

    /// Silicon: quartz sand, glass, concrete
    pub fn silicon() -> Self {
        Self {
            symbol: "Si".to_string(),
            atomic_number: 14,
            name_th: "ซิลิคอน".to_string(),
            name_en: "Silicon".to_string(),
            groups: strings(&["Metalloid"]),
            bands: vec![Band::Swir, Band::Tir],
            spectral_hints: hints([
                (Band::Vis, "อยู่ใน quartz / sand / glass สีออกขาว-อ่อน"),
                (Band::Nir, "quartz-rich sand/rock ค่อนข้างสว่าง"),
                (Band::Swir, "quartz มี absorption แถว ~2.2µm ใช้แยก quartzite / sandstone"),
                (Band::Tir, "ซิลิกาเด่นใน thermal emissivity ของหิน felsic"),
            ]),
            typical_materials: strings(&["Quartz (SiO₂)", "Silica sand", "Glass, concrete"]),
            typical_objects: strings(&[
                "ชายหาดทรายขาว",
                "ทะเลทราย",
                "พื้นที่เมืองที่เต็มไปด้วย concrete / glass",
            ]),
        }
    }

    /// Carbon: vegetation, asphalt, hydrocarbons
    pub fn carbon() -> Self {
        Self {
            symbol: "C".to_string(),
            atomic_number: 6,
            name_th: "คาร์บอน".to_string(),
            name_en: "Carbon".to_string(),
            groups: strings(&["Non-metal"]),
            bands: vec![Band::Vis, Band::Nir, Band::Swir],
            spectral_hints: hints([
                (Band::Vis, "organic matter, asphalt, soot มักมืดมากใน VIS"),
                (Band::Nir, "vegetation สะท้อน NIR สูง (เพราะ chlorophyll + leaf structure)"),
                (Band::Swir, "hydrocarbons มี absorption บางช่วงใน SWIR"),
                (Band::Tir, "ใช้ดู organic coatings / soot บางเคส"),
            ]),
            typical_materials: strings(&["Organic matter", "Hydrocarbons (oil, fuel)", "Asphalt"]),
            typical_objects: strings(&["พื้นที่เกษตร/ป่า (พืช)", "ถนน asphalt", "oil spill บนผิวน้ำ"]),
        }
    }

    /// Calcium: limestone, carbonates, cement
    pub fn calcium() -> Self {
        Self {
            symbol: "Ca".to_string(),
            atomic_number: 20,
            name_th: "แคลเซียม".to_string(),
            name_en: "Calcium".to_string(),
            groups: strings(&["Alkaline earth metal"]),
            bands: vec![Band::Swir, Band::Tir],
            spectral_hints: hints([
                (Band::Vis, "หินปูน/คาร์บอเนตมักค่อนข้างสว่าง"),
                (Band::Nir, "bright tone ใน NIR"),
                (Band::Swir, "คาร์บอเนตมี absorption ชัดใน SWIR บางช่วง"),
                (Band::Tir, "เด่นใน thermal signatures ของ limestone/dolomite"),
            ]),
            typical_materials: strings(&["Calcite (CaCO₃)", "Limestone", "Cement"]),
            typical_objects: strings(&["ภูเขาหินปูน", "เหมืองหินปูน", "โรงปูนซีเมนต์"]),
        }
    }

    /// Sodium: halite, evaporites
    pub fn sodium() -> Self {
        Self {
            symbol: "Na".to_string(),
            atomic_number: 11,
            name_th: "โซเดียม".to_string(),
            name_en: "Sodium".to_string(),
            groups: strings(&["Alkali metal"]),
            bands: vec![Band::Vis, Band::Nir, Band::Swir],
            spectral_hints: hints([
                (Band::Vis, "เกลือบริสุทธิ์ค่อนข้างขาวสว่าง"),
                (Band::Nir, "salt flats สว่างใน VIS-NIR"),
                (Band::Swir, "บาง salt minerals มี absorption เฉพาะใน SWIR"),
                (Band::Tir, "ใช้ร่วมกับข้อมูลอื่นแยก evaporites"),
            ]),
            typical_materials: strings(&["Halite (NaCl)", "Evaporite salts"]),
            typical_objects: strings(&["salt flats", "บ่อระเหยเกลือ", "salty playa lakes"]),
        }
    }

    /// Chlorine: halite, PVC
    pub fn chlorine() -> Self {
        Self {
            symbol: "Cl".to_string(),
            atomic_number: 17,
            name_th: "คลอรีน".to_string(),
            name_en: "Chlorine".to_string(),
            groups: strings(&["Halogen"]),
            bands: vec![Band::Vis, Band::Nir, Band::Swir],
            spectral_hints: hints([
                (Band::Vis, "อยู่ในเกลือ, PVC ฯลฯ"),
                (Band::Nir, "คล้าย Na ในกรณี halite"),
                (Band::Swir, "ใช้ร่วมกับ Na ในการจำแนกเกลือ"),
                (Band::Tir, "บาง evaporites เด่นใน LWIR"),
            ]),
            typical_materials: strings(&["Halite (NaCl)", "บางชนิดของ PVC / plastics"]),
            typical_objects: strings(&["salt flats", "บ่อเกลือ", "เขตอุตสาหกรรมพลาสติกบางประเภท"]),
        }
    }
}

impl ElementTable {
    /// The six elements referenced by the sample material library
    pub fn sample() -> Self {
        Self::new(vec![
            Element::iron(),
            Element::silicon(),
            Element::carbon(),
            Element::calcium(),
            Element::sodium(),
            Element::chlorine(),
        ])
    }
}
