//! Print the sample scene's element composition as CSV
//!
//! Usage: RUST_LOG=warn cargo run -p scene --example scene_report [config.json]
//!
//! Output: one row per (zone, element), followed by scene-wide rows with
//! zone id "scene". Configuration warnings go to stderr.

use std::fs::File;
use std::process::ExitCode;

use scene::{element_zone_info, SceneConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match File::open(&path)
            .map_err(|e| e.to_string())
            .and_then(|file| SceneConfig::from_reader(file).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::sample(),
    };

    let warnings = config.validate();
    let result = config.compositions();

    println!("zone_id,symbol,total,percent");
    for zone in &config.zones {
        for (symbol, percent) in result.zone_elements_sorted(&zone.id) {
            println!(
                "{},{},{:.6},{:.2}",
                zone.id,
                symbol,
                result.zone_element_totals[&zone.id][&symbol],
                percent
            );
        }
    }
    for symbol in result.detected_elements() {
        println!(
            "scene,{},{:.6},{:.2}",
            symbol,
            result.scene_element_totals[&symbol],
            result.scene_percentage(&symbol)
        );
    }

    for symbol in result.detected_elements() {
        let info = element_zone_info(&symbol, &config.zones, &result);
        let rows: Vec<String> = info
            .zone_rows
            .iter()
            .map(|row| format!("{} {:.1}%", row.zone.id, row.contribution_percent))
            .collect();
        eprintln!("{}: {}", symbol, rows.join(", "));
    }

    eprintln!(
        "{} zones, {} materials, {} warnings",
        config.zones.len(),
        config.materials.len(),
        warnings.len()
    );
    ExitCode::SUCCESS
}
