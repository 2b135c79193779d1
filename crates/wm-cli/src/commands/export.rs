use std::path::Path;

use serde_json::json;
use wm_core::WorldMap;

pub fn run(data_dir: &Path, path: &str, output: Option<&Path>) -> Result<(), String> {
    let result = super::load_map(data_dir, path)?;
    let content = export_json(&result.map)?;

    if let Some(out) = output {
        std::fs::write(out, &content)
            .map_err(|e| format!("cannot write to {}: {e}", out.display()))?;
        println!("  Exported to {}", out.display());
    } else {
        println!("{content}");
    }

    Ok(())
}

fn export_json(map: &WorldMap) -> Result<String, String> {
    let objects: Vec<_> = map
        .objects()
        .map(|(id, object)| json!({ "id": id.0, "object": object }))
        .collect();

    let export = json!({
        "worldmap": map.meta,
        "tux": map.tux,
        "spawn_points": map.spawn_points(),
        "objects": objects,
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}
