use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data_dir: &Path, path: &str) -> Result<(), String> {
    let result = super::load_map(data_dir, path)?;
    let map = &result.map;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Position", "Auto-walk", ""]);

    for sp in map.spawn_points() {
        let current = if map.tux.spawn_point.as_deref() == Some(sp.name.as_str()) {
            "tux"
        } else {
            ""
        };
        let name = if sp.name.is_empty() { "-" } else { sp.name.as_str() };
        table.add_row(vec![
            name.to_string(),
            sp.pos.to_string(),
            sp.auto_dir.to_string(),
            current.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} spawn points", map.spawn_points().len());

    Ok(())
}
