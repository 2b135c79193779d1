use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(data_dir: &Path, path: &str) -> Result<(), String> {
    let result = super::load_map(data_dir, path)?;
    let map = &result.map;
    let meta = &map.meta;

    let name = if meta.name.is_empty() {
        "(unnamed)"
    } else {
        meta.name.as_str()
    };
    println!("  {} [{}]", name.bold(), meta.map_filename.dimmed());
    println!();

    if let Some(tileset) = &meta.tileset {
        println!("  tileset:       {}", tileset.name);
    }
    if !meta.music.is_empty() {
        println!("  music:         {}", meta.music);
    }
    if !meta.init_script.is_empty() {
        println!("  init script:   {} line(s)", meta.init_script.lines().count());
    }
    println!("  ambient light: {}", meta.ambient_light);
    println!("  tux:           {} facing {}", map.tux.pos, map.tux.direction);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Kind", "Position", "Label"]);

    for (id, object) in map.objects() {
        let pos = object.pos().map_or_else(|| "-".to_string(), |p| p.to_string());
        let mut label = object.label();
        if label.chars().count() > 60 {
            label = format!("{}...", label.chars().take(57).collect::<String>());
        }
        table.add_row(vec![id.to_string(), object.kind().to_string(), pos, label]);
    }

    println!("{table}");
    println!();

    let counts: Vec<String> = map
        .object_counts_by_kind()
        .iter()
        .map(|(kind, n)| format!("{n} {kind}"))
        .collect();
    println!("  {} objects ({})", map.object_count(), counts.join(", "));
    println!("  {} spawn points", map.spawn_points().len());

    Ok(())
}
