use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data_dir: &Path, path: &str) -> Result<(), String> {
    let result = super::load_map(data_dir, path)?;
    let levels = result.map.levels();

    if levels.is_empty() {
        println!("  No levels found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Title", "Position", "Target time", "Auto-play"]);

    for level in &levels {
        let target_time = if level.target_time > 0.0 {
            format!("{}s", level.target_time)
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            level.level_path(),
            level.title.clone(),
            level.pos.to_string(),
            target_time,
            if level.auto_play { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} levels", levels.len());

    Ok(())
}
