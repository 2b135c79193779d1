use std::path::Path;

pub fn run(data_dir: &Path, path: &str) -> Result<(), String> {
    let result = super::load_map(data_dir, path)?;
    let map = &result.map;

    println!("  All checks passed for '{}'.", map.meta.name);
    println!(
        "  {} objects, {} spawn points, {} levels",
        map.object_count(),
        map.spawn_points().len(),
        map.levels().len()
    );

    Ok(())
}
