pub mod check;
pub mod export;
pub mod levels;
pub mod show;
pub mod spawns;

use std::path::Path;

use wm_loader::{DiskFs, FileSystem, LoadResult, WorldMapLoader};
use wm_reader::diagnostics::{Diagnostic, render_diagnostics, summarize};

/// Load a worldmap from `data_dir` and print its diagnostics.
fn load_map(data_dir: &Path, path: &str) -> Result<LoadResult, String> {
    let mut loader = WorldMapLoader::new(DiskFs::new(data_dir));
    let source = loader.filesystem().read_to_string(path).unwrap_or_default();

    match loader.load(path) {
        Ok(result) => {
            print_diagnostics(&source, path, &result.diagnostics);
            Ok(result)
        }
        Err(e) => {
            if let Some(span) = e.source.span() {
                let diag = Diagnostic::error(span, e.source.to_string());
                print_diagnostics(&source, path, &[diag]);
            }
            Err(e.to_string())
        }
    }
}

/// Print diagnostics to stderr using ariadne.
fn print_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprint!("{}", render_diagnostics(source, filename, diagnostics));
    eprintln!("  {}", summarize(diagnostics));
}
