use wm_core::LevelTile;
use wm_reader::{Document, Span};

use crate::error::LoadFailure;
use crate::session::LoadSession;

impl LoadSession<'_> {
    /// Fill in a level reference's title and target time from its level file.
    ///
    /// Never fails: every problem becomes a warning at `span` and leaves the
    /// defaults in place.
    pub fn prefetch_level_info(&mut self, level: &mut LevelTile, span: Span) {
        level.reset_metadata(&self.config.default_level_title);
        let path = level.level_path();

        if !self.fs.exists(&path) {
            self.warnings
                .warn(span, format!("Level file '{path}' does not exist. Skipping."));
            return;
        }
        if self.fs.is_directory(&path) {
            self.warnings
                .warn(span, format!("Level file '{path}' is a directory. Skipping."));
            return;
        }

        self.translations.register_file(&path);
        if let Err(e) = self.read_level_info(level, &path) {
            self.warnings
                .warn(span, format!("Problem when reading level information: {e}"));
        }
    }

    fn read_level_info(&self, level: &mut LevelTile, path: &str) -> Result<(), LoadFailure> {
        let source = self.fs.read_to_string(path)?;
        let doc = Document::parse(&source)?;
        if doc.root_name() != self.config.root_tag {
            tracing::debug!(path, root = doc.root_name(), "not a level file, keeping defaults");
            return Ok(());
        }

        let info = doc.root_mapping()?;
        if let Some(title) = info.get::<String>("name")? {
            level.title = title;
        }
        if let Some(target_time) = info.get::<f32>("target-time")? {
            level.target_time = target_time;
        }
        tracing::debug!(path, title = %level.title, "read level information");
        Ok(())
    }
}
