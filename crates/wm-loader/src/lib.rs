//! Turns worldmap documents into populated [`WorldMap`](wm_core::WorldMap)s.
//!
//! [`WorldMapLoader::load`] reads the map through a [`FileSystem`], resolves
//! its tileset, hands the `sector` block to the sector assembler (which calls
//! one [`builder`] per entry and prefetches level metadata), then checks that
//! a solid tile layer exists and places the avatar.
//!
//! Problems come in two tiers. Anything that makes the map unusable is a
//! [`LoadError`]. Everything else is logged with `tracing` and returned as
//! warnings in [`LoadResult::diagnostics`].

/// Entity builders, one per sector entry kind.
pub mod builder;
/// Loader configuration.
pub mod config;
/// Error types for loading.
pub mod error;
/// The top-level load entry point.
pub mod loader;
mod prefetch;
/// Sector entry keys and the sector assembler.
pub mod sector;
mod session;
/// Tileset cache.
pub mod tileset;
/// Translation directory registry.
pub mod translations;
/// Virtual filesystem abstraction.
pub mod vfs;
/// Warning sink.
pub mod warnings;

pub use config::LoaderConfig;
pub use error::{BuildError, BuildResult, LoadError, LoadFailure, VfsError};
pub use loader::{LoadResult, WorldMapLoader};
pub use sector::SectorKey;
pub use tileset::TileManager;
pub use translations::TranslationDirs;
pub use vfs::{DiskFs, FileSystem, MemoryFs};
pub use warnings::Warnings;
