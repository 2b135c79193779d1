use wm_core::{ObjectKind, WmError};
use wm_reader::{DocError, Span};

/// Alias for `Result<T, BuildError>`.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors from the virtual filesystem.
#[derive(Debug, thiserror::Error)]
pub enum VfsError {
    /// No file or directory at the path.
    #[error("file '{0}' does not exist")]
    NotFound(String),

    /// The path names a directory, not a file.
    #[error("'{0}' is a directory")]
    IsDirectory(String),

    /// The path tries to leave the filesystem root.
    #[error("path '{0}' escapes the data directory")]
    OutsideRoot(String),

    /// Reading failed.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// The path being read.
        path: String,
        /// The underlying error.
        source: std::io::Error,
    },
}

/// Errors raised by an entity builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A field is missing or has the wrong type.
    #[error(transparent)]
    Document(#[from] DocError),

    /// Fields are present but inconsistent.
    #[error("invalid {kind}: {message}")]
    Invalid {
        /// The kind of object being built.
        kind: ObjectKind,
        /// What is wrong.
        message: String,
        /// Location of the entry.
        span: Span,
    },
}

impl BuildError {
    /// Source location of the problem.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Document(e) => e.span(),
            Self::Invalid { span, .. } => Some(span.clone()),
        }
    }
}

/// Why a map failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadFailure {
    /// The map document could not be read.
    #[error(transparent)]
    Read(#[from] VfsError),

    /// The map document is malformed, or a value has the wrong type.
    #[error(transparent)]
    Document(#[from] DocError),

    /// The root object has the wrong name.
    #[error("file isn't a {expected} file")]
    NotALevel {
        /// Root name the loader expects.
        expected: String,
        /// Location of the root object.
        span: Span,
    },

    /// The root mapping has no `sector` entry.
    #[error("no sector specified in worldmap file")]
    NoSector,

    /// No tile layer is marked solid.
    #[error("no solid tilemap specified")]
    NoSolidTilemap,

    /// A sector entry could not be built.
    #[error("cannot build '{key}': {source}")]
    Build {
        /// Key of the sector entry.
        key: String,
        /// The builder's error.
        source: BuildError,
    },

    /// The initial avatar placement failed.
    #[error(transparent)]
    Placement(#[from] WmError),
}

impl LoadFailure {
    /// Location in the map document, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Document(e) => e.span(),
            Self::NotALevel { span, .. } => Some(span.clone()),
            Self::Build { source, .. } => source.span(),
            Self::Read(_) | Self::NoSector | Self::NoSolidTilemap | Self::Placement(_) => None,
        }
    }
}

/// A failed load, naming the map file.
#[derive(Debug, thiserror::Error)]
#[error("Problem when parsing worldmap '{path}': {source}")]
pub struct LoadError {
    /// Path of the map document.
    pub path: String,
    /// The underlying failure.
    pub source: Box<LoadFailure>,
}
