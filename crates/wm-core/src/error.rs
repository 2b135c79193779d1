use crate::object::ObjectId;

/// Alias for `Result<T, WmError>`.
pub type WmResult<T> = Result<T, WmError>;

/// Errors that can occur when manipulating a world map.
#[derive(Debug, thiserror::Error)]
pub enum WmError {
    /// No spawn point with the requested name exists.
    #[error("spawnpoint '{0}' not found")]
    SpawnPointNotFound(String),

    /// The requested object ID is not (or no longer) part of the map.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
}
