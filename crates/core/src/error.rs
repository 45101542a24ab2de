use std::io;

/// Errors that can occur during architech operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Recipe error: {0}")]
    RecipeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for architech operations
pub type Result<T> = std::result::Result<T, Error>;
