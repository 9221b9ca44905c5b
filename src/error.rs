use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the selection controller
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown page: {0}")]
    InvalidPage(String),
}

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate phone id: {0}")]
    DuplicateId(String),

    #[error("phone {id}: original price {original} is below current price {current}")]
    OriginalBelowCurrent { id: String, original: u32, current: u32 },

    #[error("phone {id}: original price must be greater than zero")]
    ZeroOriginalPrice { id: String },

    #[error("phone {id}: no colors listed")]
    NoColors { id: String },

    #[error("phone {id}: rating {rating} is outside 0-5")]
    RatingOutOfRange { id: String, rating: f32 },
}

/// Errors raised while reading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}
