// src/error.rs
//! Error taxonomy for the scrape pipeline.
//!
//! Only conditions that stop a unit of work are errors. Filtered species,
//! missing images and duplicate species are ordinary outcomes
//! (see `store::MergeOutcome` and `images::fetch::ImageOutcome`).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Expected page structure was absent (e.g. no "Name" block).
    #[error("page structure missing: {what}")]
    SchemaMiss { what: String },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image: {0}")]
    Image(#[from] image::ImageError),

    /// Text could not be represented in the dataset file encoding.
    #[error("unmappable characters while encoding {}", path.display())]
    Encoding { path: PathBuf },
}

impl ScrapeError {
    pub fn schema_miss(what: impl Into<String>) -> Self {
        ScrapeError::SchemaMiss { what: what.into() }
    }

    pub fn is_schema_miss(&self) -> bool {
        matches!(self, ScrapeError::SchemaMiss { .. })
    }
}
