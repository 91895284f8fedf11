//! Error types for the banner check core.
//!
//! Transport failures are deliberately NOT errors here: the fetch adapter
//! normalizes them to absence (`None`/`false`) and each rule turns absence
//! into a failing verdict. These variants cover misuse of the API surface,
//! not compliance findings.

/// Banner check errors.
#[derive(Debug, thiserror::Error)]
pub enum BannerCheckError {
    /// Asset descriptor is missing a required URL.
    #[error("invalid asset '{name}': missing {field}")]
    InvalidAsset { name: String, field: &'static str },

    /// HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Report serialization failed.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for banner check operations.
pub type Result<T> = std::result::Result<T, BannerCheckError>;
