/// Error types for the external collaborators.
///
/// Everything here is caught at the message boundary and turned into a
/// user-visible status line; none of these may take down the page.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// No URL/key configured; the app is in offline mode
    #[error("backend is not configured")]
    NotConfigured,
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Image uploads fail separately from generic writes: a failed upload must
/// block the dependent project insert, and the operator needs to know which
/// of the two collaborators misbehaved.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image host is not configured")]
    NotConfigured,
    #[error("could not read the selected file: {0}")]
    File(String),
    #[error("image upload failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("image host returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("image host response had no public URL")]
    MissingUrl,
}
