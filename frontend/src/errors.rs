use thiserror::Error;

/// Why a send did not produce a reply. Only ever logged; the user sees the
/// configured error text instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    /// Builds a `Status` error, falling back to `HTTP <status>` when the
    /// server gave no detail.
    pub fn status(status: u16, detail: Option<String>) -> Self {
        let detail = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        ChatError::Status { status, detail }
    }
}
