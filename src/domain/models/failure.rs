use thiserror::Error;

/// What went wrong with a remote call, kept for logs only. The UI never shows
/// these details, it only ever shows a [`Failure`].
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("request rejected with error code {code}: {text}")]
    Rejected { code: i64, text: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> ApiError {
        return ApiError::Malformed(err.to_string());
    }
}

/// User-facing failure of one of the four operations. Each carries a fixed
/// message.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    #[error("authorization error, check username and password")]
    Auth,

    #[error("failed to load records")]
    Fetch,

    #[error("failed to save record")]
    Save,

    #[error("failed to delete record")]
    Delete,
}
