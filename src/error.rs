#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The API answered 401/403. The stored token has already been cleared;
    /// the host shell should navigate to the login page.
    #[error("authentication rejected by the API (status {status})")]
    AuthRejected { status: u16 },
    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error during {operation} (status {status}): {detail}")]
    Api {
        operation: &'static str,
        status: u16,
        detail: String,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}
