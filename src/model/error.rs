use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// An error reported by the GitHub API.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// A server reported failure with a human readable title and description.
    #[error("{title}: {description}")]
    Server {
        /// A short title for the failure, derived from the HTTP status.
        title: String,

        /// The failure description, derived from the error body.
        description: String,
    },
}

impl ApiError {
    /// Creates a new `Server` error with the given title and description.
    pub fn server(title: &str, description: &str) -> Self {
        Self::Server {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
