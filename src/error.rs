use thiserror::Error;

/// Fatal errors: the whole check operation failed
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Not enough memory to complete operation")]
    OutOfMemory,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl CheckError {
    /// Whether the error originates from the catalog transport
    pub fn is_network_error(&self) -> bool {
        matches!(self, CheckError::Fetch(_))
    }
}

/// Errors reported by a catalog source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unable to set up HTTP client: {0}")]
    Setup(String),

    #[error("Failed to connect to remote host: {0}")]
    ConnectionFailed(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Error during data transfer: {0}")]
    Transfer(String),

    #[error("Connection timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Http(status.as_u16())
        } else if e.is_connect() {
            FetchError::ConnectionFailed(e.to_string())
        } else if e.is_body() || e.is_decode() {
            FetchError::Transfer(e.to_string())
        } else if e.is_builder() {
            FetchError::Setup(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Degraded-success conditions reported alongside a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// The catalog was only partially processed
    ListIncomplete,
    /// The catalog does not list a requested software
    NotFound,
}

impl Warning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Warning::ListIncomplete => "list incomplete",
            Warning::NotFound => "not found",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
