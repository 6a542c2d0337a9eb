use thiserror::Error;

/// Reason a catalog item was skipped
///
/// Item errors never abort parsing; they are logged and the item is dropped.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Malformed item: {0}")]
    Structure(#[from] serde_json::Error),

    #[error("Software name {0:?} is invalid")]
    InvalidName(String),

    #[error("Field \"link\" is an empty string")]
    EmptyLink,

    #[error("Field \"versions\" is empty")]
    NoVersions,

    #[error("Version #{index} is malformed: {source}")]
    MalformedVersion {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Version #{index} has invalid revision {revision:?}")]
    InvalidRevision { index: usize, revision: String },

    #[error("Version #{index} has invalid severity {severity}")]
    InvalidSeverity { index: usize, severity: u64 },

    #[error("Not enough memory to store the item")]
    OutOfMemory,
}
