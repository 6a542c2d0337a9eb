//! Bounded software names

use std::fmt;

use crate::config::NAME_MAX_LEN;
use crate::error::CheckError;

/// Check whether a software name of `len` bytes fits the name bounds
pub fn is_name_valid(len: usize) -> bool {
    len > 0 && len <= NAME_MAX_LEN
}

/// Name of a software, between 1 and [`NAME_MAX_LEN`] bytes long
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoftwareName(String);

impl SoftwareName {
    pub fn new(name: &str) -> Result<Self, CheckError> {
        if !is_name_valid(name.len()) {
            return Err(CheckError::InvalidArgument(format!(
                "software name must be 1 to {} bytes long, got {}",
                NAME_MAX_LEN,
                name.len()
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive (ASCII) comparison against another name
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for SoftwareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
