//! Catalog layer
//! - types.rs: Catalog, SoftwareEntry, ReleasedVersion, Severity
//! - parser.rs: catalog document parser
//! - error.rs: reasons for skipping catalog items

pub mod error;
pub mod parser;
pub mod types;

pub use error::ItemError;
pub use parser::{ParseOutcome, parse};
pub use types::{Catalog, ReleasedVersion, Severity, SoftwareEntry};
