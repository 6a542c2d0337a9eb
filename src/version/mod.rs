//! Version model shared by the catalog parser and the resolvers
//!
//! - [`model`]: `Version`, `Revision` and their ordering
//! - [`name`]: bounded software names

pub mod model;
pub mod name;

pub use model::{Revision, Version, is_revision_valid};
pub use name::{SoftwareName, is_name_valid};
