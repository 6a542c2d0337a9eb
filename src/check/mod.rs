//! Update check layer
//!
//! # Modules
//!
//! - [`query`]: validated caller queries (`NAME@VERSION`)
//! - [`resolver`]: update status and newest version of a software
//! - [`link`]: distribution link lookup
//! - [`checker`]: `check_one` / `check_many` and their fetching variants

pub mod checker;
pub mod link;
pub mod query;
pub mod resolver;

pub use checker::{
    CheckResult, Checked, check, check_many, check_many_from, check_one, evaluate,
};
pub use link::resolve_link;
pub use query::Query;
pub use resolver::{UpdateStatus, resolve};
