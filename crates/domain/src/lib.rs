#![allow(clippy::multiple_crate_versions)]

pub mod announcement;
pub mod policy;

pub use announcement::{FIELD_NAME, Rewrite, RewriteOutcome, rewrite};
pub use policy::MissingFieldPolicy;
