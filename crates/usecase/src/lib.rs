//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`update`]: read the target, rewrite the announcement field, write it back
//! - [`dto`]: request and report types at the use case boundary
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod update;

pub use dto::{UpdateReport, UpdateRequest};
pub use update::UpdateAnnouncementId;
