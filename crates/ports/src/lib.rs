//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: whole-file text access to the target source file
//!
//! Use cases talk to these traits only, so the rewrite pipeline can run
//! against an in-memory store in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::{SourceStore, WriteMode};
