// crates/shared-kernel/src/value_objects/mod.rs
pub mod release_version;
pub mod target_path;

pub use release_version::ReleaseVersion;
pub use target_path::TargetPath;
