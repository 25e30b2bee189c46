// crates/shared-kernel/src/value_objects/release_version.rs
use std::{fmt, ops::Deref};

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Opaque release identifier written into the announcement field.
///
/// The value is not parsed as a semantic version. Any text goes except a
/// double quote, which would terminate the string literal early.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.contains('"') {
            return Err(DomainError::InvalidVersion {
                value,
                reason: "must not contain a double quote".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReleaseVersion {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ReleaseVersion {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::parse(value)
    }
}

impl Deref for ReleaseVersion {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ReleaseVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
