// crates/domain/src/policy.rs
use announcement_id_shared_kernel::{DomainError, DomainResult, TargetPath};
use serde::Serialize;

use crate::announcement::{FIELD_NAME, Rewrite, RewriteOutcome};

/// How to treat a target file that has no announcement field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Rewrite the file unchanged and report success.
    #[default]
    Ignore,
    /// Refuse to write and report `FieldNotFound`.
    Fail,
}

impl MissingFieldPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Fail } else { Self::Ignore }
    }

    pub fn check(self, rewrite: &Rewrite, target: &TargetPath) -> DomainResult<()> {
        match (self, rewrite.outcome()) {
            (Self::Fail, RewriteOutcome::NoMatch) => Err(DomainError::FieldNotFound {
                field: FIELD_NAME.to_string(),
                path: target.as_path().to_path_buf(),
            }),
            _ => Ok(()),
        }
    }
}
