// crates/usecase/src/dto.rs
use announcement_id_domain::{FIELD_NAME, MissingFieldPolicy, Rewrite, RewriteOutcome};
use announcement_id_ports::WriteMode;
use announcement_id_shared_kernel::{ReleaseVersion, TargetPath};
use serde::Serialize;

/// Everything the update needs to know, already validated.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub target: TargetPath,
    pub version: ReleaseVersion,
    pub policy: MissingFieldPolicy,
    pub write_mode: WriteMode,
    pub dry_run: bool,
}

impl UpdateRequest {
    pub fn new(target: TargetPath, version: ReleaseVersion) -> Self {
        Self {
            target,
            version,
            policy: MissingFieldPolicy::default(),
            write_mode: WriteMode::default(),
            dry_run: false,
        }
    }
}

/// Outcome of a single run, suitable for printing or serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub field: &'static str,
    pub version: ReleaseVersion,
    pub target: TargetPath,
    pub replacements: usize,
    pub previous: Vec<String>,
    pub outcome: RewriteOutcome,
    pub written: bool,
}

impl UpdateReport {
    pub(crate) fn from_rewrite(target: &TargetPath, rewrite: &Rewrite, written: bool) -> Self {
        Self {
            field: FIELD_NAME,
            version: rewrite.version().clone(),
            target: target.clone(),
            replacements: rewrite.replacements(),
            previous: rewrite.previous().to_vec(),
            outcome: rewrite.outcome(),
            written,
        }
    }
}
