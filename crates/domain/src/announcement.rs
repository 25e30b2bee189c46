// crates/domain/src/announcement.rs
//! Pure rewrite of the `latestAnnouncementId` assignment.
//!
//! The field is located textually: `private latestAnnouncementId = "<value>"`,
//! where `<value>` runs up to the next double quote and must be non-empty.
//! Every occurrence is replaced and the rest of the input is copied as is.

use std::sync::OnceLock;

use announcement_id_shared_kernel::ReleaseVersion;
use regex::Regex;
use serde::Serialize;

/// Name of the private member that carries the announcement id.
pub const FIELD_NAME: &str = "latestAnnouncementId";

fn field_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"private latestAnnouncementId = \x22([^\x22]+)\x22").expect("field pattern is a valid regex")
    })
}

fn assignment(version: &ReleaseVersion) -> String {
    format!("private {FIELD_NAME} = \"{version}\"")
}

/// What a rewrite did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewriteOutcome {
    /// At least one assignment now carries a different value.
    Updated,
    /// Assignments were found and already held the version.
    AlreadyCurrent,
    /// The field does not occur; content is untouched.
    NoMatch,
}

/// Result of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    content: String,
    previous: Vec<String>,
    version: ReleaseVersion,
}

impl Rewrite {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Values the field held before the rewrite, in order of appearance.
    pub fn previous(&self) -> &[String] {
        &self.previous
    }

    pub fn replacements(&self) -> usize {
        self.previous.len()
    }

    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    pub fn outcome(&self) -> RewriteOutcome {
        if self.previous.is_empty() {
            RewriteOutcome::NoMatch
        } else if self.previous.iter().all(|v| v == self.version.as_str()) {
            RewriteOutcome::AlreadyCurrent
        } else {
            RewriteOutcome::Updated
        }
    }
}

/// Replace the value of every `latestAnnouncementId` assignment in `content` with `version`.
///
/// The version is inserted literally; `$` and `\` carry no meaning here.
pub fn rewrite(content: &str, version: &ReleaseVersion) -> Rewrite {
    let replacement = assignment(version);
    let mut out = String::with_capacity(content.len() + version.len());
    let mut previous = Vec::new();
    let mut last = 0;

    for caps in field_pattern().captures_iter(content) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&content[last..whole.start()]);
        out.push_str(&replacement);
        previous.push(value.as_str().to_owned());
        last = whole.end();
    }
    out.push_str(&content[last..]);

    Rewrite { content: out, previous, version: version.clone() }
}
