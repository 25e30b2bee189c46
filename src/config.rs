// src/config.rs
use std::ffi::OsString;

use announcement_id_domain::MissingFieldPolicy;
use announcement_id_ports::WriteMode;
use announcement_id_shared_kernel::{ConfigResult, ConfigurationError, DomainError, ReleaseVersion, TargetPath};
use announcement_id_usecase::UpdateRequest;

use crate::cli::{Args, CliOutputFormat};

/// Environment variable carrying the release version.
pub const VERSION_ENV: &str = "VERSION";

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub request: UpdateRequest,
    pub format: CliOutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = ConfigurationError;

    fn try_from(args: Args) -> ConfigResult<Self> {
        let version = resolve_version(args.release_version, std::env::var_os(VERSION_ENV))?;
        let request = UpdateRequest {
            target: TargetPath::from(args.target),
            version,
            policy: MissingFieldPolicy::from_strict(args.strict),
            write_mode: if args.atomic { WriteMode::Atomic } else { WriteMode::Truncate },
            dry_run: args.dry_run,
        };
        Ok(Self { request, format: args.format })
    }
}

// The flag wins over the environment. A set-but-empty VERSION is a valid (empty) id.
fn resolve_version(flag: Option<String>, env: Option<OsString>) -> ConfigResult<ReleaseVersion> {
    let raw = match (flag, env) {
        (Some(value), _) => value,
        (None, Some(value)) => value.into_string().map_err(|value| ConfigurationError::InvalidValue {
            name: VERSION_ENV.to_string(),
            value: value.to_string_lossy().into_owned(),
            reason: "is not valid UTF-8".to_string(),
        })?,
        (None, None) => return Err(ConfigurationError::MissingEnv { name: VERSION_ENV.to_string() }),
    };
    ReleaseVersion::parse(raw.clone()).map_err(|err| ConfigurationError::InvalidValue {
        name: VERSION_ENV.to_string(),
        value: raw,
        reason: match err {
            DomainError::InvalidVersion { reason, .. } => reason,
            other => other.to_string(),
        },
    })
}
