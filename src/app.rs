// src/app.rs
use announcement_id_infra::FsSourceStore;
use announcement_id_shared_kernel::Result;
use announcement_id_usecase::{UpdateAnnouncementId, UpdateReport};

use crate::config::Config;

/// Run the update against the real filesystem.
pub fn run(config: &Config) -> Result<UpdateReport> {
    log::debug!(
        "target={} version={} policy={:?} mode={:?} dry_run={}",
        config.request.target.logical_absolute().display(),
        config.request.version,
        config.request.policy,
        config.request.write_mode,
        config.request.dry_run
    );
    let store = FsSourceStore::new();
    UpdateAnnouncementId::new(&store).run(&config.request)
}
