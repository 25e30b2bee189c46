// crates/usecase/src/update.rs
use announcement_id_domain::{RewriteOutcome, rewrite};
use announcement_id_ports::SourceStore;
use announcement_id_shared_kernel::{ErrorContext, Result};

use crate::dto::{UpdateReport, UpdateRequest};

pub struct UpdateAnnouncementId<'a> {
    store: &'a dyn SourceStore,
}

impl<'a> UpdateAnnouncementId<'a> {
    pub fn new(store: &'a dyn SourceStore) -> Self {
        Self { store }
    }

    pub fn run(&self, request: &UpdateRequest) -> Result<UpdateReport> {
        let target = &request.target;
        let original = self.store.read_to_string(target)?;

        let rewritten = rewrite(&original, &request.version);
        log::debug!(
            "{} occurrence(s) of the announcement field in {target}, previous values {:?}",
            rewritten.replacements(),
            rewritten.previous()
        );
        request.policy.check(&rewritten, target)?;
        if rewritten.outcome() == RewriteOutcome::NoMatch {
            log::warn!("no announcement field found in {target}; content left unchanged");
        }

        if request.dry_run {
            log::info!("dry run, not writing {target}");
            return Ok(UpdateReport::from_rewrite(target, &rewritten, false));
        }

        self.store
            .write(target, rewritten.content(), request.write_mode)
            .with_context(|| format!("updating announcement id to {}", request.version))?;
        Ok(UpdateReport::from_rewrite(target, &rewritten, true))
    }
}
