use super::AttorneyCommandService;
use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, SlugMigrationReport},
        error::ApplicationResult,
    },
    domain::{
        access::Permission,
        attorney::StoredAttorney,
        shared::PageRequest,
    },
};
use tracing::{info, warn};

impl AttorneyCommandService {
    /// Give every attorney without a slug its unique slug. Failures are
    /// reported per attorney and do not stop the run.
    pub async fn migrate_slugs(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SlugMigrationReport> {
        ensure_permission(actor, Permission::RunMigrations)?;

        let mut report = SlugMigrationReport::default();
        let mut page = 1;
        loop {
            let request = PageRequest::new(Some(page), Some(PageRequest::MAX_LIMIT));
            let batch = self.repo.scan(request).await?;
            let has_next = batch.has_next();

            for stored in batch.items {
                report.processed += 1;
                let attorney = match stored {
                    StoredAttorney::Valid(attorney) => attorney,
                    StoredAttorney::Invalid { id, name, reason } => {
                        warn!(attorney_id = %id, error = %reason, "stored attorney is unreadable");
                        report.errors.push(format!("{name} ({id}): {reason}"));
                        continue;
                    }
                };
                if attorney.slug().is_some() {
                    report.skipped += 1;
                    continue;
                }

                let result = match self
                    .slug_service
                    .unique_slug(attorney.id(), attorney.name())
                    .await
                {
                    Ok(slug) => {
                        let migrated = attorney.with_slug(slug, self.clock.now());
                        self.repo.update(&migrated).await
                    }
                    Err(err) => Err(err),
                };

                match result {
                    Ok(()) => report.updated += 1,
                    Err(err) => {
                        warn!(attorney_id = %attorney.id(), error = %err, "slug migration failed");
                        report
                            .errors
                            .push(format!("{} ({}): {err}", attorney.name(), attorney.id()));
                    }
                }
            }

            if !has_next {
                break;
            }
            page += 1;
        }

        info!(
            processed = report.processed,
            updated = report.updated,
            skipped = report.skipped,
            errors = report.errors.len(),
            "attorney slug migration finished"
        );
        Ok(report)
    }
}
