// src/domain/attorney/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::attorney::{repository::AttorneyRepository, value_objects::PersonName};
use crate::domain::errors::DomainResult;
use crate::domain::shared::{DocumentId, Slug};

/// Produces profile slugs for attorneys. A slug already owned by a different
/// attorney gets the last six hex characters of this attorney's id appended.
pub struct AttorneySlugService {
    repo: Arc<dyn AttorneyRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl AttorneySlugService {
    pub fn new(repo: Arc<dyn AttorneyRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn unique_slug(&self, id: &DocumentId, name: &PersonName) -> DomainResult<Slug> {
        let base = self.generator.slugify(name.as_str());
        let base = if base.is_empty() {
            format!("abogado-{}", id.short_suffix())
        } else {
            Slug::fit_base(&base, id.short_suffix().len() + 1)
        };

        let candidate = Slug::new(base.clone())?;
        match self.repo.find_by_slug(&candidate).await? {
            Some(existing) if existing.id() != id => {
                Slug::new(format!("{base}-{}", id.short_suffix()))
            }
            _ => Ok(candidate),
        }
    }
}
