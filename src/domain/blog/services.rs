// src/domain/blog/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::blog::repository::BlogPostRepository;
use crate::domain::errors::DomainResult;
use crate::domain::shared::{DocumentId, Slug};

/// Room kept for a `-N` collision counter.
const COUNTER_RESERVE: usize = 8;

/// Produces unique post slugs by appending `-1`, `-2`, ... on collision.
pub struct PostSlugService {
    repo: Arc<dyn BlogPostRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(repo: Arc<dyn BlogPostRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// `source` is either the title or a caller-supplied slug. `ignore_id`
    /// lets a post keep its own slug on update.
    pub async fn unique_slug(
        &self,
        source: &str,
        fallback_id: &DocumentId,
        ignore_id: Option<&DocumentId>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(source);
        let base = if base.is_empty() {
            format!("post-{}", fallback_id.short_suffix())
        } else {
            Slug::fit_base(&base, COUNTER_RESERVE)
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = Slug::new(candidate)?;
            match self.repo.find_by_slug(&slug).await? {
                Some(existing) if Some(&existing.id) == ignore_id => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
