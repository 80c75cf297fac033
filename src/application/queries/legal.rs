use std::sync::Arc;

use crate::{
    application::{
        dto::LegalContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{legal::LegalContentRepository, shared::Slug},
};

pub struct LegalQueryService {
    repo: Arc<dyn LegalContentRepository>,
}

impl LegalQueryService {
    pub fn new(repo: Arc<dyn LegalContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_key(&self, key: String) -> ApplicationResult<LegalContentDto> {
        let key = Slug::new(key)?;
        self.repo
            .find_by_key(&key)
            .await?
            .map(LegalContentDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("legal content '{key}' not found")))
    }
}
