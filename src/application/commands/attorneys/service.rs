// src/application/commands/attorneys/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::attorney::{AttorneyRepository, AttorneySlugService},
};

pub struct AttorneyCommandService {
    pub(super) repo: Arc<dyn AttorneyRepository>,
    pub(super) slug_service: Arc<AttorneySlugService>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AttorneyCommandService {
    pub fn new(
        repo: Arc<dyn AttorneyRepository>,
        slug_service: Arc<AttorneySlugService>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            ids,
            clock,
        }
    }
}
