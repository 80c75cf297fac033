use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{blog::BlogPostRepository, category::CategoryRepository},
};

pub struct BlogQueryService {
    pub(super) posts: Arc<dyn BlogPostRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogQueryService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        categories: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            categories,
            clock,
        }
    }
}
