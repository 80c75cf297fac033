use super::BlogQueryService;
use crate::{
    application::{
        dto::{BlogPostDto, CategoryDto, CategoryNodeDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::BlogPostFilter,
        hierarchy::build_forest,
        shared::{DocumentId, PageRequest, Slug},
    },
};

pub const RELATED_LIMIT: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct ListPublicPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Category slug.
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl BlogQueryService {
    pub async fn list_public_posts(
        &self,
        query: ListPublicPostsQuery,
    ) -> ApplicationResult<Page<BlogPostDto>> {
        let category_id = match query.category.filter(|c| !c.trim().is_empty()) {
            Some(raw) => {
                let slug = Slug::new(raw)?;
                match self.categories.find_by_slug(&slug).await? {
                    Some(category) if category.is_active => Some(category.id),
                    _ => return Err(ApplicationError::not_found("category not found")),
                }
            }
            None => None,
        };

        let filter = BlogPostFilter {
            category_id,
            tag: query.tag.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty()),
            search: query.search.filter(|s| !s.trim().is_empty()),
            visible_at: Some(self.clock.now()),
            ..BlogPostFilter::default()
        };
        let paged = self
            .posts
            .find_all(&filter, PageRequest::new(query.page, query.limit))
            .await?;
        Ok(Page::from_paged(paged, BlogPostDto::from))
    }

    pub async fn get_public_post(&self, slug: String) -> ApplicationResult<BlogPostDto> {
        let slug = Slug::new(slug)?;
        let post = self
            .posts
            .find_by_slug(&slug)
            .await?
            .filter(|p| p.is_publicly_visible(self.clock.now()))
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    pub async fn related_posts(&self, slug: String) -> ApplicationResult<Vec<BlogPostDto>> {
        let slug = Slug::new(slug)?;
        let now = self.clock.now();
        let post = self
            .posts
            .find_by_slug(&slug)
            .await?
            .filter(|p| p.is_publicly_visible(now))
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let related = self.posts.find_related(&post, now, RELATED_LIMIT).await?;
        Ok(related.into_iter().map(BlogPostDto::from).collect())
    }

    pub async fn list_categories(&self, active_only: bool) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.find_all(active_only).await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn category_tree(&self) -> ApplicationResult<Vec<CategoryNodeDto>> {
        let categories = self.categories.find_all(true).await?;
        Ok(build_forest(categories)
            .into_iter()
            .map(CategoryNodeDto::from)
            .collect())
    }

    pub async fn subcategories(&self, parent_id: String) -> ApplicationResult<Vec<CategoryDto>> {
        let parent_id = DocumentId::new(parent_id)?;
        let children = self.categories.find_children(&parent_id).await?;
        Ok(children
            .into_iter()
            .filter(|c| c.is_active)
            .map(CategoryDto::from)
            .collect())
    }
}
