use super::BlogQueryService;
use crate::{
    application::{
        auth::{ensure_permission, verify_content_edit_auth},
        dto::{AuthenticatedUser, BlogPostDto, CategoryDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{Permission, UserId},
        blog::{BlogPostFilter, PostStatus},
        shared::{DocumentId, PageRequest},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListAdminPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<PostStatus>,
    pub category_id: Option<String>,
    pub author_id: Option<String>,
    pub search: Option<String>,
}

impl BlogQueryService {
    /// Dashboard listing. Without `edit_all_content` a user only sees their
    /// own posts.
    pub async fn list_admin_posts(
        &self,
        actor: &AuthenticatedUser,
        query: ListAdminPostsQuery,
    ) -> ApplicationResult<Page<BlogPostDto>> {
        ensure_permission(actor, Permission::AccessDashboard)?;

        let author_id = if actor.has_permission(Permission::EditAllContent) {
            query
                .author_id
                .filter(|a| !a.trim().is_empty())
                .map(UserId::new)
                .transpose()?
        } else {
            Some(actor.id.clone())
        };
        let category_id = query
            .category_id
            .filter(|c| !c.trim().is_empty())
            .map(DocumentId::new)
            .transpose()?;

        let filter = BlogPostFilter {
            status: query.status,
            category_id,
            author_id,
            search: query.search.filter(|s| !s.trim().is_empty()),
            ..BlogPostFilter::default()
        };
        let paged = self
            .posts
            .find_all(&filter, PageRequest::new(query.page, query.limit))
            .await?;
        Ok(Page::from_paged(paged, BlogPostDto::from))
    }

    pub async fn get_admin_post(
        &self,
        actor: &AuthenticatedUser,
        id: String,
    ) -> ApplicationResult<BlogPostDto> {
        ensure_permission(actor, Permission::AccessDashboard)?;
        let id = DocumentId::new(id)?;
        let post = self
            .posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        verify_content_edit_auth(actor, &post.author_id)?;
        Ok(post.into())
    }

    /// Every category, inactive ones included.
    pub async fn list_admin_categories(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        ensure_permission(actor, Permission::ManageCategories)?;
        let categories = self.categories.find_all(false).await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
