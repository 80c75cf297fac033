use std::sync::Arc;

use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, ManagedUserDto, Page},
        error::ApplicationResult,
        ports::identity::IdentityProvider,
    },
    domain::{
        access::Permission,
        shared::{PageRequest, Paged},
    },
};

pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct UserQueryService {
    identity: Arc<dyn IdentityProvider>,
}

impl UserQueryService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<Page<ManagedUserDto>> {
        ensure_permission(actor, Permission::ManageUsers)?;
        let request = PageRequest::new(query.page, query.limit);
        let result = self
            .identity
            .list_users(request.limit(), request.offset())
            .await?;
        let paged = Paged::new(result.users, result.total, request);
        Ok(Page::from_paged(paged, ManagedUserDto::from))
    }
}
