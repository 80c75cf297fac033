use std::collections::HashSet;

use crate::domain::access::{Permission, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEditScope {
    Any,
    Own,
}

/// Decides whether a principal may edit a piece of content written by
/// `author_id`, and under which grant.
pub struct ContentEditSpec<'a> {
    permissions: &'a HashSet<Permission>,
    actor_id: &'a UserId,
    author_id: &'a UserId,
}

impl<'a> ContentEditSpec<'a> {
    pub fn new(
        permissions: &'a HashSet<Permission>,
        actor_id: &'a UserId,
        author_id: &'a UserId,
    ) -> Self {
        Self {
            permissions,
            actor_id,
            author_id,
        }
    }

    pub fn scope(&self) -> Option<ContentEditScope> {
        if self.permissions.contains(&Permission::EditAllContent) {
            Some(ContentEditScope::Any)
        } else if self.permissions.contains(&Permission::EditOwnContent)
            && self.actor_id == self.author_id
        {
            Some(ContentEditScope::Own)
        } else {
            None
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.scope().is_some()
    }
}
