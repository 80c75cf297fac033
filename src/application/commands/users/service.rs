use std::sync::Arc;

use crate::application::ports::identity::IdentityProvider;

/// Role administration. Accounts themselves live in the identity provider.
pub struct UserCommandService {
    pub(super) identity: Arc<dyn IdentityProvider>,
}

impl UserCommandService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}
