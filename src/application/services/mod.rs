// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        auth::AuthGate,
        commands::{
            attorneys::AttorneyCommandService, blog::BlogCommandService,
            categories::CategoryCommandService, legal::LegalCommandService,
            media::MediaCommandService, services::ServiceCommandService,
            users::UserCommandService,
        },
        ports::{
            identity::IdentityProvider,
            storage::BlobStorage,
            time::Clock,
            util::{IdGenerator, SlugGenerator},
        },
        queries::{
            attorneys::AttorneyQueryService, blog::BlogQueryService, legal::LegalQueryService,
            services::ServiceQueryService, users::UserQueryService,
        },
    },
    domain::{
        attorney::{AttorneyRepository, AttorneySlugService},
        blog::{BlogPostRepository, PostSlugService},
        category::CategoryRepository,
        legal::LegalContentRepository,
        service::ServiceRepository,
    },
};

/// Every repository and external port the services are wired from.
pub struct ServiceDependencies {
    pub attorneys: Arc<dyn AttorneyRepository>,
    pub posts: Arc<dyn BlogPostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub legal: Arc<dyn LegalContentRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub storage: Option<Arc<dyn BlobStorage>>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub ids: Arc<dyn IdGenerator>,
}

pub struct ApplicationServices {
    pub auth: Arc<AuthGate>,
    pub attorney_commands: Arc<AttorneyCommandService>,
    pub attorney_queries: Arc<AttorneyQueryService>,
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub service_commands: Arc<ServiceCommandService>,
    pub service_queries: Arc<ServiceQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub legal_commands: Arc<LegalCommandService>,
    pub legal_queries: Arc<LegalQueryService>,
    pub media_commands: Arc<MediaCommandService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            attorneys,
            posts,
            categories,
            services,
            legal,
            identity,
            storage,
            clock,
            slugger,
            ids,
        } = deps;

        let attorney_slugs = Arc::new(AttorneySlugService::new(
            Arc::clone(&attorneys),
            Arc::clone(&slugger),
        ));
        let post_slugs = Arc::new(PostSlugService::new(
            Arc::clone(&posts),
            Arc::clone(&slugger),
        ));

        Self {
            auth: Arc::new(AuthGate::new(Arc::clone(&identity))),
            attorney_commands: Arc::new(AttorneyCommandService::new(
                Arc::clone(&attorneys),
                attorney_slugs,
                Arc::clone(&ids),
                Arc::clone(&clock),
            )),
            attorney_queries: Arc::new(AttorneyQueryService::new(
                Arc::clone(&attorneys),
                Arc::clone(&services),
            )),
            blog_commands: Arc::new(BlogCommandService::new(
                Arc::clone(&posts),
                Arc::clone(&categories),
                post_slugs,
                Arc::clone(&ids),
                Arc::clone(&clock),
            )),
            blog_queries: Arc::new(BlogQueryService::new(
                Arc::clone(&posts),
                Arc::clone(&categories),
                Arc::clone(&clock),
            )),
            category_commands: Arc::new(CategoryCommandService::new(
                Arc::clone(&categories),
                Arc::clone(&slugger),
                Arc::clone(&ids),
                Arc::clone(&clock),
            )),
            service_commands: Arc::new(ServiceCommandService::new(
                Arc::clone(&services),
                Arc::clone(&slugger),
                Arc::clone(&ids),
                Arc::clone(&clock),
            )),
            service_queries: Arc::new(ServiceQueryService::new(Arc::clone(&services))),
            user_commands: Arc::new(UserCommandService::new(Arc::clone(&identity))),
            user_queries: Arc::new(UserQueryService::new(identity)),
            legal_commands: Arc::new(LegalCommandService::new(
                Arc::clone(&legal),
                Arc::clone(&clock),
            )),
            legal_queries: Arc::new(LegalQueryService::new(legal)),
            media_commands: Arc::new(MediaCommandService::new(storage, slugger, clock)),
        }
    }
}
