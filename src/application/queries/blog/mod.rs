mod admin;
mod public;
mod service;

pub use admin::ListAdminPostsQuery;
pub use public::ListPublicPostsQuery;
pub use service::BlogQueryService;
