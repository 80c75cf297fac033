mod by_service;
mod list;
mod lookup;
mod service;

pub use by_service::AttorneysForServiceQuery;
pub use list::{ListAttorneysQuery, SearchAttorneysQuery};
pub use service::AttorneyQueryService;
