pub mod entity;
pub mod repository;

pub use entity::{NewService, Service};
pub use repository::ServiceRepository;
