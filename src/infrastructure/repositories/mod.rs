// src/infrastructure/repositories/mod.rs
mod common;
mod error;
mod mongo_attorney;
mod mongo_blog_post;
mod mongo_category;
mod mongo_legal_content;
mod mongo_service;

pub use mongo_attorney::MongoAttorneyRepository;
pub use mongo_blog_post::MongoBlogPostRepository;
pub use mongo_category::MongoCategoryRepository;
pub use mongo_legal_content::MongoLegalContentRepository;
pub use mongo_service::MongoServiceRepository;
