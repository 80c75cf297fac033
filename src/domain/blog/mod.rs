pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{BlogPost, NewBlogPost};
pub use repository::{BlogPostFilter, BlogPostRepository};
pub use services::PostSlugService;
pub use value_objects::{FormatConfig, PostStatus, PostTitle};
