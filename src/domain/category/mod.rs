pub mod entity;
pub mod repository;

pub use entity::{Category, NewCategory};
pub use repository::CategoryRepository;
