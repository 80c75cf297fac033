pub mod attorneys;
pub mod blog;
pub mod categories;
pub mod legal;
pub mod media;
pub mod services;
pub mod users;
