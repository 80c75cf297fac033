pub mod attorneys;
pub mod blog;
pub mod legal;
pub mod services;
pub mod users;
