pub mod access;
pub mod attorney;
pub mod blog;
pub mod category;
pub mod errors;
pub mod hierarchy;
pub mod legal;
pub mod matching;
pub mod service;
pub mod shared;
