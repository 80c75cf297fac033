// src/application/commands/blog/mod.rs
mod create;
mod delete;
mod service;
mod status;
mod update;
mod view;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use service::BlogCommandService;
pub use status::{ChangePostStatusCommand, PostStatusAction};
pub use update::UpdatePostCommand;
