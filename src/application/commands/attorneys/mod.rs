// src/application/commands/attorneys/mod.rs
mod create;
mod delete;
mod migrate_slugs;
mod service;
mod update;

pub use create::CreateAttorneyCommand;
pub use delete::DeleteAttorneyCommand;
pub use service::AttorneyCommandService;
pub use update::UpdateAttorneyCommand;
