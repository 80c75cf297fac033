mod role;
mod service;

pub use role::UpdateUserRoleCommand;
pub use service::UserCommandService;
