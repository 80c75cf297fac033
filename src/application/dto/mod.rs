pub mod attorneys;
pub mod auth;
pub mod blog;
pub mod legal;
pub mod media;
pub mod pagination;
pub mod serde_time;
pub mod services;
pub mod users;

pub use attorneys::{AttorneyDto, AttorneyProfileDto};
pub use auth::{AuthenticatedUser, SessionDto};
pub use blog::{BlogPostDto, CategoryDto, CategoryNodeDto, FormatConfigDto, ViewCountDto};
pub use legal::LegalContentDto;
pub use media::{SlugMigrationReport, UploadResultDto};
pub use pagination::Page;
pub use services::{ServiceDto, ServiceNodeDto};
pub use users::ManagedUserDto;
