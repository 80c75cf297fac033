// tests/support/mocks/mod.rs
pub mod identity;
pub mod repos;
pub mod storage;
pub mod util;

pub use identity::{
    ADMIN_TOKEN, CREATOR_TOKEN, DEVELOPER_TOKEN, DummyIdentityProvider, OTHER_CREATOR_TOKEN,
    PROVIDER_DOWN_TOKEN, READER_TOKEN, SUPERADMIN_TOKEN,
};
pub use repos::{
    MemoryAttorneyRepo, MemoryBlogPostRepo, MemoryCategoryRepo, MemoryLegalRepo,
    MemoryServiceRepo,
};
pub use storage::MemoryBlobStorage;
pub use util::{FixedClock, SequentialIds, fixed_now};
