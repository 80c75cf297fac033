// src/infrastructure/security/mod.rs
pub mod clerk;

pub use clerk::{ClerkConfig, ClerkIdentityProvider};
