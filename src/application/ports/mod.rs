// src/application/ports/mod.rs
pub mod identity;
pub mod storage;
pub mod time;
pub mod util;
