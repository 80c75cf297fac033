// src/application/ports/util.rs
use crate::domain::shared::DocumentId;

pub trait SlugGenerator: Send + Sync {
    /// Lowercase, strip accents and hyphenate. May return an empty string.
    fn slugify(&self, input: &str) -> String;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> DocumentId;
}
