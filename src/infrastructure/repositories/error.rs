use crate::domain::errors::DomainError;
use mongodb::error::{ErrorKind, WriteFailure};
use tracing::error;

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Unique-index violations become `Conflict`; everything else is logged and
/// surfaced as `Persistence`.
pub fn map_mongo(entity: &'static str, err: mongodb::error::Error) -> DomainError {
    if is_duplicate_key(&err) {
        return DomainError::Conflict(format!("{entity} with the same unique value already exists"));
    }
    error!(entity, error = %err, "mongodb operation failed");
    DomainError::Persistence(format!("{entity} storage failure"))
}

/// Stored document that no longer satisfies the entity's invariants.
pub fn corrupt(entity: &'static str, id: impl std::fmt::Display, err: DomainError) -> DomainError {
    error!(entity, id = %id, error = %err, "stored document failed validation");
    DomainError::Persistence(format!("stored {entity} {id} is invalid: {err}"))
}
