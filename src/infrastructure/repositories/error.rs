// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                // Foreign-key violation: the referenced identity is gone.
                // Unique violations stay persistence errors, surfaced
                // verbatim to the caller.
                if code.as_ref() == "23503" {
                    return DomainError::NotFound("referenced record not found".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
