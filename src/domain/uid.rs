// src/domain/uid.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Opaque 128-bit identifier, rendered in canonical hyphenated form.
///
/// Used for user UIDs, app UIDs, app secrets, and every token kind. Values
/// are always freshly generated; they are never derived from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid(Uuid);

impl Uid {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation("invalid UUID".into()))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
