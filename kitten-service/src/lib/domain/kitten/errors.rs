use thiserror::Error;

use crate::kitten::models::KittenId;
use crate::user::models::UserId;

/// Error type for KittenId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KittenIdError {
    #[error("Invalid kitten id: {0}")]
    InvalidFormat(String),
}

/// Error type for free-text kitten attributes (name, color)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KittenTextError {
    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains a NUL character")]
    ContainsNul { field: &'static str },
}

/// Error type for KittenAge validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KittenAgeError {
    #[error("Age must not be negative, got {0}")]
    Negative(i32),
}

/// Top-level error type for all kitten-related operations
#[derive(Debug, Clone, Error)]
pub enum KittenError {
    #[error("Invalid kitten ID: {0}")]
    InvalidKittenId(#[from] KittenIdError),

    #[error("Invalid kitten: {0}")]
    InvalidText(#[from] KittenTextError),

    #[error("Invalid kitten: {0}")]
    InvalidAge(#[from] KittenAgeError),

    #[error("Kitten not found: {0}")]
    NotFound(KittenId),

    #[error("User {user_id} does not own kitten {kitten_id}")]
    NotOwner { user_id: UserId, kitten_id: KittenId },

    #[error("Kitten {kitten_id} not found for user {user_id}")]
    NotFoundForOwner { user_id: UserId, kitten_id: KittenId },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
