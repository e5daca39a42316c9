use std::fmt;

use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
}

/// User unique identifier type, assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the username is non-empty, NUL-free and fits the store column
/// (255 characters). The value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    /// * `TooLong` - Username longer than 255 characters
    /// * `ContainsNul` - Username contains `\0`, which text columns refuse
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length == 0 {
            Err(UsernameError::Empty)
        } else if username.contains('\0') {
            Err(UsernameError::ContainsNul)
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// User row about to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_username() {
        let username = Username::new("a".to_string()).unwrap();
        assert_eq!(username.as_str(), "a");
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
    }

    #[test]
    fn test_username_too_long() {
        let result = Username::new("x".repeat(256));
        assert_eq!(
            result,
            Err(UsernameError::TooLong {
                max: 255,
                actual: 256
            })
        );
        assert!(Username::new("x".repeat(255)).is_ok());
    }

    #[test]
    fn test_username_with_nul() {
        assert_eq!(
            Username::new("ali\0ce".to_string()),
            Err(UsernameError::ContainsNul)
        );
    }

    #[test]
    fn test_username_kept_verbatim() {
        let username = Username::new(" Kitty Lover ".to_string()).unwrap();
        assert_eq!(username.to_string(), " Kitty Lover ");
    }

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert!(UserId::from_string("abc").is_err());
        assert!(UserId::from_string("").is_err());
    }
}
