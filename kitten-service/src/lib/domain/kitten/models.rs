use std::fmt;

use crate::kitten::errors::KittenAgeError;
use crate::kitten::errors::KittenIdError;
use crate::kitten::errors::KittenTextError;
use crate::user::models::UserId;

/// Kitten entity.
///
/// Every kitten has exactly one owner; only that owner may read or delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kitten {
    pub id: KittenId,
    pub name: KittenName,
    pub age: KittenAge,
    pub color: KittenColor,
    pub owner_id: UserId,
}

impl Kitten {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Kitten unique identifier type, assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KittenId(pub i64);

impl KittenId {
    /// Parse a kitten ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, KittenIdError> {
        s.parse::<i64>()
            .map(KittenId)
            .map_err(|e| KittenIdError::InvalidFormat(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for KittenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_TEXT_LENGTH: usize = 255;

fn validated_text(field: &'static str, value: String) -> Result<String, KittenTextError> {
    if value.trim().is_empty() {
        return Err(KittenTextError::Empty { field });
    }

    if value.contains('\0') {
        return Err(KittenTextError::ContainsNul { field });
    }

    let actual = value.chars().count();
    if actual > MAX_TEXT_LENGTH {
        return Err(KittenTextError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
            actual,
        });
    }

    Ok(value)
}

/// Kitten name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittenName(String);

impl KittenName {
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 255 characters
    /// * `ContainsNul` - Name contains `\0`
    pub fn new(name: String) -> Result<Self, KittenTextError> {
        validated_text("Name", name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kitten color value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittenColor(String);

impl KittenColor {
    /// # Errors
    /// * `Empty` - Color is empty or whitespace only
    /// * `TooLong` - Color longer than 255 characters
    /// * `ContainsNul` - Color contains `\0`
    pub fn new(color: String) -> Result<Self, KittenTextError> {
        validated_text("Color", color).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kitten age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KittenAge(i32);

impl KittenAge {
    /// # Errors
    /// * `Negative` - Age below zero
    pub fn new(age: i32) -> Result<Self, KittenAgeError> {
        if age < 0 {
            Err(KittenAgeError::Negative(age))
        } else {
            Ok(Self(age))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Command to create a kitten with validated fields
#[derive(Debug, Clone)]
pub struct CreateKittenCommand {
    pub name: KittenName,
    pub age: KittenAge,
    pub color: KittenColor,
}

impl CreateKittenCommand {
    pub fn new(name: KittenName, age: KittenAge, color: KittenColor) -> Self {
        Self { name, age, color }
    }
}

/// Kitten row about to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKitten {
    pub name: KittenName,
    pub age: KittenAge,
    pub color: KittenColor,
    pub owner_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_id_from_string() {
        assert_eq!(KittenId::from_string("1"), Ok(KittenId(1)));
        assert!(matches!(
            KittenId::from_string("one"),
            Err(KittenIdError::InvalidFormat(_))
        ));
        assert!(KittenId::from_string("1.5").is_err());
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(
            KittenName::new("Whiskers".to_string()).unwrap().as_str(),
            "Whiskers"
        );
        assert_eq!(
            KittenName::new("   ".to_string()),
            Err(KittenTextError::Empty { field: "Name" })
        );
        assert!(matches!(
            KittenName::new("n".repeat(256)),
            Err(KittenTextError::TooLong { actual: 256, .. })
        ));
    }

    #[test]
    fn test_color_validation() {
        assert!(KittenColor::new("tabby".to_string()).is_ok());
        assert_eq!(
            KittenColor::new(String::new()),
            Err(KittenTextError::Empty { field: "Color" })
        );
        assert_eq!(
            KittenColor::new("gr\0ey".to_string()),
            Err(KittenTextError::ContainsNul { field: "Color" })
        );
    }

    #[test]
    fn test_age_validation() {
        assert_eq!(KittenAge::new(0).unwrap().value(), 0);
        assert_eq!(KittenAge::new(3).unwrap().value(), 3);
        assert_eq!(KittenAge::new(-1), Err(KittenAgeError::Negative(-1)));
    }

    #[test]
    fn test_is_owned_by() {
        let kitten = Kitten {
            id: KittenId(1),
            name: KittenName::new("Tom".to_string()).unwrap(),
            age: KittenAge::new(2).unwrap(),
            color: KittenColor::new("grey".to_string()).unwrap(),
            owner_id: UserId(10),
        };

        assert!(kitten.is_owned_by(UserId(10)));
        assert!(!kitten.is_owned_by(UserId(11)));
    }
}
