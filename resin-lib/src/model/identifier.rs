//! Application and device identifiers

use std::fmt;

/// Identifies an application either by name or by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameOrId {
    /// Application name.
    Name(String),
    /// Numeric application id.
    Id(u64),
}

/// Identifies a device either by uuid or by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UuidOrId {
    /// Device uuid (full or short form).
    Uuid(String),
    /// Numeric device id.
    Id(u64),
}

impl NameOrId {
    /// Returns `true` if this is a numeric id.
    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl UuidOrId {
    /// Returns `true` if this is a numeric id.
    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl fmt::Display for NameOrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

impl fmt::Display for UuidOrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(uuid) => f.write_str(uuid),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for NameOrId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for NameOrId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for NameOrId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for UuidOrId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UuidOrId {
    fn from(uuid: &str) -> Self {
        Self::Uuid(uuid.to_string())
    }
}

impl From<String> for UuidOrId {
    fn from(uuid: String) -> Self {
        Self::Uuid(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_id() {
        assert!(NameOrId::from(12).is_id());
        assert!(!NameOrId::from("12").is_id());
        assert!(UuidOrId::from(7).is_id());
        assert!(!UuidOrId::from("7cf02a6").is_id());
    }

    #[test]
    fn test_display() {
        assert_eq!(NameOrId::from("myapp").to_string(), "myapp");
        assert_eq!(UuidOrId::from(99).to_string(), "99");
    }
}
