//! Share permission bitmask.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bitmask of operations a share grants on the shared item.
///
/// The bit values are part of the wire protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharePermissions(pub u32);

impl SharePermissions {
    /// Read the shared item.
    pub const READ: Self = Self(1);
    /// Modify the shared item.
    pub const UPDATE: Self = Self(2);
    /// Create new items below the shared item.
    pub const CREATE: Self = Self(4);
    /// Delete the shared item or its children.
    pub const DELETE: Self = Self(8);
    /// Re-share the shared item.
    pub const SHARE: Self = Self(16);
    /// All of the above.
    pub const ALL: Self = Self(31);

    /// The empty permission set.
    pub fn none() -> Self {
        Self(0)
    }

    /// Check whether every bit of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether the READ bit is set.
    pub fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Check whether the UPDATE bit is set.
    pub fn can_update(self) -> bool {
        self.contains(Self::UPDATE)
    }

    /// Check whether the CREATE bit is set.
    pub fn can_create(self) -> bool {
        self.contains(Self::CREATE)
    }

    /// Check whether the DELETE bit is set.
    pub fn can_delete(self) -> bool {
        self.contains(Self::DELETE)
    }

    /// Check whether the SHARE bit is set.
    pub fn can_share(self) -> bool {
        self.contains(Self::SHARE)
    }

    /// The raw bit value.
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for SharePermissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SharePermissions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SharePermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_create_checks_the_create_bit() {
        // READ | CREATE
        assert!(SharePermissions(5).can_create());
        // READ only
        assert!(!SharePermissions(1).can_create());
        assert!(SharePermissions::ALL.can_create());
        assert!(!SharePermissions::none().can_create());
    }

    #[test]
    fn test_contains_requires_all_bits() {
        let perms = SharePermissions::READ | SharePermissions::UPDATE;
        assert!(perms.contains(SharePermissions::READ));
        assert!(!perms.contains(SharePermissions::READ | SharePermissions::CREATE));
    }

    #[test]
    fn test_all_is_the_union_of_the_named_bits() {
        let mut perms = SharePermissions::READ;
        perms |= SharePermissions::UPDATE;
        perms |= SharePermissions::CREATE;
        perms |= SharePermissions::DELETE;
        perms |= SharePermissions::SHARE;
        assert_eq!(perms, SharePermissions::ALL);
    }

    #[test]
    fn test_serializes_as_a_bare_number() {
        let json = serde_json::to_string(&SharePermissions(31)).expect("serialize");
        assert_eq!(json, "31");
        let parsed: SharePermissions = serde_json::from_str("5").expect("deserialize");
        assert_eq!(parsed, SharePermissions(5));
    }
}
