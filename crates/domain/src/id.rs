//! Typed identifier newtypes.
//!
//! User and group identifiers are UUID-backed. Device identifiers are
//! opaque strings whose format is assigned by the device registry and is
//! deliberately unconstrained here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId
);

define_id!(
    /// Unique identifier for a [`Group`](crate::group::Group).
    GroupId
);

/// Opaque identifier for a [`Device`](crate::device::Device).
///
/// Permanent and immutable: assigned once at manufacture/registration and
/// never reassigned. The string format is externally defined and carries no
/// meaning inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap an externally-assigned identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "5f0a1de2-9c4b-4b3e-8a66-0d6a3b1c9e77";

    #[test]
    fn should_never_collide_for_freshly_registered_accounts() {
        assert_ne!(UserId::new(), UserId::new());
        assert_ne!(GroupId::new(), GroupId::new());
    }

    #[test]
    fn should_parse_canonical_owner_id_and_encode_it_back() {
        let owner: UserId = OWNER.parse().unwrap();
        assert_eq!(owner.to_string(), OWNER);
        let json = serde_json::to_string(&owner).unwrap();
        assert_eq!(json, std::format!("\"{OWNER}\""));
        assert_eq!(serde_json::from_str::<UserId>(&json).unwrap(), owner);
    }

    #[test]
    fn should_keep_user_and_group_ids_as_distinct_types_over_one_uuid() {
        let raw = uuid::Uuid::parse_str(OWNER).unwrap();
        // Same 128 bits, but the type system keeps them apart; only the
        // inner UUID compares equal.
        assert_eq!(UserId::from_uuid(raw).as_uuid(), GroupId::from_uuid(raw).as_uuid());
    }

    #[test]
    fn should_reject_device_style_strings_as_group_ids() {
        // Device ids are opaque strings; they must not sneak in where a
        // 128-bit identifier is expected.
        assert!(GroupId::from_str("abc123").is_err());
    }

    #[test]
    fn should_serialize_device_id_as_bare_string() {
        let id = DeviceId::from("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
    }

    #[test]
    fn should_accept_any_device_id_format() {
        // The format is opaque; nothing here validates it.
        let json = "\"00:11:22:33:44:55/weird format!\"";
        let id: DeviceId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "00:11:22:33:44:55/weird format!");
    }
}
