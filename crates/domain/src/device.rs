//! Device — a telemetry-reporting hardware unit — and its relationship
//! edges: group membership and access permission.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::flags::DeviceFlags;
use crate::id::{DeviceId, GroupId, UserId};
use crate::wire;

/// A telemetry-reporting hardware unit with a permanent identifier.
///
/// `owner_id` absent is a valid state ("unowned", e.g. freshly registered),
/// never an error and never collapsed to a sentinel id. The two list fields
/// exist purely to carry join results: they are absent unless the producing
/// query explicitly requested that join, and consumers must treat absence
/// as "not loaded", not "empty".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Globally unique, assigned once, never reassigned.
    pub id: DeviceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Absent on the wire decodes as the empty set.
    #[serde(default, deserialize_with = "wire::null_default")]
    pub flags: DeviceFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_memberships: Option<Vec<GroupMembership>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_permissions: Option<Vec<AccessPermission>>,
}

impl Device {
    /// Create a builder seeded with the permanent identifier. The id is
    /// required up front: a device without one is unrepresentable, and no
    /// sentinel value stands in for it.
    #[must_use]
    pub fn builder(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder {
            id: id.into(),
            name: None,
            owner_id: None,
            flags: DeviceFlags::default(),
            latitude: None,
            longitude: None,
            group_memberships: None,
            access_permissions: None,
        }
    }

    /// Whether the device's data is private to its owner and token-granted
    /// viewers.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.flags.contains(DeviceFlags::LOCKED)
    }

    /// Whether the device has no owner.
    #[must_use]
    pub fn is_unowned(&self) -> bool {
        self.owner_id.is_none()
    }
}

// Identity equality: two Device records with the same id are the same
// entity regardless of their other fields. Do not rely on this to detect a
// stale copy after an update; compare the fields you care about instead.
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Step-by-step builder for [`Device`], entered through
/// [`Device::builder`] with the id already in hand.
#[derive(Debug)]
pub struct DeviceBuilder {
    id: DeviceId,
    name: Option<String>,
    owner_id: Option<UserId>,
    flags: DeviceFlags,
    latitude: Option<f64>,
    longitude: Option<f64>,
    group_memberships: Option<Vec<GroupMembership>>,
    access_permissions: Option<Vec<AccessPermission>>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: DeviceFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn group_memberships(mut self, memberships: Vec<GroupMembership>) -> Self {
        self.group_memberships = Some(memberships);
        self
    }

    #[must_use]
    pub fn access_permissions(mut self, permissions: Vec<AccessPermission>) -> Self {
        self.access_permissions = Some(permissions);
        self
    }

    /// Consume the builder and return a [`Device`].
    ///
    /// A missing name falls back to the empty string; this crate does not
    /// reject domain-invalid records.
    #[must_use]
    pub fn build(self) -> Device {
        Device {
            id: self.id,
            name: self.name.unwrap_or_default(),
            owner_id: self.owner_id,
            flags: self.flags,
            latitude: self.latitude,
            longitude: self.longitude,
            group_memberships: self.group_memberships,
            access_permissions: self.access_permissions,
        }
    }
}

/// Membership edge: device ∈ group.
///
/// Keyed by the (`group_id`, `device_id`) pair; carries no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub group_id: GroupId,
    pub device_id: DeviceId,
}

/// Grant: `user_id` may view `device_id`'s data.
///
/// Keyed by the (`user_id`, `device_id`) pair. The owner's own access is
/// implicit and never stored as a permission row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPermission {
    pub user_id: UserId,
    pub device_id: DeviceId,
    /// Raw modifier bits with no meaning assigned in the current contract;
    /// carried as-is. Confirm against the service before interpreting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}
