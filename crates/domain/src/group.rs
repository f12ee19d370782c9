//! Group — a user-owned named collection of devices.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::id::{GroupId, UserId};

/// A named collection of devices with exactly one owner.
///
/// The id is immutable after creation. `devices` is a join-only field:
/// absent unless the producing query asked for the member devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub owner_id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
}

impl Group {
    /// Create a builder for constructing a [`Group`].
    #[must_use]
    pub fn builder() -> GroupBuilder {
        GroupBuilder::default()
    }
}

// Identity equality: same id, same group. See the note on `Device`.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Group {}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Step-by-step builder for [`Group`].
#[derive(Debug, Default)]
pub struct GroupBuilder {
    id: Option<GroupId>,
    owner_id: Option<UserId>,
    name: Option<String>,
    devices: Option<Vec<Device>>,
}

impl GroupBuilder {
    #[must_use]
    pub fn id(mut self, id: GroupId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn devices(mut self, devices: Vec<Device>) -> Self {
        self.devices = Some(devices);
        self
    }

    /// Consume the builder and return a [`Group`].
    ///
    /// A missing id or owner falls back to a freshly generated identifier,
    /// matching the create path where the service assigns both.
    #[must_use]
    pub fn build(self) -> Group {
        Group {
            id: self.id.unwrap_or_default(),
            owner_id: self.owner_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            devices: self.devices,
        }
    }
}
