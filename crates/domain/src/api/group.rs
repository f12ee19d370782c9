//! Envelopes for group operations. Each record carries only the ids and
//! fields its operation needs; the acting user comes from the (external)
//! auth context, never from the payload.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, GroupId};

/// Create a new group owned by the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub name: String,
}

/// Delete a group. Membership edges go with it; devices are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub group_id: GroupId,
}

/// Rename a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub group_id: GroupId,
    pub name: String,
}

/// List the devices belonging to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicesRequest {
    pub group_id: GroupId,
}

/// Add a device to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceRequest {
    pub group_id: GroupId,
    pub device_id: DeviceId,
}
