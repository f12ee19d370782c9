//! Envelopes for device operations: registration, limits, sharing, updates,
//! listing, and observation queries.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::device::Device;
use crate::flags::DeviceFlags;
use crate::id::DeviceId;
use crate::limit::{Limit, LimitType};
use crate::observation::Observation;
use crate::wire;

/// Register a device with the platform.
///
/// Capability flags are advertised here by the firmware; they are not
/// user-settable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub device_id: DeviceId,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub flags: DeviceFlags,
}

/// Fetch the limits applicable to the requesting user for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsRequest {
    pub device_id: DeviceId,
}

/// Gain access to a device's data.
///
/// For a locked device ([`DeviceFlags::LOCKED`]) the share only succeeds
/// when `token` carries a previously-issued, not-yet-consumed share token;
/// an unlocked device needs none. This record carries the token — the
/// check itself lives in the authorization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub device_id: DeviceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Ask the owner's service to mint a share token for a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareTokenRequest {
    pub device_id: DeviceId,
}

/// Wraps exactly one freshly generated single-use share token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareTokenResponse {
    pub token: String,
}

/// Update a device's user-editable fields. Absent fields are left as they
/// are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub device_id: DeviceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<DeviceFlags>,
}

/// One limit change inside an [`UpdateLimitsRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitUpdate {
    pub limit_type: LimitType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_value_string: Option<String>,
}

impl LimitUpdate {
    /// By request-shape convention, an entry with both values absent asks
    /// for the limit of that type to be deleted. Named here; enforced by
    /// the service.
    #[must_use]
    pub fn is_removal(&self) -> bool {
        self.limit_value.is_none() && self.limit_value_string.is_none()
    }
}

/// Apply a batch of limit changes for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLimitsRequest {
    pub device_id: DeviceId,
    pub limits: Vec<LimitUpdate>,
}

/// One entry in the device-list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDevicesItem {
    pub device: Device,
    /// Absent when the device has never reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_observation: Option<Observation>,
    /// Count of access-permission rows, owner excluded. Signed and carried
    /// as-is; a negative count is the service's bug to notice, not ours to
    /// mask.
    pub share_count: i64,
    /// Limits applicable to the requesting user.
    pub limits: Vec<Limit>,
}

/// Requested aggregation granularity for an observation query.
///
/// Closed and ordered: the wire rank (0–4) is stable across versions and a
/// rank outside the range fails decode, since a query without a concrete
/// window cannot be answered. Bucketing and averaging happen in the
/// aggregation layer; this type only names the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interval {
    /// Everything unfiltered and unaggregated (debug).
    All,
    /// Last 12 hours, unaggregated.
    Live,
    /// Last 24 hours, hourly buckets, per-bucket average.
    Day,
    /// Last 30 days, daily buckets.
    Month,
    /// Last 365 days, monthly buckets.
    Year,
}

impl Interval {
    /// The integer wire rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::All => 0,
            Self::Live => 1,
            Self::Day => 2,
            Self::Month => 3,
            Self::Year => 4,
        }
    }

    /// Map a wire rank back to the interval.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::All),
            1 => Some(Self::Live),
            2 => Some(Self::Day),
            3 => Some(Self::Month),
            4 => Some(Self::Year),
            _ => None,
        }
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rank = u8::deserialize(deserializer)?;
        Self::from_rank(rank).ok_or_else(|| {
            D::Error::invalid_value(
                Unexpected::Unsigned(u64::from(rank)),
                &"an aggregation interval rank between 0 and 4",
            )
        })
    }
}

/// Query a device's observation history at a given granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObsRequest {
    pub device_id: DeviceId,
    pub interval: Interval,
}
