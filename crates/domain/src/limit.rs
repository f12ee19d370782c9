//! Configurable device limits: the type taxonomy, per-user limit records,
//! and the device-scoped push queue.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flags::LimitFlags;
use crate::id::{DeviceId, UserId};
use crate::wire;

/// A configurable device setting or threshold, identified by a single-byte
/// wire code.
///
/// The taxonomy is closed for this contract version (codes 0–11), but the
/// wrapper is open: an unrecognized code decodes successfully, compares by
/// code, and re-encodes unchanged, so an older service never crashes on a
/// type added later. Callers branching on type should treat unknown codes
/// as "not applicable" via [`is_known`](Self::is_known).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitType(u8);

impl LimitType {
    /// Upper temperature alert threshold.
    pub const TEMP_HIGH: Self = Self(0);
    /// Lower temperature alert threshold.
    pub const TEMP_LOW: Self = Self(1);
    /// Movement sensitivity threshold.
    pub const MOVEMENT_LEVEL: Self = Self(2);
    /// Low-battery alert threshold.
    pub const BATTERY_LEVEL: Self = Self(3);
    /// Notification delivery preference.
    pub const NOTIFICATIONS: Self = Self(4);
    /// Preferred temperature display scale.
    pub const TEMP_SCALE: Self = Self(5);
    /// Display colour preference.
    pub const COLOUR: Self = Self(6);
    /// Device reporting interval.
    pub const INTERVAL: Self = Self(7);
    /// Report payload format. Current use upstream is unconfirmed; carried
    /// as data only.
    pub const REPORT_FORMAT: Self = Self(8);
    /// On-device report buffer capacity.
    pub const REPORT_BUFFER_CAPACITY: Self = Self(9);
    /// Light alert threshold.
    pub const LIGHT_LEVEL: Self = Self(10);
    /// Humidity alert threshold.
    pub const HUMIDITY_LEVEL: Self = Self(11);

    /// Wrap a raw wire code, recognized or not.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    /// The single-byte wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether this code is named in this contract version.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 <= Self::HUMIDITY_LEVEL.0
    }
}

impl fmt::Display for LimitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TEMP_HIGH => f.write_str("tempHigh"),
            Self::TEMP_LOW => f.write_str("tempLow"),
            Self::MOVEMENT_LEVEL => f.write_str("movementLevel"),
            Self::BATTERY_LEVEL => f.write_str("batteryLevel"),
            Self::NOTIFICATIONS => f.write_str("notifications"),
            Self::TEMP_SCALE => f.write_str("tempScale"),
            Self::COLOUR => f.write_str("colour"),
            Self::INTERVAL => f.write_str("interval"),
            Self::REPORT_FORMAT => f.write_str("reportFormat"),
            Self::REPORT_BUFFER_CAPACITY => f.write_str("reportBufferCapacity"),
            Self::LIGHT_LEVEL => f.write_str("lightLevel"),
            Self::HUMIDITY_LEVEL => f.write_str("humidityLevel"),
            Self(code) => write!(f, "unknown({code})"),
        }
    }
}

/// A per-user, per-device configurable threshold or setting.
///
/// Keyed by (`user_id`, `device_id`, `limit_type`). Exactly one of the
/// numeric or string value is meaningful for a given type; which one is the
/// service's rule, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limit {
    pub user_id: UserId,
    pub device_id: DeviceId,
    pub limit_type: LimitType,
    /// Numeric value; 0 when the type carries its value as a string.
    #[serde(default)]
    pub limit_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_value_string: Option<String>,
    /// Absent on the wire means no modifier flags.
    #[serde(default, deserialize_with = "wire::null_default")]
    pub limit_flag: LimitFlags,
}

/// A limit queued for delivery to hardware on the device's next check-in.
///
/// Device-scoped rather than user-scoped: only owner-set limits of types the
/// hardware understands propagate, so no user id is carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushLimit {
    pub device_id: DeviceId,
    pub limit_type: LimitType,
    #[serde(default)]
    pub limit_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_value_string: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compare_limit_types_by_code() {
        assert_ne!(LimitType::TEMP_HIGH, LimitType::TEMP_LOW);
        assert_eq!(LimitType::from_code(7), LimitType::INTERVAL);
        assert_eq!(LimitType::from_code(7), LimitType::from_code(7));
    }

    #[test]
    fn should_roundtrip_unrecognized_code_unchanged() {
        let unknown = LimitType::from_code(200);
        assert!(!unknown.is_known());
        let json = serde_json::to_string(&unknown).unwrap();
        assert_eq!(json, "200");
        let parsed: LimitType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.code(), 200);
    }

    #[test]
    fn should_know_all_twelve_codes() {
        for code in 0..=11 {
            assert!(LimitType::from_code(code).is_known());
        }
        assert!(!LimitType::from_code(12).is_known());
    }

    #[test]
    fn should_encode_limit_type_as_bare_byte() {
        let json = serde_json::to_string(&LimitType::TEMP_SCALE).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn should_display_known_and_unknown_codes() {
        assert_eq!(LimitType::TEMP_HIGH.to_string(), "tempHigh");
        assert_eq!(LimitType::from_code(42).to_string(), "unknown(42)");
    }

    #[test]
    fn should_default_value_and_flag_when_absent() {
        let json = format!(
            r#"{{"userId":"{}","deviceId":"abc123","limitType":4}}"#,
            UserId::new()
        );
        let limit: Limit = serde_json::from_str(&json).unwrap();
        assert_eq!(limit.limit_value, 0.0);
        assert!(limit.limit_value_string.is_none());
        assert!(limit.limit_flag.is_empty());
    }

    #[test]
    fn should_accept_null_limit_flag_as_empty() {
        let json = format!(
            r#"{{"userId":"{}","deviceId":"abc123","limitType":0,"limitValue":28.5,"limitFlag":null}}"#,
            UserId::new()
        );
        let limit: Limit = serde_json::from_str(&json).unwrap();
        assert!(limit.limit_flag.is_empty());
        assert_eq!(limit.limit_value, 28.5);
    }

    #[test]
    fn should_roundtrip_limit_with_all_fields_present() {
        let limit = Limit {
            user_id: UserId::new(),
            device_id: DeviceId::from("abc123"),
            limit_type: LimitType::COLOUR,
            limit_value: 0.0,
            limit_value_string: Some("#ff8800".to_owned()),
            limit_flag: LimitFlags::OWNER_SHARED,
        };
        let json = serde_json::to_string(&limit).unwrap();
        let parsed: Limit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, limit);
    }

    #[test]
    fn should_roundtrip_push_limit_without_user_scope() {
        let push = PushLimit {
            device_id: DeviceId::from("abc123"),
            limit_type: LimitType::INTERVAL,
            limit_value: 300.0,
            limit_value_string: None,
        };
        let json = serde_json::to_string(&push).unwrap();
        assert!(!json.contains("userId"));
        assert!(!json.contains("limitValueString"));
        let parsed: PushLimit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, push);
    }
}
