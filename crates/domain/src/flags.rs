//! Capability and modifier flag sets.
//!
//! Both sets are thin wrappers over their raw wire integer. Construction
//! from a raw value accepts and preserves bits this version does not name,
//! so a newer peer's flags survive a decode→encode round trip unchanged.
//! Records are immutable values, so set/clear are expressed as `with` /
//! `without` returning a new value.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Device-level capability and state flags.
///
/// Travels on the wire as a bare unsigned integer. An absent flags field
/// decodes as the empty set, never as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceFlags(u64);

impl DeviceFlags {
    /// Device data is private; access requires a previously-issued share
    /// token.
    pub const LOCKED: Self = Self(1);
    /// Device advertises a temperature sensor.
    pub const TEMPERATURE: Self = Self(1 << 2);
    /// Device advertises a movement (accelerometer) sensor.
    pub const MOVEMENT: Self = Self(1 << 3);
    /// Device advertises a light sensor.
    pub const LIGHT: Self = Self(1 << 4);

    /// Wrap a raw wire value, keeping unrecognized bits.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw wire value, unrecognized bits included.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// This set with the bits of `other` added.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// This set with the bits of `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DeviceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

/// Per-limit modifier flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitFlags(u8);

impl LimitFlags {
    /// Limit is visible to and settable by the device owner only, and is
    /// included in standard limit listings.
    pub const OWNER_SHARED: Self = Self(1);

    /// Wrap a raw wire value, keeping unrecognized bits.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw wire value, unrecognized bits included.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// This set with the bits of `other` added.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// This set with the bits of `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LimitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_test_set_and_clear_idempotently() {
        let flags = DeviceFlags::default();
        assert!(!flags.contains(DeviceFlags::LOCKED));
        assert!(flags.with(DeviceFlags::LOCKED).contains(DeviceFlags::LOCKED));
        assert!(
            !flags
                .with(DeviceFlags::LOCKED)
                .without(DeviceFlags::LOCKED)
                .contains(DeviceFlags::LOCKED)
        );
    }

    #[test]
    fn should_compose_flags_with_bitor() {
        let flags = DeviceFlags::TEMPERATURE | DeviceFlags::LIGHT;
        assert!(flags.contains(DeviceFlags::TEMPERATURE));
        assert!(flags.contains(DeviceFlags::LIGHT));
        assert!(!flags.contains(DeviceFlags::MOVEMENT));
    }

    #[test]
    fn should_keep_capability_bits_at_documented_positions() {
        assert_eq!(DeviceFlags::LOCKED.raw(), 1);
        assert_eq!(DeviceFlags::TEMPERATURE.raw(), 1 << 2);
        assert_eq!(DeviceFlags::MOVEMENT.raw(), 1 << 3);
        assert_eq!(DeviceFlags::LIGHT.raw(), 1 << 4);
        assert_eq!(LimitFlags::OWNER_SHARED.raw(), 1);
    }

    #[test]
    fn should_preserve_unknown_bits_through_roundtrip() {
        // Bit 40 is unassigned in this version; a newer peer may set it.
        let raw = (1u64 << 40) | DeviceFlags::LOCKED.raw();
        let flags = DeviceFlags::from_raw(raw);
        let json = serde_json::to_string(&flags).unwrap();
        let parsed: DeviceFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.raw(), raw);
        assert!(parsed.contains(DeviceFlags::LOCKED));
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&DeviceFlags::LOCKED).unwrap();
        assert_eq!(json, "1");
        let json = serde_json::to_string(&LimitFlags::from_raw(5)).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn should_report_empty_only_when_no_bits_set() {
        assert!(DeviceFlags::default().is_empty());
        assert!(!DeviceFlags::LOCKED.is_empty());
        assert!(LimitFlags::default().is_empty());
    }

    #[test]
    fn should_preserve_unknown_limit_flag_bits() {
        let flags = LimitFlags::from_raw(0b1000_0010);
        let json = serde_json::to_string(&flags).unwrap();
        let parsed: LimitFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.raw(), 0b1000_0010);
        assert!(!parsed.contains(LimitFlags::OWNER_SHARED));
    }
}
