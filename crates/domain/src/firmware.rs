//! Firmware version records.

use serde::{Deserialize, Serialize};

/// Which microcontroller a firmware image targets.
///
/// Open wrapper over the single-byte wire code so that images for a
/// controller added later still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FirmwareKind(u8);

impl FirmwareKind {
    /// The primary (sensor) microcontroller.
    pub const DEVICE: Self = Self(0);
    /// The radio/wifi microcontroller.
    pub const WIFI: Self = Self(1);

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
}

/// One released firmware version, linked into a per-kind version chain.
///
/// `version` is the primary key. `supersedes` points at the prior version,
/// `obsoleted_by` at the next; the chain must not cycle, which the
/// release process guarantees — this record only carries the links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firmware {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: FirmwareKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersedes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsoleted_by: Option<String>,
}
