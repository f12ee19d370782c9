//! Observation — one timestamped sensor reading from a device.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// A single sensor report.
///
/// `id` is a serial assigned by storage, strictly increasing in insertion
/// order. `obstime` is milliseconds since the Unix epoch carried as a
/// floating-point number — a legacy wire quirk older devices depend on, so
/// it must never be tightened to an integer. Temperature is always the raw
/// celsius-equivalent sensor value; converting to a display scale is a
/// presentation concern and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: i64,
    pub device_id: DeviceId,
    /// Milliseconds since the Unix epoch, floating point.
    pub obstime: f64,
    /// 1 while the battery is charging, 0 otherwise. Out-of-range values
    /// are carried as-is.
    pub charging: u8,
    /// Primary MCU firmware version at report time.
    pub firmware: String,
    /// Radio/wifi MCU firmware version, absent on single-MCU hardware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi_firmware: Option<String>,
    pub battery: f64,
    pub temp: f64,
    pub light: f64,
    pub humidity: f64,
    // Acceleration axes: current use upstream is unconfirmed; carried as
    // reported.
    pub accelx: f64,
    pub accely: f64,
    pub accelz: f64,
}

impl Observation {
    /// The report time in seconds since the Unix epoch.
    #[must_use]
    pub fn obstime_seconds(&self) -> f64 {
        self.obstime / 1000.0
    }

    /// The report time as a UTC timestamp, if `obstime` is representable.
    #[must_use]
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        if !self.obstime.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(self.obstime as i64)
    }
}
