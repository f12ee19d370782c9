//! # sensorgrid-domain
//!
//! Shared data contracts for the sensorgrid telemetry-device platform.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, wire error conventions
//! - Define **Devices** (telemetry-reporting hardware units) and their
//!   capability/state flags
//! - Define **Groups** (user-owned named collections of devices) and
//!   membership edges
//! - Define **Access permissions** (who may view a device's data) and the
//!   share-token envelopes that grant them
//! - Define **Limits** (per-user, per-device configurable thresholds and
//!   settings) and the device-scoped push queue for them
//! - Define **Firmware** version records and **Observations** (timestamped
//!   sensor readings)
//! - Define the request/response envelopes for group and device operations
//! - Temperature scale conversion and display formatting
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from the service layer, storage, or
//! transport crates. Persistence, routing, authorization, and aggregation
//! consume these types; they are never implemented here.
//!
//! ## Validation rule
//! This crate *represents* permissions, limits, and sensor values; it does
//! not *check* them. Values outside their expected domain (an unrecognized
//! limit-type code, a negative share count) are carried as-is so that the
//! model and the enforcing service never disagree about what was said on
//! the wire.

pub mod error;
pub mod id;
pub mod wire;

pub mod api;
pub mod device;
pub mod firmware;
pub mod flags;
pub mod group;
pub mod limit;
pub mod observation;
pub mod temperature;
