//! Request and response envelopes for the platform API.
//!
//! Grouped by namespace module, one record per operation. There is no
//! behavioral polymorphism between envelopes and deliberately no shared
//! base type; the module path is the grouping.

pub mod device;
pub mod group;
