//! Wire encode/decode helpers.
//!
//! All contracts serialize to UTF-8 JSON objects with field names. The
//! conventions, applied uniformly across the crate:
//!
//! - Optional fields are omitted when absent; decoders accept both a
//!   missing key and an explicit `null` as "absent".
//! - Flag sets and limit-type codes travel as bare unsigned integers,
//!   never as named variants.
//! - Unknown extra fields and unrecognized flag bits or type codes never
//!   fail a decode (forward compatibility).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WireError;

/// Encode a record to its JSON wire form.
///
/// # Errors
///
/// Returns [`WireError::Encode`] if the record cannot be rendered as JSON.
pub fn encode<T: Serialize>(value: &T) -> Result<String, WireError> {
    serde_json::to_string(value).map_err(|source| WireError::Encode {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Decode a record from its JSON wire form.
///
/// Decoding is all-or-nothing: on failure no partial record is produced.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the payload is malformed for the
/// target record (wrong field type, missing required field).
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, WireError> {
    serde_json::from_str(payload).map_err(|source| WireError::Decode {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Deserialize a field that may be missing or explicitly `null`, producing
/// the type's default in both cases. Used with `#[serde(default,
/// deserialize_with = "...")]` on fields such as flag sets whose absence
/// means "empty".
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
