//! Wire error conventions.
//!
//! Only one kind of failure originates in this crate: a record that cannot
//! be decoded from (or encoded to) its wire form. Domain-invalid but
//! well-formed values are not errors here; they decode successfully and are
//! carried as-is for the service layer to judge.

/// Failure to move a record across the wire boundary.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload was not valid JSON for the target record. Decoding is
    /// all-or-nothing: a failed decode never partially populates a record.
    #[error("failed to decode {type_name} from wire payload")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be rendered as JSON.
    #[error("failed to encode {type_name} to wire payload")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
