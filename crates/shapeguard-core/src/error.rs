/// Errors raised while building schemas, decoding values, or loading registries.
///
/// A failed validation is never an error; it is a `false` verdict.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input is not valid JSON.
    #[error("input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The schema document has the wrong shape.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A schema field names a kind outside the recognized set.
    #[error("unknown kind {tag:?} for field {field:?} (expected string, number, boolean, array or object)")]
    UnknownKind { field: String, tag: String },

    /// The value document cannot be represented as a flat record.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A schema file could not be loaded.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// No schema registered under the given name.
    #[error("no schema registered under {0:?}")]
    NoSchema(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
