use std::fmt;
use std::io;

use shapeguard_core::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
/// Returned only when a well-formed record fails validation.
pub const DATA_INVALID: i32 = 60;
/// The record is not valid JSON or is not a flat object.
pub const RECORD_MALFORMED: i32 = 61;
/// The schema is not valid JSON, is not an object, or names an unknown kind.
pub const SCHEMA_INVALID: i32 = 62;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match &err {
        SchemaError::InvalidJson(_)
        | SchemaError::InvalidSchema(_)
        | SchemaError::UnknownKind { .. } => SCHEMA_INVALID,
        SchemaError::InvalidValue(_) => RECORD_MALFORMED,
        SchemaError::NoSchema(_) => USAGE,
        SchemaError::LoadFailed(_) => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn record_error(context: &str, err: SchemaError) -> CliError {
    match err {
        SchemaError::InvalidJson(_) | SchemaError::InvalidValue(_) => {
            CliError::new(RECORD_MALFORMED, format!("{context}: {err}"))
        }
        other => schema_error(context, other),
    }
}
