use std::fmt;

use crate::kind::Kind;
use crate::schema::Schema;
use crate::value::{Record, Value};

/// Check `value` against `schema`.
///
/// Returns `true` iff the record's field set equals the schema's field set
/// and every field's kind matches its declared tag. `Null` matches no kind and
/// NaN does not count as a `number`.
pub fn validate(schema: &Schema, value: &Record) -> bool {
    match check(schema, value) {
        Ok(()) => true,
        Err(rejection) => {
            tracing::debug!(%rejection, "record rejected");
            false
        }
    }
}

/// Curry a schema into a reusable predicate.
///
/// `make_validator(schema.clone())(&value) == validate(&schema, &value)` for
/// every record.
pub fn make_validator(schema: Schema) -> impl Fn(&Record) -> bool + Send + Sync + 'static {
    let validator = Validator::new(schema);
    move |value| validator.validate(value)
}

/// A schema bound for repeated validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    schema: Schema,
}

impl Validator {
    /// Bind a schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// The bound schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Same verdict as [`validate`] with the bound schema.
    pub fn validate(&self, value: &Record) -> bool {
        validate(&self.schema, value)
    }
}

impl From<Schema> for Validator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

/// First reason a record failed. Only surfaces in debug logs.
#[derive(Debug, PartialEq)]
enum Rejection<'a> {
    FieldCount { expected: usize, found: usize },
    UnknownField(&'a str),
    NullField(&'a str),
    KindMismatch {
        field: &'a str,
        expected: Kind,
        found: Kind,
    },
    NotANumber(&'a str),
}

impl fmt::Display for Rejection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Rejection::UnknownField(field) => write!(f, "field {field:?} is not in the schema"),
            Rejection::NullField(field) => write!(f, "field {field:?} is null"),
            Rejection::KindMismatch {
                field,
                expected,
                found,
            } => write!(f, "field {field:?} expected {expected}, found {found}"),
            Rejection::NotANumber(field) => write!(f, "field {field:?} is NaN"),
        }
    }
}

fn check<'a>(schema: &Schema, value: &'a Record) -> Result<(), Rejection<'a>> {
    // Equal counts plus "every value key is in the schema" means no schema key is missing.
    if schema.len() != value.len() {
        return Err(Rejection::FieldCount {
            expected: schema.len(),
            found: value.len(),
        });
    }

    for (field, field_value) in value {
        let field = field.as_str();
        let expected = schema.get(field).ok_or(Rejection::UnknownField(field))?;

        // Arrays report their own kind, so they never satisfy `object`.
        let Some(found) = field_value.kind() else {
            return Err(Rejection::NullField(field));
        };

        if found != expected {
            return Err(Rejection::KindMismatch {
                field,
                expected,
                found,
            });
        }

        if let Value::Number(n) = field_value {
            if n.is_nan() {
                return Err(Rejection::NotANumber(field));
            }
        }
    }

    Ok(())
}
