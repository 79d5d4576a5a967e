//! Flat candidate values.
//!
//! A [`Record`] maps field names to [`Value`]s. Collections hold only
//! [`Scalar`]s, so nothing below the first level can itself be a collection.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::error::{Result, SchemaError};
use crate::kind::Kind;

/// An element of a flat array or object.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    String(String),
    Number(f64),
    Boolean(bool),
}

/// A single field value.
///
/// `Null` is the missing-equivalent sentinel and matches no kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<Scalar>),
    Object(BTreeMap<String, Scalar>),
}

impl Value {
    /// The runtime kind of this value, or `None` for `Null`.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Null => None,
            Value::String(_) => Some(Kind::String),
            Value::Number(_) => Some(Kind::Number),
            Value::Boolean(_) => Some(Kind::Boolean),
            Value::Array(_) => Some(Kind::Array),
            Value::Object(_) => Some(Kind::Object),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::String(s) => Value::String(s),
            Scalar::Number(n) => Value::Number(n),
            Scalar::Boolean(b) => Value::Boolean(b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Scalar>> for Value {
    fn from(map: BTreeMap<String, Scalar>) -> Self {
        Value::Object(map)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

/// A flat candidate value: field name to [`Value`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert a field, returning the previous value if one was present.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// The value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Check if `field` is present, even as `Null`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// Parse a record from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Json = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Convert a JSON document into a record.
    ///
    /// The document must be an object whose members are scalars, arrays of
    /// scalars, or objects of scalars.
    pub fn from_json(value: &Json) -> Result<Self> {
        let Json::Object(map) = value else {
            return Err(SchemaError::InvalidValue(format!(
                "expected a JSON object, found {}",
                json_type_name(value)
            )));
        };

        let mut record = Record::new();
        for (field, member) in map {
            record.insert(field.as_str(), value_from_json(field, member)?);
        }
        Ok(record)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn value_from_json(field: &str, value: &Json) -> Result<Value> {
    match value {
        Json::Array(items) => items
            .iter()
            .map(|item| scalar_from_json(field, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Json::Object(map) => map
            .iter()
            .map(|(key, item)| scalar_from_json(field, item).map(|scalar| (key.clone(), scalar)))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Value::Object),
        scalar => scalar_from_json(field, scalar).map(Value::from),
    }
}

fn scalar_from_json(field: &str, value: &Json) -> Result<Scalar> {
    match value {
        Json::Null => Ok(Scalar::Null),
        Json::Bool(b) => Ok(Scalar::Boolean(*b)),
        Json::String(s) => Ok(Scalar::String(s.clone())),
        Json::Number(n) => n.as_f64().map(Scalar::Number).ok_or_else(|| {
            SchemaError::InvalidValue(format!("field {field:?}: number {n} is not representable"))
        }),
        Json::Array(_) | Json::Object(_) => Err(SchemaError::InvalidValue(format!(
            "field {field:?}: nested {} values are not supported",
            json_type_name(value)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
