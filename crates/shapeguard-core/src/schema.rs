use std::collections::btree_map;
use std::collections::BTreeMap;

use serde_json::{json, Map, Value as Json};

use crate::error::{Result, SchemaError};
use crate::kind::Kind;
use crate::value::json_type_name;

/// JSON Schema dialect used by [`Schema::to_json_schema`].
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// A flat schema: field name to declared [`Kind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: BTreeMap<String, Kind>,
}

impl Schema {
    /// An empty schema. It only accepts the empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, kind: Kind) -> Self {
        self.insert(field, kind);
        self
    }

    /// Declare a field, returning the previously declared kind if any.
    pub fn insert(&mut self, field: impl Into<String>, kind: Kind) -> Option<Kind> {
        self.fields.insert(field.into(), kind)
    }

    /// The kind declared for `field`, if any.
    pub fn get(&self, field: &str) -> Option<Kind> {
        self.fields.get(field).copied()
    }

    /// Check if `field` is declared.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Kind> {
        self.fields.iter()
    }

    /// Parse a schema from JSON text such as `{"brand": "string"}`.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Json = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Build a schema from a JSON object of field name to tag.
    ///
    /// Unrecognized tags fail here with [`SchemaError::UnknownKind`] rather
    /// than surfacing later as failed validations.
    pub fn from_json(value: &Json) -> Result<Self> {
        let Json::Object(map) = value else {
            return Err(SchemaError::InvalidSchema(format!(
                "expected a JSON object, found {}",
                json_type_name(value)
            )));
        };

        let mut schema = Schema::new();
        for (field, tag) in map {
            let Json::String(tag) = tag else {
                return Err(SchemaError::InvalidSchema(format!(
                    "field {field:?}: tag must be a string, found {}",
                    json_type_name(tag)
                )));
            };
            let kind = Kind::from_tag(tag).ok_or_else(|| SchemaError::UnknownKind {
                field: field.clone(),
                tag: tag.clone(),
            })?;
            schema.insert(field.as_str(), kind);
        }
        Ok(schema)
    }

    /// Render as the schema's own JSON form (`{"field": "tag", ...}`).
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.fields
                .iter()
                .map(|(field, kind)| (field.clone(), Json::from(kind.as_str())))
                .collect(),
        )
    }

    /// Render an equivalent JSON Schema 2020-12 document.
    ///
    /// Every field is required and no other properties are allowed, so a
    /// JSON Schema validator accepts exactly the JSON records this schema does.
    pub fn to_json_schema(&self) -> Json {
        let properties: Map<String, Json> = self
            .fields
            .iter()
            .map(|(field, kind)| (field.clone(), kind_json_schema(*kind)))
            .collect();
        let required: Vec<&str> = self.fields.keys().map(String::as_str).collect();

        json!({
            "$schema": JSON_SCHEMA_DIALECT,
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, Kind)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, Kind)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, kind)| (field.into(), kind))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a Kind);
    type IntoIter = btree_map::Iter<'a, String, Kind>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn kind_json_schema(kind: Kind) -> Json {
    const SCALAR: [&str; 4] = ["string", "number", "boolean", "null"];

    match kind {
        Kind::String => json!({ "type": "string" }),
        Kind::Number => json!({ "type": "number" }),
        Kind::Boolean => json!({ "type": "boolean" }),
        Kind::Array => json!({ "type": "array", "items": { "type": SCALAR } }),
        Kind::Object => json!({
            "type": "object",
            "additionalProperties": { "type": SCALAR },
        }),
    }
}
