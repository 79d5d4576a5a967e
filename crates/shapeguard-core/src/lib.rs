//! Flat runtime shape validation.
//!
//! A [`Schema`] maps field names to one of five [`Kind`]s. A [`Record`]
//! matches when it has exactly the schema's fields and each field's value is
//! of the declared kind. The verdict is a plain `bool`:
//!
//! ```
//! use shapeguard_core::{make_validator, validate, Kind, Record, Schema};
//!
//! let schema = Schema::new().with("brand", Kind::String);
//! assert!(validate(&schema, &Record::new().with("brand", "Apple")));
//!
//! let is_laptop = make_validator(schema);
//! assert!(!is_laptop(&Record::new().with("brand", 1)));
//! ```
//!
//! Arrays are their own kind and never match `object`. `Null` matches
//! nothing, and NaN is not a `number`.

pub mod config;
pub mod error;
pub mod kind;
pub mod registry;
pub mod schema;
pub mod validator;
pub mod value;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use kind::Kind;
pub use registry::SchemaRegistry;
pub use schema::Schema;
pub use validator::{make_validator, validate, Validator};
pub use value::{Record, Scalar, Value};
