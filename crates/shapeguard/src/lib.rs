//! Exact flat shape validation.
//!
//! shapeguard checks that a record has exactly the fields a schema declares,
//! each holding a value of the declared kind (`string`, `number`, `boolean`,
//! `array` or `object`).
//!
//! # Crate Structure
//!
//! - [`validate`] / [`make_validator`]: the predicate, direct or curried
//! - [`Schema`], [`Record`], [`Value`]: the data model
//! - [`SchemaRegistry`]: named schemas loaded from strings or a directory
//!
//! The `shapeguard` binary (behind the `cli` feature) exposes the same checks
//! from the command line.

pub use shapeguard_core::*;
