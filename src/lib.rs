#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Schema
//!
//! Schema-driven access to Amazon DynamoDB tables.
//!
//! ## Overview
//!
//! A table is described once, in a JSON schema listing its attributes, its primary
//! key and its secondary indexes. From that schema this crate:
//! - generates a Rust module per table (record type, index constants, projections
//!   and a typed query builder) with the `dynamodb-schema-gen` binary,
//! - resolves a set of attribute equalities to the first secondary index whose hash
//!   key is bound, falling back to the primary key, and splits them into a key
//!   condition and a residual filter,
//! - runs the resulting requests through a small [`store::Store`] façade, building
//!   every expression string and placeholder for you.
//!
//! ## Quick Example
//!
//! With a module generated from the `applingo-dictionary` schema:
//!
//! ```rust,ignore
//! use dynamodb_schema::store::{Store, StoreConfig};
//!
//! mod dictionary; // generated by dynamodb-schema-gen
//!
//! # async fn example() -> dynamodb_schema::error::Result<()> {
//! let store = Store::connect(&StoreConfig::from_env()).await;
//! // IndexSide is selected: "side" is the key condition, "category" the filter
//! let query = dictionary::QueryBuilder::new()
//!     .with_side("front")
//!     .with_category("food")
//!     .limit(20)
//!     .build()?;
//! let (words, cursor) = store.query_as::<dictionary::SchemaItem>(query).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@schema`] - Table schemas and index projections
//! - [`mod@codegen`] - Rust source generation from schemas
//! - [`mod@planner`] - Index selection for equality queries
//! - [`mod@store`] - Store façade (Get, Put, Update, Delete, Query, Scan)
//! - [`mod@read`] / [`mod@write`] - The underlying store requests

pub mod codegen;

/// Common utilities for keys, conditions, attribute selection and cursors.
pub mod common;

pub mod decode;

pub mod error;

pub mod planner;

/// Read operations for retrieving data from DynamoDB tables.
///
/// This module provides operations for:
/// - Getting individual items by key
/// - Querying a table or a secondary index with key conditions
/// - Scanning entire tables one page at a time
pub mod read;

pub mod schema;

pub mod store;

pub mod value;

/// Write operations for modifying data in DynamoDB tables.
///
/// This module provides operations for:
/// - Putting new items or replacing existing ones
/// - Updating items with set, add and remove actions
/// - Deleting items by key
pub mod write;
