//! Declarative table schemas.
//!
//! A schema is loaded from JSON, validated once, and then treated as immutable input
//! to the code generator.
//!
//! ```rust
//! use dynamodb_schema::schema::TableSchema;
//!
//! let schema = TableSchema::from_json(r#"{
//!     "table_name": "dictionary",
//!     "hash_key": "id",
//!     "attributes": [
//!         {"name": "id", "type": "S"},
//!         {"name": "side", "type": "S"}
//!     ],
//!     "secondary_indexes": [
//!         {"name": "IndexSide", "hash_key": "side", "projection_type": "ALL"}
//!     ]
//! }"#)?;
//! assert_eq!(schema.secondary_indexes[0].name, "IndexSide");
//! # Ok::<(), dynamodb_schema::error::Error>(())
//! ```

/// Attribute projections of secondary indexes.
pub mod projection;

use crate::error::{Error, Result};

use serde::{Deserialize, Deserializer};
use std::collections;

pub use projection::ProjectionTable;

/// Scalar type of an attribute.
///
/// Parsed from the single-letter codes `S`, `N` and `B`; any other code is kept as
/// [`ScalarType::Dynamic`] and mapped to a dynamically typed field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "String")]
pub enum ScalarType {
    /// `S`, text.
    String,
    /// `N`, integer.
    Number,
    /// `B`, boolean.
    Boolean,
    /// Any other code.
    Dynamic(String),
}

impl From<String> for ScalarType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "S" => Self::String,
            "N" => Self::Number,
            "B" => Self::Boolean,
            _ => Self::Dynamic(code),
        }
    }
}

/// A named, typed attribute.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Attribute {
    /// Attribute name as stored.
    pub name: String,
    /// Scalar type.
    #[serde(rename = "type")]
    pub scalar_type: ScalarType,
}

impl Attribute {
    /// Attribute `name` of type `scalar_type`.
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
        }
    }
}

/// Which attributes a secondary index carries.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionType {
    /// Every table attribute.
    All,
    /// The index keys only.
    KeysOnly,
    /// The index keys plus an explicit list of attributes.
    Include,
}

/// A secondary index over the table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SecondaryIndex {
    /// Index name, unique within the table.
    pub name: String,
    /// Hash key attribute.
    pub hash_key: String,
    /// Optional range key attribute.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub range_key: Option<String>,
    /// Projection type.
    pub projection_type: ProjectionType,
    /// Projected non-key attributes, only meaningful for [`ProjectionType::Include`].
    #[serde(default)]
    pub non_key_attributes: Vec<String>,
}

/// Declarative description of a table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct TableSchema {
    /// Table name.
    #[serde(rename = "table_name")]
    pub name: String,
    /// Primary hash key attribute.
    pub hash_key: String,
    /// Optional primary range key attribute.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub range_key: Option<String>,
    /// Table specific attributes, in declaration order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Attributes shared by every table, placed after [`TableSchema::attributes`].
    #[serde(default)]
    pub common_attributes: Vec<Attribute>,
    /// Secondary indexes, in declaration order.
    #[serde(default)]
    pub secondary_indexes: Vec<SecondaryIndex>,
}

// the schema files leave optional keys as empty strings
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}

impl TableSchema {
    /// Parse and validate a schema document.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(json)
            .map_err(|err| Error::schema(format!("malformed schema document: {err}")))?;
        schema.validate()?;
        Ok(schema)
    }

    /// Table attributes followed by common attributes.
    pub fn all_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().chain(self.common_attributes.iter())
    }

    /// Look up a declared attribute.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.all_attributes().find(|attribute| attribute.name == name)
    }

    /// Check the schema invariants.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::schema("table name is empty"));
        }
        let mut names = collections::HashSet::new();
        for attribute in self.all_attributes() {
            if attribute.name.is_empty() {
                return Err(Error::schema(format!(
                    "table '{}' declares an attribute with an empty name",
                    self.name
                )));
            }
            if !names.insert(attribute.name.as_str()) {
                return Err(Error::schema(format!(
                    "table '{}' declares attribute '{}' more than once",
                    self.name, attribute.name
                )));
            }
        }
        self.require_declared("primary hash key", &self.hash_key)?;
        if let Some(range_key) = &self.range_key {
            self.require_declared("primary range key", range_key)?;
        }
        let mut index_names = collections::HashSet::new();
        for index in &self.secondary_indexes {
            if index.name.is_empty() {
                return Err(Error::schema(format!(
                    "table '{}' declares a secondary index with an empty name",
                    self.name
                )));
            }
            if !index_names.insert(index.name.as_str()) {
                return Err(Error::schema(format!(
                    "table '{}' declares index '{}' more than once",
                    self.name, index.name
                )));
            }
            self.validate_index(index)?;
        }
        Ok(())
    }

    fn validate_index(&self, index: &SecondaryIndex) -> Result<()> {
        let role = format!("hash key of index '{}'", index.name);
        self.require_declared(&role, &index.hash_key)?;
        if let Some(range_key) = &index.range_key {
            let role = format!("range key of index '{}'", index.name);
            self.require_declared(&role, range_key)?;
        }
        if index.projection_type == ProjectionType::Include && index.non_key_attributes.is_empty()
        {
            return Err(Error::schema(format!(
                "index '{}' uses INCLUDE projection without non_key_attributes",
                index.name
            )));
        }
        for attribute in &index.non_key_attributes {
            let role = format!("projected attribute of index '{}'", index.name);
            self.require_declared(&role, attribute)?;
        }
        Ok(())
    }

    fn require_declared(&self, role: &str, name: &str) -> Result<()> {
        if self.attribute(name).is_none() {
            return Err(Error::schema(format!(
                "{role} '{name}' is not a declared attribute of table '{}'",
                self.name
            )));
        }
        Ok(())
    }

    /// Attributes retrievable through each secondary index.
    pub fn projection_table(&self) -> ProjectionTable {
        ProjectionTable::new(self)
    }
}
