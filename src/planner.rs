//! Index selection for equality queries.
//!
//! A [`QueryBuilder`] collects attribute equalities, picks the first secondary index
//! (in declaration order) whose hash key is bound, falls back to the primary key,
//! and splits the equalities into a key condition and a residual filter.
//!
//! ```rust
//! use dynamodb_schema::planner::{IndexKeys, IndexTarget, KeySchema, QueryBuilder};
//!
//! const DICTIONARY: KeySchema = KeySchema {
//!     table_name: "dictionary",
//!     hash_key: "id",
//!     range_key: None,
//!     secondary_indexes: &[IndexKeys {
//!         name: "IndexSide",
//!         hash_key: "side",
//!         range_key: None,
//!         projection: &["id", "side", "category"],
//!     }],
//! };
//!
//! let resolution = QueryBuilder::new(&DICTIONARY)
//!     .set("side", "front")
//!     .set("category", "food")
//!     .resolve()?;
//! assert_eq!(resolution.target, IndexTarget::Secondary("IndexSide"));
//! assert_eq!(resolution.filter_condition.len(), 1);
//! # Ok::<(), dynamodb_schema::error::Error>(())
//! ```

use crate::{
    common::{
        condition::{AttributeCondition, Condition, ConditionExpression},
        cursor::Cursor,
        selection::Selection,
    },
    error::{Error, Result},
    read,
    value::ScalarValue,
};

use indexmap::IndexMap;

/// Key structure of a secondary index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexKeys {
    /// Index name.
    pub name: &'static str,
    /// Hash key attribute.
    pub hash_key: &'static str,
    /// Optional range key attribute.
    pub range_key: Option<&'static str>,
    /// Attributes retrievable through the index.
    pub projection: &'static [&'static str],
}

/// Key structures of a table, in the order resolution visits them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeySchema {
    /// Table name.
    pub table_name: &'static str,
    /// Primary hash key attribute.
    pub hash_key: &'static str,
    /// Optional primary range key attribute.
    pub range_key: Option<&'static str>,
    /// Secondary indexes in declaration order.
    pub secondary_indexes: &'static [IndexKeys],
}

/// The key structure a query was resolved to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexTarget {
    /// The table's primary key.
    Primary,
    /// A secondary index, by name.
    Secondary(&'static str),
}

impl IndexTarget {
    /// Index name to send to the store, `None` for the primary key.
    pub fn index_name(&self) -> Option<&'static str> {
        match *self {
            Self::Primary => None,
            Self::Secondary(name) => Some(name),
        }
    }
}

/// Outcome of index resolution.
///
/// Every bound attribute appears exactly once, either in the key condition or in
/// the filter condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Selected key structure.
    pub target: IndexTarget,
    /// Equality on the hash key, then on the range key when it is bound.
    pub key_condition: Vec<AttributeCondition>,
    /// Equalities on every other bound attribute, in the order they were first set.
    pub filter_condition: Vec<AttributeCondition>,
}

struct Selected {
    index: Option<&'static IndexKeys>,
    hash_key: &'static str,
    range_key: Option<&'static str>,
}

/// Single-use builder of an index query.
///
/// Setting an attribute twice keeps the last value.
#[derive(Clone, Debug)]
pub struct QueryBuilder<'a> {
    schema: &'a KeySchema,
    values: IndexMap<String, ScalarValue>,
    limit: Option<i32>,
    scan_index_forward: Option<bool>,
    cursor: Option<Cursor>,
    sort_key: Option<Condition>,
}

impl<'a> QueryBuilder<'a> {
    /// Empty builder over `schema`.
    pub fn new(schema: &'a KeySchema) -> Self {
        Self {
            schema,
            values: IndexMap::new(),
            limit: None,
            scan_index_forward: None,
            cursor: None,
            sort_key: None,
        }
    }

    /// Bind `name` to `value`.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        let name = name.into();
        if let Some(previous) = self.values.insert(name.clone(), value.into()) {
            tracing::debug!(attribute = %name, ?previous, "overwriting bound attribute");
        }
        self
    }

    /// Bound value of `name`.
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.values.get(name)
    }

    /// Maximum number of items evaluated per page.
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Return items in descending range key order.
    pub fn order_by_desc(mut self) -> Self {
        self.scan_index_forward = Some(false);
        self
    }

    /// Resume after the page that returned `cursor`.
    pub fn start_from(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Range operator on the resolved range key.
    ///
    /// The resolved key structure must have a range key that is not bound by an
    /// equality, otherwise [`QueryBuilder::build`] fails with a validation error.
    pub fn sort_key(mut self, condition: Condition) -> Self {
        self.sort_key = Some(condition);
        self
    }

    fn select(&self) -> Result<Selected> {
        let index = self
            .schema
            .secondary_indexes
            .iter()
            .find(|index| self.values.contains_key(index.hash_key));
        match index {
            Some(index) => Ok(Selected {
                index: Some(index),
                hash_key: index.hash_key,
                range_key: index.range_key,
            }),
            None if self.values.contains_key(self.schema.hash_key) => Ok(Selected {
                index: None,
                hash_key: self.schema.hash_key,
                range_key: self.schema.range_key,
            }),
            None => Err(Error::NoSuitableIndex {
                table: self.schema.table_name.to_string(),
            }),
        }
    }

    fn partition(&self, selected: &Selected) -> Resolution {
        let bound_range_key = selected
            .range_key
            .filter(|range_key| self.values.contains_key(*range_key));
        let mut key_condition = Vec::with_capacity(2);
        let mut filter_condition = Vec::with_capacity(self.values.len());
        for key in std::iter::once(selected.hash_key).chain(bound_range_key) {
            if let Some(value) = self.values.get(key) {
                key_condition.push(AttributeCondition::equals(key, value.clone()));
            }
        }
        for (name, value) in &self.values {
            if name != selected.hash_key && Some(name.as_str()) != bound_range_key {
                filter_condition.push(AttributeCondition::equals(name.clone(), value.clone()));
            }
        }
        let target = match selected.index {
            Some(index) => IndexTarget::Secondary(index.name),
            None => IndexTarget::Primary,
        };
        tracing::debug!(
            table = self.schema.table_name,
            ?target,
            keys = key_condition.len(),
            filters = filter_condition.len(),
            "resolved index"
        );
        Resolution {
            target,
            key_condition,
            filter_condition,
        }
    }

    /// Select the key structure and split the bound attributes.
    pub fn resolve(&self) -> Result<Resolution> {
        let selected = self.select()?;
        Ok(self.partition(&selected))
    }

    /// Resolve and assemble the query request.
    ///
    /// Secondary index queries project the index's attributes; primary key queries
    /// retrieve every attribute.
    pub fn build(self) -> Result<read::query::Query> {
        let selected = self.select()?;
        let mut resolution = self.partition(&selected);
        if let Some(condition) = self.sort_key {
            if !condition.is_range() {
                return Err(Error::validation(format!(
                    "{condition:?} is not a sort key operator"
                )));
            }
            let range_key = selected
                .range_key
                .filter(|range_key| !self.values.contains_key(*range_key))
                .ok_or_else(|| {
                    Error::validation(format!(
                        "{:?} on table '{}' has no free range key for a sort key condition",
                        resolution.target, self.schema.table_name
                    ))
                })?;
            resolution.key_condition.push(AttributeCondition {
                condition,
                name: range_key.to_string(),
            });
        }
        let condition = (!resolution.filter_condition.is_empty())
            .then(|| ConditionExpression::all(resolution.filter_condition));
        let selection = selected
            .index
            .map(|index| Selection::from(index.projection));
        Ok(read::query::Query {
            key_condition: resolution.key_condition,
            multiple_read_args: read::common::MultipleReadArgs {
                condition,
                cursor: self.cursor,
                index_name: resolution.target.index_name().map(str::to_string),
                limit: self.limit,
                selection,
                table_name: self.schema.table_name.to_string(),
                ..Default::default()
            },
            scan_index_forward: self.scan_index_forward,
        })
    }
}
