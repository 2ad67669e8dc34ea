// @generated by dynamodb-schema-gen from table "tags". Do not edit.

use dynamodb_schema::{
    common::{condition::Condition, cursor::Cursor},
    error::Result,
    planner::{self, KeySchema},
    read::query::Query,
    value::{self, AttributeMap, Item, ScalarValue},
};

/// Table name.
pub const TABLE_NAME: &str = "tags";

/// Attribute names in record order.
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "id",
];

/// Attributes retrievable through each secondary index.
pub const INDEX_PROJECTIONS: &[(&str, &[&str])] = &[];

/// Key structures visited by index resolution, in declaration order.
pub const KEY_SCHEMA: KeySchema = KeySchema {
    table_name: TABLE_NAME,
    hash_key: "id",
    range_key: None,
    secondary_indexes: &[],
};

/// Attributes retrievable through `index`.
pub fn projection(index: &str) -> Option<&'static [&'static str]> {
    INDEX_PROJECTIONS
        .iter()
        .find(|(name, _)| *name == index)
        .map(|(_, attributes)| *attributes)
}

/// Record of table `tags`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaItem {
    /// Attribute `id`.
    pub id: String,
}

impl Item for SchemaItem {
    fn to_item(&self) -> AttributeMap {
        let mut item = AttributeMap::with_capacity(1);
        value::insert(&mut item, "id", self.id.clone());
        item
    }

    fn from_item(item: &AttributeMap) -> Result<Self> {
        Ok(Self {
            id: value::text(item, "id")?,
        })
    }

    fn key(&self) -> AttributeMap {
        let mut key = AttributeMap::with_capacity(1);
        value::insert(&mut key, "id", self.id.clone());
        key
    }
}

/// Index-resolving query builder for table `tags`.
#[derive(Clone, Debug)]
pub struct QueryBuilder(planner::QueryBuilder<'static>);

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self(planner::QueryBuilder::new(&KEY_SCHEMA))
    }

    /// Bind `id` to `value`.
    pub fn with_id(self, value: impl Into<String>) -> Self {
        Self(self.0.set("id", ScalarValue::String(value.into())))
    }

    /// Maximum number of items evaluated per page.
    pub fn limit(self, limit: i32) -> Self {
        Self(self.0.limit(limit))
    }

    /// Return items in descending range key order.
    pub fn order_by_desc(self) -> Self {
        Self(self.0.order_by_desc())
    }

    /// Resume after the page that returned `cursor`.
    pub fn start_from(self, cursor: Cursor) -> Self {
        Self(self.0.start_from(cursor))
    }

    /// Range operator on the resolved range key.
    pub fn sort_key(self, condition: Condition) -> Self {
        Self(self.0.sort_key(condition))
    }

    /// Select the index and split the bound attributes.
    pub fn resolve(&self) -> Result<planner::Resolution> {
        self.0.resolve()
    }

    /// Resolve and assemble the query request.
    pub fn build(self) -> Result<Query> {
        self.0.build()
    }
}
