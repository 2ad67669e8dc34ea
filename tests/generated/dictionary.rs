// @generated by dynamodb-schema-gen from table "applingo-dictionary". Do not edit.

use dynamodb_schema::{
    common::{condition::Condition, cursor::Cursor},
    error::Result,
    planner::{self, IndexKeys, KeySchema},
    read::query::Query,
    value::{self, AttributeMap, Item, ScalarValue},
};

/// Table name.
pub const TABLE_NAME: &str = "applingo-dictionary";

/// Secondary index `IndexSide`.
pub const INDEX_SIDE: &str = "IndexSide";

/// Secondary index `IndexCategory`.
pub const INDEX_CATEGORY: &str = "IndexCategory";

/// Secondary index `IndexLevel`.
pub const INDEX_LEVEL: &str = "IndexLevel";

/// Attribute names in record order.
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "id",
    "side",
    "category",
    "level",
    "is_public",
    "type",
    "extra",
    "created_at",
];

/// Attributes retrievable through each secondary index.
pub const INDEX_PROJECTIONS: &[(&str, &[&str])] = &[
    (INDEX_SIDE, &["side", "created_at", "category", "level"]),
    (INDEX_CATEGORY, &["category", "level"]),
    (INDEX_LEVEL, &["id", "side", "category", "level", "is_public", "type", "extra", "created_at"]),
];

/// Key structures visited by index resolution, in declaration order.
pub const KEY_SCHEMA: KeySchema = KeySchema {
    table_name: TABLE_NAME,
    hash_key: "id",
    range_key: None,
    secondary_indexes: &[
        IndexKeys {
            name: INDEX_SIDE,
            hash_key: "side",
            range_key: Some("created_at"),
            projection: &["side", "created_at", "category", "level"],
        },
        IndexKeys {
            name: INDEX_CATEGORY,
            hash_key: "category",
            range_key: Some("level"),
            projection: &["category", "level"],
        },
        IndexKeys {
            name: INDEX_LEVEL,
            hash_key: "level",
            range_key: None,
            projection: &["id", "side", "category", "level", "is_public", "type", "extra", "created_at"],
        },
    ],
};

/// Attributes retrievable through `index`.
pub fn projection(index: &str) -> Option<&'static [&'static str]> {
    INDEX_PROJECTIONS
        .iter()
        .find(|(name, _)| *name == index)
        .map(|(_, attributes)| *attributes)
}

/// Record of table `applingo-dictionary`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaItem {
    /// Attribute `id`.
    pub id: String,
    /// Attribute `side`.
    pub side: String,
    /// Attribute `category`.
    pub category: String,
    /// Attribute `level`.
    pub level: i64,
    /// Attribute `is_public`.
    pub is_public: bool,
    /// Attribute `type`.
    pub type_: String,
    /// Attribute `extra`.
    pub extra: ScalarValue,
    /// Attribute `created_at`.
    pub created_at: i64,
}

impl Item for SchemaItem {
    fn to_item(&self) -> AttributeMap {
        let mut item = AttributeMap::with_capacity(8);
        value::insert(&mut item, "id", self.id.clone());
        value::insert(&mut item, "side", self.side.clone());
        value::insert(&mut item, "category", self.category.clone());
        value::insert(&mut item, "level", self.level);
        value::insert(&mut item, "is_public", self.is_public);
        value::insert(&mut item, "type", self.type_.clone());
        value::insert(&mut item, "extra", self.extra.clone());
        value::insert(&mut item, "created_at", self.created_at);
        item
    }

    fn from_item(item: &AttributeMap) -> Result<Self> {
        Ok(Self {
            id: value::text(item, "id")?,
            side: value::text(item, "side")?,
            category: value::text(item, "category")?,
            level: value::integer(item, "level")?,
            is_public: value::boolean(item, "is_public")?,
            type_: value::text(item, "type")?,
            extra: value::dynamic(item, "extra")?,
            created_at: value::integer(item, "created_at")?,
        })
    }

    fn key(&self) -> AttributeMap {
        let mut key = AttributeMap::with_capacity(1);
        value::insert(&mut key, "id", self.id.clone());
        key
    }
}

/// Index-resolving query builder for table `applingo-dictionary`.
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

    /// Bind `side` to `value`.
    pub fn with_side(self, value: impl Into<String>) -> Self {
        Self(self.0.set("side", ScalarValue::String(value.into())))
    }

    /// Bind `category` to `value`.
    pub fn with_category(self, value: impl Into<String>) -> Self {
        Self(self.0.set("category", ScalarValue::String(value.into())))
    }

    /// Bind `level` to `value`.
    pub fn with_level(self, value: i64) -> Self {
        Self(self.0.set("level", ScalarValue::Number(value)))
    }

    /// Bind `is_public` to `value`.
    pub fn with_is_public(self, value: bool) -> Self {
        Self(self.0.set("is_public", ScalarValue::Boolean(value)))
    }

    /// Bind `type` to `value`.
    pub fn with_type(self, value: impl Into<String>) -> Self {
        Self(self.0.set("type", ScalarValue::String(value.into())))
    }

    /// Bind `extra` to `value`.
    pub fn with_extra(self, value: impl Into<ScalarValue>) -> Self {
        Self(self.0.set("extra", value))
    }

    /// Bind `created_at` to `value`.
    pub fn with_created_at(self, value: i64) -> Self {
        Self(self.0.set("created_at", ScalarValue::Number(value)))
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
