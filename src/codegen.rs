//! Rust source generation from table schemas.
//!
//! For every [`TableSchema`](crate::schema::TableSchema) the generator emits one
//! self-contained source unit holding:
//! - the table name and one constant per secondary index,
//! - the ordered attribute list and the projection lookup,
//! - a static [`KeySchema`](crate::planner::KeySchema) for the query planner,
//! - a record struct implementing [`Item`](crate::value::Item),
//! - a thin typed wrapper around [`QueryBuilder`](crate::planner::QueryBuilder).
//!
//! Output is deterministic: the same schema and configuration always produce the
//! same bytes.

/// Identifier casing and reserved word escaping.
pub mod naming;
/// Writing generated units to disk.
pub mod output;

mod emit;
mod writer;

pub use emit::generate;

/// Knobs of the code generator.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Path the generated code imports this crate from.
    pub crate_path: String,
    /// How attribute names colliding with reserved words are turned into field names.
    pub escape: naming::EscapePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            crate_path: "dynamodb_schema".to_string(),
            escape: naming::EscapePolicy::rust(),
        }
    }
}
