use crate::schema::{ProjectionType, SecondaryIndex, TableSchema};

use indexmap::IndexMap;

/// Attributes retrievable through each secondary index, keyed by index name in
/// declaration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectionTable(IndexMap<String, Vec<String>>);

impl ProjectionTable {
    /// Compute the projections of every secondary index of `schema`.
    pub fn new(schema: &TableSchema) -> Self {
        Self(
            schema
                .secondary_indexes
                .iter()
                .map(|index| (index.name.clone(), project(schema, index)))
                .collect(),
        )
    }

    /// Projected attributes of `index`.
    pub fn get(&self, index: &str) -> Option<&[String]> {
        self.0.get(index).map(Vec::as_slice)
    }

    /// Iterate over `(index, attributes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(index, attributes)| (index.as_str(), attributes.as_slice()))
    }
}

fn project(schema: &TableSchema, index: &SecondaryIndex) -> Vec<String> {
    let keys = std::iter::once(&index.hash_key).chain(index.range_key.as_ref());
    let mut attributes: Vec<String> = match index.projection_type {
        ProjectionType::All => {
            return schema
                .all_attributes()
                .map(|attribute| attribute.name.clone())
                .collect();
        }
        ProjectionType::KeysOnly => keys.cloned().collect(),
        ProjectionType::Include => keys.chain(&index.non_key_attributes).cloned().collect(),
    };
    let mut seen = std::collections::HashSet::new();
    attributes.retain(|attribute| seen.insert(attribute.clone()));
    attributes
}
