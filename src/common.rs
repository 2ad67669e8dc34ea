//! Expression composition shared by the query planner and the store requests.
//!
//! Every condition, key, projection and update is lowered into an [`ExpressionInput`]:
//! an expression string plus the attribute name and value placeholders it references.

/// Attribute conditions used for key conditions, filters and conditional writes.
pub mod condition;

/// Opaque pagination cursors.
pub mod cursor;

/// Primary key types for identifying items.
pub mod key;

/// Attribute selection for projection expressions.
pub mod selection;

use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use std::collections;

/// Reject an empty table name before any network call.
pub(crate) fn validate_table(table_name: &str) -> Result<()> {
    if table_name.is_empty() {
        return Err(Error::validation("empty table name"));
    }
    Ok(())
}

/// Placeholder for an attribute name, distinct for distinct names.
///
/// Underscores are doubled and any other character outside `[A-Za-z0-9]` becomes
/// `_<hex code point>_`, so `a_b`, `a-b` and `a.b` never share a placeholder.
pub(crate) fn name_placeholder(name: &str) -> String {
    let mut placeholder = String::with_capacity(name.len() + 1);
    placeholder.push('#');
    for c in name.chars() {
        match c {
            '_' => placeholder.push_str("__"),
            c if c.is_ascii_alphanumeric() => placeholder.push(c),
            c => placeholder.push_str(&format!("_{:x}_", u32::from(c))),
        }
    }
    placeholder
}

/// Placeholder for an attribute value, unique through `index`.
pub(crate) fn value_placeholder(name: &str, suffix: &str, index: &mut usize) -> String {
    let placeholder = format!(":{}_{suffix}{index}", sanitize(name));
    *index += 1;
    placeholder
}

// value placeholders are already unique through their index
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        if !self.expression_attribute_names.is_empty() {
            names
                .get_or_insert_with(Default::default)
                .extend(self.expression_attribute_names);
        }
        if !self.expression_attribute_values.is_empty() {
            values
                .get_or_insert_with(Default::default)
                .extend(self.expression_attribute_values);
        }
        self.expression
    }
}
