use crate::common;

use std::collections;

/// Attributes to retrieve, rendered as a projection expression.
///
/// ```rust
/// use dynamodb_schema::common::selection;
///
/// let selection = selection::Selection::from(["id", "side"].as_slice());
/// assert_eq!(selection.0, vec!["id".to_string(), "side".to_string()]);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Selection(pub Vec<String>);

impl From<&[&str]> for Selection {
    fn from(attributes: &[&str]) -> Self {
        Self(attributes.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Selection> for common::ExpressionInput {
    fn from(selection: Selection) -> Self {
        let operations = selection
            .0
            .into_iter()
            .map(|name| {
                let placeholder = common::name_placeholder(&name);
                common::ExpressionInput {
                    expression: placeholder.clone(),
                    expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
                    ..Default::default()
                }
            })
            .collect();
        common::ExpressionInput::merge(", ", operations)
    }
}
