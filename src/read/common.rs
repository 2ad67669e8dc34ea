use crate::{
    common,
    error::{Error, Result},
    value::AttributeMap,
};

use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SingleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments for single-item reads.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SingleReadArgs {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Which attributes to retrieve, all of them when `None`.
    pub selection: Option<common::selection::Selection>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl TryFrom<SingleReadArgs> for SingleReadInput {
    type Error = Error;

    fn try_from(single_read_args: SingleReadArgs) -> Result<Self> {
        common::validate_table(&single_read_args.table_name)?;
        let (expression_attribute_names, projection_expression) = match single_read_args.selection {
            Some(selection) => {
                let selection_operation: common::ExpressionInput = selection.into();
                (
                    Some(selection_operation.expression_attribute_names),
                    Some(selection_operation.expression),
                )
            }
            None => (None, None),
        };
        let operation = Self {
            consistent_read: single_read_args.consistent_read,
            expression_attribute_names,
            projection_expression,
            table_name: single_read_args.table_name,
        };
        Ok(operation)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MultipleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) exclusive_start_key: Option<AttributeMap>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values: Option<AttributeMap>,
    pub(crate) filter_expression: Option<String>,
    pub(crate) index_name: Option<String>,
    pub(crate) limit: Option<i32>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments for multiple-item reads (Query, Scan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipleReadArgs {
    /// Filter applied to the evaluated items.
    pub condition: Option<common::condition::ConditionExpression>,
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Where to resume a previous read.
    pub cursor: Option<common::cursor::Cursor>,
    /// Secondary index to read, the table itself when `None`.
    pub index_name: Option<String>,
    /// Page size: the maximum number of items evaluated by one call.
    pub limit: Option<i32>,
    /// Which attributes to retrieve, all of them when `None`.
    pub selection: Option<common::selection::Selection>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl MultipleReadArgs {
    /// Convert the arguments, numbering filter placeholders from `index`.
    pub(crate) fn into_input(self, index: &mut usize) -> Result<MultipleReadInput> {
        common::validate_table(&self.table_name)?;
        if matches!(self.limit, Some(limit) if limit < 1) {
            return Err(Error::validation("limit must be positive"));
        }
        let mut operation = MultipleReadInput {
            consistent_read: self.consistent_read,
            exclusive_start_key: self.cursor.map(|cursor| cursor.0),
            index_name: self.index_name,
            limit: self.limit,
            table_name: self.table_name,
            ..Default::default()
        };
        if let Some(condition) = self.condition.filter(|condition| !condition.is_empty()) {
            let condition_operation = condition.get_expression_operation(index)?;
            operation.filter_expression = Some(operation.merge_expression(condition_operation));
        }
        if let Some(selection) = self.selection.filter(|selection| !selection.0.is_empty()) {
            let selection_operation: common::ExpressionInput = selection.into();
            operation.projection_expression =
                Some(operation.merge_expression(selection_operation));
        }
        Ok(operation)
    }
}

impl MultipleReadInput {
    pub(crate) fn merge_expression(&mut self, operation: common::ExpressionInput) -> String {
        operation.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

impl TryFrom<MultipleReadArgs> for MultipleReadInput {
    type Error = Error;

    fn try_from(multiple_read_args: MultipleReadArgs) -> Result<Self> {
        multiple_read_args.into_input(&mut 0)
    }
}

/// One page of a multiple-item read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// Items in store order.
    pub items: Vec<AttributeMap>,
    /// Where the next page starts, present only when more pages exist.
    pub cursor: Option<common::cursor::Cursor>,
}

impl Page {
    pub(crate) fn new(
        items: Option<Vec<AttributeMap>>,
        last_evaluated_key: Option<AttributeMap>,
    ) -> Self {
        Self {
            items: items.unwrap_or_default(),
            cursor: common::cursor::Cursor::from_last_evaluated_key(last_evaluated_key),
        }
    }
}

/// apply common single read operation settings to a builder
#[macro_export]
macro_rules! apply_single_read_operation {
    ($builder:expr, $single_read_operation:expr) => {
        $builder
            .set_consistent_read($single_read_operation.consistent_read)
            .set_expression_attribute_names($single_read_operation.expression_attribute_names)
            .set_projection_expression($single_read_operation.projection_expression)
            .table_name($single_read_operation.table_name)
    };
}

/// apply common multiple read operation settings to a builder
#[macro_export]
macro_rules! apply_multiple_read_operation {
    ($builder:expr, $multiple_read_operation:expr) => {
        $builder
            .set_consistent_read($multiple_read_operation.consistent_read)
            .set_exclusive_start_key($multiple_read_operation.exclusive_start_key)
            .set_expression_attribute_names($multiple_read_operation.expression_attribute_names)
            .set_expression_attribute_values($multiple_read_operation.expression_attribute_values)
            .set_filter_expression($multiple_read_operation.filter_expression)
            .set_index_name($multiple_read_operation.index_name)
            .set_limit($multiple_read_operation.limit)
            .set_projection_expression($multiple_read_operation.projection_expression)
            .table_name($multiple_read_operation.table_name)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;

    #[rstest]
    #[case::empty(
        SingleReadArgs {
            table_name: "a".to_string(),
            ..Default::default()
        },
        SingleReadInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::selection(
        SingleReadArgs {
            consistent_read: Some(true),
            selection: Some(
                common::selection::Selection::from(["b", "c"].as_slice())
            ),
            table_name: "a".to_string(),
        },
        SingleReadInput {
            consistent_read: Some(true),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#b".to_string(), "b".to_string()),
                        ("#c".to_string(), "c".to_string()),
                    ]
                )
            ),
            projection_expression: Some("#b, #c".to_string()),
            table_name: "a".to_string(),
        }
    )]
    fn test_single_read(#[case] args: SingleReadArgs, #[case] expected: SingleReadInput) {
        let actual: SingleReadInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty(
        MultipleReadArgs {
            table_name: "a".to_string(),
            ..Default::default()
        },
        MultipleReadInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::empty_filter_and_selection(
        MultipleReadArgs {
            condition: Some(common::condition::ConditionExpression::default()),
            selection: Some(common::selection::Selection::default()),
            table_name: "a".to_string(),
            ..Default::default()
        },
        MultipleReadInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::full(
        MultipleReadArgs {
            condition: Some(
                common::condition::ConditionExpression::all(
                    vec![
                        common::condition::AttributeCondition::equals("b", "c"),
                    ]
                )
            ),
            consistent_read: Some(false),
            cursor: Some(
                common::cursor::Cursor(
                    AttributeMap::from(
                        [
                            ("d".to_string(), types::AttributeValue::S("e".to_string())),
                        ]
                    )
                )
            ),
            index_name: Some("f".to_string()),
            limit: Some(10),
            selection: Some(
                common::selection::Selection::from(["b", "g"].as_slice())
            ),
            table_name: "a".to_string(),
        },
        MultipleReadInput {
            consistent_read: Some(false),
            exclusive_start_key: Some(
                AttributeMap::from(
                    [
                        ("d".to_string(), types::AttributeValue::S("e".to_string())),
                    ]
                )
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#b".to_string(), "b".to_string()),
                        ("#g".to_string(), "g".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                AttributeMap::from(
                    [
                        (":b_eq0".to_string(), types::AttributeValue::S("c".to_string())),
                    ]
                )
            ),
            filter_expression: Some("#b = :b_eq0".to_string()),
            index_name: Some("f".to_string()),
            limit: Some(10),
            projection_expression: Some("#b, #g".to_string()),
            table_name: "a".to_string(),
        }
    )]
    fn test_multiple_read(#[case] args: MultipleReadArgs, #[case] expected: MultipleReadInput) {
        let actual: MultipleReadInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty_table(
        MultipleReadArgs::default()
    )]
    #[case::zero_limit(
        MultipleReadArgs {
            limit: Some(0),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    fn test_multiple_read_rejects(#[case] args: MultipleReadArgs) {
        let actual: Result<MultipleReadInput> = args.try_into();
        assert!(matches!(actual, Err(Error::Validation(_))));
    }

    #[test]
    fn test_page_without_more_results() {
        let page = Page::new(None, Some(AttributeMap::new()));
        assert_eq!(page, Page::default());
    }
}
