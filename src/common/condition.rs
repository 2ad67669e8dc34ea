use crate::{
    common,
    error::{Error, Result},
    value::ScalarValue,
};

use aws_sdk_dynamodb::types;
use std::{collections, ops};

/// Logical operator for combining conditions.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    #[default]
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Condition applied to a single attribute.
///
/// Key conditions accept `Equals` on the hash key plus one range operator on the
/// range key; filters and conditional writes accept every variant.
///
/// ```rust
/// use dynamodb_schema::common::condition;
///
/// let eq = condition::Condition::Equals("front".into());
/// let prefix = condition::Condition::BeginsWith("2024-".to_string());
/// assert!(prefix.is_range());
/// assert!(!condition::Condition::Null.is_range());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Checks if an attribute begins with a specified prefix (string types only).
    BeginsWith(String),
    /// Checks if an attribute value is between two values (inclusive).
    Between(ScalarValue, ScalarValue),
    /// Checks if an attribute value equals a specified value.
    Equals(ScalarValue),
    /// Checks if an attribute value is greater than a specified value.
    GreaterThan(ScalarValue),
    /// Checks if an attribute value is greater than or equal to a specified value.
    GreaterThanOrEqual(ScalarValue),
    /// Checks if an attribute value is less than a specified value.
    LessThan(ScalarValue),
    /// Checks if an attribute value is less than or equal to a specified value.
    LessThanOrEqual(ScalarValue),
    /// Checks if an attribute value does not equal a specified value.
    NotEqual(ScalarValue),
    /// Checks if an attribute exists.
    NotNull,
    /// Checks if an attribute does not exist.
    Null,
}

fn wire_value(name: &str, value: ScalarValue) -> Result<types::AttributeValue> {
    value
        .into_attribute_value()
        .ok_or_else(|| Error::validation(format!("condition on '{name}' compares to an unset value")))
}

impl Condition {
    /// Whether the condition can serve as the sort key operator of a key condition.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Self::BeginsWith(_)
                | Self::Between(_, _)
                | Self::GreaterThan(_)
                | Self::GreaterThanOrEqual(_)
                | Self::LessThan(_)
                | Self::LessThanOrEqual(_)
        )
    }

    fn comparison(
        name: &str,
        placeholder: &str,
        operator: &str,
        suffix: &str,
        value: ScalarValue,
        index: &mut usize,
        values: &mut collections::HashMap<String, types::AttributeValue>,
    ) -> Result<String> {
        let value = wire_value(name, value)?;
        let value_placeholder = common::value_placeholder(name, suffix, index);
        let expression = format!("{placeholder} {operator} {value_placeholder}");
        values.insert(value_placeholder, value);
        Ok(expression)
    }

    fn get_expression(
        self,
        name: &str,
        placeholder: &str,
        index: &mut usize,
    ) -> Result<(String, collections::HashMap<String, types::AttributeValue>)> {
        let mut values = collections::HashMap::new();
        let expression = match self {
            Self::BeginsWith(prefix) => {
                let value_placeholder = common::value_placeholder(name, "begins_with", index);
                let expression = format!("begins_with({placeholder}, {value_placeholder})");
                values.insert(value_placeholder, types::AttributeValue::S(prefix));
                expression
            }
            Self::Between(low, high) => {
                let low = wire_value(name, low)?;
                let high = wire_value(name, high)?;
                let low_placeholder = common::value_placeholder(name, "between", index);
                let high_placeholder = common::value_placeholder(name, "between", index);
                let expression =
                    format!("{placeholder} BETWEEN {low_placeholder} AND {high_placeholder}");
                values.insert(low_placeholder, low);
                values.insert(high_placeholder, high);
                expression
            }
            Self::Equals(value) => {
                Self::comparison(name, placeholder, "=", "eq", value, index, &mut values)?
            }
            Self::GreaterThan(value) => {
                Self::comparison(name, placeholder, ">", "gt", value, index, &mut values)?
            }
            Self::GreaterThanOrEqual(value) => {
                Self::comparison(name, placeholder, ">=", "gte", value, index, &mut values)?
            }
            Self::LessThan(value) => {
                Self::comparison(name, placeholder, "<", "lt", value, index, &mut values)?
            }
            Self::LessThanOrEqual(value) => {
                Self::comparison(name, placeholder, "<=", "lte", value, index, &mut values)?
            }
            Self::NotEqual(value) => {
                Self::comparison(name, placeholder, "<>", "ne", value, index, &mut values)?
            }
            Self::NotNull => format!("attribute_exists({placeholder})"),
            Self::Null => format!("attribute_not_exists({placeholder})"),
        };
        Ok((expression, values))
    }
}

/// Condition applied to a named attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeCondition {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

impl AttributeCondition {
    /// Equality on `name`.
    pub fn equals(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            condition: Condition::Equals(value.into()),
            name: name.into(),
        }
    }

    pub(crate) fn get_expression_operation(
        conditions: Vec<Self>,
        operator: &LogicalOperator,
        index: &mut usize,
    ) -> Result<common::ExpressionInput> {
        let mut operations = Vec::with_capacity(conditions.len());
        for attribute_condition in conditions {
            let placeholder = common::name_placeholder(&attribute_condition.name);
            let (expression, expression_attribute_values) = attribute_condition
                .condition
                .get_expression(&attribute_condition.name, &placeholder, index)?;
            let expression_attribute_names =
                collections::HashMap::from([(placeholder, attribute_condition.name)]);
            operations.push(common::ExpressionInput {
                expression,
                expression_attribute_names,
                expression_attribute_values,
            });
        }
        Ok(common::ExpressionInput::merge(operator, operations))
    }
}

/// A flat list of conditions joined by one logical operator.
///
/// Used as a write precondition (optimistic concurrency) and as a query filter.
///
/// ```rust
/// use dynamodb_schema::common::condition;
///
/// let only_if_new = condition::ConditionExpression {
///     conditions: vec![condition::AttributeCondition {
///         name: "id".to_string(),
///         condition: condition::Condition::Null,
///     }],
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionExpression {
    /// The conditions to combine.
    pub conditions: Vec<AttributeCondition>,
    /// The operator joining the conditions.
    pub operator: LogicalOperator,
}

impl ConditionExpression {
    /// Conjunction of `conditions`.
    pub fn all(conditions: Vec<AttributeCondition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::And,
        }
    }

    /// Whether the expression contains no condition.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub(crate) fn get_expression_operation(
        self,
        index: &mut usize,
    ) -> Result<common::ExpressionInput> {
        AttributeCondition::get_expression_operation(self.conditions, &self.operator, index)
    }
}

impl TryFrom<ConditionExpression> for common::ExpressionInput {
    type Error = Error;

    fn try_from(condition_expression: ConditionExpression) -> Result<Self> {
        condition_expression.get_expression_operation(&mut 0)
    }
}
