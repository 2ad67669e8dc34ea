use crate::{
    common,
    error::{Error, Result},
    value::{AttributeMap, ScalarValue},
    write,
};

use aws_sdk_dynamodb::{Client, types};
use std::collections;

fn wire_value(name: &str, value: ScalarValue) -> Result<types::AttributeValue> {
    value
        .into_attribute_value()
        .ok_or_else(|| Error::validation(format!("update of '{name}' carries an unset value")))
}

/// SET action on a single attribute.
///
/// ```rust
/// use dynamodb_schema::write::update_item;
///
/// let assign = update_item::SetInput::Assign("food".into());
/// let increment = update_item::SetInput::Increment(1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SetInput {
    /// Assign a new value to the attribute (replaces existing value).
    Assign(ScalarValue),
    /// Increment a numeric attribute by the specified value.
    Increment(i64),
    /// Decrement a numeric attribute by the specified value.
    Decrement(i64),
    /// Assign a value only if the attribute doesn't exist.
    IfNotExists(ScalarValue),
}

impl SetInput {
    fn get_set_expression(self, name: &str, index: &mut usize) -> Result<common::ExpressionInput> {
        let path = common::name_placeholder(name);
        let value_placeholder = common::value_placeholder(name, "set", index);
        let (value, expression) = match self {
            Self::Assign(value) => (
                wire_value(name, value)?,
                format!("{path} = {value_placeholder}"),
            ),
            Self::Increment(value) => (
                types::AttributeValue::N(value.to_string()),
                format!("{path} = {path} + {value_placeholder}"),
            ),
            Self::Decrement(value) => (
                types::AttributeValue::N(value.to_string()),
                format!("{path} = {path} - {value_placeholder}"),
            ),
            Self::IfNotExists(value) => (
                wire_value(name, value)?,
                format!("{path} = if_not_exists({path}, {value_placeholder})"),
            ),
        };
        Ok(common::ExpressionInput {
            expression,
            expression_attribute_names: collections::HashMap::from([(path, name.to_string())]),
            expression_attribute_values: collections::HashMap::from([(value_placeholder, value)]),
        })
    }
}

/// Partial attribute update.
///
/// ```rust
/// use dynamodb_schema::{common::selection::Selection, write::update_item};
///
/// let mutation = update_item::UpdateExpression::Combined(vec![
///     update_item::UpdateExpression::Set(vec![
///         ("category".to_string(), update_item::SetInput::Assign("food".into())),
///     ]),
///     update_item::UpdateExpression::Remove(Selection::from(["legacy"].as_slice())),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateExpression {
    /// ADD: add a number to a numeric attribute, creating it when absent.
    Add(Vec<(String, i64)>),
    /// REMOVE: remove attributes from the item.
    Remove(common::selection::Selection),
    /// SET: set or modify attribute values.
    Set(Vec<(String, SetInput)>),
    /// Several actions in a single update expression.
    Combined(Vec<UpdateExpression>),
}

impl UpdateExpression {
    fn get_update_expression(self, index: &mut usize) -> Result<common::ExpressionInput> {
        match self {
            Self::Add(add_operations) => {
                let mut operations = Vec::with_capacity(add_operations.len());
                for (name, value) in add_operations {
                    let path = common::name_placeholder(&name);
                    let value_placeholder = common::value_placeholder(&name, "add", index);
                    operations.push(common::ExpressionInput {
                        expression: format!("{path} {value_placeholder}"),
                        expression_attribute_names: collections::HashMap::from([(path, name)]),
                        expression_attribute_values: collections::HashMap::from([(
                            value_placeholder,
                            types::AttributeValue::N(value.to_string()),
                        )]),
                    });
                }
                Ok(Self::clause("ADD", operations))
            }
            Self::Remove(remove_operations) => {
                let operation: common::ExpressionInput = remove_operations.into();
                Ok(Self::clause("REMOVE", vec![operation]))
            }
            Self::Set(set_operations) => {
                let mut operations = Vec::with_capacity(set_operations.len());
                for (name, set_operation) in set_operations {
                    operations.push(set_operation.get_set_expression(&name, index)?);
                }
                Ok(Self::clause("SET", operations))
            }
            Self::Combined(combined_operations) => {
                let mut operations = Vec::with_capacity(combined_operations.len());
                for operation in combined_operations {
                    operations.push(operation.get_update_expression(index)?);
                }
                Ok(common::ExpressionInput::merge(" ", operations))
            }
        }
    }

    fn clause(keyword: &str, operations: Vec<common::ExpressionInput>) -> common::ExpressionInput {
        let mut operation = common::ExpressionInput::merge(", ", operations);
        if !operation.expression.is_empty() {
            operation.expression = format!("{keyword} {}", operation.expression);
        }
        operation
    }
}

impl TryFrom<UpdateExpression> for common::ExpressionInput {
    type Error = Error;

    fn try_from(update_expression: UpdateExpression) -> Result<Self> {
        update_expression.get_update_expression(&mut 0)
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    keys: AttributeMap,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_schema::{common, write};
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let update_item = write::update_item::UpdateItem {
///     keys: common::key::Keys {
///         partition_key: common::key::Key::new("id", "1"),
///         ..Default::default()
///     }
///     .try_into()?,
///     update_expression: write::update_item::UpdateExpression::Set(vec![
///         ("level".to_string(), write::update_item::SetInput::Increment(1)),
///     ]),
///     write_args: write::common::WriteArgs::new("dictionary"),
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem {
    /// The primary key of the item to update.
    pub keys: AttributeMap,
    /// The changes to apply.
    pub update_expression: UpdateExpression,
    /// Table name and precondition.
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<UpdateItem> for UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem) -> Result<Self> {
        common::validate_table(&update_item.write_args.table_name)?;
        common::key::validate(&update_item.keys)?;
        let mut index = 0;
        let operation = update_item.update_expression.get_update_expression(&mut index)?;
        if operation.expression.is_empty() {
            return Err(Error::validation("empty update expression"));
        }
        let mut write_operation = update_item.write_args.into_input(&mut index)?;
        let update_expression = write_operation.merge_expression(operation);
        let operation = Self {
            keys: update_item.keys,
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    #[tracing::instrument(name = "dynamodb_schema.update_item", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<()> {
        let update_item: UpdateItemInput = self.try_into()?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("update_item", err))?;
        Ok(())
    }
}
