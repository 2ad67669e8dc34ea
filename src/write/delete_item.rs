use crate::{
    common,
    error::{Error, Result},
    value::AttributeMap,
    write,
};

use aws_sdk_dynamodb::Client;

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    keys: AttributeMap,
    write_operation: write::common::WriteInput,
}

/// Delete item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_schema::{common, write};
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let delete_item = write::delete_item::DeleteItem {
///     keys: common::key::Keys {
///         partition_key: common::key::Key::new("id", "1"),
///         ..Default::default()
///     }
///     .try_into()?,
///     write_args: write::common::WriteArgs::new("dictionary"),
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct DeleteItem {
    /// The primary key of the item to delete.
    pub keys: AttributeMap,
    /// Table name and precondition.
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<DeleteItem> for DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem) -> Result<Self> {
        let write_operation: write::common::WriteInput = delete_item.write_args.try_into()?;
        common::key::validate(&delete_item.keys)?;
        let operation = Self {
            keys: delete_item.keys,
            write_operation,
        };
        Ok(operation)
    }
}

impl DeleteItem {
    /// Execute the delete item operation.
    #[tracing::instrument(name = "dynamodb_schema.delete_item", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<()> {
        let delete_item: DeleteItemInput = self.try_into()?;
        let builder = client.delete_item().set_key(Some(delete_item.keys));
        crate::apply_write_operation!(builder, delete_item.write_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("delete_item", err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use std::collections;

    #[rstest]
    #[case::unconditional(
        DeleteItem {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ]
            ),
            write_args: write::common::WriteArgs::new("c"),
        },
        DeleteItemInput {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ]
            ),
            write_operation: write::common::WriteInput {
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::if_exists(
        DeleteItem {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ]
            ),
            write_args: write::common::WriteArgs {
                condition: Some(
                    common::condition::ConditionExpression::all(
                        vec![
                            common::condition::AttributeCondition {
                                name: "a".to_string(),
                                condition: common::condition::Condition::NotNull,
                            },
                        ]
                    )
                ),
                table_name: "c".to_string(),
            },
        },
        DeleteItemInput {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ]
            ),
            write_operation: write::common::WriteInput {
                condition_expression: Some(
                    "attribute_exists(#a)".to_string()
                ),
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#a".to_string(), "a".to_string()),
                        ]
                    )
                ),
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_delete_item(#[case] args: DeleteItem, #[case] expected: DeleteItemInput) {
        let actual: DeleteItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty_key(
        DeleteItem {
            keys: AttributeMap::new(),
            write_args: write::common::WriteArgs::new("c"),
        }
    )]
    #[case::empty_string_key(
        DeleteItem {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S(String::new())),
                ]
            ),
            write_args: write::common::WriteArgs::new("c"),
        }
    )]
    #[case::empty_table(
        DeleteItem {
            keys: AttributeMap::from(
                [
                    ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ]
            ),
            write_args: write::common::WriteArgs::default(),
        }
    )]
    fn test_delete_item_rejects(#[case] args: DeleteItem) {
        let actual: Result<DeleteItemInput> = args.try_into();
        assert!(matches!(actual, Err(Error::Validation(_))));
    }
}
