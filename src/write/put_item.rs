use crate::{
    error::{Error, Result},
    value::AttributeMap,
    write,
};

use aws_sdk_dynamodb::Client;

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: AttributeMap,
    write_operation: write::common::WriteInput,
}

/// Put item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use dynamodb_schema::{common::condition, value::AttributeMap, write};
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let put_item = write::put_item::PutItem {
///     item: AttributeMap::from([("id".to_string(), AttributeValue::S("1".to_string()))]),
///     write_args: write::common::WriteArgs {
///         condition: Some(condition::ConditionExpression::all(vec![
///             condition::AttributeCondition {
///                 name: "id".to_string(),
///                 condition: condition::Condition::Null,
///             },
///         ])),
///         table_name: "dictionary".to_string(),
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct PutItem {
    /// The item to put into the table.
    pub item: AttributeMap,
    /// Table name and precondition.
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<PutItem> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem) -> Result<Self> {
        let write_operation: write::common::WriteInput = put_item.write_args.try_into()?;
        if put_item.item.is_empty() {
            return Err(Error::validation("empty item"));
        }
        let operation = Self {
            item: put_item.item,
            write_operation,
        };
        Ok(operation)
    }
}

impl PutItem {
    /// Execute the put item operation.
    #[tracing::instrument(name = "dynamodb_schema.put_item", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<()> {
        let put_item: PutItemInput = self.try_into()?;
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("put_item", err))?;
        Ok(())
    }
}
