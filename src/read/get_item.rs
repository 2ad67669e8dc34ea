use crate::{
    common,
    error::{Error, Result},
    read,
    value::AttributeMap,
};

use aws_sdk_dynamodb::Client;

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    keys: AttributeMap,
    single_read_operation: read::common::SingleReadInput,
}

/// Get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_schema::{common, read};
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let get_item = read::get_item::GetItem {
///     keys: common::key::Keys {
///         partition_key: common::key::Key::new("id", "1"),
///         ..Default::default()
///     }
///     .try_into()?,
///     single_read_args: read::common::SingleReadArgs {
///         table_name: "dictionary".to_string(),
///         ..Default::default()
///     },
/// };
/// let item = get_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem {
    /// The primary key of the item to retrieve.
    pub keys: AttributeMap,
    /// Table name, consistency and selection.
    pub single_read_args: read::common::SingleReadArgs,
}

impl TryFrom<GetItem> for GetItemInput {
    type Error = Error;

    fn try_from(get_item: GetItem) -> Result<Self> {
        let single_read_operation: read::common::SingleReadInput =
            get_item.single_read_args.try_into()?;
        common::key::validate(&get_item.keys)?;
        let operation = Self {
            keys: get_item.keys,
            single_read_operation,
        };
        Ok(operation)
    }
}

impl GetItem {
    /// Execute the get item operation.
    ///
    /// Returns `None` when no item has the key; a found item with no projected
    /// attribute is `Some` of an empty map.
    #[tracing::instrument(name = "dynamodb_schema.get_item", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<Option<AttributeMap>> {
        let get_item: GetItemInput = self.try_into()?;
        let builder = client.get_item().set_key(Some(get_item.keys));
        let output = crate::apply_single_read_operation!(builder, get_item.single_read_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("get_item", err))?;
        Ok(output.item)
    }
}
