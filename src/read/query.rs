use crate::{
    common,
    error::{Error, Result},
    read,
    value::ScalarValue,
};

use aws_sdk_dynamodb::Client;

/// query operation
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryInput {
    key_condition_expression: String,
    multiple_read_operation: read::common::MultipleReadInput,
    scan_index_forward: Option<bool>,
}

/// Query operation, usually built by [`crate::planner::QueryBuilder::build`].
///
/// Carries everything needed to execute a resolved index lookup: the index, the key
/// condition, the residual filter, the projection, the page size, the direction and
/// the continuation cursor.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_schema::{common, read};
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let query = read::query::Query {
///     key_condition: vec![common::condition::AttributeCondition::equals("side", "front")],
///     multiple_read_args: read::common::MultipleReadArgs {
///         index_name: Some("IndexSide".to_string()),
///         table_name: "dictionary".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let page = query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// Equality on the hash key, optionally followed by one condition on the range key.
    pub key_condition: Vec<common::condition::AttributeCondition>,
    /// Table, index, filter, selection and paging arguments.
    pub multiple_read_args: read::common::MultipleReadArgs,
    /// `Some(false)` reverses the range key order.
    pub scan_index_forward: Option<bool>,
}

impl TryFrom<Query> for QueryInput {
    type Error = Error;

    fn try_from(query: Query) -> Result<Self> {
        if query.key_condition.is_empty() {
            return Err(Error::validation("empty key condition"));
        }
        for key in &query.key_condition {
            if let common::condition::Condition::Equals(ScalarValue::String(value)) = &key.condition
                && value.is_empty()
            {
                return Err(Error::validation(format!(
                    "key attribute '{}' cannot be an empty string",
                    key.name
                )));
            }
        }
        let mut index = 0;
        let key_condition_operation = common::condition::AttributeCondition::get_expression_operation(
            query.key_condition,
            &common::condition::LogicalOperator::And,
            &mut index,
        )?;
        let mut multiple_read_operation = query.multiple_read_args.into_input(&mut index)?;
        let key_condition_expression =
            multiple_read_operation.merge_expression(key_condition_operation);
        let operation = Self {
            key_condition_expression,
            multiple_read_operation,
            scan_index_forward: query.scan_index_forward,
        };
        Ok(operation)
    }
}

impl Query {
    /// Execute the query, returning one page.
    #[tracing::instrument(name = "dynamodb_schema.query", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<read::common::Page> {
        let query: QueryInput = self.try_into()?;
        let builder = client
            .query()
            .key_condition_expression(query.key_condition_expression)
            .set_scan_index_forward(query.scan_index_forward);
        let output = crate::apply_multiple_read_operation!(builder, query.multiple_read_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("query", err))?;
        Ok(read::common::Page::new(output.items, output.last_evaluated_key))
    }
}
