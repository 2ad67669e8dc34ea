//! Store façade over the table operations.
//!
//! A [`Store`] is built once at process start and passed by reference to the
//! request handlers; it issues exactly one network call per operation, imposes
//! no timeout and never retries.
//!
//! ```rust,no_run
//! use dynamodb_schema::store::{Store, StoreConfig};
//!
//! # async fn example() -> dynamodb_schema::error::Result<()> {
//! let store = Store::connect(&StoreConfig::from_env()).await;
//! let page = store.scan("applingo-dictionary", Some(25), None).await?;
//! if let Some(cursor) = page.cursor {
//!     println!("next page: {}", cursor.to_token()?);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    common::{self, condition::ConditionExpression, cursor::Cursor},
    decode,
    error::Result,
    read::{self, common::Page},
    value::{AttributeMap, Item},
    write::{self, update_item::UpdateExpression},
};

use aws_sdk_dynamodb::Client;

/// Where the store lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreConfig {
    /// AWS region.
    pub region: String,
    /// Custom endpoint URL, for a local DynamoDB.
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Read `AWS_REGION` (default `us-east-1`) and `AWS_ENDPOINT_URL`.
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Typed access to the tables.
#[derive(Clone, Debug)]
pub struct Store {
    client: Client,
}

impl Store {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the client from `config` and the ambient AWS credentials.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;
        tracing::debug!(region = %config.region, endpoint_url = ?config.endpoint_url, "store client ready");
        Self::new(Client::new(&sdk_config))
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetch the item with `key`; `None` when absent.
    pub async fn get(&self, table: &str, key: AttributeMap) -> Result<Option<AttributeMap>> {
        read::get_item::GetItem {
            keys: key,
            single_read_args: read::common::SingleReadArgs {
                table_name: table.to_string(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
    }

    /// Fetch and decode the item with `key`.
    pub async fn get_as<T: Item>(&self, table: &str, key: AttributeMap) -> Result<Option<T>> {
        self.get(table, key)
            .await?
            .map(|item| T::from_item(&item))
            .transpose()
    }

    /// Write `item`, replacing any item with the same key.
    ///
    /// Fails with [`Error::ConditionFailed`](crate::error::Error::ConditionFailed)
    /// when `condition` evaluates to false.
    pub async fn put<T: Item>(
        &self,
        table: &str,
        item: &T,
        condition: Option<ConditionExpression>,
    ) -> Result<()> {
        common::validate_table(table)?;
        common::key::validate(&item.key())?;
        write::put_item::PutItem {
            item: item.to_item(),
            write_args: write::common::WriteArgs {
                condition,
                table_name: table.to_string(),
            },
        }
        .send(&self.client)
        .await
    }

    /// Apply `mutation` to the item with `key`.
    pub async fn update(
        &self,
        table: &str,
        key: AttributeMap,
        mutation: UpdateExpression,
        condition: Option<ConditionExpression>,
    ) -> Result<()> {
        write::update_item::UpdateItem {
            keys: key,
            update_expression: mutation,
            write_args: write::common::WriteArgs {
                condition,
                table_name: table.to_string(),
            },
        }
        .send(&self.client)
        .await
    }

    /// Delete the item with `key`.
    pub async fn delete(
        &self,
        table: &str,
        key: AttributeMap,
        condition: Option<ConditionExpression>,
    ) -> Result<()> {
        write::delete_item::DeleteItem {
            keys: key,
            write_args: write::common::WriteArgs {
                condition,
                table_name: table.to_string(),
            },
        }
        .send(&self.client)
        .await
    }

    /// Run a resolved index lookup, as built by a query builder.
    pub async fn query(&self, query: read::query::Query) -> Result<Page> {
        query.send(&self.client).await
    }

    /// Run a resolved index lookup and decode the page concurrently.
    ///
    /// Items that fail to decode are dropped from the result.
    pub async fn query_as<T>(&self, query: read::query::Query) -> Result<(Vec<T>, Option<Cursor>)>
    where
        T: Item + Send + 'static,
    {
        let page = self.query(query).await?;
        Ok((decode::decode_page(page.items).await, page.cursor))
    }

    /// Read one page of the whole table.
    pub async fn scan(&self, table: &str, limit: Option<i32>, cursor: Option<Cursor>) -> Result<Page> {
        read::scan::Scan {
            multiple_read_args: read::common::MultipleReadArgs {
                cursor,
                limit,
                table_name: table.to_string(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
    }
}
