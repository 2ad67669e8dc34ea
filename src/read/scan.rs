use crate::{
    error::{Error, Result},
    read,
};

use aws_sdk_dynamodb::Client;

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    multiple_read_operation: read::common::MultipleReadInput,
}

/// Scan operation, the full table fallback when no index matches.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_schema::read;
///
/// # async fn example(client: &Client) -> dynamodb_schema::error::Result<()> {
/// let scan = read::scan::Scan {
///     multiple_read_args: read::common::MultipleReadArgs {
///         limit: Some(1000),
///         table_name: "dictionary".to_string(),
///         ..Default::default()
///     },
/// };
/// let page = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Table, filter, selection and paging arguments.
    pub multiple_read_args: read::common::MultipleReadArgs,
}

impl TryFrom<Scan> for ScanInput {
    type Error = Error;

    fn try_from(scan: Scan) -> Result<Self> {
        let multiple_read_operation: read::common::MultipleReadInput =
            scan.multiple_read_args.try_into()?;
        Ok(Self {
            multiple_read_operation,
        })
    }
}

impl Scan {
    /// Execute the scan, returning one page.
    #[tracing::instrument(name = "dynamodb_schema.scan", skip(client), err)]
    pub async fn send(self, client: &Client) -> Result<read::common::Page> {
        let scan: ScanInput = self.try_into()?;
        let builder = client.scan();
        let output = crate::apply_multiple_read_operation!(builder, scan.multiple_read_operation)
            .send()
            .await
            .map_err(|err| Error::from_sdk("scan", err))?;
        Ok(read::common::Page::new(output.items, output.last_evaluated_key))
    }
}
