//! Concurrent decoding of result pages.

use crate::value::{AttributeMap, Item};

use tokio::task::JoinSet;

/// Decode every item of a page into `T`, one task per item.
///
/// Returns once all tasks have completed. Items that fail to decode are logged
/// and dropped; the survivors keep their page order.
pub async fn decode_page<T>(items: Vec<AttributeMap>) -> Vec<T>
where
    T: Item + Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (position, item) in items.into_iter().enumerate() {
        tasks.spawn(async move { (position, T::from_item(&item)) });
    }
    let mut decoded = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((position, Ok(record))) => decoded.push((position, record)),
            Ok((position, Err(err))) => {
                tracing::warn!(position, error = %err, "dropping undecodable item");
            }
            Err(err) => tracing::warn!(error = %err, "decode task failed"),
        }
    }
    decoded.sort_unstable_by_key(|(position, _)| *position);
    decoded.into_iter().map(|(_, record)| record).collect()
}
