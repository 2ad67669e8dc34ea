//! Write requests against the store.
//!
//! Every write accepts an optional condition; a condition that evaluates to false
//! surfaces as [`crate::error::Error::ConditionFailed`] and is never retried.

/// Arguments and inputs shared by write requests.
pub mod common;

/// Removal of an item by primary key.
pub mod delete_item;

/// Creation or replacement of an item.
pub mod put_item;

/// Partial update of an item.
pub mod update_item;
