//! Read requests against the store.
//!
//! Each request is a plain struct converted into a validated internal input before
//! anything is sent:
//! - Getting a single item by primary key
//! - Querying a resolved index
//! - Scanning the whole table as a fallback

/// Arguments and inputs shared by read requests.
pub mod common;

/// Single item lookup by primary key.
pub mod get_item;

/// Index lookup driven by a key condition.
pub mod query;

/// Full table pagination.
pub mod scan;
