//! Error types shared by the schema loader, the code generator, the query planner and the store.

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use std::{error, fmt};
use thiserror::Error;

/// Service error code reported when a condition expression evaluates to false.
const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailedException";

/// Errors raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The table schema is malformed or inconsistent.
    #[error("schema error: {0}")]
    Schema(String),

    /// Neither a secondary index hash key nor the primary hash key was supplied.
    #[error("no suitable index found for the provided keys on table '{table}'")]
    NoSuitableIndex {
        /// The table the query targeted.
        table: String,
    },

    /// The request is invalid (empty table name, empty key, misplaced sort key condition).
    #[error("validation error: {0}")]
    Validation(String),

    /// A conditional write was rejected by the store.
    #[error("condition check failed on {operation}")]
    ConditionFailed {
        /// The store operation that was rejected.
        operation: &'static str,
    },

    /// The store could not be reached or answered with a non-conditional failure.
    #[error("{operation} failed: {source}")]
    Transport {
        /// The store operation that failed.
        operation: &'static str,
        /// The underlying SDK error.
        #[source]
        source: Box<dyn error::Error + Send + Sync>,
    },

    /// An attribute map could not be converted into a typed record.
    #[error("decode error: {0}")]
    Decode(String),

    /// A value could not be converted to or from the wire attribute format.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_dynamo::Error),

    /// A JSON document (schema file or cursor token) could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a schema or writing generated output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::Schema`].
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Build a [`Error::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`Error::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Whether the error is caused by the caller and should surface as a 4xx-equivalent outcome.
    ///
    /// Schema errors belong to generator runs and are not request outcomes.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NoSuitableIndex { .. } | Self::Validation(_) | Self::ConditionFailed { .. }
        )
    }

    /// Whether the caller may retry the request with backoff.
    ///
    /// Only transport failures qualify; this crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub(crate) fn from_sdk<E, R>(operation: &'static str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + error::Error + Send + Sync + 'static,
        R: fmt::Debug + Send + Sync + 'static,
    {
        let code = err.as_service_error().and_then(|service| service.code());
        if code == Some(CONDITIONAL_CHECK_FAILED) {
            Self::ConditionFailed { operation }
        } else {
            Self::Transport {
                operation,
                source: Box::new(err),
            }
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
