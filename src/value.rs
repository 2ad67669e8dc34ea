//! Scalar values and the wire attribute-map format.
//!
//! Generated records convert to and from [`AttributeMap`] through the [`Item`] trait.
//! The field readers in this module are what generated `from_item` bodies call.

use crate::error::{Error, Result};

use aws_sdk_dynamodb::types::AttributeValue;
use std::collections;

/// Wire format of a stored item: attribute name to attribute value.
pub type AttributeMap = collections::HashMap<String, AttributeValue>;

/// A scalar attribute value.
///
/// `Unset` stands for an attribute that carries no value; it is never written to the store.
///
/// ```rust
/// use dynamodb_schema::value::ScalarValue;
///
/// let side = ScalarValue::from("front");
/// let level = ScalarValue::from(3_i64);
/// assert_eq!(side, ScalarValue::String("front".to_string()));
/// assert!(!level.is_unset());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScalarValue {
    /// A string value.
    String(String),
    /// An integer number value.
    Number(i64),
    /// A boolean value.
    Boolean(bool),
    /// No value.
    #[default]
    Unset,
}

impl ScalarValue {
    /// Whether the value is [`ScalarValue::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Convert into a wire value, `None` when unset.
    pub fn into_attribute_value(self) -> Option<AttributeValue> {
        match self {
            Self::String(value) => Some(AttributeValue::S(value)),
            Self::Number(value) => Some(AttributeValue::N(value.to_string())),
            Self::Boolean(value) => Some(AttributeValue::Bool(value)),
            Self::Unset => None,
        }
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl TryFrom<&AttributeValue> for ScalarValue {
    type Error = Error;

    fn try_from(value: &AttributeValue) -> Result<Self> {
        match value {
            AttributeValue::S(value) => Ok(Self::String(value.clone())),
            AttributeValue::N(value) => parse_number(value).map(Self::Number),
            AttributeValue::Bool(value) => Ok(Self::Boolean(*value)),
            AttributeValue::Null(_) => Ok(Self::Unset),
            other => Err(Error::decode(format!(
                "unsupported attribute value {other:?}, expected a scalar"
            ))),
        }
    }
}

fn parse_number(value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::decode(format!("'{value}' is not an integer")))
}

/// A typed record that marshals to and from the wire attribute-map format.
///
/// Implemented by generated table records.
pub trait Item: Sized {
    /// Marshal the record into an attribute map.
    fn to_item(&self) -> AttributeMap;

    /// Unmarshal a record from an attribute map.
    ///
    /// Attributes missing from the map take their default value, which keeps
    /// projected (partial) index results decodable.
    fn from_item(item: &AttributeMap) -> Result<Self>;

    /// The primary key attributes of the record.
    fn key(&self) -> AttributeMap;
}

/// Insert a value into an attribute map, skipping unset values.
pub fn insert(item: &mut AttributeMap, name: &str, value: impl Into<ScalarValue>) {
    if let Some(value) = value.into().into_attribute_value() {
        item.insert(name.to_string(), value);
    }
}

/// Read a string attribute, defaulting to an empty string when absent.
pub fn text(item: &AttributeMap, name: &str) -> Result<String> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(other) => Err(mismatch(name, "string", other)),
    }
}

/// Read a number attribute, defaulting to zero when absent.
pub fn integer(item: &AttributeMap, name: &str) -> Result<i64> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(0),
        Some(AttributeValue::N(value)) => parse_number(value),
        Some(other) => Err(mismatch(name, "number", other)),
    }
}

/// Read a boolean attribute, defaulting to `false` when absent.
pub fn boolean(item: &AttributeMap, name: &str) -> Result<bool> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(false),
        Some(AttributeValue::Bool(value)) => Ok(*value),
        Some(other) => Err(mismatch(name, "boolean", other)),
    }
}

/// Read an attribute of undeclared type, [`ScalarValue::Unset`] when absent.
pub fn dynamic(item: &AttributeMap, name: &str) -> Result<ScalarValue> {
    match item.get(name) {
        None => Ok(ScalarValue::Unset),
        Some(value) => ScalarValue::try_from(value)
            .map_err(|err| Error::decode(format!("attribute '{name}': {err}"))),
    }
}

fn mismatch(name: &str, expected: &str, found: &AttributeValue) -> Error {
    Error::decode(format!(
        "attribute '{name}' should be a {expected}, found {found:?}"
    ))
}
