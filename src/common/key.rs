use crate::{
    error::{Error, Result},
    value::{AttributeMap, ScalarValue},
};

/// Key component.
///
/// ```rust
/// use dynamodb_schema::common::key;
///
/// let key = key::Key::new("id", "1");
/// assert_eq!(key.name, "id");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: ScalarValue,
}

impl Key {
    /// Key on `name` with `value`.
    pub fn new(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Primary key (partition key and optional sort key).
///
/// ```rust
/// use dynamodb_schema::common::key;
///
/// let keys = key::Keys {
///     partition_key: key::Key::new("id", "1"),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys {
    /// The partition key (required).
    pub partition_key: Key,
    /// The sort key (optional, only for tables with composite primary keys).
    pub sort_key: Option<Key>,
}

fn key_value(key: Key, keys: &mut AttributeMap) -> Result<()> {
    match key.value {
        ScalarValue::String(ref value) if value.is_empty() => Err(Error::validation(format!(
            "key attribute '{}' cannot be an empty string",
            key.name
        ))),
        value => {
            let value = value.into_attribute_value().ok_or_else(|| {
                Error::validation(format!("key attribute '{}' is unset", key.name))
            })?;
            keys.insert(key.name, value);
            Ok(())
        }
    }
}

impl TryFrom<Keys> for AttributeMap {
    type Error = Error;

    fn try_from(keys: Keys) -> Result<Self> {
        let mut attributes = Self::with_capacity(2);
        key_value(keys.partition_key, &mut attributes)?;
        if let Some(sort_key) = keys.sort_key {
            key_value(sort_key, &mut attributes)?;
        }
        Ok(attributes)
    }
}

/// Reject empty keys and empty-string key values before any network call.
pub(crate) fn validate(keys: &AttributeMap) -> Result<()> {
    if keys.is_empty() {
        return Err(Error::validation("empty key"));
    }
    for (name, value) in keys {
        if matches!(value.as_s(), Ok(value) if value.is_empty()) {
            return Err(Error::validation(format!(
                "key attribute '{name}' cannot be an empty string"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;

    #[rstest]
    #[case::partition_key_only_string(
        Keys {
            partition_key: Key::new("a", "b"),
            ..Default::default()
        },
        AttributeMap::from(
            [
                ("a".to_string(), types::AttributeValue::S("b".to_string())),
            ]
        )
    )]
    #[case::partition_key_only_number(
        Keys {
            partition_key: Key::new("a", 1_i64),
            ..Default::default()
        },
        AttributeMap::from(
            [
                ("a".to_string(), types::AttributeValue::N("1".to_string())),
            ]
        )
    )]
    #[case::partition_and_sort_key(
        Keys {
            partition_key: Key::new("a", "b"),
            sort_key: Some(
                Key::new("c", 0_i64)
            ),
        },
        AttributeMap::from(
            [
                ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ("c".to_string(), types::AttributeValue::N("0".to_string())),
            ]
        )
    )]
    fn test_keys(#[case] keys: Keys, #[case] expected: AttributeMap) {
        let actual: AttributeMap = keys.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::unset(
        Keys {
            partition_key: Key::new("a", ScalarValue::Unset),
            ..Default::default()
        }
    )]
    #[case::empty_string(
        Keys {
            partition_key: Key::new("a", "b"),
            sort_key: Some(
                Key::new("c", "")
            ),
        }
    )]
    fn test_keys_rejects(#[case] keys: Keys) {
        let actual: Result<AttributeMap> = keys.try_into();
        assert!(matches!(actual, Err(Error::Validation(_))));
    }

    #[rstest]
    #[case::empty(AttributeMap::new(), false)]
    #[case::empty_string(
        AttributeMap::from([("a".to_string(), types::AttributeValue::S(String::new()))]),
        false
    )]
    #[case::valid(
        AttributeMap::from([("a".to_string(), types::AttributeValue::S("b".to_string()))]),
        true
    )]
    fn test_validate(#[case] keys: AttributeMap, #[case] is_valid: bool) {
        assert_eq!(validate(&keys).is_ok(), is_valid);
    }
}
