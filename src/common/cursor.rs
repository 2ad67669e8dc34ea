use crate::{error::Result, value::AttributeMap};

use serde_dynamo::{from_item, to_item};

/// Opaque continuation cursor marking where the next page starts.
///
/// Wraps the store's last evaluated key. [`Cursor::to_token`] and [`Cursor::from_token`]
/// turn it into a string that can travel through an API and back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cursor(pub(crate) AttributeMap);

impl Cursor {
    /// Cursor from the store's last evaluated key, `None` when there is no further page.
    pub(crate) fn from_last_evaluated_key(key: Option<AttributeMap>) -> Option<Self> {
        key.filter(|key| !key.is_empty()).map(Self)
    }

    /// Encode the cursor as a string token.
    pub fn to_token(&self) -> Result<String> {
        let value: serde_json::Value = from_item(self.0.clone())?;
        let token = serde_json::to_string(&value)?;
        Ok(token)
    }

    /// Decode a token produced by [`Cursor::to_token`].
    pub fn from_token(token: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(token)?;
        let key = to_item(value)?;
        Ok(Self(key))
    }
}
