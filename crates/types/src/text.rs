use serde::{Deserialize, Deserializer};

/// Optional text field: `null` and absent both read as an empty string.
pub(crate) fn or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
