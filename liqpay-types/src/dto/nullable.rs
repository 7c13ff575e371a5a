//! Inbound field decoding that treats JSON `null` like an absent key.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the field's zero value; any other value must match `T`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
