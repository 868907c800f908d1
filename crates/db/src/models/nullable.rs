//! Serde helper for fields where `null` and an absent key mean different things.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key into `Some(value)`, so an explicit `null`
/// becomes `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`, and with
/// `skip_serializing_if = "Option::is_none"` so it is written back the
/// same way.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
