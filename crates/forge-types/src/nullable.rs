//! Lenient decoding for registry fields that may arrive as `null`.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` to `T::default()`.
///
/// Paired with the container-level `#[serde(default)]`, which covers absent
/// fields, this makes every non-`Option` record field tolerate both shapes.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
