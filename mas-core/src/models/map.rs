use super::Group;
#[cfg(feature = "serde")]
use super::ValidationError;
use std::hash::Hash;

/// An insertion-ordered map, defaulting to values of [`Group`].
///
/// The incremental reducer folds groups in the order they were supplied, and
/// reports its answer as positional group indices. Both only make sense if
/// iteration order is exactly insertion order, so std::collections::HashMap is
/// replaced with indexmap::IndexMap. The newtype keeps that choice an
/// implementation detail.
///
/// Deserialization rejects repeated keys instead of letting the later entry
/// overwrite the earlier one in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Map<K: Eq + Hash, V = Group>(indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>);

impl<K: Eq + Hash, V> Map<K, V> {
    /// The key stored at the given fold position, if any.
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.0.get_index(index).map(|(key, _)| key)
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> std::ops::DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(indexmap::IndexMap::from_iter(iter))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: Eq + Hash + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(UniqueKeys(std::marker::PhantomData))
    }
}

#[cfg(feature = "serde")]
struct UniqueKeys<K, V>(std::marker::PhantomData<(K, V)>);

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for UniqueKeys<K, V>
where
    K: Eq + Hash + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = Map<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = indexmap::IndexMap::<K, V, rustc_hash::FxBuildHasher>::default();
        let mut position = 0;
        while let Some((key, value)) = access.next_entry::<K, V>()? {
            match map.entry(key) {
                indexmap::map::Entry::Occupied(entry) => {
                    return Err(serde::de::Error::custom(ValidationError::DuplicateGroup {
                        group: position,
                        first: entry.index(),
                    }));
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
            position += 1;
        }
        Ok(Map(map))
    }
}
