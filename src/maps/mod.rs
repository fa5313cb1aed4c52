//! Map transform helpers.
//!
//! Small, by-value transforms over [`HashMap`]: inversion, splitting items
//! into parallel collections, and sorting items by an arbitrary key
//! function. Each helper consumes its input and returns a fresh collection.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use toolshed::maps::invert;
//!
//! let ages = HashMap::from([("ashley", 6), ("timothy", 15)]);
//! let by_age = invert(ages);
//! assert_eq!(by_age[&6], "ashley");
//! assert_eq!(by_age[&15], "timothy");
//! ```

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Inverts a map from a key-to-value mapping to a value-to-key mapping.
///
/// The values being switched to keys must be hashable. Duplicate values
/// collapse: the surviving key is unspecified, per [`HashMap`] insertion
/// semantics.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolshed::maps::invert;
///
/// let inverted = invert(HashMap::from([("one", 1), ("two", 2)]));
/// assert_eq!(inverted, HashMap::from([(1, "one"), (2, "two")]));
/// ```
pub fn invert<K, V>(map: HashMap<K, V>) -> HashMap<V, K>
where
    V: Eq + Hash,
{
    map.into_iter().map(|(key, value)| (value, key)).collect()
}

/// Inverts a map with a transform applied to the old values.
///
/// The transformed values become the new keys and must be hashable. The
/// transform receives only the value.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolshed::maps::invert_with;
///
/// let scores = HashMap::from([
///     ("ashley".to_string(), vec![1, 2, 3]),
///     ("timothy".to_string(), vec![4, 5, 6]),
/// ]);
/// let by_total = invert_with(|values| values.iter().sum::<i32>(), scores);
/// assert_eq!(by_total[&6], "ashley");
/// assert_eq!(by_total[&15], "timothy");
/// ```
pub fn invert_with<K, V, U, F>(mut transform: F, map: HashMap<K, V>) -> HashMap<U, K>
where
    U: Eq + Hash,
    F: FnMut(V) -> U,
{
    map.into_iter()
        .map(|(key, value)| (transform(value), key))
        .collect()
}

/// Splits a map's items into parallel key and value collections.
///
/// The two collections are index-aligned: `keys[i]` mapped to `values[i]`.
/// Ordering otherwise follows the map's iteration order, which for
/// [`HashMap`] is unspecified.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolshed::maps::split_keys_values;
///
/// let (keys, values) = split_keys_values(HashMap::from([("ashley", 6), ("timothy", 15)]));
/// assert_eq!(keys.len(), 2);
/// assert_eq!(values.len(), 2);
/// let index = keys.iter().position(|key| *key == "ashley").unwrap();
/// assert_eq!(values[index], 6);
/// ```
pub fn split_keys_values<K, V>(map: HashMap<K, V>) -> (Vec<K>, Vec<V>) {
    map.into_iter().unzip()
}

/// Sorts a map's items by a key function over the full `(key, value)` pair.
///
/// The key function may sort on any aspect of the pair. Set `reverse` for
/// descending order. The sort is stable in either direction: items whose
/// sort keys compare equal keep their relative order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolshed::maps::sorted_items;
///
/// let ages = HashMap::from([("ashley", 6), ("sam", 20), ("tim", 15)]);
/// let by_age = sorted_items(|(_, age)| *age, ages, false);
/// assert_eq!(by_age, vec![("ashley", 6), ("tim", 15), ("sam", 20)]);
/// ```
pub fn sorted_items<K, V, B, F>(mut key: F, map: HashMap<K, V>, reverse: bool) -> Vec<(K, V)>
where
    B: Ord,
    F: FnMut(&(K, V)) -> B,
{
    let mut items: Vec<(K, V)> = map.into_iter().collect();
    if reverse {
        // Sorting on the reversed key, rather than sorting and reversing,
        // keeps equal-key items in their original relative order.
        items.sort_by_key(|item| Reverse(key(item)));
    } else {
        items.sort_by_key(key);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invert_swaps_keys_and_values() {
        let map = HashMap::from([("ashley", 6), ("timothy", 15)]);
        let inverted = invert(map);
        assert_eq!(inverted, HashMap::from([(6, "ashley"), (15, "timothy")]));
    }

    #[rstest]
    fn test_invert_twice_is_identity() {
        let map = HashMap::from([(1, "one"), (2, "two")]);
        assert_eq!(invert(invert(map.clone())), map);
    }

    #[rstest]
    fn test_invert_with_transform() {
        let map = HashMap::from([("ashley", vec![1, 2, 3]), ("timothy", vec![4, 5, 6])]);
        let inverted = invert_with(|values| values.iter().sum::<i32>(), map);
        assert_eq!(inverted, HashMap::from([(6, "ashley"), (15, "timothy")]));
    }

    #[rstest]
    fn test_split_keys_values_alignment() {
        let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let (keys, values) = split_keys_values(map.clone());
        assert_eq!(keys.len(), 3);
        for (key, value) in keys.iter().zip(&values) {
            assert_eq!(map[key], *value);
        }
    }

    #[rstest]
    fn test_sorted_items_by_value() {
        let map = HashMap::from([("ashley", 6), ("sam", 20), ("tim", 15)]);
        let sorted = sorted_items(|(_, age)| *age, map, false);
        assert_eq!(sorted, vec![("ashley", 6), ("tim", 15), ("sam", 20)]);
    }

    #[rstest]
    fn test_sorted_items_reversed() {
        let map = HashMap::from([("ashley", 6), ("sam", 20), ("tim", 15)]);
        let sorted = sorted_items(|(_, age)| *age, map, true);
        assert_eq!(sorted, vec![("sam", 20), ("tim", 15), ("ashley", 6)]);
    }

    #[rstest]
    fn test_sorted_items_reverse_is_stable() {
        let map = HashMap::from([("a", 1), ("b", 1), ("c", 1)]);
        // All sort keys tie, so both directions must fall back to the
        // map's own iteration order (identical across a clone).
        let forward = sorted_items(|(_, count)| *count, map.clone(), false);
        let reversed = sorted_items(|(_, count)| *count, map, true);
        assert_eq!(forward, reversed);
    }

    #[rstest]
    fn test_sorted_items_by_key() {
        let map = HashMap::from([("b", 2), ("a", 1), ("c", 3)]);
        let sorted = sorted_items(|(name, _)| *name, map, false);
        assert_eq!(sorted, vec![("a", 1), ("b", 2), ("c", 3)]);
    }
}
