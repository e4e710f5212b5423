use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hash};

/// A set, represented as a map where every key is associated with `()`.
pub type SetMap<K> = HashMap<K, ()>;

/// A set, represented as a map where every key is associated with `true`.
pub type BoolMap<K> = HashMap<K, bool>;

/// Creates a new, empty HashMap, with a capacity hint of `cap`. If `cap` is 0, `default_cap` is
/// used instead and if both are 0, no capacity is reserved at all.
///
/// # Examples
/// ```
/// # use container_utils::maps;
/// let map: std::collections::HashMap<u8, u8> = maps::make(0, 8);
/// assert!(map.is_empty());
/// assert!(map.capacity() >= 8);
/// ```
pub fn make<K, V>(cap: usize, default_cap: usize) -> HashMap<K, V> {
    match (cap, default_cap) {
        (0, 0) => HashMap::new(),
        (0, default_cap) => HashMap::with_capacity(default_cap),
        (cap, _) => HashMap::with_capacity(cap),
    }
}

/// Inserts the provided `key`-`value` pair into the map, but only if the key isn't already
/// present. Returns true if the pair was inserted.
///
/// Unlike [`HashMap::insert`], an existing value is never replaced.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use container_utils::maps;
/// let mut map = HashMap::new();
/// assert!(maps::try_add(&mut map, "a", 1));
/// assert!(!maps::try_add(&mut map, "a", 2));
/// assert_eq!(map["a"], 1);
/// ```
pub fn try_add<K, V, S>(map: &mut HashMap<K, V, S>, key: K, value: V) -> bool
where
    K: Hash + Eq,
    S: BuildHasher,
{
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(entry) => {
            entry.insert(value);
            true
        },
    }
}

/// Adds every item to the map as a key-value pair, produced by `convert`. Existing keys have their
/// values overwritten.
pub fn add_slice<K, V, S, E>(
    map: &mut HashMap<K, V, S>,
    items: impl IntoIterator<Item = E>,
    convert: impl FnMut(E) -> (K, V),
) where
    K: Hash + Eq,
    S: BuildHasher,
{
    map.extend(items.into_iter().map(convert));
}

/// Adds every item to the map as a value, with the key derived from the item by `get_key`.
/// Existing keys have their values overwritten.
pub fn add_slice_as_value<K, V, S>(
    map: &mut HashMap<K, V, S>,
    items: impl IntoIterator<Item = V>,
    mut get_key: impl FnMut(&V) -> K,
) where
    K: Hash + Eq,
    S: BuildHasher,
{
    map.extend(items.into_iter().map(|value| (get_key(&value), value)));
}

/// Removes the entry associated with `key`, returning the value if there was one.
pub fn pop<K, V, S, Q>(map: &mut HashMap<K, V, S>, key: &Q) -> Option<V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    map.remove(key)
}

/// Removes the entry associated with `key`, returning true if there was one.
pub fn delete<K, V, S, Q>(map: &mut HashMap<K, V, S>, key: &Q) -> bool
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    map.remove(key).is_some()
}

/// Removes the entries associated with each of the provided `keys`. Keys which aren't in the map
/// are ignored.
pub fn delete_slice<'a, K, V, S, Q>(map: &mut HashMap<K, V, S>, keys: impl IntoIterator<Item = &'a Q>)
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized + 'a,
    S: BuildHasher,
{
    for key in keys {
        map.remove(key);
    }
}

/// Removes the entries associated with the key that `get_key` derives from each item. Keys which
/// aren't in the map are ignored.
pub fn delete_slice_func<K, V, S, E>(
    map: &mut HashMap<K, V, S>,
    items: impl IntoIterator<Item = E>,
    mut get_key: impl FnMut(E) -> K,
) where
    K: Hash + Eq,
    S: BuildHasher,
{
    for item in items {
        map.remove(&get_key(item));
    }
}

/// Creates a shallow copy of the map. A `None` map stays `None`, rather than becoming empty.
pub fn clone<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Option<HashMap<K, V, S>>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    map.cloned()
}

/// Converts every entry of the map into a new key-value pair, collecting them into a new map. A
/// `None` map is converted to `None`.
///
/// If two entries are converted to the same key, whichever is visited last wins. Because
/// iteration order is unspecified, so is which entry that is.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use container_utils::maps;
/// let map = HashMap::from([("a", 1_i32), ("b", 2)]);
/// let converted = maps::convert(Some(&map), |k, v| (k.to_uppercase(), i64::from(*v)))
///     .expect("a Some map converts to a Some map");
/// assert_eq!(converted["A"], 1_i64);
/// assert_eq!(converted["B"], 2_i64);
///
/// assert!(maps::convert(None::<&HashMap<&str, i32>>, |k, v| (*k, *v)).is_none());
/// ```
pub fn convert<K1, V1, S, K2, V2>(
    map: Option<&HashMap<K1, V1, S>>,
    mut convert: impl FnMut(&K1, &V1) -> (K2, V2),
) -> Option<HashMap<K2, V2>>
where
    K2: Hash + Eq,
{
    let map = map?;

    let mut converted = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let (key, value) = convert(key, value);
        converted.insert(key, value);
    }
    Some(converted)
}

/// Converts every value of the map, keeping the same keys. A `None` map is converted to `None`.
pub fn convert_values<K, V1, S, V2>(
    map: Option<&HashMap<K, V1, S>>,
    mut convert: impl FnMut(&V1) -> V2,
) -> Option<HashMap<K, V2>>
where
    K: Hash + Eq + Clone,
{
    map.map(|map| {
        map.iter()
            .map(|(key, value)| (key.clone(), convert(value)))
            .collect()
    })
}

/// Returns a set containing exactly the keys of the map.
pub fn keys_to_set<K, V, S>(map: &HashMap<K, V, S>) -> SetMap<K>
where
    K: Hash + Eq + Clone,
{
    map.keys().map(|key| (key.clone(), ())).collect()
}

/// Returns all of the keys in the map, in no particular order.
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns all of the values in the map, in no particular order.
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Returns all of the keys in the map, converted by `convert`, in no particular order.
pub fn keys_func<K, V, S, T>(map: &HashMap<K, V, S>, convert: impl FnMut(&K) -> T) -> Vec<T> {
    map.keys().map(convert).collect()
}

/// Returns all of the values in the map, converted by `convert`, in no particular order.
pub fn values_func<K, V, S, T>(map: &HashMap<K, V, S>, convert: impl FnMut(&V) -> T) -> Vec<T> {
    map.values().map(convert).collect()
}

/// Creates a new map from the provided items, with `convert` producing a key-value pair from each
/// item and its index. When two items produce the same key, the later one wins.
pub fn from_slice_with_index<K, V, E>(
    items: impl IntoIterator<Item = E>,
    mut convert: impl FnMut(usize, E) -> (K, V),
) -> HashMap<K, V>
where
    K: Hash + Eq,
{
    let items = items.into_iter();
    let mut map = HashMap::with_capacity(items.size_hint().0);
    map.extend(items.enumerate().map(|(index, item)| convert(index, item)));
    map
}

/// Creates a new map from the provided items, with `convert` producing a key-value pair from each
/// item. When two items produce the same key, the later one wins.
pub fn from_slice<K, V, E>(
    items: impl IntoIterator<Item = E>,
    mut convert: impl FnMut(E) -> (K, V),
) -> HashMap<K, V>
where
    K: Hash + Eq,
{
    from_slice_with_index(items, |_, item| convert(item))
}

/// Creates a [`SetMap`] containing each of the provided items.
///
/// # Examples
/// ```
/// # use container_utils::maps;
/// let set = maps::set_map(["a", "b", "c", "a"]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.get("b"), Some(&()));
/// ```
pub fn set_map<T: Hash + Eq>(items: impl IntoIterator<Item = T>) -> SetMap<T> {
    from_slice(items, |item| (item, ()))
}

/// Creates a [`SetMap`] containing the key that `get_key` derives from each item.
pub fn set_map_func<K: Hash + Eq, T>(
    items: impl IntoIterator<Item = T>,
    mut get_key: impl FnMut(T) -> K,
) -> SetMap<K> {
    from_slice(items, |item| (get_key(item), ()))
}

/// Creates a [`BoolMap`] containing each of the provided items.
pub fn bool_map<T: Hash + Eq>(items: impl IntoIterator<Item = T>) -> BoolMap<T> {
    from_slice(items, |item| (item, true))
}

/// Creates a [`BoolMap`] containing the key that `get_key` derives from each item.
pub fn bool_map_func<K: Hash + Eq, T>(
    items: impl IntoIterator<Item = T>,
    mut get_key: impl FnMut(T) -> K,
) -> BoolMap<K> {
    from_slice(items, |item| (get_key(item), true))
}
