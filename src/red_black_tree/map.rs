use crate::entry::Entry;
use crate::red_black_tree::compare::ByKey;
use crate::red_black_tree::iter::{IntoIter, Iter};
use crate::red_black_tree::tree::{Cursor, RedBlackTree};
use crate::red_black_tree::{Error, Result};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a red black tree.
///
/// Entries are ordered by key alone. Lookups through `at` fail with `Error::KeyNotFound` and
/// indexing panics when the key is absent: neither ever inserts a default value.
///
/// # Examples
///
/// ```
/// use ordered_containers::red_black_tree::{Error, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.at(&1), Err(Error::KeyNotFound));
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.remove(&0), Some((0, 1)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<K, V> {
    tree: RedBlackTree<Entry<K, V>, ByKey<V>>,
}

impl<K, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            tree: RedBlackTree::with_comparator(ByKey::new()),
        }
    }

    /// Constructs a new, empty `RedBlackMap<K, V>` that allocates `chunk_size` entries at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackMap {
            tree: RedBlackTree::with_comparator_and_chunk_size(ByKey::new(), chunk_size),
        }
    }

    /// Inserts a key-value pair into the map unless the key is already present. Returns a cursor
    /// to the entry holding the key and whether the pair was inserted. An existing value is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert!(map.insert(1, 1).1);
    /// assert!(!map.insert(1, 2).1);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool)
    where
        K: Ord,
    {
        self.tree.insert(Entry::new(key, value))
    }

    /// Inserts a key-value pair into the map, overwriting the value of an existing key. Returns a
    /// cursor to the entry and `true` if the key was new.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert!(map.insert_or_assign(1, 1).1);
    /// assert!(!map.insert_or_assign(1, 2).1);
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Cursor, bool)
    where
        K: Ord,
    {
        let cursor = self.tree.find(&key);
        match self.tree.get_mut(cursor) {
            Some(entry) => {
                entry.value = value;
                (cursor, false)
            },
            None => self.tree.insert(Entry::new(key, value)),
        }
    }

    /// Builds one entry from `args`, such as a `(key, value)` tuple, and inserts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.emplace((1, "one"));
    /// assert_eq!(map[&1], "one");
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> (Cursor, bool)
    where
        K: Ord,
        Entry<K, V>: From<A>,
    {
        self.tree.emplace(args)
    }

    /// Returns an immutable reference to the value associated with a key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.at(&1), Ok(&1));
    /// assert_eq!(map.at(&0), Err(Error::KeyNotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.at_mut(&1).unwrap() = 2;
    /// assert_eq!(map[&1], 2);
    /// ```
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: Ord,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.tree.get(self.tree.find(key)).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let cursor = self.tree.find(key);
        self.tree.get_mut(cursor).map(|entry| &mut entry.value)
    }

    /// Returns the key-value pair at `cursor`.
    pub fn key_value(&self, cursor: Cursor) -> Option<(&K, &V)> {
        self.tree.get(cursor).map(Entry::as_pair)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.tree.contains(key)
    }

    /// Returns a cursor to the entry holding a key, or `end()` if the key is absent.
    pub fn find(&self, key: &K) -> Cursor
    where
        K: Ord,
    {
        self.tree.find(key)
    }

    /// Returns a cursor to the first entry whose key is not less than `key`, or `end()`.
    pub fn lower_bound(&self, key: &K) -> Cursor
    where
        K: Ord,
    {
        self.tree.lower_bound(key)
    }

    /// Returns a cursor to the first entry whose key is greater than `key`, or `end()`.
    pub fn upper_bound(&self, key: &K) -> Cursor
    where
        K: Ord,
    {
        self.tree.upper_bound(key)
    }

    /// Removes the entry at `cursor` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not name an entry of this map.
    pub fn erase(&mut self, cursor: Cursor) -> Result<(K, V)> {
        self.tree.erase(cursor).map(Entry::into_pair)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)>
    where
        K: Ord,
    {
        self.tree.remove(key).map(Entry::into_pair)
    }

    /// Inserts a copy of every entry of `other` whose key is not already in `self`. `other` is
    /// left unchanged.
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone + Ord,
        V: Clone,
    {
        self.tree.merge(&other.tree);
    }

    /// Exchanges the contents of two maps in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of entries the map could ever hold.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a cursor to the entry with the minimum key, or `end()` if the map is empty.
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    /// Returns the cursor one past the entry with the maximum key.
    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Returns the cursor following `cursor`.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.tree.next(cursor)
    }

    /// Returns the cursor preceding `cursor`.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.tree.prev(cursor)
    }

    /// Returns the entry with the minimum key. Returns `None` if the map is empty.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(Entry::as_pair)
    }

    /// Returns the entry with the maximum key. Returns `None` if the map is empty.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(Entry::as_pair)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(5, 5);
    /// map.insert(3, 3);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), Some((&5, &5)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, K, V> {
        RedBlackMapIter {
            tree_iter: self.tree.iter(),
        }
    }

    /// Returns an iterator over the keys of the map, in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map, in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<'a, K, V> Index<&'a K> for RedBlackMap<K, V>
where
    K: Ord,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K, V> IndexMut<&'a K> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<K, V> IntoIterator for RedBlackMap<K, V> {
    type IntoIter = RedBlackMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackMap<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = RedBlackMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<K, V> {
    tree_iter: IntoIter<Entry<K, V>, ByKey<V>>,
}

impl<K, V> Iterator for RedBlackMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next().map(Entry::into_pair)
    }
}

/// An iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, K, V> {
    tree_iter: Iter<'a, Entry<K, V>, ByKey<V>>,
}

impl<'a, K, V> Iterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next().map(Entry::as_pair)
    }
}

impl<'a, K, V> DoubleEndedIterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back().map(Entry::as_pair)
    }
}

impl<K, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for RedBlackMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        RedBlackMap {
            tree: self.tree.clone(),
        }
    }
}

impl<K, V> fmt::Debug for RedBlackMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::red_black_tree::Error;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        let (cursor, inserted) = map.insert(1, 1);
        assert!(inserted);
        assert_eq!(map.key_value(cursor), Some((&1, &1)));
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_keeps_existing_value() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        let (cursor, inserted) = map.insert(1, 2);
        assert!(!inserted);
        assert_eq!(map.key_value(cursor), Some((&1, &1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_or_assign() {
        let mut map = RedBlackMap::new();
        map.insert_or_assign(1, 1);
        let (cursor, inserted) = map.insert_or_assign(1, 2);
        assert!(!inserted);
        assert_eq!(map.key_value(cursor), Some((&1, &2)));
    }

    #[test]
    fn test_at_missing_key() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.at(&1), Err(Error::KeyNotFound));
        assert_eq!(map.at_mut(&1), Err(Error::KeyNotFound));
        assert!(map.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_index_missing_key() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        let _value = map[&1];
    }

    #[test]
    fn test_index_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map[&1] += 1;
        assert_eq!(map[&1], 2);
    }

    #[test]
    fn test_erase() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(2, 'b');
        let cursor = map.find(&1);
        assert_eq!(map.erase(cursor), Ok((1, 'a')));
        assert_eq!(map.erase(cursor), Err(Error::InvalidCursor));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_merge() {
        let mut a: RedBlackMap<u32, char> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
        let b: RedBlackMap<u32, char> = vec![(2, 'x'), (3, 'c')].into_iter().collect();
        a.merge(&b);
        assert_eq!(
            a.iter().collect::<Vec<(&u32, &char)>>(),
            vec![(&1, &'a'), (&2, &'b'), (&3, &'c')],
        );
        assert_eq!(
            b.iter().collect::<Vec<(&u32, &char)>>(),
            vec![(&2, &'x'), (&3, &'c')],
        );
    }

    #[test]
    fn test_bounds() {
        let map: RedBlackMap<u32, u32> = vec![(1, 10), (3, 30), (7, 70)].into_iter().collect();
        assert_eq!(map.key_value(map.lower_bound(&2)), Some((&3, &30)));
        assert_eq!(map.key_value(map.upper_bound(&3)), Some((&7, &70)));
        assert_eq!(map.upper_bound(&7), map.end());
    }

    #[test]
    fn test_first_last() {
        let map: RedBlackMap<u32, u32> = vec![(3, 3), (1, 1), (5, 5)].into_iter().collect();
        assert_eq!(map.first(), Some((&1, &1)));
        assert_eq!(map.last(), Some((&5, &5)));
    }

    #[test]
    fn test_keys_values() {
        let map: RedBlackMap<u32, char> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
        assert_eq!(map.values().rev().collect::<Vec<&char>>(), vec![&'b', &'a']);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_debug() {
        let map: RedBlackMap<u32, u32> = vec![(2, 20), (1, 10)].into_iter().collect();
        assert_eq!(format!("{:?}", map), "{1: 10, 2: 20}");
    }
}
