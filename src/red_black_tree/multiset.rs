use crate::red_black_tree::compare::LessEqual;
use crate::red_black_tree::iter::{IntoIter, Iter};
use crate::red_black_tree::tree::{Cursor, RedBlackTree};
use crate::red_black_tree::Result;
use std::fmt;
use std::iter::FromIterator;

/// An ordered multiset implemented using a red black tree.
///
/// Equivalent keys are all kept. A new key is placed after the keys it is equivalent to, so a run
/// of equal keys iterates in insertion order.
///
/// # Examples
///
/// ```
/// use ordered_containers::red_black_tree::RedBlackMultiSet;
///
/// let mut multiset = RedBlackMultiSet::new();
/// multiset.insert(1);
/// multiset.insert(1);
/// multiset.insert(2);
///
/// assert_eq!(multiset.len(), 3);
/// assert_eq!(multiset.count(&1), 2);
/// assert_eq!(multiset.equal_range(&1).count(), 2);
/// ```
pub struct RedBlackMultiSet<T> {
    tree: RedBlackTree<T, LessEqual>,
}

impl<T> RedBlackMultiSet<T> {
    /// Constructs a new, empty `RedBlackMultiSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMultiSet;
    ///
    /// let multiset: RedBlackMultiSet<u32> = RedBlackMultiSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMultiSet {
            tree: RedBlackTree::with_comparator(LessEqual),
        }
    }

    /// Constructs a new, empty `RedBlackMultiSet<T>` that allocates `chunk_size` nodes at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackMultiSet {
            tree: RedBlackTree::with_comparator_and_chunk_size(LessEqual, chunk_size),
        }
    }

    /// Inserts a key into the multiset and returns a cursor to it. Insertion always succeeds.
    pub fn insert(&mut self, key: T) -> Cursor
    where
        T: Ord,
    {
        self.tree.insert(key).0
    }

    /// Builds one key from `args` and inserts it.
    pub fn emplace<A>(&mut self, args: A) -> Cursor
    where
        T: Ord + From<A>,
    {
        self.tree.emplace(args).0
    }

    /// Removes the key at `cursor` and returns it. Other copies of the key are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not name a key of this multiset.
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        self.tree.erase(cursor)
    }

    /// Removes one copy of a key and returns it, or `None` if the key is absent.
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        self.tree.remove(key)
    }

    /// Returns a cursor to one copy of a key, or `end()` if the key is absent.
    pub fn find(&self, key: &T) -> Cursor
    where
        T: Ord,
    {
        self.tree.find(key)
    }

    /// Checks if a key exists in the multiset.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.tree.contains(key)
    }

    /// Returns the number of copies of a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMultiSet;
    ///
    /// let multiset: RedBlackMultiSet<u32> = vec![3, 1, 3, 3].into_iter().collect();
    /// assert_eq!(multiset.count(&3), 3);
    /// assert_eq!(multiset.count(&2), 0);
    /// ```
    pub fn count(&self, key: &T) -> usize
    where
        T: Ord,
    {
        self.tree.count(key)
    }

    /// Returns a cursor to the first key not less than `key`, or `end()`.
    pub fn lower_bound(&self, key: &T) -> Cursor
    where
        T: Ord,
    {
        self.tree.lower_bound(key)
    }

    /// Returns a cursor to the first key greater than `key`, or `end()`.
    pub fn upper_bound(&self, key: &T) -> Cursor
    where
        T: Ord,
    {
        self.tree.upper_bound(key)
    }

    /// Returns an iterator over every copy of `key`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMultiSet;
    ///
    /// let multiset: RedBlackMultiSet<u32> = vec![2, 1, 2, 3].into_iter().collect();
    /// assert_eq!(multiset.equal_range(&2).collect::<Vec<&u32>>(), vec![&2, &2]);
    /// ```
    pub fn equal_range(&self, key: &T) -> RedBlackMultiSetIter<'_, T>
    where
        T: Ord,
    {
        let (first, last) = self.tree.equal_range(key);
        self.range(first, last)
    }

    /// Returns the half-open cursor pair delimiting every copy of `key`.
    pub fn equal_range_cursors(&self, key: &T) -> (Cursor, Cursor)
    where
        T: Ord,
    {
        self.tree.equal_range(key)
    }

    /// Returns an iterator over the keys from `first` up to, but not including, `last`.
    pub fn range(&self, first: Cursor, last: Cursor) -> RedBlackMultiSetIter<'_, T> {
        RedBlackMultiSetIter {
            tree_iter: self.tree.range(first, last),
        }
    }

    /// Inserts a copy of every key of `other` into `self`. `other` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut a: RedBlackMultiSet<u32> = vec![1, 2].into_iter().collect();
    /// let b: RedBlackMultiSet<u32> = vec![2, 3].into_iter().collect();
    /// a.merge(&b);
    /// assert_eq!(a.count(&2), 2);
    /// assert_eq!(b.len(), 2);
    /// ```
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone + Ord,
    {
        self.tree.merge(&other.tree);
    }

    /// Exchanges the contents of two multisets in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns the number of keys in the multiset, counting every copy.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of keys the multiset could ever hold.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Clears the multiset, removing all keys.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a cursor to the minimum key, or `end()` if the multiset is empty.
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    /// Returns the cursor one past the maximum key.
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

    /// Returns the key at `cursor`.
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        self.tree.get(cursor)
    }

    /// Returns the minimum key, or `None` if the multiset is empty.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the maximum key, or `None` if the multiset is empty.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns an iterator over the multiset. The iterator will yield keys using in-order
    /// traversal.
    pub fn iter(&self) -> RedBlackMultiSetIter<'_, T> {
        RedBlackMultiSetIter {
            tree_iter: self.tree.iter(),
        }
    }
}

impl<T> IntoIterator for RedBlackMultiSet<T> {
    type IntoIter = RedBlackMultiSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackMultiSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackMultiSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMultiSet<T>`.
pub struct RedBlackMultiSetIntoIter<T> {
    tree_iter: IntoIter<T, LessEqual>,
}

impl<T> Iterator for RedBlackMultiSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

impl<T> DoubleEndedIterator for RedBlackMultiSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

/// An iterator for `RedBlackMultiSet<T>`.
pub struct RedBlackMultiSetIter<'a, T> {
    tree_iter: Iter<'a, T, LessEqual>,
}

impl<'a, T> Iterator for RedBlackMultiSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackMultiSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

impl<T> Default for RedBlackMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RedBlackMultiSet<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        RedBlackMultiSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T> fmt::Debug for RedBlackMultiSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RedBlackMultiSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        RedBlackMultiSet {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for RedBlackMultiSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(iter);
    }
}
