use crate::red_black_tree::compare::Less;
use crate::red_black_tree::iter::{IntoIter, Iter};
use crate::red_black_tree::tree::{Cursor, RedBlackTree};
use crate::red_black_tree::Result;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black so
/// that no red node has a red parent and every path from the root to a leaf crosses the same
/// number of black nodes. Equivalent keys are stored once.
///
/// # Examples
///
/// ```
/// use ordered_containers::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Some(&0));
/// assert_eq!(set.get(set.lower_bound(&2)), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: RedBlackTree<T, Less>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: RedBlackTree::new(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` that allocates `chunk_size` nodes at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackSet {
            tree: RedBlackTree::with_chunk_size(chunk_size),
        }
    }

    /// Inserts a key into the set. Returns a cursor to the key and `true` if it was inserted, or a
    /// cursor to the key already in the set and `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1).1);
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1).1);
    /// ```
    pub fn insert(&mut self, key: T) -> (Cursor, bool)
    where
        T: Ord,
    {
        self.tree.insert(key)
    }

    /// Builds one key from `args` and inserts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<String> = RedBlackSet::new();
    /// set.emplace("key");
    /// assert!(set.contains(&String::from("key")));
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> (Cursor, bool)
    where
        T: Ord + From<A>,
    {
        self.tree.emplace(args)
    }

    /// Removes the key at `cursor` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not name a key of this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::{Error, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// let (cursor, _) = set.insert(1);
    /// assert_eq!(set.erase(cursor), Ok(1));
    /// assert_eq!(set.erase(set.end()), Err(Error::InvalidCursor));
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        self.tree.erase(cursor)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        self.tree.remove(key)
    }

    /// Returns a cursor to a key, or `end()` if the key is not in the set.
    pub fn find(&self, key: &T) -> Cursor
    where
        T: Ord,
    {
        self.tree.find(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.tree.contains(key)
    }

    /// Returns a cursor to the first key not less than `key`, or `end()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 3, 7, 9].into_iter().collect();
    /// assert_eq!(set.get(set.lower_bound(&4)), Some(&7));
    /// assert_eq!(set.get(set.upper_bound(&7)), Some(&9));
    /// ```
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

    /// Inserts a copy of every key of `other` into `self`. `other` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut a: RedBlackSet<u32> = vec![1, 2].into_iter().collect();
    /// let b: RedBlackSet<u32> = vec![2, 3].into_iter().collect();
    /// a.merge(&b);
    /// assert_eq!(a.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// assert_eq!(b.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// ```
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone + Ord,
    {
        self.tree.merge(&other.tree);
    }

    /// Exchanges the contents of two sets in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of keys the set could ever hold.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a cursor to the minimum key, or `end()` if the set is empty.
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

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree_iter: self.tree.iter(),
        }
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    tree_iter: IntoIter<T, Less>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    tree_iter: Iter<'a, T, Less>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RedBlackSet<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        RedBlackSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        RedBlackSet {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for RedBlackSet<T>
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
