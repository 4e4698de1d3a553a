//! Ordering policies that decide how a `RedBlackTree` orders its values and whether it keeps
//! duplicates.
//!
//! The tree has no "allow duplicates" switch. A strict policy such as `Less` rejects a value that
//! is equivalent to one already stored, while a non-strict policy such as `LessEqual` sends it to
//! the right of its equals so every copy is kept.

use crate::entry::Entry;
use std::marker::PhantomData;

/// A strict-weak-order (or, for multisets, non-strict) comparison over the keys of `T`.
pub trait Comparator<T> {
    /// The part of a value that takes part in comparisons.
    type Key: ?Sized;

    /// Projects a value onto its key.
    fn key(value: &T) -> &Self::Key;

    /// Returns `true` if `a` is ordered before `b`.
    fn less(&self, a: &Self::Key, b: &Self::Key) -> bool;

    /// Returns `true` if neither key can be told apart from the other.
    ///
    /// For a strict policy neither `less(a, b)` nor `less(b, a)` holds; for a non-strict policy
    /// both hold.
    fn equivalent(&self, a: &Self::Key, b: &Self::Key) -> bool {
        self.less(a, b) == self.less(b, a)
    }

    /// Returns `true` if `a` is ordered strictly before `b`.
    fn precedes(&self, a: &Self::Key, b: &Self::Key) -> bool {
        self.less(a, b) && !self.less(b, a)
    }
}

/// Strict `<` over `T`: equivalent values are rejected on insertion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Less;

impl<T> Comparator<T> for Less
where
    T: Ord,
{
    type Key = T;

    fn key(value: &T) -> &T {
        value
    }

    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Non-strict `<=` over `T`: equivalent values are kept, each new one after its equals.
#[derive(Clone, Copy, Debug, Default)]
pub struct LessEqual;

impl<T> Comparator<T> for LessEqual
where
    T: Ord,
{
    type Key = T;

    fn key(value: &T) -> &T {
        value
    }

    fn less(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Strict `<` over the key of an `Entry<K, V>`; the value never takes part in ordering.
pub struct ByKey<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> ByKey<V> {
    pub fn new() -> Self {
        ByKey {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for ByKey<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ByKey<V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> Comparator<Entry<K, V>> for ByKey<V>
where
    K: Ord,
{
    type Key = K;

    fn key(entry: &Entry<K, V>) -> &K {
        &entry.key
    }

    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}
