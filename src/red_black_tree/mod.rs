//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in a `TypedArena` and refer to each other through arena entries, including a parent
//! link used for in-order stepping. The "one past the last element" position is an explicit
//! sentinel that anchors the root. Ordered map, set and multiset wrappers only choose a
//! comparator and otherwise delegate to `RedBlackTree`.

mod compare;
mod iter;
mod map;
mod multiset;
mod node;
mod set;
mod tree;

pub use self::compare::{ByKey, Comparator, Less, LessEqual};
pub use self::iter::{IntoIter, Iter};
pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
pub use self::multiset::{RedBlackMultiSet, RedBlackMultiSetIntoIter, RedBlackMultiSetIter};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
pub use self::tree::{Cursor, RedBlackTree, DEFAULT_CHUNK_SIZE};

use std::error;
use std::fmt;
use std::result;

/// The errors reported by the ordered containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A map lookup through `at` named a key that is not present.
    KeyNotFound,
    /// A cursor was `end()`, belonged to another container, or named an erased element.
    InvalidCursor,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "no such key in the map"),
            Error::InvalidCursor => write!(f, "cursor does not name an element of this container"),
        }
    }
}

/// Convenience `Result` type for the ordered containers.
pub type Result<T> = result::Result<T, Error>;
