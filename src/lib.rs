//! Ordered map, set and multiset containers backed by an arena-allocated red black tree.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::red_black_tree::{RedBlackMultiSet, RedBlackSet};
//!
//! let set: RedBlackSet<u32> = vec![5, 3, 8, 3].into_iter().collect();
//! assert_eq!(set.len(), 3);
//!
//! let multiset: RedBlackMultiSet<u32> = vec![5, 3, 8, 3].into_iter().collect();
//! assert_eq!(multiset.len(), 4);
//! ```

mod entry;
pub mod arena;
pub mod red_black_tree;

pub use crate::entry::Entry;
