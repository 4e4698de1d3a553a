use crate::arena::{ArenaId, Entry, TypedArena};
use crate::red_black_tree::compare::{Comparator, Less};
use crate::red_black_tree::iter::{IntoIter, Iter};
use crate::red_black_tree::node::{Color, Dir, Node, Parent, Sentinel};
use crate::red_black_tree::{Error, Result};
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::result;

/// Number of nodes per arena chunk used by `RedBlackTree::new`.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Position {
    Node(Entry),
    End,
}

/// A position inside a `RedBlackTree`: either an element or the end marker.
///
/// Cursors are plain handles. Two cursors are equal exactly when they name the same position of
/// the same tree. Erasing an element invalidates only the cursors naming that element; an
/// invalidated cursor is rejected by `erase` and resolves to nothing in `get`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    arena: ArenaId,
    position: Position,
}

impl Cursor {
    /// Returns `true` if the cursor is the end marker.
    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }
}

/// An ordered container implemented using a red black tree whose nodes live in a `TypedArena`.
///
/// The comparator `C` decides both the order and the duplicate policy: `Less` keeps unique values
/// and `LessEqual` keeps every copy of equivalent values, in insertion order.
///
/// # Examples
///
/// ```
/// use ordered_containers::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for value in &[5, 3, 8, 1, 4, 7, 9] {
///     tree.insert(*value);
/// }
///
/// let five = tree.find(&5);
/// assert_eq!(tree.erase(five), Ok(5));
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &4, &7, &8, &9]);
/// assert_eq!(tree.find(&5), tree.end());
/// ```
pub struct RedBlackTree<T, C = Less> {
    arena: TypedArena<Node<T>>,
    end: Sentinel,
    size: usize,
    comparator: C,
}

impl<T, C> RedBlackTree<T, C> {
    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_chunk_size(comparator, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `comparator` whose arena allocates
    /// `chunk_size` nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_comparator_and_chunk_size(comparator: C, chunk_size: usize) -> Self {
        RedBlackTree {
            arena: TypedArena::new(chunk_size),
            end: Sentinel::default(),
            size: 0,
            comparator,
        }
    }

    /// Returns a reference to the comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the largest number of elements the tree could ever address.
    pub fn max_size(&self) -> usize {
        isize::max_value() as usize / mem::size_of::<Node<T>>()
    }

    /// Removes every element. Every outstanding cursor is invalidated.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.size);
        self.arena.clear();
        self.end.root = None;
        self.size = 0;
    }

    /// Exchanges the contents of two trees in constant time. Cursors keep naming the same
    /// elements, which now belong to the other tree.
    pub fn swap(&mut self, other: &mut Self) {
        debug!("swapping trees of {} and {} elements", self.size, other.size);
        mem::swap(self, other);
    }

    /// Returns a cursor to the minimum element, or `end()` if the tree is empty.
    pub fn begin(&self) -> Cursor {
        match self.end.root {
            Some(root) => self.cursor(Position::Node(self.extreme(root, Dir::Left))),
            None => self.end(),
        }
    }

    /// Returns the cursor one past the maximum element.
    pub fn end(&self) -> Cursor {
        self.cursor(Position::End)
    }

    /// Returns the cursor following `cursor`. The successor of the maximum is `end()`, and
    /// `end()` is its own successor.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match self.resolve(cursor) {
            Some(entry) => self.cursor(self.step(entry, Dir::Right)),
            None => self.end(),
        }
    }

    /// Returns the cursor preceding `cursor`. The predecessor of `end()` is the maximum, and the
    /// predecessor of the minimum is `end()`.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        if cursor.arena != self.arena.id() {
            return self.end();
        }
        let position = match cursor.position {
            Position::End => self.last_position(),
            Position::Node(entry) if self.arena.contains(&entry) => self.step(entry, Dir::Left),
            Position::Node(_) => Position::End,
        };
        self.cursor(position)
    }

    /// Returns the element at `cursor`, or `None` for `end()` and invalid cursors.
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        self.resolve(cursor).map(|entry| &self.arena[entry].value)
    }

    // The caller must not change how the element compares.
    pub(crate) fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        match self.resolve(cursor) {
            Some(entry) => Some(&mut self.arena[entry].value),
            None => None,
        }
    }

    /// Returns the minimum element, or `None` if the tree is empty.
    pub fn first(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Returns the maximum element, or `None` if the tree is empty.
    pub fn last(&self) -> Option<&T> {
        self.get(self.prev(self.end()))
    }

    /// Removes the element at `cursor` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if `cursor` is `end()`, belongs to another tree, or names an
    /// element that was already erased.
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        match self.resolve(cursor) {
            Some(entry) => Ok(self.remove_entry(entry)),
            None => {
                debug!("rejecting erase through invalid cursor {:?}", cursor);
                Err(Error::InvalidCursor)
            },
        }
    }

    /// Removes and returns the minimum element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.end
            .root
            .map(|root| self.extreme(root, Dir::Left))
            .map(|entry| self.remove_entry(entry))
    }

    /// Removes and returns the maximum element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.end
            .root
            .map(|root| self.extreme(root, Dir::Right))
            .map(|entry| self.remove_entry(entry))
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order traversal.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self, self.begin().position, Position::End)
    }

    /// Returns an iterator over the elements from `first` up to, but not including, `last`.
    /// `last` must not precede `first`. Cursors from another tree act as `end()`.
    pub fn range(&self, first: Cursor, last: Cursor) -> Iter<'_, T, C> {
        let position = |cursor: Cursor| {
            if self.resolve(cursor).is_some() {
                cursor.position
            } else {
                Position::End
            }
        };
        Iter::new(self, position(first), position(last))
    }

    pub(crate) fn value(&self, entry: Entry) -> &T {
        &self.arena[entry].value
    }

    pub(crate) fn step_position(&self, position: Position, dir: Dir) -> Position {
        match (position, dir) {
            (Position::Node(entry), _) => self.step(entry, dir),
            (Position::End, Dir::Left) => self.last_position(),
            (Position::End, Dir::Right) => Position::End,
        }
    }

    fn cursor(&self, position: Position) -> Cursor {
        Cursor {
            arena: self.arena.id(),
            position,
        }
    }

    fn resolve(&self, cursor: Cursor) -> Option<Entry> {
        match cursor.position {
            Position::Node(entry)
                if cursor.arena == self.arena.id() && self.arena.contains(&entry) =>
            {
                Some(entry)
            },
            _ => None,
        }
    }

    fn last_position(&self) -> Position {
        match self.end.root {
            Some(root) => Position::Node(self.extreme(root, Dir::Right)),
            None => Position::End,
        }
    }

    fn extreme(&self, mut entry: Entry, dir: Dir) -> Entry {
        while let Some(child) = self.arena[entry].child(dir) {
            entry = child;
        }
        entry
    }

    // Successor for `Dir::Right`, predecessor for `Dir::Left`.
    fn step(&self, entry: Entry, dir: Dir) -> Position {
        if let Some(child) = self.arena[entry].child(dir) {
            return Position::Node(self.extreme(child, dir.flip()));
        }
        let mut curr = entry;
        loop {
            match self.arena[curr].parent {
                Parent::Sentinel => return Position::End,
                Parent::Node(parent) => {
                    if self.arena[parent].child(dir) == Some(curr) {
                        curr = parent;
                    } else {
                        return Position::Node(parent);
                    }
                },
            }
        }
    }

    fn is_red(&self, entry: Option<Entry>) -> bool {
        entry.map_or(false, |entry| self.arena[entry].is_red())
    }

    fn set_color(&mut self, entry: Entry, color: Color) {
        self.arena[entry].color = color;
    }

    fn set_parent(&mut self, child: Option<Entry>, parent: Parent) {
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
    }

    fn dir_of(&self, child: Entry, parent: Entry) -> Dir {
        if self.arena[parent].left == Some(child) {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    // Repoints the link that held `old` at `new`. Linking under the sentinel re-anchors the root.
    fn replace_child(&mut self, parent: Parent, old: Entry, new: Option<Entry>) {
        match parent {
            Parent::Sentinel => self.end.root = new,
            Parent::Node(parent) => {
                let dir = self.dir_of(old, parent);
                self.arena[parent].set_child(dir, new);
            },
        }
    }

    // Moves `entry` down towards `dir`; its child on the opposite side takes its place.
    fn rotate(&mut self, entry: Entry, dir: Dir) {
        let pivot = self.arena[entry]
            .child(dir.flip())
            .expect("Expected pivot child node to be `Some`.");
        let inner = self.arena[pivot].child(dir);
        self.arena[entry].set_child(dir.flip(), inner);
        self.set_parent(inner, Parent::Node(entry));

        let parent = self.arena[entry].parent;
        self.arena[pivot].parent = parent;
        self.replace_child(parent, entry, Some(pivot));

        self.arena[pivot].set_child(dir, Some(entry));
        self.arena[entry].parent = Parent::Node(pivot);
    }

    fn rotate_left(&mut self, entry: Entry) {
        trace!("rotating left at {:?}", entry);
        self.rotate(entry, Dir::Left);
    }

    fn rotate_right(&mut self, entry: Entry) {
        trace!("rotating right at {:?}", entry);
        self.rotate(entry, Dir::Right);
    }

    fn rotate_towards(&mut self, entry: Entry, dir: Dir) {
        match dir {
            Dir::Left => self.rotate_left(entry),
            Dir::Right => self.rotate_right(entry),
        }
    }

    fn fix_after_insertion(&mut self, mut entry: Entry) {
        loop {
            let parent = match self.arena[entry].parent {
                Parent::Sentinel => {
                    self.set_color(entry, Color::Black);
                    return;
                },
                Parent::Node(parent) => parent,
            };
            if !self.arena[parent].is_red() {
                return;
            }
            let grandparent = match self.arena[parent].parent {
                Parent::Sentinel => {
                    self.set_color(parent, Color::Black);
                    return;
                },
                Parent::Node(grandparent) => grandparent,
            };

            let parent_dir = self.dir_of(parent, grandparent);
            let uncle = self.arena[grandparent].child(parent_dir.flip());
            if let Some(uncle) = uncle.filter(|uncle| self.arena[*uncle].is_red()) {
                trace!("insertion fixup: red uncle at {:?}", uncle);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                entry = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.dir_of(entry, parent) != parent_dir {
                self.rotate_towards(parent, parent_dir);
                parent = entry;
            }
            self.rotate_towards(grandparent, parent_dir.flip());
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            return;
        }
    }

    // Resolves the black-height deficit left by removing the black leaf `entry`, which stays linked
    // in place until the caller detaches it.
    fn fix_before_removal(&mut self, mut entry: Entry) {
        loop {
            let parent = match self.arena[entry].parent {
                Parent::Sentinel => return,
                Parent::Node(parent) => parent,
            };
            let dir = self.dir_of(entry, parent);
            let mut sibling = self.arena[parent]
                .child(dir.flip())
                .expect("Expected a black non-root node to have a sibling.");

            if self.arena[sibling].is_red() {
                trace!("removal fixup: red sibling at {:?}", sibling);
                self.rotate_towards(parent, dir);
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                sibling = self.arena[parent]
                    .child(dir.flip())
                    .expect("Expected a black non-root node to have a sibling.");
            }

            let near = self.arena[sibling].child(dir);
            let far = self.arena[sibling].child(dir.flip());
            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);
                if self.arena[parent].is_red() {
                    trace!("removal fixup: absorbed by red parent {:?}", parent);
                    self.set_color(parent, Color::Black);
                    return;
                }
                trace!("removal fixup: propagating to {:?}", parent);
                entry = parent;
                continue;
            }

            if !self.is_red(far) {
                let near = near.expect("Expected a red near child to be `Some`.");
                self.rotate_towards(sibling, dir.flip());
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                sibling = near;
            }

            let far = self.arena[sibling].child(dir.flip());
            let parent_color = self.arena[parent].color;
            self.rotate_towards(parent, dir);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            return;
        }
    }

    // Exchanges the tree positions of `entry` and its in-order successor, which is the leftmost
    // node of `entry`'s right subtree. Only links and colors move; values stay in their nodes.
    fn swap_with_successor(&mut self, entry: Entry, successor: Entry) {
        let Node {
            parent,
            left,
            right,
            color,
            ..
        } = self.arena[entry];
        let Node {
            parent: successor_parent,
            right: successor_right,
            color: successor_color,
            ..
        } = self.arena[successor];

        self.replace_child(parent, entry, Some(successor));
        {
            let node = &mut self.arena[successor];
            node.parent = parent;
            node.left = left;
            node.color = color;
        }
        self.set_parent(left, Parent::Node(successor));

        if right == Some(successor) {
            self.arena[successor].right = Some(entry);
            self.arena[entry].parent = Parent::Node(successor);
        } else {
            self.arena[successor].right = right;
            self.set_parent(right, Parent::Node(successor));
            self.replace_child(successor_parent, successor, Some(entry));
            self.arena[entry].parent = successor_parent;
        }

        {
            let node = &mut self.arena[entry];
            node.left = None;
            node.right = successor_right;
            node.color = successor_color;
        }
        self.set_parent(successor_right, Parent::Node(entry));
    }

    fn remove_entry(&mut self, entry: Entry) -> T {
        if let Node {
            left: Some(_),
            right: Some(right),
            ..
        } = self.arena[entry]
        {
            let successor = self.extreme(right, Dir::Left);
            self.swap_with_successor(entry, successor);
        }

        let node = &self.arena[entry];
        match node.left.or(node.right) {
            Some(child) => {
                let parent = node.parent;
                self.replace_child(parent, entry, Some(child));
                self.arena[child].parent = parent;
                self.set_color(child, Color::Black);
            },
            None => {
                if !node.is_red() {
                    self.fix_before_removal(entry);
                }
                let parent = self.arena[entry].parent;
                self.replace_child(parent, entry, None);
            },
        }

        self.size -= 1;
        self.arena.free(&entry).value
    }
}

impl<T> RedBlackTree<T, Less> {
    /// Constructs a new, empty `RedBlackTree<T>` ordered by `<`. Other orderings are built with
    /// `with_comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1u32);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// Constructs a new, empty `RedBlackTree<T>` whose arena allocates `chunk_size` nodes at a
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self::with_comparator_and_chunk_size(Less, chunk_size)
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Comparator<T>,
{
    // Finds the link a new value would hang from, or the stored value it is equivalent to.
    fn locate(&self, key: &C::Key) -> result::Result<(Parent, Dir), Entry> {
        let mut parent = Parent::Sentinel;
        let mut dir = Dir::Left;
        let mut curr = self.end.root;
        while let Some(entry) = curr {
            let node_key = C::key(&self.arena[entry].value);
            dir = if self.comparator.less(node_key, key) {
                Dir::Right
            } else if self.comparator.less(key, node_key) {
                Dir::Left
            } else {
                return Err(entry);
            };
            parent = Parent::Node(entry);
            curr = self.arena[entry].child(dir);
        }
        Ok((parent, dir))
    }

    fn attach(&mut self, value: T, parent: Parent, dir: Dir) -> Entry {
        let entry = self.arena.allocate(Node::new(value, parent));
        match parent {
            Parent::Sentinel => self.end.root = Some(entry),
            Parent::Node(parent) => self.arena[parent].set_child(dir, Some(entry)),
        }
        self.size += 1;
        self.fix_after_insertion(entry);
        entry
    }

    /// Inserts a value into the tree. Returns a cursor to the inserted value and `true`, or, if the
    /// comparator rejects the value as a duplicate, a cursor to the equivalent stored value and
    /// `false`.
    pub fn insert(&mut self, value: T) -> (Cursor, bool) {
        match self.locate(C::key(&value)) {
            Ok((parent, dir)) => {
                let entry = self.attach(value, parent, dir);
                (self.cursor(Position::Node(entry)), true)
            },
            Err(entry) => (self.cursor(Position::Node(entry)), false),
        }
    }

    /// Builds one value from `args` and inserts it.
    pub fn emplace<A>(&mut self, args: A) -> (Cursor, bool)
    where
        T: From<A>,
    {
        self.insert(T::from(args))
    }

    /// Inserts a copy of every element of `other` into `self`. `other` is left unchanged, and
    /// copies that `self` rejects as duplicates are dropped.
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        debug!("merging {} elements into {}", other.size, self.size);
        self.extend(other.iter().cloned());
    }

    /// Returns a cursor to an element equivalent to `key`, or `end()` if there is none.
    pub fn find(&self, key: &C::Key) -> Cursor {
        let mut curr = self.end.root;
        while let Some(entry) = curr {
            let node_key = C::key(&self.arena[entry].value);
            if self.comparator.equivalent(node_key, key) {
                return self.cursor(Position::Node(entry));
            }
            curr = if self.comparator.less(node_key, key) {
                self.arena[entry].right
            } else {
                self.arena[entry].left
            };
        }
        self.end()
    }

    /// Returns `true` if an element equivalent to `key` exists.
    pub fn contains(&self, key: &C::Key) -> bool {
        !self.find(key).is_end()
    }

    /// Returns a cursor to the first element that is not ordered before `key`, or `end()`.
    pub fn lower_bound(&self, key: &C::Key) -> Cursor {
        let mut result = Position::End;
        let mut curr = self.end.root;
        while let Some(entry) = curr {
            let node = &self.arena[entry];
            if self.comparator.precedes(C::key(&node.value), key) {
                curr = node.right;
            } else {
                result = Position::Node(entry);
                curr = node.left;
            }
        }
        self.cursor(result)
    }

    /// Returns a cursor to the first element that is ordered after `key`, or `end()`.
    pub fn upper_bound(&self, key: &C::Key) -> Cursor {
        let mut result = Position::End;
        let mut curr = self.end.root;
        while let Some(entry) = curr {
            let node = &self.arena[entry];
            if self.comparator.precedes(key, C::key(&node.value)) {
                result = Position::Node(entry);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }
        self.cursor(result)
    }

    /// Returns the half-open run `[lower_bound(key), upper_bound(key))` of elements equivalent to
    /// `key`.
    pub fn equal_range(&self, key: &C::Key) -> (Cursor, Cursor) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Returns the number of elements equivalent to `key`.
    pub fn count(&self, key: &C::Key) -> usize {
        let (first, last) = self.equal_range(key);
        self.range(first, last).count()
    }

    /// Removes an element equivalent to `key` and returns it.
    pub fn remove(&mut self, key: &C::Key) -> Option<T> {
        let cursor = self.find(key);
        self.resolve(cursor).map(|entry| self.remove_entry(entry))
    }

    /// Checks every structural invariant of the tree: binary search order, red black coloring,
    /// uniform black height, parent back-links, sentinel anchoring, and the size counter.
    ///
    /// # Panics
    ///
    /// Panics if any invariant is violated.
    pub fn assert_invariants(&self) {
        if let Some(root) = self.end.root {
            assert_eq!(
                self.arena[root].parent,
                Parent::Sentinel,
                "root must hang from the sentinel",
            );
            assert!(!self.arena[root].is_red(), "root must be black");
        }

        let (_, count) = self.check_subtree(self.end.root, Parent::Sentinel);
        assert_eq!(count, self.size, "size counter out of sync with nodes");
        assert_eq!(self.arena.len(), self.size, "arena holds detached nodes");

        let mut prev: Option<&T> = None;
        let mut visited = 0;
        for value in self.iter() {
            if let Some(prev) = prev {
                assert!(
                    !self.comparator.precedes(C::key(value), C::key(prev)),
                    "in-order traversal out of order",
                );
            }
            prev = Some(value);
            visited += 1;
        }
        assert_eq!(visited, self.size, "traversal does not visit every node");
    }

    // Returns the black height and the node count of the subtree.
    fn check_subtree(&self, entry: Option<Entry>, parent: Parent) -> (usize, usize) {
        let entry = match entry {
            Some(entry) => entry,
            None => return (1, 0),
        };
        let node = &self.arena[entry];
        assert_eq!(node.parent, parent, "broken parent link at {:?}", entry);
        if node.is_red() {
            assert!(
                !self.is_red(node.left) && !self.is_red(node.right),
                "red node {:?} has a red child",
                entry,
            );
        }
        let (left_height, left_count) = self.check_subtree(node.left, Parent::Node(entry));
        let (right_height, right_count) = self.check_subtree(node.right, Parent::Node(entry));
        assert_eq!(
            left_height, right_height,
            "black height mismatch at {:?}",
            entry,
        );
        let height = left_height + if node.is_red() { 0 } else { 1 };
        (height, left_count + right_count + 1)
    }
}

impl<T, C> Default for RedBlackTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Clone for RedBlackTree<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    fn clone(&self) -> Self {
        let mut tree =
            Self::with_comparator_and_chunk_size(self.comparator.clone(), self.arena.chunk_size());
        for value in self.iter() {
            tree.insert(value.clone());
        }
        tree
    }
}

impl<T, C> fmt::Debug for RedBlackTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> FromIterator<T> for RedBlackTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for RedBlackTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> IntoIterator for RedBlackTree<T, C> {
    type IntoIter = IntoIter<T, C>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::red_black_tree::compare::LessEqual;
    use crate::red_black_tree::Error;

    fn tree_of(values: &[u32]) -> RedBlackTree<u32> {
        let tree: RedBlackTree<u32> = values.iter().cloned().collect();
        tree.assert_invariants();
        tree
    }

    #[test]
    fn test_len_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.begin(), tree.end());
    }

    #[test]
    fn test_insert() {
        let mut tree = RedBlackTree::new();
        let (cursor, inserted) = tree.insert(1);
        assert!(inserted);
        assert_eq!(tree.get(cursor), Some(&1));
        assert_eq!(tree.begin(), cursor);
        tree.assert_invariants();
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = RedBlackTree::new();
        let (first, _) = tree.insert(1);
        let (second, inserted) = tree.insert(1);
        assert!(!inserted);
        assert_eq!(first, second);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_non_strict() {
        let mut tree = RedBlackTree::with_comparator(LessEqual);
        assert!(tree.insert(1).1);
        assert!(tree.insert(1).1);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.count(&1), 2);
        tree.assert_invariants();
    }

    #[test]
    fn test_iteration_order() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 3, 4, 5, 7, 8, 9],
        );
    }

    #[test]
    fn test_erase_root_with_two_children() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        let five = tree.find(&5);
        assert_eq!(tree.erase(five), Ok(5));
        tree.assert_invariants();
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 3, 4, 7, 8, 9],
        );
        assert_eq!(tree.find(&5), tree.end());
    }

    #[test]
    fn test_erase_keeps_other_cursors() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        let seven = tree.find(&7);
        let five = tree.find(&5);
        tree.erase(five).unwrap();
        assert_eq!(tree.get(seven), Some(&7));
        assert_eq!(tree.prev(seven), tree.find(&4));
    }

    #[test]
    fn test_erase_invalid_cursor() {
        let mut tree = tree_of(&[1, 2, 3]);
        let end = tree.end();
        assert_eq!(tree.erase(end), Err(Error::InvalidCursor));

        let two = tree.find(&2);
        assert_eq!(tree.erase(two), Ok(2));
        assert_eq!(tree.erase(two), Err(Error::InvalidCursor));

        let mut other = tree_of(&[1, 2, 3]);
        let foreign = other.find(&1);
        assert_eq!(tree.erase(foreign), Err(Error::InvalidCursor));
        assert_eq!(other.erase(foreign), Ok(1));
    }

    #[test]
    fn test_cursor_navigation() {
        let tree = tree_of(&[1, 3, 7, 9]);
        let mut cursor = tree.begin();
        let mut values = Vec::new();
        while cursor != tree.end() {
            values.push(*tree.get(cursor).unwrap());
            cursor = tree.next(cursor);
        }
        assert_eq!(values, vec![1, 3, 7, 9]);
        assert_eq!(tree.next(tree.end()), tree.end());
        assert_eq!(tree.get(tree.prev(tree.end())), Some(&9));
        assert_eq!(tree.prev(tree.begin()), tree.end());
    }

    #[test]
    fn test_bounds() {
        let tree = tree_of(&[1, 3, 7, 9]);
        assert_eq!(tree.get(tree.lower_bound(&4)), Some(&7));
        assert_eq!(tree.get(tree.lower_bound(&3)), Some(&3));
        assert_eq!(tree.get(tree.upper_bound(&7)), Some(&9));
        assert_eq!(tree.lower_bound(&10), tree.end());
        assert_eq!(tree.upper_bound(&9), tree.end());
        assert_eq!(tree.lower_bound(&0), tree.begin());
    }

    #[test]
    fn test_equal_range_non_strict() {
        let mut tree = RedBlackTree::with_comparator(LessEqual);
        tree.extend(vec![2, 1, 2, 3, 2]);
        let (first, last) = tree.equal_range(&2);
        assert_eq!(
            tree.range(first, last).cloned().collect::<Vec<u32>>(),
            vec![2, 2, 2],
        );
        assert_eq!(tree.get(last), Some(&3));
    }

    #[test]
    fn test_pop_first_last() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.pop_first(), Some(1));
        assert_eq!(tree.pop_last(), Some(3));
        assert_eq!(tree.pop_last(), Some(2));
        assert_eq!(tree.pop_first(), None);
        tree.assert_invariants();
    }

    #[test]
    fn test_remove() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.remove(&2), Some(2));
        assert_eq!(tree.remove(&2), None);
        tree.assert_invariants();
    }

    #[test]
    fn test_clear_invalidates_cursors() {
        let mut tree = tree_of(&[1, 2, 3]);
        let one = tree.find(&1);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(1);
        assert_eq!(tree.get(one), None);
        tree.assert_invariants();
    }

    #[test]
    fn test_swap() {
        let mut a = tree_of(&[1, 2]);
        let mut b = tree_of(&[3]);
        let two = a.find(&2);
        a.swap(&mut b);
        assert_eq!(a.iter().cloned().collect::<Vec<u32>>(), vec![3]);
        assert_eq!(b.get(two), Some(&2));
    }

    #[test]
    fn test_merge() {
        let mut a = tree_of(&[1, 3]);
        let b = tree_of(&[2, 3, 4]);
        a.merge(&b);
        a.assert_invariants();
        b.assert_invariants();
        assert_eq!(a.iter().cloned().collect::<Vec<u32>>(), vec![1, 2, 3, 4]);
        assert_eq!(b.iter().cloned().collect::<Vec<u32>>(), vec![2, 3, 4]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_merge_non_strict() {
        let mut a: RedBlackTree<u32, LessEqual> = vec![1, 3].into_iter().collect();
        let b: RedBlackTree<u32, LessEqual> = vec![3, 4].into_iter().collect();
        a.merge(&b);
        a.assert_invariants();
        assert_eq!(a.iter().cloned().collect::<Vec<u32>>(), vec![1, 3, 3, 4]);
        assert_eq!(b.iter().cloned().collect::<Vec<u32>>(), vec![3, 4]);
    }

    #[test]
    fn test_emplace() {
        let mut tree: RedBlackTree<u64> = RedBlackTree::new();
        let (cursor, inserted) = tree.emplace(7u32);
        assert!(inserted);
        assert_eq!(tree.get(cursor), Some(&7));
    }

    #[test]
    fn test_clone() {
        let tree = tree_of(&[4, 2, 6]);
        let copy = tree.clone();
        copy.assert_invariants();
        assert_eq!(copy.iter().collect::<Vec<&u32>>(), vec![&2, &4, &6]);
        assert_ne!(copy.begin(), tree.begin());
    }

    #[test]
    fn test_ascending_erase_all() {
        let mut tree = RedBlackTree::with_chunk_size(4);
        for i in 0..256u32 {
            tree.insert(i);
            tree.assert_invariants();
        }
        for i in 0..256u32 {
            assert_eq!(tree.remove(&i), Some(i));
            tree.assert_invariants();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.begin(), tree.end());
    }

    #[test]
    fn test_into_iter() {
        let tree = tree_of(&[3, 1, 2]);
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug() {
        let tree = tree_of(&[2, 1]);
        assert_eq!(format!("{:?}", tree), "[1, 2]");
    }
}
