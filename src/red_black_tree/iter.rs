use crate::red_black_tree::node::Dir;
use crate::red_black_tree::tree::{Position, RedBlackTree};

/// An iterator for `RedBlackTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order by following parent links from one
/// node to the next, and yields immutable references.
pub struct Iter<'a, T, C> {
    tree: &'a RedBlackTree<T, C>,
    front: Position,
    back: Position,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(crate) fn new(tree: &'a RedBlackTree<T, C>, front: Position, back: Position) -> Self {
        Iter { tree, front, back }
    }
}

impl<'a, T, C> Clone for Iter<'a, T, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        match self.front {
            Position::Node(entry) => {
                self.front = self.tree.step_position(self.front, Dir::Right);
                Some(self.tree.value(entry))
            },
            Position::End => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            (0, Some(0))
        } else {
            (0, Some(self.tree.len()))
        }
    }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.tree.step_position(self.back, Dir::Left);
        match self.back {
            Position::Node(entry) => Some(self.tree.value(entry)),
            Position::End => None,
        }
    }
}

/// An owning iterator for `RedBlackTree<T, C>`.
///
/// This iterator drains the tree in-order and yields owned values.
pub struct IntoIter<T, C> {
    tree: RedBlackTree<T, C>,
}

impl<T, C> IntoIter<T, C> {
    pub(crate) fn new(tree: RedBlackTree<T, C>) -> Self {
        IntoIter { tree }
    }
}

impl<T, C> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, C> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<T, C> ExactSizeIterator for IntoIter<T, C> {}
