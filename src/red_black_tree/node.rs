use crate::arena::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// The upward link of a node. The root is the only node whose parent is the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    Node(Entry),
    Sentinel,
}

/// The persistent "one past the last element" marker. It is never stored in the arena; it only
/// records the current root so that `begin` and `end` can be found from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sentinel {
    pub root: Option<Entry>,
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub parent: Parent,
    pub left: Option<Entry>,
    pub right: Option<Entry>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Parent) -> Self {
        Node {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn child(&self, dir: Dir) -> Option<Entry> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    pub fn set_child(&mut self, dir: Dir, child: Option<Entry>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
    }
}

/// The side of a parent a child hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn flip(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}
