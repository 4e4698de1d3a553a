//! Fast, but limited allocator that hands out stable, generation-checked handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

static NEXT_ARENA_ID: AtomicUsize = AtomicUsize::new(0);

/// A process-unique identity of a `TypedArena<T>`.
///
/// Two arenas never share an id, and an arena receives a fresh id whenever it is cleared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArenaId(usize);

impl ArenaId {
    fn next() -> Self {
        ArenaId(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A struct representing an entry to `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
    generation: u32,
}

enum Block<T> {
    Occupied { value: T, generation: u32 },
    Vacant { next: Option<Entry>, generation: u32 },
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// All objects inside the arena will be destroyed when the typed arena is destroyed. Objects can
/// be deallocated individually, and the freed block is recycled by the next allocation. Every
/// block carries a generation that is bumped on deallocation, so an `Entry` that outlived its
/// object resolves to `None` instead of silently aliasing whatever was allocated in its place.
/// A block whose generation is exhausted is retired rather than recycled, so a generation is
/// never handed out twice for the same block.
/// When the typed arena is full, it will allocate another chunk of objects so no memory is
/// reallocated.
///
/// # Examples
///
/// ```
/// use ordered_containers::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert_eq!(arena.get(&x), None);
/// ```
pub struct TypedArena<T> {
    id: ArenaId,
    head: Option<Entry>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    size: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn block(&self, entry: &Entry) -> Option<&Block<T>> {
        self.chunks
            .get(entry.chunk_index)
            .and_then(|chunk| chunk.get(entry.block_index))
    }

    fn block_mut(&mut self, entry: &Entry) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(entry.chunk_index)
            .and_then(|chunk| chunk.get_mut(entry.block_index))
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            id: ArenaId::next(),
            head: None,
            chunks: Vec::new(),
            chunk_size,
            size: 0,
            capacity: 0,
        }
    }

    /// Returns the identity of the arena.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Returns the number of objects per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Allocates an object in the typed arena and returns an Entry. The Entry can later be used to
    /// index retrieve mutable and immutable references to the object, and dellocate the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        if self.size == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.size += 1;

        match self.head.take() {
            None => {
                let chunk_count = self.chunks.len();
                let last_chunk = &mut self.chunks[chunk_count - 1];
                last_chunk.push(Block::Occupied {
                    value,
                    generation: 0,
                });
                Entry {
                    chunk_index: chunk_count - 1,
                    block_index: last_chunk.len() - 1,
                    generation: 0,
                }
            },
            Some(entry) => {
                let block = &mut self.chunks[entry.chunk_index][entry.block_index];
                let (next, generation) = match *block {
                    Block::Vacant { next, generation } => (next, generation),
                    Block::Occupied { .. } => panic!("Expected a vacant block."),
                };
                *block = Block::Occupied { value, generation };
                self.head = next;
                Entry {
                    generation,
                    ..entry
                }
            },
        }
    }

    /// Deallocates an object in the typed arena and returns the object.
    ///
    /// # Panics
    ///
    /// Panics if entry corresponds to an invalid, vacant, or stale value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if !self.contains(entry) {
            panic!("Error: attempting to free invalid block.");
        }
        let (vacant, recycle) = match entry.generation.checked_add(1) {
            Some(generation) => (
                Block::Vacant {
                    next: self.head,
                    generation,
                },
                true,
            ),
            None => (
                Block::Vacant {
                    next: None,
                    generation: entry.generation,
                },
                false,
            ),
        };
        let old_block = mem::replace(
            &mut self.chunks[entry.chunk_index][entry.block_index],
            vacant,
        );
        match old_block {
            Block::Vacant { .. } => panic!("Error: attempting to free vacant block."),
            Block::Occupied { value, .. } => {
                self.size -= 1;
                if recycle {
                    self.head = Some(*entry);
                } else {
                    self.capacity -= 1;
                }
                value
            },
        }
    }

    /// Returns `true` if the entry corresponds to a live object in the typed arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert!(arena.contains(&x));
    /// arena.free(&x);
    /// assert!(!arena.contains(&x));
    /// ```
    pub fn contains(&self, entry: &Entry) -> bool {
        match self.block(entry) {
            Some(Block::Occupied { generation, .. }) => *generation == entry.generation,
            _ => false,
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        match self.block(entry) {
            Some(Block::Occupied { value, generation }) if *generation == entry.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        match self.block_mut(entry) {
            Some(Block::Occupied { value, generation }) if *generation == entry.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns the number of live objects in the typed arena.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the typed arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Destroys every object in the typed arena and releases its chunks. The arena receives a new
    /// id, so callers that pair entries with `id()` can tell entries from before the call apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let id = arena.id();
    /// arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// assert_ne!(arena.id(), id);
    /// ```
    pub fn clear(&mut self) {
        self.id = ArenaId::next();
        self.head = None;
        self.chunks.clear();
        self.size = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry out of bounds.")
    }
}
