//! Contiguous, append-only allocator for a single type of object.

use std::ops::{Index, IndexMut};
use std::slice;
use std::vec::Vec;

/// A struct representing an entry to `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    index: usize,
}

impl Entry {
    /// Returns the offset of the entry from the start of the arena.
    pub fn index(self) -> usize {
        self.index
    }
}

/// A contiguous allocator that only allocates a single type of object.
///
/// Objects are laid out back to back in allocation order, so the `i`-th allocated object always
/// lives at offset `i` and can be addressed directly with `entry_at`. Objects are never
/// deallocated individually: all objects inside the arena are destroyed together when the arena
/// is destroyed. The underlying container is simply a `Vec`, so no unsafe code is used.
///
/// # Examples
///
/// ```
/// use fixed_splay::arena::TypedArena;
///
/// let mut arena = TypedArena::with_capacity(16);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.entry_at(0), Some(x));
/// ```
#[derive(Clone, Debug)]
pub struct TypedArena<T> {
    blocks: Vec<T>,
}

impl<T> TypedArena<T> {
    fn is_valid_entry(&self, entry: &Entry) -> bool {
        entry.index < self.blocks.len()
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it has
    /// to reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::with_capacity(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            blocks: Vec::with_capacity(capacity),
        }
    }

    /// Allocates an object at the end of the typed arena and returns its Entry. The Entry can
    /// later be used to retrieve mutable and immutable references to the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_capacity(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(x.index(), 0);
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        self.blocks.push(value);
        Entry {
            index: self.blocks.len() - 1,
        }
    }

    /// Returns the entry of the object allocated at `offset`, or `None` if fewer than
    /// `offset + 1` objects were allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_capacity(1024);
    /// arena.allocate('a');
    /// let b = arena.allocate('b');
    /// assert_eq!(arena.entry_at(1), Some(b));
    /// assert_eq!(arena.entry_at(2), None);
    /// ```
    pub fn entry_at(&self, offset: usize) -> Option<Entry> {
        if offset < self.blocks.len() {
            Some(Entry { index: offset })
        } else {
            None
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_capacity(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        Some(&self.blocks[entry.index])
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_capacity(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        Some(&mut self.blocks[entry.index])
    }

    /// Returns the number of objects allocated in the typed arena.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no objects were allocated in the typed arena.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns an iterator over the entries and objects of the typed arena in allocation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_capacity(1024);
    /// arena.allocate(3);
    /// arena.allocate(4);
    ///
    /// let values: Vec<u32> = arena.iter().map(|(_, value)| *value).collect();
    /// assert_eq!(values, vec![3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.blocks.iter().enumerate(),
        }
    }
}

/// An iterator over the entries and objects of a `TypedArena<T>`.
pub struct Iter<'a, T> {
    inner: std::iter::Enumerate<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Entry, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, value)| (Entry { index }, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Expected entry to be inside the arena.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Expected entry to be inside the arena.")
    }
}
