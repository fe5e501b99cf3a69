//! A sorted, duplicate-preserving collection backed by a skip list.

use std::{cmp, cmp::Ordering, fmt, hash, hash::Hash, iter, mem, ops, sync::Arc};

use crate::{
    arena::{Arena, NodeId},
    cursor::{Cursor, CursorError, SetId},
    level_generator::{CoinFlip, LevelGenerator},
    node::{Link, MAX_HEIGHT, Node},
};

// ////////////////////////////////////////////////////////////////////////////
// SkipSet
// ////////////////////////////////////////////////////////////////////////////

/// A collection that keeps its elements sorted under a comparison function
/// while providing expected `O(log n)` insertion, lookup and removal.
///
/// Elements are stored in a skip list whose nodes live in a generational
/// arena, so positions within the set are exposed as small, copyable
/// [`Cursor`] handles rather than references: a cursor that outlives its
/// element fails with a [`CursorError`] instead of dangling.
///
/// By default the set orders elements with
/// `a.partial_cmp(b).expect("element cannot be ordered")`, which handles all
/// types implementing `Ord` or `PartialOrd` but panics if an unorderable
/// value (such as a floating-point NaN) is inserted. A custom comparison
/// function can be supplied with [`with_comp`][SkipSet::with_comp].
///
/// The comparison function **must** be a strict weak ordering: well defined,
/// anti-symmetric and transitive, with `Ordering::Equal` as the equivalence.
/// The set never verifies this; a misbehaving comparison function leaves the
/// elements mis-sorted (lookups may miss elements that are present), though
/// it can never cause memory unsafety.
///
/// Equal elements are permitted. `insert` never rejects or merges them: they
/// are kept in insertion order among themselves, and [`find`][SkipSet::find]
/// returns the first-inserted one.
pub struct SkipSet<T> {
    /// Process-unique identity, stamped into every cursor this set issues.
    id: SetId,
    /// Owns every node; links between nodes are arena indices.
    arena: Arena<T>,
    /// The head sentinel: first node at each level, participating in every
    /// level for the container's lifetime.
    head: [Link; MAX_HEIGHT],
    /// The comparison function defining the element order.
    compare: Arc<dyn Fn(&T, &T) -> Ordering>,
    /// Height selection for newly inserted nodes.
    levels: CoinFlip,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T> SkipSet<T>
where
    T: cmp::PartialOrd,
{
    /// Create a new set ordered by the default comparison function of
    /// `|a, b| a.partial_cmp(b).unwrap()`.
    ///
    /// # Panic
    ///
    /// The default comparison function will cause a panic if an element is
    /// inserted which cannot be ordered (such as `f64::NAN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set: SkipSet<i64> = SkipSet::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::assemble(Arena::new(), CoinFlip::standard())
    }

    /// Create a new, empty set sized for the intended capacity: the arena
    /// pre-allocates room for `capacity` nodes and the level generator only
    /// uses as many levels as a set of that size benefits from.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::with_capacity(100);
    /// set.extend(0..100);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::assemble(Arena::with_capacity(capacity), CoinFlip::sized_for(capacity))
    }

    /// Create a new set whose node heights are drawn from a generator seeded
    /// with `seed`, making the internal structure reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::with_seed(0x5eed);
    /// set.extend(0..10);
    /// assert_eq!(set.len(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::assemble(Arena::new(), CoinFlip::standard_seeded(seed))
    }

    /// Create a new set drawing node heights from the provided generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{CoinFlip, SkipSet};
    ///
    /// let levels = CoinFlip::with_seed(4, 0x5eed).unwrap();
    /// let mut set: SkipSet<i64> = SkipSet::with_generator(levels);
    /// set.extend(0..16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_generator(levels: CoinFlip) -> Self {
        Self::assemble(Arena::new(), levels)
    }

    fn assemble(arena: Arena<T>, levels: CoinFlip) -> Self {
        SkipSet {
            id: SetId::next(),
            arena,
            head: [None; MAX_HEIGHT],
            compare: Arc::new(|a: &T, b: &T| {
                a.partial_cmp(b).expect("Element cannot be ordered.")
            }),
            levels,
        }
    }
}

impl<T> SkipSet<T> {
    /// Create a new set using the provided function to determine the ordering
    /// of elements.
    ///
    /// The function **must** be a strict weak ordering; see the type-level
    /// documentation. A misbehaving function leaves the set mis-sorted but
    /// cannot cause memory unsafety.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    /// use std::cmp::Ordering;
    ///
    /// // Store even numbers before odd ones, sorting as usual within the
    /// // same parity group.
    /// let mut set = SkipSet::with_comp(|a: &u64, b: &u64| {
    ///     if a % 2 == b % 2 {
    ///         a.cmp(b)
    ///     } else if a % 2 == 0 {
    ///         Ordering::Less
    ///     } else {
    ///         Ordering::Greater
    ///     }
    /// });
    /// set.extend(0..6);
    /// let elements: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(elements, vec![0, 2, 4, 1, 3, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comp<F>(f: F) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        SkipSet {
            id: SetId::next(),
            arena: Arena::new(),
            head: [None; MAX_HEIGHT],
            compare: Arc::new(f),
            levels: CoinFlip::standard(),
        }
    }

    /// Insert an element, returning a cursor to it.
    ///
    /// Insertion always succeeds. An element equal to one already present
    /// (under the set's comparison function) is kept as well, placed after
    /// every equal element already in the set, so equal elements iterate in
    /// insertion order. No other cursor is invalidated by an insertion.
    ///
    /// Expected `O(log n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// let cursor = set.insert(5);
    /// set.insert(0);
    /// assert_eq!(set.get(cursor), Ok(&5));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> Cursor {
        let height = self.levels.level() + 1;
        let mut prev: [Link; MAX_HEIGHT] = [None; MAX_HEIGHT];
        self.seek_where(height, &mut prev, |_, next| {
            (self.compare)(next, &key) != Ordering::Greater
        });

        let id = self.arena.insert(Node::new(key, height));
        for level in (0..height).rev() {
            let next = self.link_after(prev[level], level);
            self.arena.node_mut(id.index).links[level] = next;
            *self.link_slot(prev[level], level) = Some(id.index);
        }
        Cursor {
            set: self.id,
            node: Some(id),
        }
    }

    /// Look up an element, returning a cursor to it or the end cursor if no
    /// element compares equal.
    ///
    /// If several equal elements are present, the first-inserted one is
    /// returned. Expected `O(log n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend(0..10);
    /// assert_eq!(set.get(set.find(&4)), Ok(&4));
    /// assert!(set.find(&15).is_end());
    /// ```
    #[must_use]
    pub fn find(&self, key: &T) -> Cursor {
        let mut prev: [Link; MAX_HEIGHT] = [None; MAX_HEIGHT];
        self.seek_where(MAX_HEIGHT, &mut prev, |_, next| {
            (self.compare)(next, key) == Ordering::Less
        });
        match self.link_after(prev[0], 0) {
            Some(index) if (self.compare)(&self.arena.node(index).key, key) == Ordering::Equal => {
                self.cursor_to(Some(index))
            }
            _ => self.end(),
        }
    }

    /// Remove the element behind `cursor`, returning it together with a
    /// cursor to the element that followed it (or the end cursor).
    ///
    /// Exactly the referenced element is removed, even when equal elements
    /// are present. Only the passed-in cursor (and copies of it) becomes
    /// stale; every other cursor remains valid. Expected `O(log n)`.
    ///
    /// # Errors
    ///
    /// Fails with a [`CursorError`] if the cursor is the end cursor, was
    /// issued by a different set, or refers to an already-removed element.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend([1, 2, 3]);
    ///
    /// let (removed, next) = set.remove(set.find(&2)).unwrap();
    /// assert_eq!(removed, 2);
    /// assert_eq!(set.get(next), Ok(&3));
    /// assert!(set.find(&2).is_end());
    /// ```
    pub fn remove(&mut self, cursor: Cursor) -> Result<(T, Cursor), CursorError> {
        let id = self.resolve(cursor)?;
        let height = self.arena.node(id.index).height();

        let mut prev: [Link; MAX_HEIGHT] = [None; MAX_HEIGHT];
        {
            let key = &self.arena.node(id.index).key;
            self.seek_where(height, &mut prev, |next, next_key| {
                next != id.index && (self.compare)(next_key, key) != Ordering::Greater
            });
        }

        let next_at_bottom = self.arena.node(id.index).links[0];
        for level in (0..height).rev() {
            let next = self.arena.node(id.index).links[level];
            let slot = self.link_slot(prev[level], level);
            debug_assert_eq!(*slot, Some(id.index), "left neighbour lost at level {level}");
            *slot = next;
        }

        let Some(node) = self.arena.remove(id) else {
            unreachable!("cursor was resolved before removal")
        };
        let next = self.cursor_to(next_at_bottom);
        Ok((node.key, next))
    }

    /// A cursor to the first (smallest) element, or the end cursor if the
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut cursor = set.begin();
    /// let mut elements = Vec::new();
    /// while !cursor.is_end() {
    ///     elements.push(*set.get(cursor).unwrap());
    ///     cursor = set.advance(cursor).unwrap();
    /// }
    /// assert_eq!(elements, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.cursor_to(self.head[0])
    }

    /// The end cursor: the position one past the last element.
    ///
    /// The end cursor refers to no element and cannot be dereferenced,
    /// advanced or removed.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor {
            set: self.id,
            node: None,
        }
    }

    /// A reference to the element behind `cursor`.
    ///
    /// # Errors
    ///
    /// Fails with a [`CursorError`] if the cursor is the end cursor, was
    /// issued by a different set, or refers to an already-removed element.
    pub fn get(&self, cursor: Cursor) -> Result<&T, CursorError> {
        let id = self.resolve(cursor)?;
        Ok(&self.arena.node(id.index).key)
    }

    /// A cursor to the element after `cursor`, or the end cursor if `cursor`
    /// is at the last element.
    ///
    /// # Errors
    ///
    /// Fails with a [`CursorError`] if the cursor is the end cursor, was
    /// issued by a different set, or refers to an already-removed element.
    pub fn advance(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        let id = self.resolve(cursor)?;
        Ok(self.cursor_to(self.arena.node(id.index).links[0]))
    }

    /// The number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend(0..10);
    /// assert_eq!(set.len(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head[0].is_none()
    }

    /// Returns `true` if an element equal to `key` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend(0..10);
    /// assert!(set.contains(&4));
    /// assert!(!set.contains(&15));
    /// ```
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        !self.find(key).is_end()
    }

    /// A reference to the first (smallest) element, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// assert!(set.front().is_none());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.front(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head[0].map(|index| &self.arena.node(index).key)
    }

    /// A reference to the last (largest) element, or `None` if the set is
    /// empty.
    ///
    /// Expected `O(log n)`: the last element is reached by walking the
    /// levels top-down.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// assert!(set.back().is_none());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.back(), Some(&2));
    /// ```
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        let mut at: Link = None;
        for level in (0..MAX_HEIGHT).rev() {
            while let Some(next) = self.link_after(at, level) {
                at = Some(next);
            }
        }
        at.map(|index| &self.arena.node(index).key)
    }

    /// Remove the first (smallest) element and return it, or `None` if the
    /// set is empty.
    ///
    /// `O(1)` expected: the first element needs no search, only unlinking.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert_eq!(set.pop_front(), Some(1));
    /// assert_eq!(set.pop_front(), Some(2));
    /// assert!(set.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.head[0]?;
        let height = self.arena.node(first).height();
        for level in 0..height {
            debug_assert_eq!(self.head[level], Some(first));
            self.head[level] = self.arena.node(first).links[level];
        }
        let id = self.arena.id_at(first);
        let Some(node) = self.arena.remove(id) else {
            unreachable!("head linked to a vacant slot")
        };
        Some(node.key)
    }

    /// A reference to the element at the given position in the sorted order,
    /// or `None` if the index is out of bounds.
    ///
    /// Despite the array-like surface this is **not** random access: the
    /// element is reached by walking `index` links from the front, taking
    /// `O(n)` time. Calling it for every index in turn is `O(n^2)`; iterate
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// assert!(set.get_index(0).is_none());
    /// set.extend(0..10);
    /// assert_eq!(set.get_index(0), Some(&0));
    /// assert!(set.get_index(10).is_none());
    /// ```
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        let mut at = self.head[0]?;
        for _ in 0..index {
            at = self.arena.node(at).links[0]?;
        }
        Some(&self.arena.node(at).key)
    }

    /// Clears the set, removing and releasing every element.
    ///
    /// Every previously issued cursor becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend(0..10);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Exchange the contents of two sets in constant time.
    ///
    /// The sets exchange their entire state, identity included, so cursors
    /// issued before the swap keep resolving against whichever set now owns
    /// their element: a cursor obtained from `self` must be used with
    /// `other` afterwards, and vice versa.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut a: SkipSet<i64> = (0..4).collect();
    /// let mut b: SkipSet<i64> = (10..13).collect();
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.len(), 4);
    /// assert_eq!(a.front(), Some(&10));
    /// assert_eq!(b.front(), Some(&0));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Creates an iterator over the elements of the set, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.extend(0..10);
    /// for i in set.iter() {
    ///     println!("Element: {}", i);
    /// }
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            next: self.head[0],
            remaining: self.len(),
        }
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<T> SkipSet<T> {
    /// The traversal primitive shared by `find`, `insert` and `remove`.
    ///
    /// Starting at the head sentinel on level `height - 1`, walk right while
    /// `advance` accepts the next node, record the final position of each
    /// level into `prev`, then drop one level and continue from the same
    /// horizontal position. `prev[level]` ends up holding the last node left
    /// of the target at that level (`None` for the head sentinel), for every
    /// `level < height`.
    fn seek_where<F>(&self, height: usize, prev: &mut [Link; MAX_HEIGHT], mut advance: F)
    where
        F: FnMut(u32, &T) -> bool,
    {
        debug_assert!((1..=MAX_HEIGHT).contains(&height));
        // `None` denotes the head sentinel, not the end of a chain.
        let mut at: Link = None;
        for level in (0..height).rev() {
            while let Some(next) = self.link_after(at, level) {
                if !advance(next, &self.arena.node(next).key) {
                    break;
                }
                at = Some(next);
            }
            prev[level] = at;
        }
    }

    /// The link leaving `at` on `level`, where `None` is the head sentinel.
    fn link_after(&self, at: Link, level: usize) -> Link {
        match at {
            None => self.head[level],
            Some(index) => self.arena.node(index).links[level],
        }
    }

    /// Mutable access to the link leaving `at` on `level`.
    fn link_slot(&mut self, at: Link, level: usize) -> &mut Link {
        match at {
            None => &mut self.head[level],
            Some(index) => &mut self.arena.node_mut(index).links[level],
        }
    }

    /// Stamp a (possibly absent) node into a cursor carrying this set's
    /// identity and the node's current generation.
    fn cursor_to(&self, link: Link) -> Cursor {
        Cursor {
            set: self.id,
            node: link.map(|index| self.arena.id_at(index)),
        }
    }

    /// Verify that `cursor` belongs to this set and still refers to a live
    /// element.
    fn resolve(&self, cursor: Cursor) -> Result<NodeId, CursorError> {
        if cursor.set != self.id {
            return Err(CursorError::ForeignContainer);
        }
        let id = cursor.node.ok_or(CursorError::End)?;
        if self.arena.contains(id) {
            Ok(id)
        } else {
            Err(CursorError::Stale)
        }
    }
}

#[cfg(test)]
impl<T> SkipSet<T> {
    /// Checks the integrity of the skip list.
    fn check(&self) {
        // Level 0 must hold every element, in non-decreasing order.
        let mut count = 0;
        let mut at = self.head[0];
        let mut prev_key: Option<&T> = None;
        while let Some(index) = at {
            let node = self.arena.node(index);
            if let Some(prev) = prev_key {
                assert_ne!(
                    (self.compare)(prev, &node.key),
                    Ordering::Greater,
                    "level 0 out of order"
                );
            }
            prev_key = Some(&node.key);
            count += 1;
            at = node.links[0];
        }
        assert_eq!(count, self.arena.len(), "level-0 chain diverges from arena");

        // Every level must be a subsequence of the level below.
        for level in 1..MAX_HEIGHT {
            let mut upper = self.head[level];
            let mut lower = self.head[level - 1];
            while let Some(target) = upper {
                loop {
                    let Some(candidate) = lower else {
                        panic!("node on level {level} unreachable on level {}", level - 1);
                    };
                    lower = self.arena.node(candidate).links[level - 1];
                    if candidate == target {
                        break;
                    }
                }
                assert!(
                    self.arena.node(target).height() > level,
                    "node linked above its height"
                );
                upper = self.arena.node(target).links[level];
            }
        }
    }
}

// /////////////////////////////////
// Iterators
// /////////////////////////////////

/// Iterator by reference over a [`SkipSet`], in sorted order.
pub struct Iter<'a, T> {
    set: &'a SkipSet<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.set.arena.node(index);
        self.next = node.links[0];
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Consuming iterator over a [`SkipSet`], in sorted order.
pub struct IntoIter<T> {
    set: SkipSet<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.set.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.set.len();
        (len, Some(len))
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T: PartialOrd> Default for SkipSet<T> {
    #[inline]
    fn default() -> SkipSet<T> {
        SkipSet::new()
    }
}

/// The copy iterates the source in sorted order and inserts each element
/// into a fresh set: membership and order match the original, while the
/// node heights are drawn anew from an independently seeded generator. The
/// comparison function is shared with the original.
impl<T: Clone> Clone for SkipSet<T> {
    fn clone(&self) -> Self {
        let mut copy = SkipSet {
            id: SetId::next(),
            arena: Arena::with_capacity(self.len()),
            head: [None; MAX_HEIGHT],
            compare: Arc::clone(&self.compare),
            levels: self.levels.reseeded(),
        };
        for key in self {
            copy.insert(key.clone());
        }
        copy
    }
}

/// This implementation of `PartialEq` only checks that the *elements* are
/// equal, using `T`'s implementation of `PartialEq`; it does not compare
/// the sets' comparison functions or internal structure.
impl<A, B> cmp::PartialEq<SkipSet<B>> for SkipSet<A>
where
    A: cmp::PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &SkipSet<B>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> cmp::Eq for SkipSet<T> where T: cmp::Eq {}

impl<A, B> cmp::PartialOrd<SkipSet<B>> for SkipSet<A>
where
    A: cmp::PartialOrd<B>,
{
    #[inline]
    fn partial_cmp(&self, other: &SkipSet<B>) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for SkipSet<T>
where
    T: cmp::Ord,
{
    #[inline]
    fn cmp(&self, other: &SkipSet<T>) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Extend<T> for SkipSet<T> {
    #[inline]
    fn extend<I: iter::IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert(element);
        }
    }
}

impl<T> ops::Index<usize> for SkipSet<T> {
    type Output = T;

    /// Linear-time positional access; see
    /// [`get_index`][SkipSet::get_index].
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn index(&self, index: usize) -> &T {
        self.get_index(index).expect("Index out of range")
    }
}

impl<T> fmt::Debug for SkipSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry:?}")?;
        }
        write!(f, "]")
    }
}

impl<T> fmt::Display for SkipSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

impl<T> iter::IntoIterator for SkipSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { set: self }
    }
}

impl<'a, T> iter::IntoIterator for &'a SkipSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> iter::IntoIterator for &'a mut SkipSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> iter::FromIterator<T> for SkipSet<T>
where
    T: PartialOrd,
{
    #[inline]
    fn from_iter<I>(iter: I) -> SkipSet<T>
    where
        I: iter::IntoIterator<Item = T>,
    {
        let mut set = SkipSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash> Hash for SkipSet<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
