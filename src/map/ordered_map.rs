use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use super::{Branch, Iter, KeyNotFound, Keys, Values};
use crate::compare::{Compare, DisplayOrder};

/// A map of keys to values, stored as an unbalanced binary search tree and ordered by a
/// [comparator](Compare) fixed at construction.
///
/// Because every placement decision goes through the comparator, `K` itself needs no [`Ord`]
/// bound; the comparator *is* the order. It is a logic error for a comparator to be impure or
/// inconsistent - if the same pair of keys ever compares differently while it sits in the map,
/// entries can become unreachable. The map never detects this; avoiding it is the caller's
/// responsibility.
///
/// The tree is never rebalanced. Nodes are placed where the descent from the root first finds
/// an empty link and stay there until removed, so the shape of the tree is entirely determined
/// by the order in which keys arrive.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `h`: The height of the tree. Nothing rebalances the tree, so `h` is only `O(log n)` for
///   favourable insertion orders and reaches `n` when keys arrive pre-sorted.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h)` |
/// | `remove` | `O(h)`* |
/// | `contains` | `O(h)` |
///
/// \* A removal that restructures the tree also walks the right spine of the removed node's
/// left subtree to reconnect the two halves, which is bounded by `h` as well.
pub struct OrderedMap<K, V, C: Compare<K> = DisplayOrder> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<K: Display, V> OrderedMap<K, V> {
    /// Creates an empty map ordered by [`DisplayOrder`], which compares the rendered text of
    /// keys.
    ///
    /// This default is not a general-purpose order - it's only a usable fallback for simple
    /// key types. Use [`with_comparator`](OrderedMap::with_comparator) for anything where the
    /// textual order and the intended order disagree (numbers, most notably).
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            root: Branch(None),
            len: 0,
            comparator: DisplayOrder,
        }
    }
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
    /// Creates an empty map which orders its keys with the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> OrderedMap<K, V, C> {
        OrderedMap {
            root: Branch(None),
            len: 0,
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the provided `key`-`value` pair into the map. If the key was already associated
    /// with a value, the previous value is displaced and returned, and the length of the map
    /// is unchanged.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let displaced = self.root.insert(&self.comparator, key, value);
        if displaced.is_none() {
            self.len += 1;
        }
        displaced
    }

    /// Returns a reference to the value associated with the provided `key`, or [`KeyNotFound`]
    /// if the map contains no entry for it.
    ///
    /// Unlike [`remove`](OrderedMap::remove), looking up an absent key is an error here. A
    /// failed lookup leaves the map untouched.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.get_entry(key).map(|e| e.1).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the provided `key`, or
    /// [`KeyNotFound`] if the map contains no entry for it.
    ///
    /// The key itself stays immutable: changing it in place would invalidate its position in
    /// the tree.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        self.root.get_mut(&self.comparator, key).ok_or(KeyNotFound)
    }

    /// Returns the entry for the provided `key` as a key-value pair, or None if there is no
    /// entry. This is the non-failing probe that [`get`](OrderedMap::get) and
    /// [`contains`](OrderedMap::contains) are defined in terms of.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.root.get_entry(&self.comparator, key)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    ///
    /// When the removed node has children, its place is taken by its left subtree, with the
    /// right subtree reattached under the left subtree's rightmost descendant. That keeps the
    /// ordering intact without rebalancing anything, and it can leave the tree taller than a
    /// textbook predecessor-swap would - repeated removals make no promise of a bushy tree.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let removed = self.root.remove_entry(&self.comparator, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes the entry associated with `key`, returning the value if it exists. Removing an
    /// absent key is a no-op, not an error: the result is simply None.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|e| e.1)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.root.contains(&self.comparator, key)
    }

    /// Returns an iterator over the map's entries, as references. See [`Iter`] for the
    /// traversal order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over the map's keys, as references, in the same pre-order as
    /// [`iter`](OrderedMap::iter).
    ///
    /// The sequence is one-shot: it isn't restartable mid-way, and a fresh call starts a fresh
    /// traversal.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over the map's values, as references, in the same pre-order as
    /// [`iter`](OrderedMap::iter).
    ///
    /// The sequence is one-shot: it isn't restartable mid-way, and a fresh call starts a fresh
    /// traversal.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Applies `action` to every key-value pair in the map, in the same pre-order as
    /// [`iter`](OrderedMap::iter), for its side effects.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut action: F) {
        for (key, value) in self.iter() {
            action(key, value);
        }
    }

    /// Writes an indented, human-readable rendering of the tree to `sink`: one line per node
    /// as `key: value`, children indented two further spaces, and `<>` marking the empty
    /// links under a node that has at least one child. An empty map renders as a single `<>`.
    ///
    /// This is a debugging aid which exposes the tree's shape, not a serialization format -
    /// there is no reader for it and no round-trip guarantee.
    pub fn dump<W: Write>(&self, sink: &mut W) -> io::Result<()>
    where
        K: Display,
        V: Display,
    {
        self.root.dump(sink, 0)
    }
}

impl<K: Display, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, C: Compare<K>> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap")
            .field("nodes", &self.root)
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C: Compare<K>> Display for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
