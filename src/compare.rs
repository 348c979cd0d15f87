//! Comparators: the ordering capability an [`OrderedMap`](crate::OrderedMap) is built around.
//!
//! A comparator is any type implementing [`Compare`], which imposes a total order on a key type.
//! The map consults its comparator on every placement decision, so a comparator must be pure and
//! consistent: the same pair of keys must compare the same way for the whole life of the map.
//!
//! Closures of type `Fn(&K, &K) -> Ordering` are comparators, which covers most ad-hoc needs:
//!
//! ```
//! use ordered_map::OrderedMap;
//!
//! let mut by_len = OrderedMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! by_len.insert("three", 3);
//! by_len.insert("by", 2);
//! assert_eq!(by_len.get(&"by"), Ok(&2));
//! ```
//!
//! [`Natural`] delegates to the key's own [`Ord`] implementation, and [`DisplayOrder`] compares
//! the rendered text of keys - a usable default for simple key types, but not a general-purpose
//! order.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

/// A total order over a key type.
///
/// Implementations must be consistent: `compare(a, b)` may not change its answer for the same
/// inputs while a map is using the comparator. An inconsistent comparator doesn't cause memory
/// unsafety, but the placement decisions built on it stop meaning anything, so entries can
/// become unreachable. This is a logic error on par with mutating a key's hash while it sits in
/// a hash map.
pub trait Compare<K: ?Sized> {
    /// Compares two keys, returning `Less`, `Equal` or `Greater` if `lhs` is less than, equal
    /// to, or greater than `rhs` respectively.
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

impl<K: ?Sized, F: Fn(&K, &K) -> Ordering> Compare<K> for F {
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        self(lhs, rhs)
    }
}

/// A comparator that defers to the key's own [`Ord`] implementation.
pub struct Natural<K: Ord + ?Sized>(PhantomData<fn(&K, &K) -> Ordering>);

/// Returns the [`Natural`] comparator for a key type.
pub const fn natural<K: Ord + ?Sized>() -> Natural<K> {
    Natural(PhantomData)
}

impl<K: Ord + ?Sized> Compare<K> for Natural<K> {
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

// Clone, Copy, Default and Debug are implemented by hand so that K doesn't pick up any bounds
// beyond Ord. (Deriving them would require K to implement each trait as well.)
impl<K: Ord + ?Sized> Clone for Natural<K> {
    fn clone(&self) -> Natural<K> {
        *self
    }
}

impl<K: Ord + ?Sized> Copy for Natural<K> {}

impl<K: Ord + ?Sized> Default for Natural<K> {
    fn default() -> Natural<K> {
        natural()
    }
}

impl<K: Ord + ?Sized> Debug for Natural<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Natural")
    }
}

/// A comparator that orders keys by the lexicographic order of their [`Display`] output.
///
/// This is the default comparator of an [`OrderedMap`](crate::OrderedMap) and is *not* a
/// general-purpose order - it's only a usable default for simple key types. Numbers in
/// particular sort as text under it: `10` comes before `2` because `"10" < "2"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayOrder;

impl<K: Display + ?Sized> Compare<K> for DisplayOrder {
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.to_string().cmp(&rhs.to_string())
    }
}
