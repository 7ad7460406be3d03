//! Ergonomic hash set adapter.
//!
//! This module provides [`ErgoSet`], a thin wrapper around
//! `std::collections::HashSet` that adds a handful of convenience
//! operations without reimplementing any hashing or bucketing logic.
//!
//! # Overview
//!
//! `ErgoSet` composes a standard hash set rather than inheriting its whole
//! API surface. On top of the usual insert/remove/contains/iterate
//! operations it provides:
//!
//! - [`ErgoSet::exists_by`] / [`ErgoSet::exists_field`]: existence queries
//!   over sets whose elements are pointer-like (`Rc`, `Arc`, `Box`,
//!   references), comparing an accessor result or a projected field against
//!   an expected value
//! - [`ErgoSet::shared_empty`]: a process-wide, lazily created, never-freed
//!   empty instance usable as a default or sentinel value
//! - a union operator (`|`) and a non-consuming [`ErgoSet::union`] method
//!
//! All core operations are amortized O(1), delegated to the wrapped
//! container.
//!
//! # Examples
//!
//! ```rust
//! use ergoset::ErgoSet;
//!
//! let mut set = ErgoSet::new();
//! assert!(!set.contains(&5));
//!
//! set.insert(5);
//! assert!(set.contains(&5));
//!
//! // Inserting again leaves the set unchanged
//! set.insert(5);
//! assert_eq!(set.len(), 1);
//! ```
//!
//! # Union
//!
//! ```rust
//! use ergoset::ErgoSet;
//!
//! let left: ErgoSet<i32> = [1, 2, 3].into_iter().collect();
//! let right: ErgoSet<i32> = [3, 4].into_iter().collect();
//!
//! let union = &left | &right;
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(left.len(), 3);  // Operands are untouched
//! assert_eq!(right.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{BitOr, Deref};

use crate::shared;

// =============================================================================
// ErgoSet Definition
// =============================================================================

/// A hash set with a few ergonomic extensions, backed by
/// `std::collections::HashSet`.
///
/// `ErgoSet` holds the standard container by composition and exposes the
/// intended operation set only; the wrapped container's hashing, collision
/// handling, and resizing are used as-is. Each element appears at most once
/// under the container's `Eq`/`Hash` relation.
///
/// Instances are not internally synchronized. Concurrent mutation from
/// multiple threads requires external locking; concurrent reads of a set
/// that is no longer mutated are safe.
///
/// # Time Complexity
///
/// | Operation      | Complexity            |
/// |----------------|-----------------------|
/// | `new`          | O(1)                  |
/// | `contains`     | O(1) amortized        |
/// | `insert`       | O(1) amortized        |
/// | `remove`       | O(1) amortized        |
/// | `len`          | O(1)                  |
/// | `exists_by`    | O(n)                  |
/// | `exists_field` | O(n)                  |
/// | `union` / `\|` | O(n + m)              |
///
/// # Examples
///
/// ```rust
/// use ergoset::ErgoSet;
///
/// let set = ErgoSet::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct ErgoSet<T, S = RandomState> {
    inner: HashSet<T, S>,
}

impl<T> ErgoSet<T> {
    /// Creates a new empty set with the default hasher.
    ///
    /// The returned set is immediately usable; no further initialization is
    /// required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<i32> = ErgoSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates a new empty set with space for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<i32> = ErgoSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }
}

impl<T, S> ErgoSet<T, S> {
    /// Creates a new empty set that uses the given hash builder.
    ///
    /// This is the only hashing extension point; the crate adds no custom
    /// hash or equality support beyond what the wrapped container provides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<i32> = ErgoSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all elements from the set, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Iteration order is the wrapped container's natural order, which is
    /// arbitrary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<i32> = [1, 2, 3].into_iter().collect();
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> ErgoSetIterator<'_, T> {
        ErgoSetIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Eq + Hash> ErgoSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set = ErgoSet::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::new();
        set.insert(element);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> ErgoSet<T, S> {
    /// Returns `true` if the set contains an element equal to the given
    /// value.
    ///
    /// The value may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the element
    /// type.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; a pure query with no side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set: ErgoSet<String> = ["hello".to_string()].into_iter().collect();
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present. Inserting a
    /// duplicate leaves the set's size and contents unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let mut set = ErgoSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let mut set: ErgoSet<i32> = [1, 2].into_iter().collect();
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&3));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Returns `true` if any element, dereferenced to its target object,
    /// yields a result equal to `expected` when the given accessor is
    /// applied.
    ///
    /// This supports sets whose elements are pointer-like handles (`Rc`,
    /// `Arc`, `Box`, references) to a richer object. The accessor plays the
    /// role of a zero-argument method on the target object; the set only
    /// reads through the handle and takes no ownership.
    ///
    /// Returns `false` when the set is empty or no element matches.
    ///
    /// # Complexity
    ///
    /// O(n); stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use ergoset::ErgoSet;
    ///
    /// #[derive(PartialEq, Eq, Hash)]
    /// struct Task {
    ///     id: u32,
    /// }
    ///
    /// impl Task {
    ///     fn id(&self) -> u32 {
    ///         self.id
    ///     }
    /// }
    ///
    /// let set: ErgoSet<Rc<Task>> = [10, 20, 30]
    ///     .into_iter()
    ///     .map(|id| Rc::new(Task { id }))
    ///     .collect();
    ///
    /// assert!(set.exists_by(Task::id, &20));
    /// assert!(!set.exists_by(Task::id, &99));
    /// ```
    #[must_use]
    pub fn exists_by<U, R, F>(&self, accessor: F, expected: &R) -> bool
    where
        T: Deref<Target = U>,
        F: Fn(&U) -> R,
        R: PartialEq,
    {
        self.inner
            .iter()
            .any(|element| accessor(element.deref()) == *expected)
    }

    /// Returns `true` if any element, dereferenced to its target object,
    /// has a projected field equal to `expected`.
    ///
    /// Identical to [`ErgoSet::exists_by`], except the callable projects a
    /// reference to a field of the target object instead of computing an
    /// owned value, so no clone of the compared value is made.
    ///
    /// Returns `false` when the set is empty or no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use ergoset::ErgoSet;
    ///
    /// #[derive(PartialEq, Eq, Hash)]
    /// struct Task {
    ///     name: String,
    /// }
    ///
    /// let set: ErgoSet<Rc<Task>> = ["build", "test"]
    ///     .into_iter()
    ///     .map(|name| Rc::new(Task { name: name.to_string() }))
    ///     .collect();
    ///
    /// assert!(set.exists_field(|task| &task.name, &"test".to_string()));
    /// assert!(!set.exists_field(|task| &task.name, &"deploy".to_string()));
    /// ```
    #[must_use]
    pub fn exists_field<U, R, F>(&self, projection: F, expected: &R) -> bool
    where
        T: Deref<Target = U>,
        F: Fn(&U) -> &R,
        R: PartialEq,
    {
        self.inner
            .iter()
            .any(|element| projection(element.deref()) == expected)
    }

    /// Returns the union of two sets as a new set.
    ///
    /// The union contains every element present in `self` or `other` (or
    /// both), each exactly once. Neither operand is mutated.
    ///
    /// Implemented by copying `self` and bulk-inserting the elements of
    /// `other`; duplicates are absorbed by the uniqueness invariant.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let left: ErgoSet<i32> = [1, 2].into_iter().collect();
    /// let right: ErgoSet<i32> = [2, 3].into_iter().collect();
    ///
    /// let union = left.union(&right);
    ///
    /// assert_eq!(union.len(), 3);
    /// assert!(union.contains(&1));
    /// assert!(union.contains(&2));
    /// assert!(union.contains(&3));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
        S: Clone,
    {
        let mut result = self.clone();
        result.inner.extend(other.inner.iter().cloned());
        result
    }
}

impl<T, S> ErgoSet<T, S>
where
    T: Send + Sync + 'static,
    S: Default + Send + Sync + 'static,
{
    /// Returns a reference to a shared, lazily created empty set.
    ///
    /// One instance exists per concrete element/hasher instantiation,
    /// created on first access and intentionally never deallocated, so the
    /// returned reference is `'static` and safe to hold from static or
    /// global initializers without regard to teardown ordering. Repeated
    /// calls return the same underlying storage.
    ///
    /// First construction is guarded by a one-time-initialization
    /// primitive, so the lazy-creation race is safe under concurrent
    /// callers; the instance is read-only afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let empty = ErgoSet::<i32>::shared_empty();
    /// assert!(empty.is_empty());
    ///
    /// // Same storage on every call
    /// assert!(std::ptr::eq(empty, ErgoSet::<i32>::shared_empty()));
    /// ```
    #[must_use]
    pub fn shared_empty() -> &'static Self {
        shared::leaked_instance(Self::default)
    }
}

// =============================================================================
// Union Operator
// =============================================================================

impl<T, S> BitOr<&ErgoSet<T, S>> for &ErgoSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = ErgoSet<T, S>;

    /// Returns the union of `self` and `rhs` as a new set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let left: ErgoSet<i32> = [1, 2, 3].into_iter().collect();
    /// let right: ErgoSet<i32> = [3, 4].into_iter().collect();
    ///
    /// let union = &left | &right;
    ///
    /// assert_eq!(union, [1, 2, 3, 4].into_iter().collect());
    /// ```
    fn bitor(self, rhs: &ErgoSet<T, S>) -> ErgoSet<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitOr for ErgoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Output = Self;

    /// Returns the union of `self` and `rhs`, consuming both operands and
    /// reusing the left operand's storage.
    fn bitor(mut self, rhs: Self) -> Self {
        self.inner.extend(rhs.inner);
        self
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the elements of an [`ErgoSet`].
pub struct ErgoSetIterator<'a, T> {
    inner: std::collections::hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for ErgoSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ErgoSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of an [`ErgoSet`].
pub struct ErgoSetIntoIterator<T> {
    inner: std::collections::hash_set::IntoIter<T>,
}

impl<T> Iterator for ErgoSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ErgoSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for ErgoSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T, S> FromIterator<T> for ErgoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for ErgoSet<T> {
    /// Creates a set from an array; duplicate values are absorbed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoset::ErgoSet;
    ///
    /// let set = ErgoSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    fn from(elements: [T; N]) -> Self {
        Self {
            inner: HashSet::from(elements),
        }
    }
}

impl<T, S> From<HashSet<T, S>> for ErgoSet<T, S> {
    /// Wraps an existing standard hash set without copying.
    fn from(inner: HashSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<ErgoSet<T, S>> for HashSet<T, S> {
    /// Unwraps the adapter back into the underlying standard hash set.
    fn from(set: ErgoSet<T, S>) -> Self {
        set.inner
    }
}

impl<T, S> Extend<T> for ErgoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for ErgoSet<T, S>
where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for ErgoSet<T, S> {
    type Item = T;
    type IntoIter = ErgoSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ErgoSetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a ErgoSet<T, S> {
    type Item = &'a T;
    type IntoIter = ErgoSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> PartialEq for ErgoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for ErgoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for ErgoSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for ErgoSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.inner {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Fast Hasher Aliases
// =============================================================================

/// An [`ErgoSet`] backed by the `rustc-hash` Fx hasher.
///
/// Faster than the default hasher but not resistant to hash flooding; use
/// only with trusted inputs.
#[cfg(feature = "fxhash")]
pub type FxErgoSet<T> = ErgoSet<T, rustc_hash::FxBuildHasher>;

/// An [`ErgoSet`] backed by the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AErgoSet<T> = ErgoSet<T, ahash::RandomState>;

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for ErgoSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.inner {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ErgoSetVisitor<T, S> {
    marker: std::marker::PhantomData<ErgoSet<T, S>>,
}

#[cfg(feature = "serde")]
impl<T, S> ErgoSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for ErgoSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = ErgoSet<T, S>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = ErgoSet::with_hasher(S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ErgoSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ErgoSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: ErgoSet<i32> = ErgoSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element() {
        let set = ErgoSet::singleton(42);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_display_two_elements_in_some_order() {
        let set: ErgoSet<i32> = [1, 2].into_iter().collect();
        let rendered = format!("{set}");
        assert!(rendered == "{1, 2}" || rendered == "{2, 1}");
    }

    // =========================================================================
    // Debug Tests
    // =========================================================================

    #[rstest]
    fn test_debug_empty_set() {
        let set: ErgoSet<i32> = ErgoSet::new();
        assert_eq!(format!("{set:?}"), "{}");
    }

    #[rstest]
    fn test_debug_single_element() {
        let set = ErgoSet::singleton("a");
        assert_eq!(format!("{set:?}"), "{\"a\"}");
    }

    // =========================================================================
    // Interop Tests
    // =========================================================================

    #[rstest]
    fn test_round_trip_through_standard_hash_set() {
        let set: ErgoSet<i32> = [1, 2, 3].into_iter().collect();
        let standard: std::collections::HashSet<i32> = set.clone().into();
        let back: ErgoSet<i32> = standard.into();
        assert_eq!(set, back);
    }
}
