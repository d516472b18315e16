use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{
    iter::{IntoIter, Iter},
    reindex::{reindex, sorted_keys, ReindexOrder},
    Truthy, ValidationError,
};
use crate::{config::CollectionConfig, debug_assert_invariant};

/// An ordered sequence stored as a sparse map from integer key to item.
///
/// Between public calls the keys are exactly `0..len`. Appending and
/// removing from the back touch a single key; operations on the front
/// disturb the layout and are followed by a reindex pass.
///
/// Boundary conditions (removing from an empty collection, mapping or
/// reducing nothing) are reported with `None` instead of an error.
///
/// # Example
///
/// ```
/// use keylist::OrderedCollection;
///
/// let mut list = OrderedCollection::new();
/// list.append(1);
/// list.append(2);
/// list.insert_first(0);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.remove_first(), Some(0));
/// assert_eq!(list.remove_last(), Some(2));
/// assert_eq!(list.reduce(|acc, x, _| acc + x, 0), Some(1));
/// ```
pub struct OrderedCollection<T> {
    storage: FxHashMap<i64, T>,
    length: usize,
    order: ReindexOrder,
}

////////////////////////////////////////////////////////////////////////////////
// Construction and inspection
////////////////////////////////////////////////////////////////////////////////

impl<T> OrderedCollection<T> {
    /// Creates an empty collection with numeric reindexing.
    pub fn new() -> Self {
        Self::with_order(ReindexOrder::default())
    }

    /// Creates an empty collection that reindexes with `order`.
    pub fn with_order(order: ReindexOrder) -> Self {
        Self {
            storage: FxHashMap::default(),
            length: 0,
            order,
        }
    }

    /// Creates an empty collection from loaded settings.
    pub fn from_config(config: &CollectionConfig) -> Self {
        Self::with_order(config.reindex_order)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Ordering used when keys are renumbered.
    pub fn order(&self) -> ReindexOrder {
        self.order
    }

    /// Returns the item at `index`, if any.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&T> {
        if index >= self.length {
            return None;
        }
        self.storage.get(&(index as i64))
    }

    /// Returns a mutable reference to the item at `index`, if any.
    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut T> {
        if index >= self.length {
            return None;
        }
        self.storage.get_mut(&(index as i64))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.length.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates over the items in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage, self.length)
    }

    /// Snapshot of the storage keys in ascending numeric order.
    pub fn keys(&self) -> Vec<i64> {
        sorted_keys(&self.storage, ReindexOrder::Numeric)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.length = 0;
    }

    /// Moves the items into a `Vec`, preserving index order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Checks that the keys are exactly `0..len`.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        if self.storage.len() != self.length {
            return Err(ValidationError::LengthMismatch {
                expected: self.length,
                actual: self.storage.len(),
            });
        }

        // Equal counts plus no holes leave no room for keys outside the range.
        match (0..self.length as i64).find(|k| !self.storage.contains_key(k)) {
            Some(key) => Err(ValidationError::MissingKey { key }),
            None => Ok(()),
        }
    }

    /// Restores the contiguous key layout.
    pub(crate) fn reindex(&mut self) {
        self.length = reindex(&mut self.storage, self.order);
    }

    /// Full layout check after a reindex pass (debug builds only).
    fn check_layout(&self) {
        debug_assert_invariant!(
            self.validate_invariants().is_ok(),
            "{:?}",
            self.validate_invariants()
        );
    }

    /// Cheap check for operations that touch a single key.
    fn check_len(&self) {
        debug_assert_invariant!(
            self.storage.len() == self.length,
            "{} keys for length {}",
            self.storage.len(),
            self.length
        );
    }
}

////////////////////////////////////////////////////////////////////////////////
// Mutation
////////////////////////////////////////////////////////////////////////////////

impl<T> OrderedCollection<T> {
    /// Appends `item` at the back and returns the new length.
    pub fn append(
        &mut self,
        item: T,
    ) -> usize {
        self.storage.insert(self.length as i64, item);
        self.length += 1;
        self.check_len();
        self.length
    }

    /// Appends only when `args` yields exactly one item.
    ///
    /// Any other count leaves the collection untouched. Either way the
    /// current length is returned.
    pub fn append_args<I>(
        &mut self,
        args: I,
    ) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        match single(args) {
            Some(item) => self.append(item),
            None => {
                debug!(len = self.length, "append ignored: expected exactly one item");
                self.length
            }
        }
    }

    /// Removes and returns the last item, or `None` when empty.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        let item = self.storage.remove(&(self.length as i64 - 1));
        self.length -= 1;
        self.check_len();
        item
    }

    /// Removes and returns the first item, or `None` when empty.
    ///
    /// The remaining keys are renumbered, so this is linear in the length.
    pub fn remove_first(&mut self) -> Option<T> {
        let item = self.storage.remove(&0)?;
        self.reindex();
        self.check_layout();
        Some(item)
    }

    /// Inserts `item` at the front and returns the new length.
    ///
    /// The item is parked at key `-1` and folded in by a reindex pass.
    pub fn insert_first(
        &mut self,
        item: T,
    ) -> usize {
        self.storage.insert(-1, item);
        self.reindex();
        self.check_layout();
        self.length
    }

    /// Inserts at the front only when `args` yields exactly one item.
    pub fn insert_first_args<I>(
        &mut self,
        args: I,
    ) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        match single(args) {
            Some(item) => self.insert_first(item),
            None => {
                debug!(
                    len = self.length,
                    "insert_first ignored: expected exactly one item"
                );
                self.length
            }
        }
    }
}

impl<T: Truthy> OrderedCollection<T> {
    /// Removes the first item unless it is missing or falsy.
    ///
    /// A falsy front item (`0`, `""`, `false`, ...) is left in place and
    /// `None` is returned, exactly as for an empty collection.
    pub fn remove_first_truthy(&mut self) -> Option<T> {
        match self.storage.get(&0) {
            Some(item) if item.is_truthy() => self.remove_first(),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Traversal
////////////////////////////////////////////////////////////////////////////////

impl<T> OrderedCollection<T> {
    /// Calls `callback(item, index)` for every item in index order.
    pub fn for_each<F>(
        &self,
        mut callback: F,
    ) where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.iter().enumerate() {
            callback(item, index);
        }
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error.
    pub fn try_for_each<F, E>(
        &self,
        mut callback: F,
    ) -> Result<(), E>
    where
        F: FnMut(&T, usize) -> Result<(), E>,
    {
        for (index, item) in self.iter().enumerate() {
            callback(item, index)?;
        }
        Ok(())
    }

    /// Builds a new collection from `callback(item, index)`.
    ///
    /// Returns `None` for an empty collection rather than an empty result.
    pub fn map<U, F>(
        &self,
        mut callback: F,
    ) -> Option<OrderedCollection<U>>
    where
        F: FnMut(&T, usize) -> U,
    {
        if self.is_empty() {
            return None;
        }
        let mut result = OrderedCollection::with_order(self.order);
        for (index, item) in self.iter().enumerate() {
            result.append(callback(item, index));
        }
        Some(result)
    }

    /// Like [`map`](Self::map), stopping at the first error.
    pub fn try_map<U, F, E>(
        &self,
        mut callback: F,
    ) -> Result<Option<OrderedCollection<U>>, E>
    where
        F: FnMut(&T, usize) -> Result<U, E>,
    {
        if self.is_empty() {
            return Ok(None);
        }
        let mut result = OrderedCollection::with_order(self.order);
        for (index, item) in self.iter().enumerate() {
            result.append(callback(item, index)?);
        }
        Ok(Some(result))
    }

    /// Folds the items with `callback(state, item, index)`.
    ///
    /// An empty collection yields `None`, not `initial`.
    pub fn reduce<S, F>(
        &self,
        mut callback: F,
        initial: S,
    ) -> Option<S>
    where
        F: FnMut(S, &T, usize) -> S,
    {
        if self.is_empty() {
            return None;
        }
        let mut state = initial;
        for (index, item) in self.iter().enumerate() {
            state = callback(state, item, index);
        }
        Some(state)
    }

    /// Like [`reduce`](Self::reduce), stopping at the first error.
    pub fn try_reduce<S, F, E>(
        &self,
        mut callback: F,
        initial: S,
    ) -> Result<Option<S>, E>
    where
        F: FnMut(S, &T, usize) -> Result<S, E>,
    {
        if self.is_empty() {
            return Ok(None);
        }
        let mut state = initial;
        for (index, item) in self.iter().enumerate() {
            state = callback(state, item, index)?;
        }
        Ok(Some(state))
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Collects clones of the items accepted by `callback`.
    ///
    /// Returns `None` for an empty collection; a collection where nothing
    /// passes yields an empty result instead.
    pub fn filter<F>(
        &self,
        mut callback: F,
    ) -> Option<OrderedCollection<T>>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return None;
        }
        let mut result = OrderedCollection::with_order(self.order);
        for item in self.iter().filter(|item| callback(*item)) {
            result.append(item.clone());
        }
        Some(result)
    }
}

/// Returns the only item of `args`, or `None` for zero or several.
fn single<T, I>(args: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(item), None) => Some(item),
        _ => None,
    }
}

////////////////////////////////////////////////////////////////////////////////
// Trait implementations
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedCollection<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            length: self.length,
            order: self.order,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedCollection<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedCollection<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedCollection<T> {}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage, self.length)
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
