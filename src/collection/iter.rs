use std::iter::FusedIterator;

use rustc_hash::FxHashMap;

/// Borrowing iterator over the items of an
/// [`OrderedCollection`](super::OrderedCollection) in index order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    storage: &'a FxHashMap<i64, T>,
    front: usize,
    back: usize,
}

/// Owning iterator over the items of an
/// [`OrderedCollection`](super::OrderedCollection) in index order.
#[derive(Debug)]
pub struct IntoIter<T> {
    storage: FxHashMap<i64, T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        storage: &'a FxHashMap<i64, T>,
        len: usize,
    ) -> Self {
        Self {
            storage,
            front: 0,
            back: len,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(
        storage: FxHashMap<i64, T>,
        len: usize,
    ) -> Self {
        Self {
            storage,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.storage.get(&(self.front as i64));
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.storage.get(&(self.back as i64))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.storage.remove(&(self.front as i64));
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.storage.remove(&(self.back as i64))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
