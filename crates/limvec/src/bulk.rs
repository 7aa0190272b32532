//! Equality scans, bulk mutation, and sorting.
//!
//! Everything here is a linear pass (or, for sorting, a quadratic one)
//! over the logical elements, built on the single-element moves in
//! [`crate::vec`].

use std::cmp::Ordering;

use crate::vec::LimitedVec;

impl<T: PartialEq> LimitedVec<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|e| e == value)
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|e| e == value)
    }

    /// Index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        (0..self.len)
            .rev()
            .find(|&i| self.slots[i].as_ref() == Some(value))
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.take_and_shift(index).is_some(),
            None => false,
        }
    }

    /// Remove every element that appears in `values`.
    /// Returns whether anything was removed.
    pub fn remove_all(&mut self, values: &[T]) -> bool {
        self.remove_where(|e| values.contains(e))
    }

    /// Remove every element that does not appear in `values`.
    /// Returns whether anything was removed.
    pub fn retain_all(&mut self, values: &[T]) -> bool {
        self.remove_where(|e| !values.contains(e))
    }
}

impl<T> LimitedVec<T> {
    /// Walk from the back so removals never shift an unvisited element.
    fn remove_where<F>(&mut self, mut matches: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut changed = false;
        for i in (0..self.len).rev() {
            if self.slots[i].as_ref().is_some_and(&mut matches) {
                self.take_and_shift(i);
                changed = true;
            }
        }
        changed
    }

    /// Append every value, or none of them.
    ///
    /// Room for all `values.len()` elements is requested in one capacity
    /// check; on `false` the array is untouched.
    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        if !self.ensure_capacity(count) {
            return false;
        }
        for value in values.take(count) {
            self.slots[self.len] = Some(value);
            self.len += 1;
        }
        true
    }

    /// Replace every element with `transform(element)`, in place.
    pub fn replace_all<F>(&mut self, mut transform: F)
    where
        F: FnMut(T) -> T,
    {
        for slot in &mut self.slots[..self.len] {
            *slot = slot.take().map(&mut transform);
        }
    }

    /// Bubble sort by `compare`.
    ///
    /// Each pass walks the unsorted prefix and swaps adjacent pairs for
    /// which `compare` returns [`Ordering::Greater`]. O(len²) comparisons,
    /// stable, in place.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for end in (1..self.len).rev() {
            for j in 0..end {
                let out_of_order = match (&self.slots[j], &self.slots[j + 1]) {
                    (Some(a), Some(b)) => compare(a, b) == Ordering::Greater,
                    _ => false,
                };
                if out_of_order {
                    self.slots.swap(j, j + 1);
                }
            }
        }
    }

    /// Bubble sort by key.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }
}

impl<T: Ord> LimitedVec<T> {
    /// Bubble sort in natural order.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}
