//! The bounded array, its capacity manager, and index-based mutation.
//!
//! [`LimitedVec`] owns one contiguous block of `Option<T>` slots. The block
//! length is the allocated capacity; the first `len` slots hold the logical
//! elements and every slot past `len` is kept empty.

use limvec_core::{GrowthPolicy, LimitedVecConfig, LimitedVecError};

/// A growable contiguous array with a hard element ceiling.
///
/// Behaves like a `Vec` for indexed access, but can never hold more than
/// `max_capacity` elements. Running into the ceiling is reported as `false`
/// from the capacity-sensitive operations ([`push`](Self::push),
/// [`add_all`](Self::add_all), [`insert`](Self::insert),
/// [`ensure_capacity`](Self::ensure_capacity),
/// [`provide_exact_extra_capacity`](Self::provide_exact_extra_capacity)).
/// Bad indices and ranges are reported as [`LimitedVecError`].
///
/// Invariant: `len <= current_capacity() <= max_capacity()`.
///
/// Not synchronized. Share across threads only behind external locking.
#[derive(Clone)]
pub struct LimitedVec<T> {
    /// Backing block. `slots.len()` is the allocated capacity.
    pub(crate) slots: Box<[Option<T>]>,
    /// Number of logical elements, all stored in `slots[..len]`.
    pub(crate) len: usize,
    max_capacity: usize,
    policy: GrowthPolicy,
}

impl<T> LimitedVec<T> {
    /// Create an empty array with the default ceiling and initial capacity
    /// (see [`LimitedVecConfig::DEFAULT_MAX_CAPACITY`] and
    /// [`LimitedVecConfig::DEFAULT_INITIAL_CAPACITY`]).
    pub fn new() -> Self {
        Self::from_valid_config(LimitedVecConfig::default())
    }

    /// Create an empty array with the given ceiling.
    ///
    /// The initial allocation is the default initial capacity clamped to
    /// `max_capacity`.
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self::from_valid_config(LimitedVecConfig::new(max_capacity))
    }

    /// Create an empty array with an explicit ceiling and initial allocation.
    ///
    /// Returns [`LimitedVecError::InvalidCapacity`] if
    /// `initial_capacity > max_capacity`.
    pub fn with_capacity(
        max_capacity: usize,
        initial_capacity: usize,
    ) -> Result<Self, LimitedVecError> {
        Self::from_config(LimitedVecConfig::new(max_capacity).with_initial_capacity(initial_capacity))
    }

    /// Create an empty array from a full config, validating it first.
    pub fn from_config(config: LimitedVecConfig) -> Result<Self, LimitedVecError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: LimitedVecConfig) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            len: 0,
            max_capacity: config.max_capacity,
            policy: config.policy,
        }
    }

    // ── Capacity manager ──────────────────────────────────────────

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The immutable element ceiling.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Length of the currently allocated block.
    pub fn current_capacity(&self) -> usize {
        self.slots.len()
    }

    /// How many more elements the ceiling admits: `max_capacity - len`.
    pub fn free_cells(&self) -> usize {
        self.max_capacity - self.len
    }

    /// The growth policy this array was built with.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Whether `extra` more elements fit with at least one cell to spare.
    ///
    /// Strict: true iff `max_capacity - len - extra > 0`, so an array that
    /// would be exactly full afterwards answers `false`.
    pub fn can_be_added(&self, extra: usize) -> bool {
        self.free_cells() > extra
    }

    /// Make room for `extra` more elements, growing by the policy if the
    /// current block is too small.
    ///
    /// Returns `false`, without touching the block, when `len + extra`
    /// would exceed the ceiling.
    pub fn ensure_capacity(&mut self, extra: usize) -> bool {
        if self.fits_allocated(extra) {
            return true;
        }
        if !self.fits_ceiling(extra) {
            self.log_rejection(extra);
            return false;
        }
        let required = self.len + extra;
        let target = self.policy.target_capacity(required, self.max_capacity);
        log::debug!(
            "growing storage {} -> {} slots (required {}, max {}, full extension: {})",
            self.slots.len(),
            target,
            required,
            self.max_capacity,
            target == self.max_capacity
        );
        self.reallocate(target);
        true
    }

    /// Like [`ensure_capacity`](Self::ensure_capacity), but when growth is
    /// needed the block grows to exactly `len + extra` with no headroom.
    ///
    /// Returns whether `extra` more elements are achievable under the
    /// ceiling, whether or not a reallocation happened.
    pub fn provide_exact_extra_capacity(&mut self, extra: usize) -> bool {
        if !self.fits_ceiling(extra) {
            self.log_rejection(extra);
            return false;
        }
        if !self.fits_allocated(extra) {
            let target = self.len + extra;
            log::debug!(
                "growing storage {} -> {} slots exactly (max {})",
                self.slots.len(),
                target,
                self.max_capacity
            );
            self.reallocate(target);
        }
        true
    }

    /// Shrink the block to exactly `len` slots.
    pub fn trim_to_size(&mut self) {
        if self.slots.len() != self.len {
            log::debug!("trimming storage {} -> {} slots", self.slots.len(), self.len);
            self.reallocate(self.len);
        }
    }

    fn fits_allocated(&self, extra: usize) -> bool {
        self.slots.len() - self.len >= extra
    }

    fn fits_ceiling(&self, extra: usize) -> bool {
        self.free_cells() >= extra
    }

    fn log_rejection(&self, extra: usize) {
        log::trace!(
            "rejecting {} extra cells: {} of {} in use",
            extra,
            self.len,
            self.max_capacity
        );
    }

    /// Move the elements into a new block of `capacity` slots, keeping
    /// every element at its index.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity <= self.max_capacity);
        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.resize_with(capacity, || None);
        self.slots = slots.into_boxed_slice();
        self.len = self.len.min(capacity);
    }

    // ── Positional access and mutation ────────────────────────────

    pub(crate) fn check_index(&self, index: usize) -> Result<(), LimitedVecError> {
        if index < self.len {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    pub(crate) fn out_of_bounds(&self, index: usize) -> LimitedVecError {
        LimitedVecError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    /// Fallback for an empty slot found below `len`.
    ///
    /// Unreachable while `slots[..len]` are all occupied; debug builds
    /// assert on it instead of returning.
    fn empty_slot(&self, index: usize) -> LimitedVecError {
        debug_assert!(
            index >= self.len,
            "slot {index} below len {} is empty",
            self.len
        );
        self.out_of_bounds(index)
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, LimitedVecError> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or_else(|| self.empty_slot(index))
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LimitedVecError> {
        self.check_index(index)?;
        if self.slots[index].is_none() {
            return Err(self.empty_slot(index));
        }
        let len = self.len;
        self.slots[index]
            .as_mut()
            .ok_or(LimitedVecError::IndexOutOfBounds { index, len })
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, LimitedVecError> {
        self.check_index(index)?;
        if self.slots[index].is_none() {
            return Err(self.empty_slot(index));
        }
        let len = self.len;
        self.slots[index]
            .replace(element)
            .ok_or(LimitedVecError::IndexOutOfBounds { index, len })
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.slots[..self.len].first().and_then(Option::as_ref)
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.slots[..self.len].last().and_then(Option::as_ref)
    }

    /// Append `element`.
    ///
    /// Returns `false` and drops `element` if the ceiling is reached.
    pub fn push(&mut self, element: T) -> bool {
        if !self.ensure_capacity(1) {
            return false;
        }
        self.slots[self.len] = Some(element);
        self.len += 1;
        true
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index` must name an existing element (`index < len`); appending goes
    /// through [`push`](Self::push). The index is checked before capacity,
    /// and `Ok(false)` means the ceiling was reached and nothing moved.
    ///
    /// O(len - index): elements are moved one at a time.
    pub fn insert(&mut self, index: usize, element: T) -> Result<bool, LimitedVecError> {
        self.check_index(index)?;
        if !self.ensure_capacity(1) {
            return Ok(false);
        }
        // Descending moves; the empty slot at `len` walks down to `index`.
        for i in (index + 1..=self.len).rev() {
            self.slots.swap(i, i - 1);
        }
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(true)
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// O(len - index): elements are moved one at a time.
    pub fn remove(&mut self, index: usize) -> Result<T, LimitedVecError> {
        self.check_index(index)?;
        self.take_and_shift(index)
            .ok_or_else(|| self.empty_slot(index))
    }

    /// Take the element at `index < len` and close the gap.
    ///
    /// Ascending moves over `[index + 1, len)` only; slot `len` is never
    /// read, so a completely full block is fine. The emptied slot ends up
    /// at `len - 1`, past the new end.
    pub(crate) fn take_and_shift(&mut self, index: usize) -> Option<T> {
        debug_assert!(index < self.len);
        let removed = self.slots[index].take()?;
        for i in index..self.len - 1 {
            self.slots.swap(i, i + 1);
        }
        self.len -= 1;
        Some(removed)
    }

    /// Drop every element. The block keeps its size.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Borrowing iterator over the logical elements, in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T> Default for LimitedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
