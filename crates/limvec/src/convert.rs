//! Copies out of the array, and text rendering.
//!
//! Every copy here is independent of the array: later mutation of the
//! array never shows through, and vice versa. Elements are cloned, so a
//! handle type such as `Rc<U>` is shared rather than deep-copied.

use std::fmt;

use limvec_core::LimitedVecError;

use crate::vec::LimitedVec;

impl<T: Clone> LimitedVec<T> {
    /// The logical elements, in order, as a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Clone the logical elements into the front of `out`.
    ///
    /// Returns how many were written (always `len()`). Slots of `out` past
    /// that are left as they were. Fails with
    /// [`LimitedVecError::SliceTooShort`] if `out` is shorter than `len()`.
    pub fn copy_to_slice(&self, out: &mut [T]) -> Result<usize, LimitedVecError> {
        if out.len() < self.len {
            return Err(LimitedVecError::SliceTooShort {
                required: self.len,
                actual: out.len(),
            });
        }
        for (dst, src) in out.iter_mut().zip(self.iter()) {
            *dst = src.clone();
        }
        Ok(self.len)
    }

    /// Build a collection with `factory(len())` and extend it with the
    /// logical elements, in order.
    pub fn to_array_with<C, F>(&self, factory: F) -> C
    where
        C: Extend<T>,
        F: FnOnce(usize) -> C,
    {
        let mut out = factory(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Independent copy of the elements in `from..to`.
    ///
    /// `from` and `to - 1` must both be valid indices, and `to` must be
    /// greater than `from`. Never a view: the returned `Vec` is unaffected
    /// by later changes to the array.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Vec<T>, LimitedVecError> {
        self.check_index(from)?;
        let last = to
            .checked_sub(1)
            .ok_or(LimitedVecError::InvalidRange { from, to })?;
        self.check_index(last)?;
        if to <= from {
            return Err(LimitedVecError::InvalidRange { from, to });
        }
        Ok(self.slots[from..to].iter().flatten().cloned().collect())
    }
}

impl<T: fmt::Display> fmt::Display for LimitedVec<T> {
    /// `[e1, e2, ..., en]`, or `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LimitedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equal when the logical contents are equal. Capacity, ceiling and policy
/// are not compared.
impl<T: PartialEq> PartialEq for LimitedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LimitedVec<T> {}
