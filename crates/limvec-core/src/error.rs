//! Error types for limvec.
//!
//! Only programmer errors are represented here: bad indices, bad ranges,
//! bad construction parameters. Running out of room under the ceiling is
//! not an error; capacity-sensitive operations report it as `false`.

use thiserror::Error;

/// Errors from bounded-array operations and from config validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LimitedVecError {
    /// An index outside `0..len` was supplied.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of logical elements at the time of the call.
        len: usize,
    },
    /// A half-open range whose end does not lie after its start.
    #[error("invalid range {from}..{to}: end must be greater than start")]
    InvalidRange {
        /// Inclusive start.
        from: usize,
        /// Exclusive end.
        to: usize,
    },
    /// Initial capacity larger than the ceiling.
    #[error(
        "invalid capacity: initial capacity {initial_capacity} exceeds max capacity {max_capacity}"
    )]
    InvalidCapacity {
        /// The requested ceiling.
        max_capacity: usize,
        /// The requested initial allocation.
        initial_capacity: usize,
    },
    /// Growth policy ratios outside their accepted domain.
    #[error("invalid growth policy: {reason}")]
    InvalidPolicy {
        /// Which ratio was rejected and why.
        reason: String,
    },
    /// A destination slice cannot hold every logical element.
    #[error("destination slice too short: need {required} slots, got {actual}")]
    SliceTooShort {
        /// Number of logical elements to copy.
        required: usize,
        /// Length of the slice provided.
        actual: usize,
    },
}
