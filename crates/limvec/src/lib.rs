//! Growable contiguous array with a hard, caller-specified element ceiling.
//!
//! [`LimitedVec`] gives `Vec`-like O(1) indexed access and amortized
//! growth, but refuses to grow past `max_capacity` elements. It is meant
//! for places where unbounded list growth is not acceptable: memory
//! ceilings, per-tenant quotas, admission control.
//!
//! # Architecture
//!
//! ```text
//! LimitedVec<T>
//! ├── slots: Box<[Option<T>]>   (allocated block; len() == current capacity)
//! ├── len                      (logical element count)
//! ├── max_capacity             (immutable ceiling)
//! └── GrowthPolicy             (headroom ratio, full-extension threshold)
//! ```
//!
//! Every operation goes through one of two services:
//!
//! - **Capacity management** (`ensure_capacity`,
//!   `provide_exact_extra_capacity`, `trim_to_size`): decides when and how
//!   far to reallocate the block, never past the ceiling.
//! - **Positional mutation** (`insert`, `remove`, the bulk operations):
//!   element-by-element shifts inside the block, O(n) per call.
//!
//! # Two failure channels
//!
//! - Hitting the ceiling is expected and non-fatal. `push`, `add_all`,
//!   `ensure_capacity`, `provide_exact_extra_capacity` return `false`;
//!   `insert` returns `Ok(false)`. Nothing is modified.
//! - Programmer errors (bad index, bad range, bad construction
//!   parameters) return [`LimitedVecError`].
//!
//! ```
//! use limvec::LimitedVec;
//!
//! let mut v = LimitedVec::with_capacity(3, 0).unwrap();
//! assert!(v.push(1));
//! assert!(v.push(2));
//! assert!(v.push(3));
//! assert!(!v.push(4));
//! assert_eq!(v.to_string(), "[1, 2, 3]");
//! ```
//!
//! Not thread-safe; wrap in a lock if shared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bulk;
mod convert;
pub mod vec;

pub use limvec_core::{GrowthPolicy, LimitedVecConfig, LimitedVecError};
pub use vec::LimitedVec;
