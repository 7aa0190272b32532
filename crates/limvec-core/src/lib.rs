//! Core types for the limvec bounded array.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! pieces that the container in `limvec` is parameterized by and reports
//! through: the error type, the capacity growth policy, and the
//! construction config.
//!
//! The growth policy lives here rather than next to the container so it
//! can be exercised in isolation: given a required occupancy and a
//! ceiling, [`GrowthPolicy::target_capacity`] is a pure function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod policy;

pub use config::LimitedVecConfig;
pub use error::LimitedVecError;
pub use policy::GrowthPolicy;
