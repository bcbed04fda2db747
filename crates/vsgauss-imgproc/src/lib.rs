#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling for neighbourhood reads.
pub mod border;

/// Error types for the imgproc module.
pub mod error;

/// image filtering module.
pub mod filter;

/// module containing parallization utilities.
pub mod parallel;

pub use crate::error::ImgprocError;
