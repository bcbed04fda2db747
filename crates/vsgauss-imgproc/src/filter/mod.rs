//! Filter operations
//!
//! This module provides the fixed 3x3 gaussian blur for planes and frames.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
