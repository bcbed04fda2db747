#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the image module.
pub mod error;

/// Video formats and per-plane geometry.
pub mod format;

/// Frames made of planes plus their properties.
pub mod frame;

/// Single channel sample planes.
pub mod plane;

pub use crate::error::ImageError;
pub use crate::format::{ColorFamily, SampleType, VideoFormat};
pub use crate::frame::{Frame, FrameProp, FrameProps};
pub use crate::plane::{Plane, PlaneSize};
