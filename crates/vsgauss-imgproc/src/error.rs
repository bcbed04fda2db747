use vsgauss_image::{ImageError, PlaneSize};

use crate::parallel::ParallelError;

/// An error type for the imgproc module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// Error coming from the image types.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when the execution strategy cannot be honoured.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Error when source and destination sizes differ.
    #[error("Source size ({0}) does not match destination size ({1})")]
    SizeMismatch(PlaneSize, PlaneSize),

    /// Error when source and destination frames have a different plane count.
    #[error("Source has {0} planes but destination has {1}")]
    PlaneCountMismatch(usize, usize),
}
