/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a plane has a zero dimension.
    #[error("Invalid plane size ({0}x{1}), width and height must be at least 1")]
    InvalidPlaneSize(usize, usize),

    /// Error when the sample count of a plane overflows `usize`.
    #[error("Plane size ({0}x{1}) is too large")]
    PlaneTooLarge(usize, usize),

    /// Error when the data length does not match the plane size.
    #[error("Data length ({0}) does not match the plane size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a frame is built without any plane.
    #[error("A frame must contain at least one plane")]
    EmptyFrame,

    /// Error when the plane index is out of bounds.
    #[error("Plane index ({0}) is out of bounds ({1})")]
    PlaneIndexOutOfBounds(usize, usize),

    /// Error when a sample cannot be cast to the target type.
    #[error("Failed to cast sample")]
    CastError,
}
