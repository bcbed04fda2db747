use vsgauss_image::ImageError;
use vsgauss_imgproc::ImgprocError;

use crate::signature::ArgKind;

/// An error type for the plugin module.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// A required argument was not supplied.
    #[error("Argument '{0}' is required")]
    MissingArgument(String),

    /// An argument was supplied with the wrong kind.
    #[error("Argument '{key}' must be a {expected}, got a {found}")]
    WrongArgumentType {
        /// The argument name.
        key: String,
        /// The kind declared by the signature.
        expected: ArgKind,
        /// The kind actually supplied.
        found: ArgKind,
    },

    /// An argument was supplied that the signature does not declare.
    #[error("Function '{0}' does not take argument '{1}'")]
    UnknownArgument(String, String),

    /// The argument signature could not be parsed.
    #[error("Invalid signature '{0}': {1}")]
    InvalidSignature(String, String),

    /// No function with the given name is registered.
    #[error("Function '{0}' not found")]
    FunctionNotFound(String),

    /// A function with the given name is already registered.
    #[error("Function '{0}' is already registered")]
    DuplicateFunction(String),

    /// The plugin no longer accepts registrations.
    #[error("Plugin '{0}' is read only")]
    ReadOnlyPlugin(String),

    /// The clip format cannot be processed by the filter.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A clip without frames was constructed.
    #[error("A clip must contain at least one frame")]
    EmptyClip,

    /// The requested frame index does not exist.
    #[error("Frame index ({0}) is out of range ({1})")]
    FrameOutOfRange(usize, usize),

    /// A frame does not match the format declared by its clip.
    #[error("Frame does not match the clip format: {0}")]
    FrameMismatch(String),

    /// Error coming from the image types.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error coming from the blur itself.
    #[error(transparent)]
    Imgproc(#[from] ImgprocError),
}
