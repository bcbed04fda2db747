#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use vsgauss_image as image;

#[doc(inline)]
pub use vsgauss_imgproc as imgproc;

#[doc(inline)]
pub use vsgauss_plugin as plugin;
