use num_traits::{Float, NumCast};
use vsgauss_image::ImageError;

/// Weights of the 3x3 gaussian kernel, row-major with the top-left neighbour first.
pub const GAUSSIAN_KERNEL3: [[u8; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Sum of the weights of [`GAUSSIAN_KERNEL3`], used as the normalization divisor.
pub const GAUSSIAN_KERNEL3_NORM: u8 = 16;

/// Create the 3x3 gaussian kernel in the sample type `T`.
///
/// # Returns
///
/// The kernel weights and their sum.
///
/// # Errors
///
/// Fails if a weight cannot be represented in `T`.
pub fn gaussian_kernel3<T: Float>() -> Result<([[T; 3]; 3], T), ImageError> {
    let weight = |w: u8| <T as NumCast>::from(w).ok_or(ImageError::CastError);

    let mut kernel = [[T::zero(); 3]; 3];
    for (dst_row, src_row) in kernel.iter_mut().zip(GAUSSIAN_KERNEL3.iter()) {
        for (dst, &w) in dst_row.iter_mut().zip(src_row.iter()) {
            *dst = weight(w)?;
        }
    }

    Ok((kernel, weight(GAUSSIAN_KERNEL3_NORM)?))
}
