use num_traits::Float;
use rayon::prelude::*;
use vsgauss_image::{Frame, Plane};

use super::kernels;
use crate::{
    border::clamp_to_edge,
    error::ImgprocError,
    parallel::{self, ExecutionStrategy},
};

/// Blur a plane with the fixed 3x3 gaussian kernel.
///
/// Every destination sample is the weighted sum of the 3x3 neighbourhood of
/// the same source coordinate divided by 16, with the weights
///
/// ```text
/// 1 2 1
/// 2 4 2
/// 1 2 1
/// ```
///
/// Neighbours outside the plane are clamped to the nearest edge sample.
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
/// * `strategy` - How the rows of `dst` are scheduled.
///
/// # Errors
///
/// Fails before writing anything if `src` and `dst` have different sizes or
/// the strategy is invalid.
///
/// # Example
///
/// ```
/// use vsgauss_image::Plane;
/// use vsgauss_imgproc::{filter::gaussian_blur3x3, parallel::ExecutionStrategy};
///
/// let src = Plane::new([1, 1].into(), vec![5.0f32]).unwrap();
/// let mut dst = Plane::from_size_val(src.size(), 0.0f32).unwrap();
///
/// gaussian_blur3x3(&src, &mut dst, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.as_slice(), &[5.0]);
/// ```
pub fn gaussian_blur3x3<T>(
    src: &Plane<T>,
    dst: &mut Plane<T>,
    strategy: ExecutionStrategy,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImgprocError::SizeMismatch(src.size(), dst.size()));
    }

    let (kernel, norm) = kernels::gaussian_kernel3::<T>()?;
    let (rows, cols) = (src.rows(), src.cols());
    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(dst.as_slice_mut(), cols, strategy, |r, dst_row| {
        let r = r as isize;
        let src_rows = [r - 1, r, r + 1].map(|y| {
            let y = clamp_to_edge(y, rows);
            &src_data[y * cols..(y + 1) * cols]
        });

        dst_row.iter_mut().enumerate().for_each(|(c, dst_pix)| {
            let c = c as isize;
            let src_cols = [c - 1, c, c + 1].map(|x| clamp_to_edge(x, cols));

            let mut sum = T::zero();
            for (src_row, kernel_row) in src_rows.iter().zip(kernel.iter()) {
                for (&x, &k) in src_cols.iter().zip(kernel_row.iter()) {
                    sum = sum + src_row[x] * k;
                }
            }
            *dst_pix = sum / norm;
        });
    })?;

    Ok(())
}

/// Blur a plane into a newly allocated plane of the same size.
///
/// The source is never modified and the result shares no memory with it.
///
/// # Example
///
/// ```
/// use vsgauss_image::Plane;
/// use vsgauss_imgproc::filter::convolve;
///
/// let src = Plane::from_size_val([4, 3].into(), 0.5f32).unwrap();
/// let dst = convolve(&src).unwrap();
///
/// assert_eq!(dst.size(), src.size());
/// assert!(dst.as_slice().iter().all(|&v| v == 0.5));
/// ```
pub fn convolve<T>(src: &Plane<T>) -> Result<Plane<T>, ImgprocError>
where
    T: Float + Send + Sync,
{
    let mut dst = Plane::from_size_val(src.size(), T::zero())?;
    gaussian_blur3x3(src, &mut dst, ExecutionStrategy::default())?;
    Ok(dst)
}

/// Blur every source plane into the destination plane with the same index.
///
/// Plane counts and all plane sizes are checked before any plane is blurred,
/// so on error no destination plane has been written. Planes are blurred
/// concurrently unless the strategy is [`ExecutionStrategy::Serial`].
pub fn gaussian_blur3x3_planes<T>(
    src: &[Plane<T>],
    dst: &mut [Plane<T>],
    strategy: ExecutionStrategy,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    if src.len() != dst.len() {
        return Err(ImgprocError::PlaneCountMismatch(src.len(), dst.len()));
    }

    if let Some((s, d)) = src.iter().zip(dst.iter()).find(|(s, d)| s.size() != d.size()) {
        return Err(ImgprocError::SizeMismatch(s.size(), d.size()));
    }

    // the local pool of a fixed strategy is installed once for the whole frame
    let row_strategy = match strategy {
        ExecutionStrategy::Fixed(_) => ExecutionStrategy::ParallelRows,
        other => other,
    };

    strategy.install(|| {
        if strategy.is_parallel() {
            src.par_iter()
                .zip(dst.par_iter_mut())
                .try_for_each(|(s, d)| gaussian_blur3x3(s, d, row_strategy))
        } else {
            src.iter()
                .zip(dst.iter_mut())
                .try_for_each(|(s, d)| gaussian_blur3x3(s, d, row_strategy))
        }
    })??;

    Ok(())
}

/// Blur every plane of a frame into a newly allocated frame.
///
/// All output planes are allocated before blurring starts. The output frame
/// keeps the plane sizes of the source and carries a copy of its properties.
///
/// # Example
///
/// ```
/// use vsgauss_image::{Frame, VideoFormat};
/// use vsgauss_imgproc::{filter::gaussian_blur3x3_frame, parallel::ExecutionStrategy};
///
/// let src = Frame::from_format(&VideoFormat::YUV420PS, [8, 4].into(), 1.0f32).unwrap();
/// let dst = gaussian_blur3x3_frame(&src, ExecutionStrategy::default()).unwrap();
///
/// assert_eq!(dst.num_planes(), 3);
/// assert_eq!(dst.plane(1).unwrap().size(), src.plane(1).unwrap().size());
/// ```
pub fn gaussian_blur3x3_frame<T>(
    src: &Frame<T>,
    strategy: ExecutionStrategy,
) -> Result<Frame<T>, ImgprocError>
where
    T: Float + Send + Sync,
{
    let mut planes = src
        .planes()
        .iter()
        .map(|p| Plane::from_size_val(p.size(), T::zero()))
        .collect::<Result<Vec<_>, _>>()?;

    gaussian_blur3x3_planes(src.planes(), &mut planes, strategy)?;

    Ok(Frame::new(planes)?.with_props(src.props().clone()))
}
