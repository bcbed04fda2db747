use crate::error::ImageError;

/// Plane size in samples
///
/// A struct to represent the size of a plane in samples.
///
/// # Examples
///
/// ```
/// use vsgauss_image::PlaneSize;
///
/// let plane_size = PlaneSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(plane_size.width, 10);
/// assert_eq!(plane_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneSize {
    /// Width of the plane in samples
    pub width: usize,
    /// Height of the plane in samples
    pub height: usize,
}

impl PlaneSize {
    /// Number of samples covered by the plane, `None` if it overflows `usize`.
    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Number of samples of a valid plane of this size.
    ///
    /// # Errors
    ///
    /// Fails if a dimension is zero or the sample count overflows `usize`.
    pub fn checked_area(&self) -> Result<usize, ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::InvalidPlaneSize(self.width, self.height));
        }
        self.area()
            .ok_or(ImageError::PlaneTooLarge(self.width, self.height))
    }
}

impl std::fmt::Display for PlaneSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PlaneSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for PlaneSize {
    fn from(size: [usize; 2]) -> Self {
        PlaneSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A single channel of two dimensional sample data.
///
/// Samples are stored row-major and contiguous, so the sample at `(x, y)`
/// lives at index `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    size: PlaneSize,
    data: Vec<T>,
}

impl<T> Plane<T> {
    /// Create a new plane from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the plane in samples.
    /// * `data` - The row-major sample data of the plane.
    ///
    /// # Errors
    ///
    /// If any dimension is zero, the sample count overflows or the length of
    /// the data does not match the plane size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsgauss_image::{Plane, PlaneSize};
    ///
    /// let plane = Plane::<f32>::new(
    ///     PlaneSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0f32; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(plane.width(), 10);
    /// assert_eq!(plane.height(), 20);
    /// ```
    pub fn new(size: PlaneSize, data: Vec<T>) -> Result<Self, ImageError> {
        let area = size.checked_area()?;

        if data.len() != area {
            return Err(ImageError::InvalidDataLength(data.len(), area));
        }

        Ok(Self { size, data })
    }

    /// Create a new plane with every sample set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsgauss_image::Plane;
    ///
    /// let plane = Plane::from_size_val([4, 3].into(), 0.5f32).unwrap();
    ///
    /// assert_eq!(plane.get([2, 3]), Some(&0.5));
    /// ```
    pub fn from_size_val(size: PlaneSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let area = size.checked_area()?;
        Self::new(size, vec![val; area])
    }

    /// Create a new plane by evaluating `f(x, y)` at every coordinate.
    pub fn from_size_fn(
        size: PlaneSize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, ImageError> {
        let mut data = Vec::with_capacity(size.checked_area()?);
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self::new(size, data)
    }

    /// Get the size of the plane in samples.
    pub fn size(&self) -> PlaneSize {
        self.size
    }

    /// Get the width of the plane in samples.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the plane in samples.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the plane.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the plane.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the sample data as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the sample data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the sample at `[y, x]`, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        let [y, x] = index;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.data.get(y * self.width() + x)
    }

    /// Get a mutable reference to the sample at `[y, x]`.
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        let [y, x] = index;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let width = self.width();
        self.data.get_mut(y * width + x)
    }

    /// Cast the samples to a different type and scale them.
    ///
    /// # Errors
    ///
    /// If a sample cannot be represented in the target type, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsgauss_image::Plane;
    ///
    /// let plane = Plane::new([2, 1].into(), vec![0u8, 255]).unwrap();
    /// let plane_f32 = plane.cast_and_scale::<f32>(1. / 255.).unwrap();
    ///
    /// assert_eq!(plane_f32.get([0, 1]), Some(&1.0));
    /// ```
    pub fn cast_and_scale<U>(&self, scale: U) -> Result<Plane<U>, ImageError>
    where
        T: num_traits::NumCast + Copy,
        U: num_traits::NumCast + std::ops::Mul<Output = U> + Copy,
    {
        let data = self
            .data
            .iter()
            .map(|&x| {
                let xu = U::from(x).ok_or(ImageError::CastError)?;
                Ok(xu * scale)
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Plane::new(self.size, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_size() {
        let size = PlaneSize {
            width: 10,
            height: 20,
        };
        assert_eq!(size.area(), Some(200));
        assert_eq!(size.checked_area(), Ok(200));
        assert_eq!(PlaneSize::from([10, 20]), size);
    }

    #[test]
    fn plane_smoke() -> Result<(), ImageError> {
        let plane = Plane::<u8>::new([10, 20].into(), vec![0u8; 10 * 20])?;
        assert_eq!(plane.size().width, 10);
        assert_eq!(plane.size().height, 20);
        assert_eq!(plane.cols(), 10);
        assert_eq!(plane.rows(), 20);
        Ok(())
    }

    #[test]
    fn plane_invalid_size() {
        let res = Plane::<f32>::new([0, 4].into(), vec![]);
        assert_eq!(res, Err(ImageError::InvalidPlaneSize(0, 4)));

        let res = Plane::<f32>::from_size_val([3, 0].into(), 1.0);
        assert_eq!(res, Err(ImageError::InvalidPlaneSize(3, 0)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn plane_too_large() {
        let size = PlaneSize::from([1 << 32, 1 << 32]);
        assert_eq!(size.area(), None);

        let res = Plane::<u8>::from_size_val(size, 0);
        assert_eq!(res, Err(ImageError::PlaneTooLarge(1 << 32, 1 << 32)));

        let res = Plane::<u8>::new(size, vec![]);
        assert_eq!(res, Err(ImageError::PlaneTooLarge(1 << 32, 1 << 32)));

        let res = Plane::<u8>::from_size_fn(size, |_, _| 0);
        assert_eq!(res, Err(ImageError::PlaneTooLarge(1 << 32, 1 << 32)));
    }

    #[test]
    fn plane_too_large_any_width() {
        let size = PlaneSize::from([usize::MAX, 2]);
        assert_eq!(
            Plane::<f32>::from_size_val(size, 0.0),
            Err(ImageError::PlaneTooLarge(usize::MAX, 2))
        );
    }

    #[test]
    fn plane_invalid_length() {
        let res = Plane::<f32>::new([2, 2].into(), vec![0.0; 3]);
        assert_eq!(res, Err(ImageError::InvalidDataLength(3, 4)));
    }

    #[test]
    fn plane_from_size_fn() -> Result<(), ImageError> {
        let plane = Plane::from_size_fn([3, 2].into(), |x, y| (y * 10 + x) as f32)?;
        assert_eq!(plane.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(plane.get([1, 2]), Some(&12.0));
        assert_eq!(plane.get([2, 0]), None);
        Ok(())
    }

    #[test]
    fn plane_get_mut() -> Result<(), ImageError> {
        let mut plane = Plane::from_size_val([2, 2].into(), 0.0f32)?;
        if let Some(v) = plane.get_mut([1, 0]) {
            *v = 3.0;
        }
        assert_eq!(plane.as_slice(), &[0.0, 0.0, 3.0, 0.0]);
        assert!(plane.get_mut([0, 2]).is_none());
        Ok(())
    }

    #[test]
    fn plane_cast_and_scale() -> Result<(), ImageError> {
        let plane = Plane::new([3, 1].into(), vec![0u8, 51, 255])?;
        let plane_f32 = plane.cast_and_scale::<f32>(1. / 255.)?;
        approx::assert_relative_eq!(plane_f32.as_slice()[1], 0.2, epsilon = 1e-6);
        assert_eq!(plane_f32.as_slice()[2], 1.0);

        let plane = Plane::new([1, 1].into(), vec![-1.0f32])?;
        assert_eq!(plane.cast_and_scale::<u8>(1), Err(ImageError::CastError));
        Ok(())
    }
}
