use std::collections::BTreeMap;

use crate::{
    error::ImageError,
    format::VideoFormat,
    plane::{Plane, PlaneSize},
};

/// A single frame property value.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameProp {
    /// Integer property.
    Int(i64),
    /// Floating point property.
    Float(f64),
    /// Arbitrary string data.
    Data(String),
}

/// Properties attached to a frame, keyed by name.
pub type FrameProps = BTreeMap<String, FrameProp>;

/// A video frame: an ordered, non-empty sequence of planes plus properties.
///
/// Planes may have different sizes, e.g. subsampled chroma planes.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    planes: Vec<Plane<T>>,
    props: FrameProps,
}

impl<T> Frame<T> {
    /// Create a new frame from its planes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyFrame`] if `planes` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsgauss_image::{Frame, Plane};
    ///
    /// let luma = Plane::from_size_val([4, 4].into(), 0f32).unwrap();
    /// let frame = Frame::new(vec![luma]).unwrap();
    ///
    /// assert_eq!(frame.num_planes(), 1);
    /// ```
    pub fn new(planes: Vec<Plane<T>>) -> Result<Self, ImageError> {
        if planes.is_empty() {
            return Err(ImageError::EmptyFrame);
        }
        Ok(Self {
            planes,
            props: FrameProps::new(),
        })
    }

    /// Create a frame laid out according to `format`, every sample set to `val`.
    ///
    /// # Arguments
    ///
    /// * `format` - The video format, which decides the plane count and subsampling.
    /// * `size` - The size of the first plane.
    /// * `val` - The initial sample value.
    pub fn from_format(format: &VideoFormat, size: PlaneSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let planes = (0..format.num_planes)
            .map(|i| {
                let plane_size = format
                    .plane_size(i, size)
                    .ok_or(ImageError::PlaneIndexOutOfBounds(i, format.num_planes))?;
                Plane::from_size_val(plane_size, val.clone())
            })
            .collect::<Result<Vec<_>, ImageError>>()?;
        Self::new(planes)
    }

    /// Attach properties to the frame, replacing the existing ones.
    pub fn with_props(mut self, props: FrameProps) -> Self {
        self.props = props;
        self
    }

    /// Get the number of planes.
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    /// Get the size of the first plane.
    pub fn size(&self) -> PlaneSize {
        self.planes[0].size()
    }

    /// Get a plane by index.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PlaneIndexOutOfBounds`] if `index` is out of range.
    pub fn plane(&self, index: usize) -> Result<&Plane<T>, ImageError> {
        self.planes
            .get(index)
            .ok_or(ImageError::PlaneIndexOutOfBounds(index, self.planes.len()))
    }

    /// Get a mutable plane by index.
    pub fn plane_mut(&mut self, index: usize) -> Result<&mut Plane<T>, ImageError> {
        let num_planes = self.planes.len();
        self.planes
            .get_mut(index)
            .ok_or(ImageError::PlaneIndexOutOfBounds(index, num_planes))
    }

    /// Get all planes in order.
    pub fn planes(&self) -> &[Plane<T>] {
        &self.planes
    }

    /// Get the frame properties.
    pub fn props(&self) -> &FrameProps {
        &self.props
    }

    /// Get the frame properties mutably.
    pub fn props_mut(&mut self) -> &mut FrameProps {
        &mut self.props
    }

    /// Consume the frame and return its planes and properties.
    pub fn into_parts(self) -> (Vec<Plane<T>>, FrameProps) {
        (self.planes, self.props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_empty() {
        assert_eq!(Frame::<f32>::new(vec![]), Err(ImageError::EmptyFrame));
    }

    #[test]
    fn frame_from_format() -> Result<(), ImageError> {
        let frame = Frame::from_format(&VideoFormat::YUV420PS, [8, 6].into(), 0.25f32)?;
        assert_eq!(frame.num_planes(), 3);
        assert_eq!(frame.size(), PlaneSize::from([8, 6]));
        assert_eq!(frame.plane(1)?.size(), PlaneSize::from([4, 3]));
        assert_eq!(frame.plane(2)?.size(), PlaneSize::from([4, 3]));
        assert!(frame.plane(2)?.as_slice().iter().all(|&v| v == 0.25));
        assert_eq!(
            frame.plane(3).err(),
            Some(ImageError::PlaneIndexOutOfBounds(3, 3))
        );
        Ok(())
    }

    #[test]
    fn frame_props() -> Result<(), ImageError> {
        let mut props = FrameProps::new();
        props.insert("_DurationNum".to_string(), FrameProp::Int(1));
        props.insert("_DurationDen".to_string(), FrameProp::Int(24));

        let mut frame = Frame::from_format(&VideoFormat::GRAYS, [2, 2].into(), 0f32)?
            .with_props(props.clone());
        assert_eq!(frame.props(), &props);

        frame
            .props_mut()
            .insert("_Comment".to_string(), FrameProp::Data("blur".to_string()));
        assert_eq!(frame.props().len(), 3);

        let (planes, props) = frame.into_parts();
        assert_eq!(planes.len(), 1);
        assert_eq!(props.get("_DurationDen"), Some(&FrameProp::Int(24)));
        Ok(())
    }

    #[test]
    fn frame_plane_mut() -> Result<(), ImageError> {
        let mut frame = Frame::from_format(&VideoFormat::RGBS, [2, 1].into(), 0f32)?;
        frame.plane_mut(2)?.as_slice_mut()[1] = 1.0;
        assert_eq!(frame.plane(2)?.as_slice(), &[0.0, 1.0]);
        assert_eq!(frame.plane(0)?.as_slice(), &[0.0, 0.0]);
        assert!(frame.plane_mut(3).is_err());
        Ok(())
    }
}
