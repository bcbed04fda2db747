use std::sync::Arc;

use log::{debug, info};
use vsgauss_image::Frame;
use vsgauss_imgproc::{filter::gaussian_blur3x3_frame, parallel::ExecutionStrategy};

use crate::{
    error::FilterError,
    map::{Property, PropertyMap},
    node::{FilterMode, FrameSource, Node, VideoInfo},
};

/// A node blurring every plane of its input clip with the fixed 3x3 kernel.
///
/// Only constant format clips with 32 bit float samples are accepted. The
/// dimensions may vary from frame to frame; every frame is blurred at its
/// own size.
pub struct GaussBlur {
    node: Node,
    vi: VideoInfo,
    strategy: ExecutionStrategy,
}

impl GaussBlur {
    /// Name the filter is registered under.
    pub const NAME: &'static str = "GaussBlur";

    /// Argument signature of the filter.
    pub const SIGNATURE: &'static str = "clip:clip;";

    /// Create the filter on top of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedFormat`] if the clip has a variable
    /// format or samples other than 32 bit floats.
    pub fn new(node: Node) -> Result<Self, FilterError> {
        let vi = *node.video_info();

        let Some(format) = vi.format else {
            return Err(FilterError::UnsupportedFormat(
                "variable format clips are not supported".to_string(),
            ));
        };

        if !format.is_float32() {
            return Err(FilterError::UnsupportedFormat(format!(
                "{format} has {}-bit {:?} samples, only 32-bit float is supported",
                format.bits_per_sample, format.sample_type
            )));
        }

        match vi.frame_size() {
            Some(size) => info!("{}: {} {}, {} frames", Self::NAME, size, format, vi.num_frames),
            None => info!(
                "{}: variable size {}, {} frames",
                Self::NAME,
                format,
                vi.num_frames
            ),
        }

        Ok(Self {
            node,
            vi,
            strategy: ExecutionStrategy::default(),
        })
    }

    /// Set how the planes and rows of each frame are scheduled.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create the filter from host arguments.
    ///
    /// Reads the input node from `clip` and returns the filter node under `clip`.
    pub fn create(args: &PropertyMap) -> Result<PropertyMap, FilterError> {
        let filter = Self::new(args.get_clip("clip")?)?;

        let mut out = PropertyMap::new();
        out.set("clip", Property::Clip(Arc::new(filter)));
        Ok(out)
    }
}

impl FrameSource for GaussBlur {
    fn video_info(&self) -> &VideoInfo {
        &self.vi
    }

    fn filter_mode(&self) -> FilterMode {
        FilterMode::Parallel
    }

    fn get_frame(&self, n: usize) -> Result<Arc<Frame<f32>>, FilterError> {
        debug!("{}: requesting frame {}", Self::NAME, n);

        let src = self.node.get_frame(n)?;
        self.vi.check_frame(&src)?;

        let dst = gaussian_blur3x3_frame(&src, self.strategy)?;

        Ok(Arc::new(dst))
    }
}

#[cfg(test)]
mod tests {
    use vsgauss_image::{Plane, VideoFormat};

    use super::*;
    use crate::clip::MemoryClip;

    #[test]
    fn gauss_blur_impulse() -> Result<(), FilterError> {
        #[rustfmt::skip]
        let plane = Plane::new(
            [3, 3].into(),
            vec![
                0.0f32, 0.0, 0.0,
                0.0, 16.0, 0.0,
                0.0, 0.0, 0.0,
            ],
        )?;
        let frame = Frame::new(vec![plane])?;
        let clip = MemoryClip::new(VideoFormat::GRAYS, vec![frame])?;

        let filter = GaussBlur::new(Arc::new(clip))?;
        let out = filter.get_frame(0)?;

        #[rustfmt::skip]
        let expected = [
            1.0, 2.0, 1.0,
            2.0, 4.0, 2.0,
            1.0, 2.0, 1.0,
        ];
        assert_eq!(out.plane(0)?.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn gauss_blur_rejects_integer_formats() -> Result<(), FilterError> {
        for format in [VideoFormat::GRAY8, VideoFormat::GRAY16, VideoFormat::YUV420P8] {
            let clip = MemoryClip::blank(format, [4, 4].into(), 1, 0.0)?;
            assert!(matches!(
                GaussBlur::new(Arc::new(clip)),
                Err(FilterError::UnsupportedFormat(_))
            ));
        }
        Ok(())
    }

    #[test]
    fn gauss_blur_keeps_video_info() -> Result<(), FilterError> {
        let clip = MemoryClip::blank(VideoFormat::YUV420PS, [8, 6].into(), 5, 0.5)?
            .with_fps(25, 1);
        let info = *clip.video_info();

        let filter = GaussBlur::new(Arc::new(clip))?.with_strategy(ExecutionStrategy::Serial);
        assert_eq!(filter.video_info(), &info);
        assert_eq!(filter.filter_mode(), FilterMode::Parallel);
        Ok(())
    }

    #[test]
    fn gauss_blur_propagates_upstream_errors() -> Result<(), FilterError> {
        let clip = MemoryClip::blank(VideoFormat::GRAYS, [4, 4].into(), 2, 0.0)?;
        let filter = GaussBlur::new(Arc::new(clip))?;
        assert!(matches!(
            filter.get_frame(2),
            Err(FilterError::FrameOutOfRange(2, 2))
        ));
        Ok(())
    }

    #[test]
    fn gauss_blur_create() -> Result<(), FilterError> {
        let clip = MemoryClip::blank(VideoFormat::RGBS, [4, 4].into(), 3, 1.0)?;

        let mut args = PropertyMap::new();
        args.set("clip", Property::Clip(Arc::new(clip)));

        let out = GaussBlur::create(&args)?;
        let node = out.get_clip("clip")?;
        assert_eq!(node.video_info().num_frames, 3);
        assert_eq!(node.get_frame(1)?.num_planes(), 3);
        Ok(())
    }
}
