use std::sync::Arc;

use vsgauss_image::{Frame, PlaneSize, VideoFormat};

use crate::error::FilterError;

/// How the host may schedule frame requests to a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Frames may be requested concurrently from any thread.
    #[default]
    Parallel,
    /// Frames are produced one at a time in request order.
    Serial,
}

/// Static description of the frames a node produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoInfo {
    /// The frame format, `None` when it varies from frame to frame.
    pub format: Option<VideoFormat>,
    /// Width of the first plane, 0 when it varies from frame to frame.
    pub width: usize,
    /// Height of the first plane, 0 when it varies from frame to frame.
    pub height: usize,
    /// Number of frames in the clip.
    pub num_frames: usize,
    /// Frame rate numerator.
    pub fps_num: u64,
    /// Frame rate denominator.
    pub fps_den: u64,
}

impl VideoInfo {
    /// Create a constant format description at 24 fps.
    pub fn new(format: VideoFormat, size: PlaneSize, num_frames: usize) -> Self {
        Self {
            format: Some(format),
            width: size.width,
            height: size.height,
            num_frames,
            fps_num: 24,
            fps_den: 1,
        }
    }

    /// Get the size of the first plane, `None` for variable dimensions.
    pub fn frame_size(&self) -> Option<PlaneSize> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(PlaneSize {
            width: self.width,
            height: self.height,
        })
    }

    /// Check that `frame` has the plane count and plane sizes declared here.
    ///
    /// Variable format clips accept any frame. With variable dimensions the
    /// first plane may have any size and the others must follow the format
    /// subsampling of it.
    pub fn check_frame<T>(&self, frame: &Frame<T>) -> Result<(), FilterError> {
        let Some(format) = self.format else {
            return Ok(());
        };
        let size = self.frame_size().unwrap_or_else(|| frame.size());

        if frame.num_planes() != format.num_planes {
            return Err(FilterError::FrameMismatch(format!(
                "{} expects {} planes, got {}",
                format,
                format.num_planes,
                frame.num_planes()
            )));
        }

        for (i, plane) in frame.planes().iter().enumerate() {
            let expected = format.plane_size(i, size);
            if expected != Some(plane.size()) {
                return Err(FilterError::FrameMismatch(format!(
                    "plane {} has size {}, expected {:?}",
                    i,
                    plane.size(),
                    expected
                )));
            }
        }

        Ok(())
    }
}

/// A node of the host graph, producing frames by index.
///
/// Frames are reference counted; a node never hands out a frame it still
/// intends to write.
pub trait FrameSource: Send + Sync {
    /// Get the description of the produced frames.
    fn video_info(&self) -> &VideoInfo;

    /// Get how the host may schedule requests to this node.
    fn filter_mode(&self) -> FilterMode {
        FilterMode::Parallel
    }

    /// Produce frame `n`.
    fn get_frame(&self, n: usize) -> Result<Arc<Frame<f32>>, FilterError>;
}

/// A shared handle to a node.
pub type Node = Arc<dyn FrameSource>;
