use std::sync::Arc;

use vsgauss_image::{Frame, PlaneSize, VideoFormat};

use crate::{
    error::FilterError,
    node::{FrameSource, VideoInfo},
};

/// A node serving frames held in memory.
///
/// Samples are stored as `f32` whatever the declared format, so a clip can
/// advertise e.g. an integer format to exercise format checks downstream.
pub struct MemoryClip {
    vi: VideoInfo,
    frames: Vec<Arc<Frame<f32>>>,
}

impl MemoryClip {
    /// Create a clip from pre-built frames.
    ///
    /// The size of the first frame becomes the clip size.
    ///
    /// # Errors
    ///
    /// Fails if `frames` is empty or any frame does not match `format` and the
    /// size of the first frame.
    pub fn new(format: VideoFormat, frames: Vec<Frame<f32>>) -> Result<Self, FilterError> {
        let first = frames.first().ok_or(FilterError::EmptyClip)?;
        let vi = VideoInfo::new(format, first.size(), frames.len());

        for frame in frames.iter() {
            vi.check_frame(frame)?;
        }

        Ok(Self {
            vi,
            frames: frames.into_iter().map(Arc::new).collect(),
        })
    }

    /// Create a clip of `num_frames` frames with every sample set to `val`.
    pub fn blank(
        format: VideoFormat,
        size: PlaneSize,
        num_frames: usize,
        val: f32,
    ) -> Result<Self, FilterError> {
        let frames = (0..num_frames)
            .map(|_| Frame::from_format(&format, size, val))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(format, frames)
    }

    /// Set the frame rate of the clip.
    pub fn with_fps(mut self, fps_num: u64, fps_den: u64) -> Self {
        self.vi.fps_num = fps_num;
        self.vi.fps_den = fps_den;
        self
    }
}

impl FrameSource for MemoryClip {
    fn video_info(&self) -> &VideoInfo {
        &self.vi
    }

    fn get_frame(&self, n: usize) -> Result<Arc<Frame<f32>>, FilterError> {
        self.frames
            .get(n)
            .cloned()
            .ok_or(FilterError::FrameOutOfRange(n, self.frames.len()))
    }
}
