use crate::plane::PlaneSize;

/// The colour family of a video format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Single luma plane.
    Gray,
    /// Three full resolution planes, one per colour.
    Rgb,
    /// One luma plane followed by two possibly subsampled chroma planes.
    Yuv,
}

/// The numeric representation of each sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleType {
    /// Unsigned integer samples.
    Integer,
    /// IEEE floating point samples.
    Float,
}

/// Description of the sample layout of a video frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VideoFormat {
    /// Human readable name of the format.
    pub name: &'static str,
    /// The colour family.
    pub color_family: ColorFamily,
    /// The sample type.
    pub sample_type: SampleType,
    /// Number of significant bits per sample.
    pub bits_per_sample: u32,
    /// Horizontal chroma subsampling as a power of two shift.
    pub sub_sampling_w: u32,
    /// Vertical chroma subsampling as a power of two shift.
    pub sub_sampling_h: u32,
    /// Number of planes in a frame of this format.
    pub num_planes: usize,
}

impl VideoFormat {
    /// 8 bit gray.
    pub const GRAY8: VideoFormat = VideoFormat::new(
        "Gray8",
        ColorFamily::Gray,
        SampleType::Integer,
        8,
        0,
        0,
    );
    /// 16 bit gray.
    pub const GRAY16: VideoFormat = VideoFormat::new(
        "Gray16",
        ColorFamily::Gray,
        SampleType::Integer,
        16,
        0,
        0,
    );
    /// 32 bit float gray.
    pub const GRAYS: VideoFormat = VideoFormat::new(
        "GrayS",
        ColorFamily::Gray,
        SampleType::Float,
        32,
        0,
        0,
    );
    /// 32 bit float planar RGB.
    pub const RGBS: VideoFormat = VideoFormat::new(
        "RGBS",
        ColorFamily::Rgb,
        SampleType::Float,
        32,
        0,
        0,
    );
    /// 8 bit 4:2:0 YUV.
    pub const YUV420P8: VideoFormat = VideoFormat::new(
        "YUV420P8",
        ColorFamily::Yuv,
        SampleType::Integer,
        8,
        1,
        1,
    );
    /// 32 bit float 4:2:0 YUV.
    pub const YUV420PS: VideoFormat = VideoFormat::new(
        "YUV420PS",
        ColorFamily::Yuv,
        SampleType::Float,
        32,
        1,
        1,
    );
    /// 32 bit float 4:4:4 YUV.
    pub const YUV444PS: VideoFormat = VideoFormat::new(
        "YUV444PS",
        ColorFamily::Yuv,
        SampleType::Float,
        32,
        0,
        0,
    );

    /// Create a new format description.
    ///
    /// Subsampling is ignored for non-YUV families.
    pub const fn new(
        name: &'static str,
        color_family: ColorFamily,
        sample_type: SampleType,
        bits_per_sample: u32,
        sub_sampling_w: u32,
        sub_sampling_h: u32,
    ) -> Self {
        let (num_planes, sub_sampling_w, sub_sampling_h) = match color_family {
            ColorFamily::Gray => (1, 0, 0),
            ColorFamily::Rgb => (3, 0, 0),
            ColorFamily::Yuv => (3, sub_sampling_w, sub_sampling_h),
        };
        Self {
            name,
            color_family,
            sample_type,
            bits_per_sample,
            sub_sampling_w,
            sub_sampling_h,
            num_planes,
        }
    }

    /// Whether samples of this format are 32 bit floats.
    pub fn is_float32(&self) -> bool {
        self.sample_type == SampleType::Float && self.bits_per_sample == 32
    }

    /// Size of plane `plane` in a frame of size `frame_size`.
    ///
    /// Returns `None` if the plane index is out of range. Chroma planes of a
    /// subsampled format never shrink below one sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsgauss_image::{PlaneSize, VideoFormat};
    ///
    /// let size = VideoFormat::YUV420PS.plane_size(1, [640, 480].into());
    /// assert_eq!(size, Some(PlaneSize { width: 320, height: 240 }));
    /// ```
    pub fn plane_size(&self, plane: usize, frame_size: PlaneSize) -> Option<PlaneSize> {
        if plane >= self.num_planes {
            return None;
        }
        if plane == 0 {
            return Some(frame_size);
        }
        Some(PlaneSize {
            width: (frame_size.width >> self.sub_sampling_w).max(1),
            height: (frame_size.height >> self.sub_sampling_h).max(1),
        })
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
