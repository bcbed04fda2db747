use argh::FromArgs;
use rayon::prelude::*;
use std::sync::Arc;

use vsgauss::image::{Frame, FrameProp, FrameProps, Plane, PlaneSize, VideoFormat};
use vsgauss::imgproc::parallel::ExecutionStrategy;
use vsgauss::plugin::{
    plugin_init, FilterMode, FrameSource, MemoryClip, Node, Property, PropertyMap,
};

#[derive(FromArgs)]
/// Blur a synthetic clip through the GaussBlur plugin function
struct Args {
    /// the frame width
    #[argh(option, default = "640")]
    width: usize,

    /// the frame height
    #[argh(option, default = "480")]
    height: usize,

    /// the number of frames to generate
    #[argh(option, default = "8")]
    frames: usize,

    /// the clip format: grays, rgbs, yuv420ps or yuv444ps
    #[argh(option, default = "String::from(\"yuv420ps\")")]
    format: String,

    /// the number of worker threads, 0 uses the global pool
    #[argh(option, default = "0")]
    threads: usize,
}

fn parse_format(name: &str) -> Result<VideoFormat, Box<dyn std::error::Error>> {
    match name.to_lowercase().as_str() {
        "grays" => Ok(VideoFormat::GRAYS),
        "rgbs" => Ok(VideoFormat::RGBS),
        "yuv420ps" => Ok(VideoFormat::YUV420PS),
        "yuv444ps" => Ok(VideoFormat::YUV444PS),
        _ => Err(format!("unsupported format '{name}'").into()),
    }
}

/// Build a moving checkerboard, stored as 8 bit samples and normalized to [0, 1].
fn synthetic_clip(
    format: VideoFormat,
    size: PlaneSize,
    num_frames: usize,
) -> Result<Node, Box<dyn std::error::Error>> {
    let mut frames = Vec::with_capacity(num_frames);

    for n in 0..num_frames {
        let mut planes = Vec::with_capacity(format.num_planes);
        for i in 0..format.num_planes {
            let plane_size = format
                .plane_size(i, size)
                .ok_or_else(|| format!("no plane {i} in {format}"))?;

            let plane_u8 = Plane::<u8>::from_size_fn(plane_size, |x, y| {
                if ((x + n * 2) / 8 + y / 8 + i) % 2 == 0 {
                    255
                } else {
                    0
                }
            })?;
            planes.push(plane_u8.cast_and_scale::<f32>(1.0 / 255.0)?);
        }

        let mut props = FrameProps::new();
        props.insert("_FrameNumber".to_string(), FrameProp::Int(n as i64));
        frames.push(Frame::new(planes)?.with_props(props));
    }

    Ok(Arc::new(MemoryClip::new(format, frames)?))
}

fn log_frame(n: usize, frame: &Frame<f32>) {
    for (i, plane) in frame.planes().iter().enumerate() {
        let data = plane.as_slice();
        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = data.iter().sum::<f32>() / data.len() as f32;
        log::info!(
            "frame {n} plane {i} {}: min {min:.4} mean {mean:.4} max {max:.4}",
            plane.size()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let format = parse_format(&args.format)?;
    let size = PlaneSize {
        width: args.width,
        height: args.height,
    };

    let clip = synthetic_clip(format, size, args.frames)?;

    let plugin = plugin_init()?;
    log::info!(
        "loaded plugin {} ({})",
        plugin.config().identifier,
        plugin.config().description
    );

    let mut call_args = PropertyMap::new();
    call_args.set("clip", Property::Clip(clip));
    let blurred = plugin.invoke("GaussBlur", &call_args)?.get_clip("clip")?;

    let num_frames = blurred.video_info().num_frames;
    let parallel = blurred.filter_mode() != FilterMode::Serial;

    let strategy = if args.threads > 0 {
        ExecutionStrategy::Fixed(args.threads)
    } else {
        ExecutionStrategy::ParallelRows
    };

    let start = std::time::Instant::now();

    let frames = strategy.install(|| {
        if parallel {
            (0..num_frames)
                .into_par_iter()
                .map(|n| blurred.get_frame(n))
                .collect::<Result<Vec<_>, _>>()
        } else {
            (0..num_frames)
                .map(|n| blurred.get_frame(n))
                .collect::<Result<Vec<_>, _>>()
        }
    })??;

    log::info!(
        "blurred {} frames of {} {} in {:?}",
        frames.len(),
        size,
        format,
        start.elapsed()
    );

    for (n, frame) in frames.iter().enumerate() {
        log_frame(n, frame);
    }

    Ok(())
}
