#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The host drives filters through a small contract: nodes produce frames by
//! index, functions are registered on a plugin under an argument signature,
//! and arguments travel in property maps. `GaussBlur` is the single function
//! registered by [`plugin_init`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use vsgauss_image::VideoFormat;
//! use vsgauss_plugin::{plugin_init, FrameSource, MemoryClip, Property, PropertyMap};
//!
//! let clip = MemoryClip::blank(VideoFormat::GRAYS, [4, 4].into(), 2, 0.5).unwrap();
//!
//! let mut args = PropertyMap::new();
//! args.set("clip", Property::Clip(Arc::new(clip)));
//!
//! let plugin = plugin_init().unwrap();
//! let blurred = plugin.invoke("GaussBlur", &args).unwrap().get_clip("clip").unwrap();
//!
//! let frame = blurred.get_frame(1).unwrap();
//! assert!(frame.plane(0).unwrap().as_slice().iter().all(|&v| v == 0.5));
//! ```

mod clip;
mod error;
mod gauss_blur;
mod map;
mod node;
mod plugin;
mod signature;

pub use crate::clip::MemoryClip;
pub use crate::error::FilterError;
pub use crate::gauss_blur::GaussBlur;
pub use crate::map::{Property, PropertyMap};
pub use crate::node::{FilterMode, FrameSource, Node, VideoInfo};
pub use crate::plugin::{plugin_init, CreateFn, Plugin, PluginConfig, PluginFunction};
pub use crate::signature::{parse_signature, ArgKind, ArgSpec};
