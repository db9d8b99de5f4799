//! Camera preview framing geometry: aspect-ratio selection, guide-box
//! placement, and orientation transforms.
//!
//! Pure geometry: no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`aspect`]: pick the 4:3 or 16:9 preview shape closest to the screen
//! - [`overlay`]: place the face guide box at the surface center
//! - [`orientation`]: display rotation, preview compensation transform, tilt bucketing
//! - [`state`]: latest orientation readings shared between event sources and the renderer
//! - [`frame`]: per-frame composition behind a [`Renderer`] trait
//! - [`config`]: box size and stroke color, with a query-string parser
//! - `svg`: SVG visualization of a planned frame (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aspect;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod orientation;
pub mod overlay;
pub mod state;
#[cfg(feature = "svg")]
pub mod svg;

pub use aspect::{AspectRatio, ScreenMetrics, preview_ratio, select_ratio};
pub use color::Color;
pub use config::{OverlayConfig, STROKE_WIDTH};
pub use error::GeometryError;
pub use frame::{Frame, FramePlanner, Renderer, Stroke};
pub use orientation::{
    PreviewTransformer, RotationTransform, SurfaceRotation, TransformUpdate, build_transform,
    rotation_angle, target_rotation,
};
pub use overlay::{OverlayRect, OverlayRequest, compute_rectangle};
pub use state::{OrientationSnapshot, OrientationState};
