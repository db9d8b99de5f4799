//! Per-frame composition of overlay geometry and preview transform.
//!
//! A [`FramePlanner`] owns the overlay configuration and the last preview
//! transform. Each draw pass it reads the latest orientation snapshot,
//! places the guide box and hands both results to a [`Renderer`].
//!
//! # Example
//!
//! ```
//! use faceframe::{FramePlanner, OrientationState, OverlayConfig};
//!
//! let state = OrientationState::new();
//! state.publish_display_rotation(1).unwrap();
//!
//! let mut planner = FramePlanner::new(OverlayConfig::default());
//! let frame = planner.plan(800, 600, &state).unwrap();
//! assert_eq!(frame.preview_transform.unwrap().degrees, -90.0);
//! assert_eq!((frame.overlay.left, frame.overlay.top), (200, 50));
//! ```

use crate::color::Color;
use crate::config::{OverlayConfig, STROKE_WIDTH};
use crate::error::GeometryError;
use crate::orientation::{PreviewTransformer, RotationTransform, SurfaceRotation};
use crate::overlay::OverlayRect;
use crate::state::OrientationState;

/// Outline style for the guide box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    /// Fixed-width outline in the given color.
    pub fn outline(color: Color) -> Self {
        Self {
            color,
            width: STROKE_WIDTH,
        }
    }
}

/// Drawing surface that receives one planned frame.
///
/// The preview transform applies to preview content only; the guide box is
/// stroked in untransformed surface space.
pub trait Renderer {
    /// Replace the transform applied to live preview content.
    fn set_preview_transform(&mut self, transform: &RotationTransform);

    /// Stroke the guide box outline.
    fn stroke_rect(&mut self, rect: OverlayRect, stroke: Stroke);
}

/// Everything a renderer needs for one draw pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub surface: (i32, i32),
    pub overlay: OverlayRect,
    pub stroke: Stroke,
    /// `None` only before any supported rotation has been seen.
    pub preview_transform: Option<RotationTransform>,
    /// Recorded for the capture pipeline; not applied to the preview.
    pub capture_target: Option<SurfaceRotation>,
}

/// Combines configuration, overlay placement and preview rotation per frame.
#[derive(Clone, Debug, Default)]
pub struct FramePlanner {
    config: OverlayConfig,
    transformer: PreviewTransformer,
}

impl FramePlanner {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            transformer: PreviewTransformer::new(),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Mutable access for box size and color changes between frames.
    pub fn config_mut(&mut self) -> &mut OverlayConfig {
        &mut self.config
    }

    /// Plan one frame for a `surface_w` × `surface_h` surface.
    pub fn plan(
        &mut self,
        surface_w: i32,
        surface_h: i32,
        orientation: &OrientationState,
    ) -> Result<Frame, GeometryError> {
        let snapshot = orientation.snapshot();
        let overlay = self.config.request().place(surface_w, surface_h)?;
        let transform = self
            .transformer
            .update_reading(surface_w, surface_h, snapshot.display)?;

        Ok(Frame {
            surface: (surface_w, surface_h),
            overlay,
            stroke: Stroke::outline(self.config.stroke_color),
            preview_transform: Some(transform),
            capture_target: snapshot.capture_target,
        })
    }

    /// Plan one frame and draw it.
    pub fn render<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        surface_w: i32,
        surface_h: i32,
        orientation: &OrientationState,
    ) -> Result<Frame, GeometryError> {
        let frame = self.plan(surface_w, surface_h, orientation)?;
        frame.draw(renderer);
        Ok(frame)
    }

    /// Last preview transform computed.
    pub fn preview_transform(&self) -> Option<RotationTransform> {
        self.transformer.current()
    }
}

impl Frame {
    /// Hand this frame to a renderer.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(t) = &self.preview_transform {
            renderer.set_preview_transform(t);
        }
        renderer.stroke_rect(self.overlay, self.stroke);
    }
}
