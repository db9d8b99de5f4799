//! SVG visualization of a planned frame.
//!
//! Draws the preview surface, the preview content rotated by the frame's
//! preview transform (with an arrow marking the sensor's "up"), and the
//! guide box stroked in surface space.
//!
//! # Example
//!
//! ```
//! use faceframe::{FramePlanner, OrientationState, svg::render_frame_svg};
//!
//! let state = OrientationState::new();
//! state.publish_display_rotation(1).unwrap();
//! let frame = FramePlanner::default().plan(800, 600, &state).unwrap();
//!
//! let svg = render_frame_svg(&frame);
//! assert!(svg.contains(r#"transform="rotate(-90 400 300)""#));
//! ```

use std::fmt::Write as _;

use crate::frame::{Frame, Renderer, Stroke};
use crate::orientation::RotationTransform;
use crate::overlay::OverlayRect;

/// Maximum pixel width of the rendered document.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the rendered document.
const MAX_PANEL_H: f64 = 400.0;

/// [`Renderer`] that records draw calls and serializes them as SVG.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    surface: (i32, i32),
    transform: Option<RotationTransform>,
    rects: Vec<(OverlayRect, Stroke)>,
}

impl SvgRenderer {
    /// Start a document for a `surface_w` × `surface_h` surface.
    pub fn new(surface_w: i32, surface_h: i32) -> Self {
        Self {
            surface: (surface_w, surface_h),
            transform: None,
            rects: Vec::new(),
        }
    }

    /// Complete SVG document for everything drawn so far.
    pub fn finish(&self) -> String {
        let (w, h) = (self.surface.0.max(1) as f64, self.surface.1.max(1) as f64);
        let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);

        let mut svg = String::with_capacity(2048);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {} {}" overflow="visible">"#,
            w * scale,
            h * scale,
            w,
            h
        );
        svg.push_str(
            r##"<style>
  .surface { fill: #1e1e1e; }
  .preview { fill: #6ba3d6; opacity: 0.6; }
  .up { fill: #f5f5f5; }
</style>
"##,
        );
        let _ = writeln!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" class="surface"/>"#
        );

        // Preview content with an arrow pointing to the sensor's top edge.
        match &self.transform {
            Some(t) if !t.is_identity() => {
                let _ = writeln!(
                    svg,
                    r#"<g transform="rotate({} {} {})">"#,
                    t.degrees, t.pivot_x, t.pivot_y
                );
            }
            _ => svg.push_str("<g>\n"),
        }
        let _ = writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{w}" height="{h}" class="preview"/>"#
        );
        let (cx, arrow) = (w / 2.0, w.min(h) / 8.0);
        let _ = writeln!(
            svg,
            r#"  <polygon points="{cx},{top} {right},{base} {left},{base}" class="up"/>"#,
            top = arrow / 2.0,
            base = arrow * 1.5,
            left = cx - arrow / 2.0,
            right = cx + arrow / 2.0,
        );
        svg.push_str("</g>\n");

        for (rect, stroke) in &self.rects {
            let _ = writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                stroke.color.to_hex(),
                stroke.width
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn set_preview_transform(&mut self, transform: &RotationTransform) {
        self.transform = Some(*transform);
    }

    fn stroke_rect(&mut self, rect: OverlayRect, stroke: Stroke) {
        self.rects.push((rect, stroke));
    }
}

/// Render a planned frame as a complete SVG document.
pub fn render_frame_svg(frame: &Frame) -> String {
    let mut renderer = SvgRenderer::new(frame.surface.0, frame.surface.1);
    frame.draw(&mut renderer);
    renderer.finish()
}
