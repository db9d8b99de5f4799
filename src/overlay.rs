//! Guide-box placement on the preview surface.
//!
//! The box is centered on the surface's own center using integer (floor)
//! halving for both the surface and the box extents. Boxes larger than the
//! surface are not clamped; the renderer simply clips them.
//!
//! # Example
//!
//! ```
//! use faceframe::compute_rectangle;
//!
//! let rect = compute_rectangle(1000, 2000, 400, 500).unwrap();
//! assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (300, 750, 700, 1250));
//! ```

use crate::error::{GeometryError, require_positive};

/// Default guide-box width in surface pixels.
pub const DEFAULT_BOX_WIDTH: i32 = 400;
/// Default guide-box height in surface pixels.
pub const DEFAULT_BOX_HEIGHT: i32 = 500;

/// Edge coordinates of the guide box in surface space.
///
/// Edges may lie outside `0..surface` when the requested box is larger than
/// the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl OverlayRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Center point, floor-rounded.
    pub fn center(&self) -> (i32, i32) {
        (
            (self.left + self.right).div_euclid(2),
            (self.top + self.bottom).div_euclid(2),
        )
    }

    /// Whether every edge lies inside a `surface_w` × `surface_h` surface.
    pub fn is_within(&self, surface_w: i32, surface_h: i32) -> bool {
        self.left >= 0 && self.top >= 0 && self.right <= surface_w && self.bottom <= surface_h
    }
}

/// Requested guide-box size, independent of the surface size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverlayRequest {
    pub box_width: i32,
    pub box_height: i32,
}

impl Default for OverlayRequest {
    fn default() -> Self {
        Self {
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
        }
    }
}

impl OverlayRequest {
    pub const fn new(box_width: i32, box_height: i32) -> Self {
        Self {
            box_width,
            box_height,
        }
    }

    /// Place this box on a surface of the given size.
    pub fn place(self, surface_w: i32, surface_h: i32) -> Result<OverlayRect, GeometryError> {
        compute_rectangle(surface_w, surface_h, self.box_width, self.box_height)
    }
}

/// Compute the guide box centered on a `surface_w` × `surface_h` surface.
///
/// Box dimensions must be at least 2 so the floor half-extent is non-zero.
pub fn compute_rectangle(
    surface_w: i32,
    surface_h: i32,
    box_w: i32,
    box_h: i32,
) -> Result<OverlayRect, GeometryError> {
    let surface_w = require_positive("surface width", surface_w)?;
    let surface_h = require_positive("surface height", surface_h)?;
    let box_w = require_box_extent("box width", box_w)?;
    let box_h = require_box_extent("box height", box_h)?;

    let (cx, cy) = (surface_w / 2, surface_h / 2);
    let (hw, hh) = (box_w / 2, box_h / 2);

    let rect = OverlayRect {
        left: cx - hw,
        top: cy - hh,
        right: cx + hw,
        bottom: cy + hh,
    };
    log::info!(
        "rect: l={}, t={}, r={}, b={}",
        rect.left,
        rect.top,
        rect.right,
        rect.bottom
    );
    Ok(rect)
}

fn require_box_extent(what: &'static str, value: i32) -> Result<i32, GeometryError> {
    if value >= 2 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidInput { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_surface_default_box() {
        let rect = compute_rectangle(1000, 2000, 400, 500).unwrap();
        assert_eq!(
            rect,
            OverlayRect {
                left: 300,
                top: 750,
                right: 700,
                bottom: 1250
            }
        );
        assert_eq!(rect.center(), (500, 1000));
        assert_eq!((rect.width(), rect.height()), (400, 500));
    }

    #[test]
    fn odd_dimensions_floor() {
        // Surface center (540, 959), half-extents (200, 250).
        let rect = compute_rectangle(1081, 1919, 401, 501).unwrap();
        assert_eq!(
            rect,
            OverlayRect {
                left: 340,
                top: 709,
                right: 740,
                bottom: 1209
            }
        );
        assert_eq!((rect.width(), rect.height()), (400, 500));
    }

    #[test]
    fn oversized_box_not_clamped() {
        let rect = compute_rectangle(300, 200, 400, 500).unwrap();
        assert_eq!(
            rect,
            OverlayRect {
                left: -50,
                top: -150,
                right: 350,
                bottom: 350
            }
        );
        assert!(!rect.is_within(300, 200));
    }

    #[test]
    fn fits_inside_large_surface() {
        let rect = compute_rectangle(1080, 1920, 400, 500).unwrap();
        assert!(rect.is_within(1080, 1920));
    }

    #[test]
    fn centering_and_ordering_hold() {
        let surfaces = [(1, 1), (2, 3), (99, 101), (720, 1280), (1081, 2401)];
        let boxes = [(2, 2), (3, 5), (400, 500), (1001, 77), (5000, 6000)];
        for &(sw, sh) in &surfaces {
            for &(bw, bh) in &boxes {
                let r = compute_rectangle(sw, sh, bw, bh).unwrap();
                assert!(r.left < r.right, "{sw}x{sh} box {bw}x{bh}: {r:?}");
                assert!(r.top < r.bottom, "{sw}x{sh} box {bw}x{bh}: {r:?}");
                assert_eq!((r.left + r.right).div_euclid(2), sw / 2);
                assert_eq!((r.top + r.bottom).div_euclid(2), sh / 2);
            }
        }
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            compute_rectangle(0, 100, 10, 10),
            Err(GeometryError::InvalidInput {
                what: "surface width",
                value: 0
            })
        );
        assert_eq!(
            compute_rectangle(100, -4, 10, 10),
            Err(GeometryError::InvalidInput {
                what: "surface height",
                value: -4
            })
        );
        assert_eq!(
            compute_rectangle(100, 100, 1, 10),
            Err(GeometryError::InvalidInput {
                what: "box width",
                value: 1
            })
        );
        assert!(compute_rectangle(100, 100, 10, 0).is_err());
        assert!(compute_rectangle(100, 100, 10, -20).is_err());
    }

    #[test]
    fn request_defaults_and_place() {
        let req = OverlayRequest::default();
        assert_eq!(req, OverlayRequest::new(400, 500));
        assert_eq!(
            req.place(1000, 2000).unwrap(),
            compute_rectangle(1000, 2000, 400, 500).unwrap()
        );
    }

    #[test]
    fn size_independent_of_surface() {
        let a = compute_rectangle(800, 600, 120, 80).unwrap();
        let b = compute_rectangle(3000, 4000, 120, 80).unwrap();
        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    }
}
