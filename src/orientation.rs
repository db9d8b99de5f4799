//! Display rotation, preview compensation transforms, and tilt bucketing.
//!
//! Two orientation signals are modeled and never mixed:
//!
//! - the **display rotation**, a quantized reading of how the screen is
//!   rotated from its natural orientation, drives the preview transform;
//! - the **device tilt**, a continuous sensor angle, is bucketed into a
//!   capture target rotation.
//!
//! ```text
//!     tilt (degrees)         target rotation
//!     [315, 360) ∪ [0, 45)   Rotation0
//!     [45, 135)              Rotation270
//!     [135, 225)             Rotation180
//!     [225, 315)             Rotation90
//! ```

use num_traits::Float;

use crate::error::{GeometryError, require_positive};

/// Sensor value reported when the device is flat and tilt is undefined.
pub const TILT_UNKNOWN: i32 = -1;

/// Quantized display rotation relative to the natural orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl SurfaceRotation {
    /// All four readings, in platform code order.
    pub const ALL: [Self; 4] = [
        Self::Rotation0,
        Self::Rotation90,
        Self::Rotation180,
        Self::Rotation270,
    ];

    /// Decode a platform rotation code (0-3).
    pub fn from_code(code: i32) -> Result<Self, GeometryError> {
        match code {
            0 => Ok(Self::Rotation0),
            1 => Ok(Self::Rotation90),
            2 => Ok(Self::Rotation180),
            3 => Ok(Self::Rotation270),
            _ => Err(GeometryError::UnsupportedRotation(code)),
        }
    }

    /// Platform rotation code (0-3).
    pub fn code(self) -> i32 {
        match self {
            Self::Rotation0 => 0,
            Self::Rotation90 => 1,
            Self::Rotation180 => 2,
            Self::Rotation270 => 3,
        }
    }

    /// Whether the display is in a sideways orientation.
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::Rotation90 | Self::Rotation270)
    }
}

/// Rotation of the display in degrees: 0, 90, 180 or 270.
pub fn rotation_angle(reading: SurfaceRotation) -> u16 {
    match reading {
        SurfaceRotation::Rotation0 => 0,
        SurfaceRotation::Rotation90 => 90,
        SurfaceRotation::Rotation180 => 180,
        SurfaceRotation::Rotation270 => 270,
    }
}

/// Rotation of the preview content about the surface center.
///
/// Positive degrees rotate clockwise in y-down surface space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationTransform {
    /// Rotation in degrees, the negated display angle.
    pub degrees: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
}

impl RotationTransform {
    /// No rotation about the given pivot.
    pub fn identity(pivot_x: f32, pivot_y: f32) -> Self {
        Self {
            degrees: 0.0,
            pivot_x,
            pivot_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.degrees == 0.0
    }

    /// Row-major 2x3 affine matrix `[a, b, tx, c, d, ty]` mapping
    /// `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`.
    pub fn to_affine(&self) -> [f32; 6] {
        let (sin, cos) = quarter_turn_sin_cos(self.degrees);
        let (px, py) = (self.pivot_x, self.pivot_y);
        [
            cos,
            -sin,
            px - cos * px + sin * py,
            sin,
            cos,
            py - sin * px - cos * py,
        ]
    }

    /// Apply the transform to a point.
    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.to_affine();
        (a * x + b * y + tx, c * x + d * y + ty)
    }
}

/// Sine and cosine, exact for multiples of 90 degrees.
fn quarter_turn_sin_cos(degrees: f32) -> (f32, f32) {
    let turns = degrees / 90.0;
    if Float::fract(turns) == 0.0 {
        match (turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        Float::sin_cos(Float::to_radians(degrees))
    }
}

/// Transform that keeps the preview upright for the given display rotation.
///
/// Rotates by `-angle` degrees about the floating-point surface midpoint.
pub fn build_transform(
    surface_w: i32,
    surface_h: i32,
    reading: SurfaceRotation,
) -> Result<RotationTransform, GeometryError> {
    let surface_w = require_positive("surface width", surface_w)?;
    let surface_h = require_positive("surface height", surface_h)?;

    let angle = rotation_angle(reading);
    Ok(RotationTransform {
        degrees: -f32::from(angle),
        pivot_x: surface_w as f32 / 2.0,
        pivot_y: surface_h as f32 / 2.0,
    })
}

/// Outcome of feeding a rotation code to [`PreviewTransformer::update`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransformUpdate {
    /// The code was recognized and the transform replaced.
    Replaced(RotationTransform),
    /// The code was not recognized; the previous transform stays in effect.
    Kept {
        current: Option<RotationTransform>,
        unsupported: i32,
    },
}

impl TransformUpdate {
    /// The transform in effect after the update.
    pub fn current(&self) -> Option<RotationTransform> {
        match *self {
            Self::Replaced(t) => Some(t),
            Self::Kept { current, .. } => current,
        }
    }
}

/// Holds the most recent preview transform.
///
/// Recompute on every surface resize or display rotation change.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PreviewTransformer {
    current: Option<RotationTransform>,
}

impl PreviewTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last transform computed, if any.
    pub fn current(&self) -> Option<RotationTransform> {
        self.current
    }

    /// Recompute from a raw display rotation code.
    ///
    /// Unsupported codes are not errors: they are logged and reported as
    /// [`TransformUpdate::Kept`]. Invalid surface dimensions are errors.
    pub fn update(
        &mut self,
        surface_w: i32,
        surface_h: i32,
        code: i32,
    ) -> Result<TransformUpdate, GeometryError> {
        match SurfaceRotation::from_code(code) {
            Ok(reading) => self
                .update_reading(surface_w, surface_h, reading)
                .map(TransformUpdate::Replaced),
            Err(_) => {
                log::warn!("unsupported rotation code {code}; keeping previous transform");
                Ok(TransformUpdate::Kept {
                    current: self.current,
                    unsupported: code,
                })
            }
        }
    }

    /// Recompute from a decoded reading.
    pub fn update_reading(
        &mut self,
        surface_w: i32,
        surface_h: i32,
        reading: SurfaceRotation,
    ) -> Result<RotationTransform, GeometryError> {
        let transform = build_transform(surface_w, surface_h, reading)?;
        self.current = Some(transform);
        Ok(transform)
    }
}

/// Bucket a continuous tilt angle into a capture target rotation.
///
/// Returns `None` for [`TILT_UNKNOWN`]. Other values are taken modulo 360.
pub fn target_rotation(tilt_degrees: i32) -> Option<SurfaceRotation> {
    if tilt_degrees == TILT_UNKNOWN {
        return None;
    }
    let rotation = match tilt_degrees.rem_euclid(360) {
        45..=134 => SurfaceRotation::Rotation270,
        135..=224 => SurfaceRotation::Rotation180,
        225..=314 => SurfaceRotation::Rotation90,
        _ => SurfaceRotation::Rotation0,
    };
    Some(rotation)
}
