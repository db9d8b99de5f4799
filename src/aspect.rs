//! Preview aspect-ratio selection.
//!
//! The camera only offers two preview shapes. Screen metrics are matched to
//! whichever canonical ratio is closest, ignoring orientation.
//!
//! # Example
//!
//! ```
//! use faceframe::{AspectRatio, select_ratio};
//!
//! assert_eq!(select_ratio(1080, 2340).unwrap(), AspectRatio::Ratio16x9);
//! assert_eq!(select_ratio(1536, 2048).unwrap(), AspectRatio::Ratio4x3);
//! ```

use crate::error::{GeometryError, require_positive};

/// Supported preview aspect-ratio categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    /// 4:3, the sensor-native shape on most phones.
    Ratio4x3,
    /// 16:9 widescreen.
    Ratio16x9,
}

impl AspectRatio {
    /// Every category, in tie-break priority order.
    pub const ALL: [Self; 2] = [Self::Ratio4x3, Self::Ratio16x9];

    /// Canonical long-side / short-side ratio.
    pub const fn value(self) -> f64 {
        match self {
            Self::Ratio4x3 => 4.0 / 3.0,
            Self::Ratio16x9 => 16.0 / 9.0,
        }
    }

    /// `(long, short)` terms of the ratio.
    pub const fn terms(self) -> (u32, u32) {
        match self {
            Self::Ratio4x3 => (4, 3),
            Self::Ratio16x9 => (16, 9),
        }
    }
}

/// Raw display dimensions in physical pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScreenMetrics {
    pub width_pixels: i32,
    pub height_pixels: i32,
}

impl ScreenMetrics {
    pub const fn new(width_pixels: i32, height_pixels: i32) -> Self {
        Self {
            width_pixels,
            height_pixels,
        }
    }

    /// Closest supported preview ratio for these metrics.
    pub fn aspect_ratio(self) -> Result<AspectRatio, GeometryError> {
        log::debug!(
            "screen metrics: {} x {}",
            self.width_pixels,
            self.height_pixels
        );
        select_ratio(self.width_pixels, self.height_pixels)
    }
}

/// Long-side / short-side ratio of the given dimensions.
pub fn preview_ratio(width: i32, height: i32) -> Result<f64, GeometryError> {
    let width = require_positive("width", width)?;
    let height = require_positive("height", height)?;
    Ok(width.max(height) as f64 / width.min(height) as f64)
}

/// Pick the aspect ratio whose canonical value is closest to `max/min` of
/// the given dimensions. Ties resolve to 4:3.
pub fn select_ratio(width: i32, height: i32) -> Result<AspectRatio, GeometryError> {
    let ratio = preview_ratio(width, height)?;
    let long = width.max(height) as i64;
    let short = width.min(height) as i64;

    // |L/S - 4/3| <= |L/S - 16/9|, scaled by 9S so the midpoint compares exactly.
    let d43 = (9 * long - 12 * short).abs();
    let d169 = (9 * long - 16 * short).abs();

    let selected = if d43 <= d169 {
        AspectRatio::Ratio4x3
    } else {
        AspectRatio::Ratio16x9
    };
    log::debug!("preview ratio {ratio:.4} -> {selected:?}");
    Ok(selected)
}
