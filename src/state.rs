//! Latest orientation readings, shared between event sources and the renderer.
//!
//! Display-rotation events and tilt-sensor events arrive on independent
//! callbacks. Both publish into one [`OrientationState`]; the renderer takes
//! a snapshot per frame. The two fields are packed into a single atomic word
//! so a snapshot never observes a half-applied publish.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::error::GeometryError;
use crate::orientation::{SurfaceRotation, target_rotation};

/// Packed encoding of "no capture target yet".
const NO_TARGET: u16 = 0xFF;

/// Point-in-time copy of an [`OrientationState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrientationSnapshot {
    /// Last supported display rotation published.
    pub display: SurfaceRotation,
    /// Capture target derived from the last known tilt reading.
    pub capture_target: Option<SurfaceRotation>,
}

impl OrientationSnapshot {
    fn pack(self) -> u16 {
        let target = self
            .capture_target
            .map_or(NO_TARGET, |r| r.code() as u16);
        (target << 8) | self.display.code() as u16
    }

    fn unpack(word: u16) -> Self {
        let display = decode(word & 0xFF).unwrap_or_default();
        Self {
            display,
            capture_target: decode(word >> 8),
        }
    }
}

fn decode(byte: u16) -> Option<SurfaceRotation> {
    SurfaceRotation::from_code(i32::from(byte)).ok()
}

/// Lock-free cell holding the latest display rotation and capture target.
#[derive(Debug)]
pub struct OrientationState {
    word: AtomicU16,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationState {
    /// Natural orientation, no capture target.
    pub const fn new() -> Self {
        Self {
            word: AtomicU16::new(NO_TARGET << 8),
        }
    }

    /// Current readings.
    pub fn snapshot(&self) -> OrientationSnapshot {
        OrientationSnapshot::unpack(self.word.load(Ordering::Acquire))
    }

    /// Record a display rotation code from the display listener.
    ///
    /// Unsupported codes leave the stored rotation unchanged.
    pub fn publish_display_rotation(&self, code: i32) -> Result<SurfaceRotation, GeometryError> {
        let rotation = SurfaceRotation::from_code(code).inspect_err(|_| {
            log::warn!("ignoring unsupported display rotation code {code}");
        })?;
        self.modify(|s| s.display = rotation);
        Ok(rotation)
    }

    /// Record a tilt angle from the orientation sensor.
    ///
    /// An unknown tilt keeps the previous capture target.
    pub fn publish_tilt(&self, tilt_degrees: i32) -> Option<SurfaceRotation> {
        match target_rotation(tilt_degrees) {
            Some(target) => {
                self.modify(|s| s.capture_target = Some(target));
                Some(target)
            }
            None => self.snapshot().capture_target,
        }
    }

    fn modify(&self, f: impl Fn(&mut OrientationSnapshot)) {
        // The closure always returns Some, so this cannot fail.
        let _ = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                let mut s = OrientationSnapshot::unpack(word);
                f(&mut s);
                Some(s.pack())
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_natural_without_target() {
        let state = OrientationState::new();
        assert_eq!(
            state.snapshot(),
            OrientationSnapshot {
                display: SurfaceRotation::Rotation0,
                capture_target: None
            }
        );
    }

    #[test]
    fn pack_round_trip() {
        for display in SurfaceRotation::ALL {
            for target in [None, Some(SurfaceRotation::Rotation180)] {
                let s = OrientationSnapshot {
                    display,
                    capture_target: target,
                };
                assert_eq!(OrientationSnapshot::unpack(s.pack()), s);
            }
        }
    }

    #[test]
    fn streams_do_not_interact() {
        let state = OrientationState::new();
        assert_eq!(
            state.publish_display_rotation(1),
            Ok(SurfaceRotation::Rotation90)
        );
        assert_eq!(state.publish_tilt(180), Some(SurfaceRotation::Rotation180));
        assert_eq!(state.snapshot().display, SurfaceRotation::Rotation90);

        assert_eq!(
            state.publish_display_rotation(3),
            Ok(SurfaceRotation::Rotation270)
        );
        assert_eq!(
            state.snapshot().capture_target,
            Some(SurfaceRotation::Rotation180)
        );
    }

    #[test]
    fn unsupported_display_code_is_ignored() {
        let state = OrientationState::new();
        state.publish_display_rotation(2).unwrap();
        assert_eq!(
            state.publish_display_rotation(5),
            Err(GeometryError::UnsupportedRotation(5))
        );
        assert_eq!(state.snapshot().display, SurfaceRotation::Rotation180);
    }

    #[test]
    fn unknown_tilt_keeps_target() {
        let state = OrientationState::new();
        assert_eq!(state.publish_tilt(-1), None);
        state.publish_tilt(100);
        assert_eq!(state.publish_tilt(-1), Some(SurfaceRotation::Rotation270));
    }

    #[cfg(feature = "std")]
    #[test]
    fn concurrent_publishers() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(OrientationState::new());
        let display = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for i in 0..1000 {
                    state.publish_display_rotation(i % 4).unwrap();
                }
                state.publish_display_rotation(1).unwrap();
            })
        };
        let tilt = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for i in 0..1000 {
                    state.publish_tilt(i % 360);
                }
                state.publish_tilt(200);
            })
        };
        display.join().unwrap();
        tilt.join().unwrap();

        assert_eq!(
            state.snapshot(),
            OrientationSnapshot {
                display: SurfaceRotation::Rotation90,
                capture_target: Some(SurfaceRotation::Rotation180)
            }
        );
    }
}
