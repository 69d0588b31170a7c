use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::{Extent, FrameLoop};
use crate::time::Clock;

use super::surface_state::{SurfaceState, VisibilityChange};

/// Records a new surface extent and restarts measurement on a visibility change.
///
/// Frames on either side of a hidden period do not belong to the same window.
pub(crate) fn apply_extent<C: Clock>(
    surface_state: &mut SurfaceState,
    frame_loop: &mut FrameLoop<C>,
    extent: Extent,
) -> Option<VisibilityChange> {
    let change = surface_state.resize(extent)?;
    frame_loop.reset();
    Some(change)
}

/// Restarts measurement on a fresh press of `reset_key`. Returns whether it did.
pub(crate) fn apply_key<C: Clock>(
    frame_loop: &mut FrameLoop<C>,
    reset_key: KeyCode,
    key: PhysicalKey,
    state: ElementState,
    repeat: bool,
) -> bool {
    if state != ElementState::Pressed || repeat || key != PhysicalKey::Code(reset_key) {
        return false;
    }
    frame_loop.reset();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{FrameTimer, ManualClock};

    /// Frame loop with one closed window (3 frames at 10 ms).
    fn measuring() -> FrameLoop<ManualClock> {
        let clock = ManualClock::new();
        let mut fl = FrameLoop::with_timer(FrameTimer::with_clock(3, clock.clone()));
        for _ in 0..4 {
            clock.advance_millis(10);
            fl.run_frame(|| Ok(())).unwrap();
        }
        assert!(fl.frames_per_second() > 0.0);
        fl
    }

    fn space() -> PhysicalKey {
        PhysicalKey::Code(KeyCode::Space)
    }

    // ── visibility ────────────────────────────────────────────────────────

    #[test]
    fn hiding_resets_timer() {
        let mut fl = measuring();
        let mut s = SurfaceState::new(Extent::new(640, 480));
        let change = apply_extent(&mut s, &mut fl, Extent::new(0, 0));
        assert_eq!(change, Some(VisibilityChange::Hidden));
        assert_eq!(fl.frames_per_second(), 0.0);
    }

    #[test]
    fn showing_resets_timer() {
        let mut fl = measuring();
        let mut s = SurfaceState::new(Extent::default());
        let change = apply_extent(&mut s, &mut fl, Extent::new(320, 240));
        assert_eq!(change, Some(VisibilityChange::Shown));
        assert_eq!(fl.frames_per_second(), 0.0);
    }

    #[test]
    fn visible_resize_keeps_timer() {
        let mut fl = measuring();
        let before = fl.frames_per_second();
        let mut s = SurfaceState::new(Extent::new(640, 480));
        assert_eq!(apply_extent(&mut s, &mut fl, Extent::new(800, 600)), None);
        assert_eq!(fl.frames_per_second(), before);
        assert!(s.recreate_pending());
    }

    // ── reset key ─────────────────────────────────────────────────────────

    #[test]
    fn reset_key_press_resets_timer() {
        let mut fl = measuring();
        assert!(apply_key(&mut fl, KeyCode::Space, space(), ElementState::Pressed, false));
        assert_eq!(fl.frames_per_second(), 0.0);
    }

    #[test]
    fn auto_repeat_is_ignored() {
        let mut fl = measuring();
        assert!(!apply_key(&mut fl, KeyCode::Space, space(), ElementState::Pressed, true));
        assert!(fl.frames_per_second() > 0.0);
    }

    #[test]
    fn release_is_ignored() {
        let mut fl = measuring();
        assert!(!apply_key(&mut fl, KeyCode::Space, space(), ElementState::Released, false));
        assert!(fl.frames_per_second() > 0.0);
    }

    #[test]
    fn other_key_is_ignored() {
        let mut fl = measuring();
        let key = PhysicalKey::Code(KeyCode::KeyR);
        assert!(!apply_key(&mut fl, KeyCode::Space, key, ElementState::Pressed, false));
        assert!(fl.frames_per_second() > 0.0);
    }

    #[test]
    fn configured_reset_key_is_honored() {
        let mut fl = measuring();
        let key = PhysicalKey::Code(KeyCode::KeyR);
        assert!(apply_key(&mut fl, KeyCode::KeyR, key, ElementState::Pressed, false));
        assert_eq!(fl.frames_per_second(), 0.0);
    }
}
