use anyhow::Result;

use crate::time::{Clock, FrameTimer, Stopwatch};

/// Drives one render step per composition tick and keeps the frame timer in step.
///
/// Each call to `run_frame` performs, in order: `measure` → render →
/// `update_frame_count` → `frames_per_second`. A failed render is not counted.
#[derive(Debug)]
pub struct FrameLoop<C: Clock = Stopwatch> {
    timer: FrameTimer<C>,
    frames_rendered: u64,
}

impl FrameLoop<Stopwatch> {
    pub fn new(window_size: i64) -> Self {
        Self::with_timer(FrameTimer::new(window_size))
    }
}

impl<C: Clock> FrameLoop<C> {
    pub fn with_timer(timer: FrameTimer<C>) -> Self {
        Self {
            timer,
            frames_rendered: 0,
        }
    }

    /// Runs `render` inside the timing bracket and returns the current rate.
    pub fn run_frame<F>(&mut self, render: F) -> Result<f64>
    where
        F: FnOnce() -> Result<()>,
    {
        self.timer.measure();
        render()?;
        self.timer.update_frame_count();
        self.frames_rendered = self.frames_rendered.wrapping_add(1);
        Ok(self.timer.frames_per_second())
    }

    /// Restarts windowed measurement.
    pub fn reset(&mut self) {
        log::debug!("frame timer reset after {} frames", self.frames_rendered);
        self.timer.reset();
    }

    pub fn frames_per_second(&self) -> f64 {
        self.timer.frames_per_second()
    }

    /// Total successful frames since creation; not affected by `reset`.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn timer(&self) -> &FrameTimer<C> {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn frame_loop(window: i64) -> (FrameLoop<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let timer = FrameTimer::with_clock(window, clock.clone());
        (FrameLoop::with_timer(timer), clock)
    }

    #[test]
    fn successful_frame_is_counted() {
        let (mut fl, _) = frame_loop(4);
        let rate = fl.run_frame(|| Ok(())).unwrap();
        assert_eq!(rate, 0.0);
        assert_eq!(fl.frames_rendered(), 1);
        assert_eq!(fl.timer().frames_in_window(), 1);
    }

    #[test]
    fn failed_frame_is_not_counted() {
        let (mut fl, _) = frame_loop(4);
        let err = fl.run_frame(|| Err(anyhow::anyhow!("device removed"))).unwrap_err();
        assert_eq!(err.to_string(), "device removed");
        assert_eq!(fl.frames_rendered(), 0);
        assert_eq!(fl.timer().frames_in_window(), 0);
    }

    #[test]
    fn closing_frame_belongs_to_next_window() {
        let (mut fl, _) = frame_loop(2);
        fl.run_frame(|| Ok(())).unwrap();
        fl.run_frame(|| Ok(())).unwrap();
        // The second tick closed the window before its own frame was counted.
        assert_eq!(fl.timer().accumulated_frames(), 1);
        assert_eq!(fl.timer().frames_in_window(), 1);
    }

    #[test]
    fn steady_state_windows_hold_full_frame_count() {
        let (mut fl, clock) = frame_loop(5);
        let mut rate = 0.0;
        for _ in 0..10 {
            clock.advance_millis(10);
            rate = fl.run_frame(|| Ok(())).unwrap();
        }
        // Second window: 5 frames over 50 ms.
        assert_eq!(fl.timer().accumulated_frames(), 5);
        assert_eq!(rate, 100.0);
    }

    #[test]
    fn reset_returns_to_zero_rate() {
        let (mut fl, clock) = frame_loop(3);
        for _ in 0..4 {
            clock.advance_millis(10);
            fl.run_frame(|| Ok(())).unwrap();
        }
        assert!(fl.frames_per_second() > 0.0);
        fl.reset();
        assert_eq!(fl.frames_per_second(), 0.0);
        assert_eq!(fl.frames_rendered(), 4);
    }
}
