use std::time::Duration;

use super::clock::{Clock, Stopwatch};

/// Window size used by `FrameTimer::default`.
pub const DEFAULT_WINDOW_SIZE: i64 = 30;

/// Windowed frames-per-second estimator.
///
/// The timer batches a fixed number of frames, measures the wall-clock span
/// they took and reports the ratio. The estimate is recomputed from scratch
/// every window; earlier windows are discarded. The reported rate therefore
/// updates only once every `window_size` frames.
///
/// Call order per rendered frame:
/// 1. `measure()` before rendering
/// 2. `update_frame_count()` after rendering
/// 3. `frames_per_second()` whenever a displayable rate is needed
///
/// Because `measure` runs before the frame is counted, the frame that closes a
/// window is attributed to the next one. In steady state every window holds
/// exactly `window_size` frames.
#[derive(Debug, Clone)]
pub struct FrameTimer<C: Clock = Stopwatch> {
    clock: C,

    window_size: u32,
    calls_remaining: u32,
    frames_in_window: u64,

    // Statistics of the most recently closed window. Zero until the first rollover.
    accumulated_frames: u64,
    accumulated_time_millis: u64,

    // Clock readings at the start and end of the current window.
    tick0: Duration,
    tick1: Duration,
}

impl FrameTimer<Stopwatch> {
    /// Creates a timer driven by the wall clock.
    ///
    /// A non-positive `window_size` is clamped to one.
    pub fn new(window_size: i64) -> Self {
        Self::with_clock(window_size, Stopwatch::new())
    }
}

impl Default for FrameTimer<Stopwatch> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl<C: Clock> FrameTimer<C> {
    /// Creates a timer driven by `clock`.
    pub fn with_clock(window_size: i64, clock: C) -> Self {
        let window_size = clamp_window_size(window_size);
        let mut timer = Self {
            clock,
            window_size,
            calls_remaining: window_size,
            frames_in_window: 0,
            accumulated_frames: 0,
            accumulated_time_millis: 0,
            tick0: Duration::ZERO,
            tick1: Duration::ZERO,
        };
        timer.reset();
        timer
    }

    /// Discards all progress and restarts measurement from now.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.calls_remaining = self.window_size;
        self.frames_in_window = 0;
        self.accumulated_frames = 0;
        self.accumulated_time_millis = 0;
        self.tick0 = self.clock.elapsed();
        self.tick1 = self.tick0;
    }

    /// Advances the window by one tick; closes it on the last one.
    pub fn measure(&mut self) {
        self.calls_remaining -= 1;
        if self.calls_remaining > 0 {
            return;
        }

        self.tick1 = self.clock.elapsed();
        let delta = self.tick1.saturating_sub(self.tick0);
        self.tick0 = self.tick1;

        // Overwrite, not accumulate: only the just-closed window is reported.
        self.accumulated_frames = self.frames_in_window;
        self.accumulated_time_millis = u64::try_from(delta.as_millis()).unwrap_or(u64::MAX);

        self.frames_in_window = 0;
        self.calls_remaining = self.window_size;

        log::trace!(
            "frame window closed: frames={} millis={}",
            self.accumulated_frames,
            self.accumulated_time_millis
        );
    }

    /// Records one rendered frame.
    pub fn update_frame_count(&mut self) {
        self.frames_in_window += 1;
    }

    /// Rate of the last closed window, or `0.0` if none has closed.
    pub fn frames_per_second(&self) -> f64 {
        if self.accumulated_time_millis > 0 {
            1000.0 * self.accumulated_frames as f64 / self.accumulated_time_millis as f64
        } else {
            0.0
        }
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn frames_in_window(&self) -> u64 {
        self.frames_in_window
    }

    pub fn accumulated_frames(&self) -> u64 {
        self.accumulated_frames
    }

    pub fn accumulated_time_millis(&self) -> u64 {
        self.accumulated_time_millis
    }
}

/// Non-positive sizes become one; sizes past `u32::MAX` saturate.
fn clamp_window_size(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}
