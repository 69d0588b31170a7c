//! Time subsystem.
//!
//! Frame-rate measurement decoupled from the runtime:
//! - `Clock` abstracts the monotonic time source so timing can be replayed in tests
//! - `FrameTimer` turns per-frame `measure` / `update_frame_count` calls into a
//!   windowed frames-per-second estimate

mod clock;
mod frame_timer;

pub use clock::{Clock, ManualClock, Stopwatch};
pub use frame_timer::{FrameTimer, DEFAULT_WINDOW_SIZE};
