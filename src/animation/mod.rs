//! Frame driving and timing: the per-illustration loop, clocks, timer queue and easing.

mod clock;
mod ease;
mod frame_loop;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ease::{Ease, progress};
pub use frame_loop::{AnimationLoop, FrameRequest, RESIZE_DEBOUNCE_MS};
pub use timers::{Fired, TimerId, TimerQueue};
