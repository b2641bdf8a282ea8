/// Quiet period before a burst of resize notifications triggers a re-layout.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// One armed display-refresh request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    pub seq: u64,
}

/// Per-illustration frame driver.
///
/// The host pulls [`AnimationLoop::take_frame`] once per display refresh; a request is
/// re-armed after each take while the loop runs. Resize notifications are coalesced and
/// surface through [`AnimationLoop::take_resize`] after [`RESIZE_DEBOUNCE_MS`] of quiet.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    running: bool,
    pending: Option<FrameRequest>,
    next_seq: u64,
    resize_due: Option<f64>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the first frame. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.arm();
        true
    }

    /// Cancel the pending frame and any pending resize. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.pending = None;
        self.resize_due = None;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Hand out the armed request and re-arm the next one.
    pub fn take_frame(&mut self) -> Option<FrameRequest> {
        if !self.running {
            return None;
        }
        let req = self.pending.take()?;
        self.arm();
        Some(req)
    }

    /// Restart the debounce window. Ignored while stopped.
    pub fn notify_resize(&mut self, now: f64) {
        if self.running {
            self.resize_due = Some(now + RESIZE_DEBOUNCE_MS);
        }
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_due.is_some()
    }

    /// `true` exactly once when the debounce window has elapsed.
    pub fn take_resize(&mut self, now: f64) -> bool {
        match self.resize_due {
            Some(due) if now >= due => {
                self.resize_due = None;
                true
            }
            _ => false,
        }
    }

    /// Number of frame requests armed so far.
    pub fn frames_armed(&self) -> u64 {
        self.next_seq
    }

    fn arm(&mut self) {
        self.pending = Some(FrameRequest { seq: self.next_seq });
        self.next_seq += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame_loop.rs"]
mod tests;
