use crate::surface::Outbox;

/// Coalesces bursts of update requests into one callback per display frame.
///
/// The in-flight flag is cleared only after the frame work has run, so the
/// work always reads the live state at frame time and the final sample before
/// the input goes idle is never dropped.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    in_flight: bool,
}

impl FrameScheduler {
    /// Returns true when this call requested a new frame from the host.
    pub fn request(&mut self, out: &mut Outbox) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        out.request_frame();
        true
    }

    /// Runs `work` if a frame was requested. Unrequested frames are ignored.
    pub fn run_frame<T>(&mut self, work: impl FnOnce() -> T) -> Option<T> {
        if !self.in_flight {
            return None;
        }
        let result = work();
        self.in_flight = false;
        Some(result)
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
