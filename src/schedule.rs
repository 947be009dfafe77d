// schedule.rs - Frame scheduling seam
//
// A running field asks for exactly one future tick at the end of each tick.
// Whoever implements this decides when that tick happens.

pub trait FrameScheduler {
    /// Ask for one more call to `tick`.
    fn request_frame(&mut self);

    /// Withdraw a pending request, if the backend supports it.
    fn cancel(&mut self) {}
}

/// Host-polled scheduler: records the request for the host loop to pick up.
#[derive(Debug, Default)]
pub struct NextFrame {
    pending: bool,
    requested: u64,
}

impl NextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool { self.pending }

    /// Total requests ever made
    pub fn requested(&self) -> u64 { self.requested }
}

impl FrameScheduler for NextFrame {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requested += 1;
    }

    fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_pending() {
        let mut s = NextFrame::new();
        assert!(!s.take());
        s.request_frame();
        assert!(s.is_pending());
        assert!(s.take());
        assert!(!s.take());
        assert_eq!(s.requested(), 1);
    }

    #[test]
    fn cancel_drops_pending_request() {
        let mut s = NextFrame::new();
        s.request_frame();
        s.cancel();
        assert!(!s.is_pending());
        assert_eq!(s.requested(), 1);
    }
}
