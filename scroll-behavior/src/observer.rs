use crate::{FrameHandle, FrameScheduler};

/// Coalesces raw scroll events onto the next animation frame.
///
/// Holds the single pending-write handle: while a frame request is outstanding, further scroll
/// events are dropped. The handle is cleared when its frame fires or when it is cancelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollObserver {
    pending: Option<FrameHandle>,
}

impl ScrollObserver {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a scroll event.
    ///
    /// Returns `true` if a new frame was requested, `false` if the event was coalesced into the
    /// outstanding request.
    pub fn on_scroll(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if let Some(_pending) = self.pending {
            strace!(handle = _pending.0, "ScrollObserver: coalesced");
            return false;
        }
        let handle = scheduler.request_frame();
        strace!(handle = handle.0, "ScrollObserver: frame requested");
        self.pending = Some(handle);
        true
    }

    /// Consumes the pending handle for a fired frame.
    ///
    /// Returns `false` for frames this observer is not waiting on (cancelled or foreign); the
    /// caller must not commit anything for those.
    pub fn take_fired(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            swarn!(
                handle = handle.0,
                pending = ?self.pending,
                "ScrollObserver: ignoring stale frame"
            );
            return false;
        }
        self.pending = None;
        true
    }

    /// Cancels the outstanding frame request, if any.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            sdebug!(handle = handle.0, "ScrollObserver: pending write cancelled");
            scheduler.cancel_frame(handle);
        }
    }
}
