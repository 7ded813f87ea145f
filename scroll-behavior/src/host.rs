//! Host collaborators.
//!
//! The state machines in this crate never touch a real window. The host implements these traits
//! on top of whatever it drives (`web-sys`, a terminal, a test double) and forwards the matching
//! callbacks back: a fired frame to `on_animation_frame`, a fired timeout to `on_timer`.
use crate::{FrameHandle, ScrollPosition, TimerHandle};

/// The top-level scrollable viewport.
pub trait Viewport {
    fn scroll_position(&self) -> ScrollPosition;

    /// Applies both axes at once; no frame may observe only one of them updated.
    fn scroll_to(&mut self, position: ScrollPosition);
}

/// Next-paint-frame scheduling (`requestAnimationFrame`).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a frame request. Cancelling a handle that already fired or was already cancelled
    /// must be a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Delayed callbacks (`setTimeout`).
pub trait TimerScheduler {
    fn set_timeout(&mut self, delay_ms: u64) -> TimerHandle;

    /// Same contract as [`FrameScheduler::cancel_frame`].
    fn clear_timeout(&mut self, handle: TimerHandle);
}
