use crate::{FrameHandle, Location, TimerHandle};

/// The event surface shared by scroll strategies.
///
/// The host forwards viewport and history events here, in the order it observes them. The only
/// ordering the strategies rely on is that `on_before_transition` for a transition is delivered
/// before the matching `on_transition_complete`.
pub trait ScrollBehavior<K> {
    type Error;

    /// A native scroll event on the viewport.
    fn on_scroll(&mut self) {}

    /// A frame requested through the strategy's `FrameScheduler` fired.
    fn on_animation_frame(&mut self, handle: FrameHandle) -> Result<(), Self::Error> {
        let _ = handle;
        Ok(())
    }

    /// A timeout set through the strategy's `TimerScheduler` fired.
    fn on_timer(&mut self, handle: TimerHandle) -> Result<(), Self::Error> {
        let _ = handle;
        Ok(())
    }

    /// Delivered synchronously before the history collaborator commits a navigation.
    fn on_before_transition(&mut self);

    /// Delivered after a navigation of any kind completed.
    fn on_transition_complete(&mut self, location: &Location<K>) -> Result<(), Self::Error>;
}
