use core::convert::Infallible;

use crate::{
    Action, Location, ScrollBehavior, ScrollStepper, SimpleScrollOptions, Step, TimerHandle,
    TimerScheduler, Viewport,
};

/// Scrolls back to the top on `PUSH` and `REPLACE`, and leaves `POP` to the browser.
///
/// Nothing is recorded. This works well with synchronous transitions on browsers that move the
/// viewport only after announcing the location change; it works less well with asynchronous
/// transitions or browsers that scroll first.
///
/// The reset is animated with a [`ScrollStepper`] driven by the host's timers.
#[derive(Clone, Debug)]
pub struct SimpleScrollBehavior<V, T> {
    viewport: V,
    timers: T,
    options: SimpleScrollOptions,
    animation: Option<(TimerHandle, ScrollStepper)>,
}

impl<V: Viewport, T: TimerScheduler> SimpleScrollBehavior<V, T> {
    pub fn new(viewport: V, timers: T) -> Self {
        Self::with_options(viewport, timers, SimpleScrollOptions::new())
    }

    pub fn with_options(viewport: V, timers: T, options: SimpleScrollOptions) -> Self {
        Self {
            viewport,
            timers,
            options,
            animation: None,
        }
    }

    pub fn options(&self) -> &SimpleScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SimpleScrollOptions) {
        self.options = options;
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn into_parts(self) -> (V, T) {
        (self.viewport, self.timers)
    }

    pub fn cancel_animation(&mut self) {
        if let Some((handle, _)) = self.animation.take() {
            sdebug!(handle = handle.0, "SimpleScrollBehavior: animation cancelled");
            self.timers.clear_timeout(handle);
        }
    }

    /// Starts (or restarts) the animated reset toward the configured target.
    pub fn start_animation(&mut self) {
        self.cancel_animation();
        let Some(stepper) = ScrollStepper::new(&self.options) else {
            return;
        };
        let handle = self.timers.set_timeout(stepper.delay_ms());
        sdebug!(
            duration_ms = self.options.duration_ms,
            handle = handle.0,
            "SimpleScrollBehavior: animation started"
        );
        self.animation = Some((handle, stepper));
    }

    /// Runs one animation tick for a fired timeout. Foreign or stale handles are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        let Some((pending, mut stepper)) = self.animation.take() else {
            return;
        };
        if pending != handle {
            swarn!(handle = handle.0, pending = pending.0, "SimpleScrollBehavior: stale timer");
            self.animation = Some((pending, stepper));
            return;
        }

        let step = stepper.step(self.viewport.scroll_position());
        self.viewport.scroll_to(step.position());
        match step {
            Step::Continue { delay_ms, .. } => {
                let next = self.timers.set_timeout(delay_ms);
                self.animation = Some((next, stepper));
            }
            Step::Done(_position) => {
                sdebug!(
                    x = _position.x,
                    y = _position.y,
                    "SimpleScrollBehavior: animation finished"
                );
            }
        }
    }

    /// A running animation would fight the incoming transition, so it is dropped.
    pub fn on_before_transition(&mut self) {
        self.cancel_animation();
    }

    pub fn on_transition_complete<K>(&mut self, location: &Location<K>) {
        if location.action == Action::Pop {
            strace!("SimpleScrollBehavior: POP left to the browser");
            return;
        }
        self.start_animation();
    }
}

impl<K, V: Viewport, T: TimerScheduler> ScrollBehavior<K> for SimpleScrollBehavior<V, T> {
    type Error = Infallible;

    fn on_timer(&mut self, handle: TimerHandle) -> Result<(), Infallible> {
        SimpleScrollBehavior::on_timer(self, handle);
        Ok(())
    }

    fn on_before_transition(&mut self) {
        SimpleScrollBehavior::on_before_transition(self);
    }

    fn on_transition_complete(&mut self, location: &Location<K>) -> Result<(), Infallible> {
        SimpleScrollBehavior::on_transition_complete(self, location);
        Ok(())
    }
}
