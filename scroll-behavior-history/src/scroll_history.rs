use core::convert::Infallible;
use core::ops::Deref;

use scroll_behavior::{
    FrameHandle, FrameScheduler, Location, ScrollBehavior, SimpleScrollBehavior,
    SimpleScrollOptions, StandardScrollBehavior, StandardScrollOptions, StateStore, TimerHandle,
    TimerScheduler, Viewport,
};

use crate::{History, Navigation, ScrollHistoryError};

/// A history object with a scroll strategy attached.
///
/// Implements [`History`] itself, so it can be used wherever the wrapped history was, and derefs
/// to it for anything beyond the trait. Transitions committed through [`History::transition`]
/// notify the strategy automatically. Transitions the host observes on its own (a browser back
/// button) are reported through [`ScrollHistory::before_transition`] and
/// [`ScrollHistory::transition_complete`].
#[derive(Clone, Debug)]
pub struct ScrollHistory<H, B> {
    history: H,
    behavior: B,
}

impl<H, B> ScrollHistory<H, B>
where
    H: History,
    B: ScrollBehavior<H::Key>,
{
    /// Attaches `behavior` to `history`.
    ///
    /// If the history already shows an entry, the strategy adopts it as if a transition to it had
    /// just completed, so scrolls on the landing page are recorded and restored like any other.
    pub fn new(history: H, mut behavior: B) -> Result<Self, B::Error> {
        if let Some(location) = history.location() {
            hdebug!(action = ?location.action, "ScrollHistory: adopting initial location");
            behavior.on_transition_complete(location)?;
        }
        Ok(Self { history, behavior })
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    pub fn into_parts(self) -> (H, B) {
        (self.history, self.behavior)
    }

    /// Forward a native viewport scroll event.
    pub fn on_scroll(&mut self) {
        self.behavior.on_scroll();
    }

    /// Forward a fired animation frame.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) -> Result<(), B::Error> {
        self.behavior.on_animation_frame(handle)
    }

    /// Forward a fired timeout.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Result<(), B::Error> {
        self.behavior.on_timer(handle)
    }

    /// Report a transition the history is about to commit outside of [`History::transition`].
    pub fn before_transition(&mut self) {
        self.behavior.on_before_transition();
    }

    /// Report a transition committed outside of [`History::transition`].
    pub fn transition_complete(&mut self, location: &Location<H::Key>) -> Result<(), B::Error> {
        self.behavior.on_transition_complete(location)
    }
}

impl<H, B> History for ScrollHistory<H, B>
where
    H: History,
    B: ScrollBehavior<H::Key>,
{
    type Key = H::Key;
    type Error = ScrollHistoryError<H::Error, B::Error>;

    fn location(&self) -> Option<&Location<H::Key>> {
        self.history.location()
    }

    fn transition(&mut self, navigation: Navigation) -> Result<Location<H::Key>, Self::Error> {
        self.behavior.on_before_transition();
        let location = self
            .history
            .transition(navigation)
            .map_err(ScrollHistoryError::History)?;
        hdebug!(action = ?location.action, "ScrollHistory: transition committed");
        self.behavior
            .on_transition_complete(&location)
            .map_err(ScrollHistoryError::Scroll)?;
        Ok(location)
    }
}

impl<H, B> Deref for ScrollHistory<H, B> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.history
    }
}

/// Turns a history factory into one that attaches a scroll strategy to every history it creates.
///
/// `create_behavior` is called once per created history, so instances never share state. The
/// returned factory fails if the strategy cannot adopt the history's initial location.
pub fn use_scroll<O, H, B>(
    create_history: impl Fn(O) -> H,
    create_behavior: impl Fn() -> B,
) -> impl Fn(O) -> Result<ScrollHistory<H, B>, B::Error>
where
    H: History,
    B: ScrollBehavior<H::Key>,
{
    move |options| ScrollHistory::new(create_history(options), create_behavior())
}

/// [`use_scroll`] with a [`StandardScrollBehavior`] built from the collaborators `host` returns.
#[allow(clippy::type_complexity)]
pub fn use_standard_scroll<O, H, S, V, F>(
    create_history: impl Fn(O) -> H,
    host: impl Fn() -> (S, V, F),
    options: StandardScrollOptions<H::Key>,
) -> impl Fn(O) -> Result<ScrollHistory<H, StandardScrollBehavior<H::Key, S, V, F>>, S::Error>
where
    H: History,
    H::Key: Clone,
    S: StateStore<H::Key>,
    V: Viewport,
    F: FrameScheduler,
{
    use_scroll(create_history, move || {
        let (store, viewport, frames) = host();
        StandardScrollBehavior::with_options(store, viewport, frames, options.clone())
    })
}

/// [`use_scroll`] with a [`SimpleScrollBehavior`] built from the collaborators `host` returns.
pub fn use_simple_scroll<O, H, V, T>(
    create_history: impl Fn(O) -> H,
    host: impl Fn() -> (V, T),
    options: SimpleScrollOptions,
) -> impl Fn(O) -> Result<ScrollHistory<H, SimpleScrollBehavior<V, T>>, Infallible>
where
    H: History,
    V: Viewport,
    T: TimerScheduler,
{
    use_scroll(create_history, move || {
        let (viewport, timers) = host();
        SimpleScrollBehavior::with_options(viewport, timers, options)
    })
}
