use crate::store::save_scroll_position;
use crate::{
    FrameHandle, FrameScheduler, Location, ScrollBehavior, ScrollObserver, ScrollPosition,
    StandardScrollOptions, StateStore, Viewport, restore,
};

/// Records the viewport offset per history entry and replays it after every transition.
///
/// This imitates native browser scroll restoration for client-side navigation:
/// - scroll events are coalesced onto the next animation frame, then committed under the
///   active entry
/// - a pending commit is cancelled before a transition starts, so a scroll caused by the
///   outgoing transition is never attributed to the entry being left
/// - after a transition completes, the new entry becomes active and its saved offset (or the
///   default position) is applied; scrolls seen while the transition was in flight are dropped
///
/// Browsers differ in whether they move the viewport before or after announcing a `POP`; that
/// asymmetry is tolerated, not corrected.
#[derive(Clone, Debug)]
pub struct StandardScrollBehavior<K, S, V, F> {
    store: S,
    viewport: V,
    frames: F,
    observer: ScrollObserver,
    active: Option<K>,
    options: StandardScrollOptions<K>,
}

impl<K, S, V, F> StandardScrollBehavior<K, S, V, F>
where
    K: Clone,
    S: StateStore<K>,
    V: Viewport,
    F: FrameScheduler,
{
    pub fn new(store: S, viewport: V, frames: F) -> Self {
        Self::with_options(store, viewport, frames, StandardScrollOptions::new())
    }

    pub fn with_options(
        store: S,
        viewport: V,
        frames: F,
        options: StandardScrollOptions<K>,
    ) -> Self {
        Self {
            store,
            viewport,
            frames,
            observer: ScrollObserver::new(),
            active: None,
            options,
        }
    }

    pub fn options(&self) -> &StandardScrollOptions<K> {
        &self.options
    }

    pub fn set_options(&mut self, options: StandardScrollOptions<K>) {
        self.options = options;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// The entry scroll is currently attributed to. `None` until the first transition completes.
    pub fn active_key(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.observer.pending()
    }

    pub fn into_parts(self) -> (S, V, F) {
        (self.store, self.viewport, self.frames)
    }

    /// Applies the position saved for `key` (or the default position). Returns what was applied.
    pub fn restore(&mut self, key: &K) -> Result<ScrollPosition, S::Error> {
        restore(
            &self.store,
            &mut self.viewport,
            key,
            self.options.default_position,
        )
    }

    fn commit(&mut self) -> Result<(), S::Error> {
        let Some(key) = self.active.as_ref() else {
            strace!("StandardScrollBehavior: no active entry, scroll ignored");
            return Ok(());
        };
        let position = self.viewport.scroll_position();
        save_scroll_position(&mut self.store, key, position)?;
        strace!(x = position.x, y = position.y, "StandardScrollBehavior: committed");
        Ok(())
    }
}

impl<K, S, V, F> ScrollBehavior<K> for StandardScrollBehavior<K, S, V, F>
where
    K: Clone,
    S: StateStore<K>,
    V: Viewport,
    F: FrameScheduler,
{
    type Error = S::Error;

    fn on_scroll(&mut self) {
        self.observer.on_scroll(&mut self.frames);
    }

    fn on_animation_frame(&mut self, handle: FrameHandle) -> Result<(), S::Error> {
        if !self.observer.take_fired(handle) {
            return Ok(());
        }
        self.commit()
    }

    fn on_before_transition(&mut self) {
        self.observer.cancel(&mut self.frames);
    }

    fn on_transition_complete(&mut self, location: &Location<K>) -> Result<(), S::Error> {
        // A scroll seen after `on_before_transition` belongs to neither entry.
        self.observer.cancel(&mut self.frames);
        self.active = Some(location.key.clone());
        sdebug!(action = ?location.action, "StandardScrollBehavior: transition complete");
        if !self.options.wants_restore(location) {
            strace!("StandardScrollBehavior: restore skipped");
            return Ok(());
        }
        self.restore(&location.key)?;
        Ok(())
    }
}
