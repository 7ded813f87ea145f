use alloc::rc::Rc;
use core::cell::RefCell;
use core::convert::Infallible;

use crate::key::{EntryKey, StateMap};
use crate::{EntryState, PageState, ScrollPosition};

/// The per-entry state storage owned by the history collaborator.
///
/// Reads and writes are synchronous. Failures are not recovered locally: they are returned to
/// whoever forwarded the triggering event.
pub trait StateStore<K> {
    type State: EntryState;
    type Error;

    /// Returns the state saved for `key`, or `None` if nothing was saved yet.
    fn read_state(&self, key: &K) -> Result<Option<Self::State>, Self::Error>;

    fn save_state(&mut self, key: &K, state: Self::State) -> Result<(), Self::Error>;
}

/// Lets the scroll behavior and the history collaborator share one store.
impl<K, S: StateStore<K>> StateStore<K> for Rc<RefCell<S>> {
    type State = S::State;
    type Error = S::Error;

    fn read_state(&self, key: &K) -> Result<Option<Self::State>, Self::Error> {
        self.borrow().read_state(key)
    }

    fn save_state(&mut self, key: &K, state: Self::State) -> Result<(), Self::Error> {
        self.borrow_mut().save_state(key, state)
    }
}

/// An in-memory [`StateStore`] that lives as long as the page does.
#[derive(Clone, Debug)]
pub struct MemoryStateStore<K, T = PageState> {
    entries: StateMap<K, T>,
}

impl<K: EntryKey, T: EntryState + Clone> MemoryStateStore<K, T> {
    pub fn new() -> Self {
        Self {
            entries: StateMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, state: T) -> Option<T> {
        self.entries.insert(key, state)
    }

    pub fn remove(&mut self, key: &K) -> Option<T> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: EntryKey, T: EntryState + Clone> Default for MemoryStateStore<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntryKey, T: EntryState + Clone> StateStore<K> for MemoryStateStore<K, T> {
    type State = T;
    type Error = Infallible;

    fn read_state(&self, key: &K) -> Result<Option<T>, Infallible> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_state(&mut self, key: &K, state: T) -> Result<(), Infallible> {
        self.entries.insert(key.clone(), state);
        Ok(())
    }
}

/// Reads the scroll position saved for `key`.
///
/// Missing state and state without a scroll position both yield `Ok(None)`.
pub fn read_scroll_position<K, S: StateStore<K>>(
    store: &S,
    key: &K,
) -> Result<Option<ScrollPosition>, S::Error> {
    Ok(store
        .read_state(key)?
        .and_then(|state| state.scroll_position()))
}

/// Merges `position` into the state saved for `key` and writes the whole state back.
///
/// Fields other than the scroll position are preserved.
pub fn save_scroll_position<K, S: StateStore<K>>(
    store: &mut S,
    key: &K,
    position: ScrollPosition,
) -> Result<(), S::Error> {
    let mut state = store.read_state(key)?.unwrap_or_default();
    state.set_scroll_position(position);
    store.save_state(key, state)
}
