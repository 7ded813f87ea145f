use alloc::sync::Arc;

use crate::{Location, ScrollPosition};

/// A hook deciding whether a completed transition should restore the viewport.
///
/// Returning `false` still makes the new entry active (later scrolls are recorded under it), but
/// leaves the viewport where it is. Useful for in-page anchor navigation.
pub type ShouldRestoreCallback<K> = Arc<dyn Fn(&Location<K>) -> bool + Send + Sync>;

/// Configuration for [`crate::StandardScrollBehavior`].
pub struct StandardScrollOptions<K> {
    /// Applied when the entry has no saved scroll position.
    pub default_position: ScrollPosition,
    pub should_restore: Option<ShouldRestoreCallback<K>>,
}

impl<K> StandardScrollOptions<K> {
    pub fn new() -> Self {
        Self {
            default_position: ScrollPosition::ORIGIN,
            should_restore: None,
        }
    }

    pub fn with_default_position(mut self, default_position: ScrollPosition) -> Self {
        self.default_position = default_position;
        self
    }

    pub fn with_should_restore(
        mut self,
        should_restore: Option<impl Fn(&Location<K>) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.should_restore = should_restore.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn wants_restore(&self, location: &Location<K>) -> bool {
        self.should_restore.as_ref().is_none_or(|f| f(location))
    }
}

impl<K> Default for StandardScrollOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for StandardScrollOptions<K> {
    fn clone(&self) -> Self {
        Self {
            default_position: self.default_position,
            should_restore: self.should_restore.clone(),
        }
    }
}

impl<K> core::fmt::Debug for StandardScrollOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StandardScrollOptions")
            .field("default_position", &self.default_position)
            .field("should_restore", &self.should_restore.is_some())
            .finish()
    }
}

/// Configuration for [`crate::SimpleScrollBehavior`] and its [`crate::ScrollStepper`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleScrollOptions {
    /// Nominal animation duration. `0` disables the animation.
    pub duration_ms: u64,
    /// Nominal tick size; also the longest delay between two ticks.
    pub tick_ms: u64,
    /// Divisor applied to the remaining duration after each tick.
    pub decay: u64,
    pub target: ScrollPosition,
}

impl SimpleScrollOptions {
    pub const fn new() -> Self {
        Self {
            duration_ms: 100,
            tick_ms: 10,
            decay: 4,
            target: ScrollPosition::ORIGIN,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Values below 2 are raised to 2 so the remaining duration always shrinks.
    pub fn with_decay(mut self, decay: u64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_target(mut self, target: ScrollPosition) -> Self {
        self.target = target;
        self
    }
}

impl Default for SimpleScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}
