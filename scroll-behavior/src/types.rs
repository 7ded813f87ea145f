/// A viewport scroll offset pair.
///
/// Positions are plain values: every observation or restoration produces a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    /// Horizontal offset (`scrollX`).
    pub x: u64,
    /// Vertical offset (`scrollY`).
    pub y: u64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    pub const fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<[u64; 2]> for ScrollPosition {
    fn from([x, y]: [u64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(u64, u64)> for ScrollPosition {
    fn from((x, y): (u64, u64)) -> Self {
        Self { x, y }
    }
}

impl From<ScrollPosition> for [u64; 2] {
    fn from(p: ScrollPosition) -> Self {
        [p.x, p.y]
    }
}

/// How a transition changed the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// A new entry was pushed.
    Push,
    /// The current entry was swapped in place.
    Replace,
    /// Back/forward navigation to an existing entry.
    Pop,
}

/// The location reported by the history collaborator once a transition completes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location<K> {
    pub key: K,
    pub action: Action,
}

impl<K> Location<K> {
    pub fn new(key: K, action: Action) -> Self {
        Self { key, action }
    }

    pub fn push(key: K) -> Self {
        Self::new(key, Action::Push)
    }

    pub fn replace(key: K) -> Self {
        Self::new(key, Action::Replace)
    }

    pub fn pop(key: K) -> Self {
        Self::new(key, Action::Pop)
    }
}

/// A cancellable next-paint-frame request issued by a [`crate::FrameScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(pub u64);

/// A cancellable timeout issued by a [`crate::TimerScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);
