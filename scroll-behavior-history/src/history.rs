use alloc::string::String;

use scroll_behavior::Location;

/// A navigation request understood by a [`History`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Navigation {
    Push(String),
    Replace(String),
    /// Moves through the existing entries, e.g. `-1` for "back".
    Go(i64),
}

/// The history-tracking collaborator.
///
/// Implementations own entry identifiers and classify every transition as `PUSH`, `REPLACE` or
/// `POP`. A transition is synchronous: when `transition` returns, the location change is
/// committed.
pub trait History {
    type Key;
    type Error;

    /// The current location, or `None` before the first transition.
    fn location(&self) -> Option<&Location<Self::Key>>;

    fn transition(&mut self, navigation: Navigation) -> Result<Location<Self::Key>, Self::Error>;

    fn push(&mut self, path: impl Into<String>) -> Result<Location<Self::Key>, Self::Error>
    where
        Self: Sized,
    {
        self.transition(Navigation::Push(path.into()))
    }

    fn replace(&mut self, path: impl Into<String>) -> Result<Location<Self::Key>, Self::Error>
    where
        Self: Sized,
    {
        self.transition(Navigation::Replace(path.into()))
    }

    fn go(&mut self, delta: i64) -> Result<Location<Self::Key>, Self::Error> {
        self.transition(Navigation::Go(delta))
    }

    fn go_back(&mut self) -> Result<Location<Self::Key>, Self::Error> {
        self.go(-1)
    }

    fn go_forward(&mut self) -> Result<Location<Self::Key>, Self::Error> {
        self.go(1)
    }
}
