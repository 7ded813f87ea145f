use alloc::string::String;

use crate::ScrollPosition;
use crate::key::StateMap;

/// Per-entry state kept by a [`crate::StateStore`].
///
/// The state is owned by the application; scroll tracking only ever touches the scroll position
/// and must hand every other field back unchanged.
pub trait EntryState: Default {
    fn scroll_position(&self) -> Option<ScrollPosition>;

    fn set_scroll_position(&mut self, position: ScrollPosition);
}

/// A general-purpose [`EntryState`]: a scroll position plus free-form string fields written by
/// other collaborators (form drafts, tab selections, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    pub scroll_position: Option<ScrollPosition>,
    pub fields: StateMap<String, String>,
}

impl PageState {
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl EntryState for PageState {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        self.scroll_position
    }

    fn set_scroll_position(&mut self, position: ScrollPosition) {
        self.scroll_position = Some(position);
    }
}

impl EntryState for Option<ScrollPosition> {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        *self
    }

    fn set_scroll_position(&mut self, position: ScrollPosition) {
        *self = Some(position);
    }
}
