//! Scroll position restoration for client-side navigation.
//!
//! For attaching a strategy to a history object, see the `scroll-behavior-history` crate.
//!
//! This crate is a host-driven state machine. It holds no DOM objects; a host (wasm glue, a
//! terminal UI, a test harness) is expected to:
//! - forward viewport scroll events, fired animation frames and fired timeouts
//! - forward history notifications (before a transition, after it completed)
//! - implement the small collaborator traits in [`host`] plus a [`StateStore`]
//!
//! Two strategies are provided:
//! - [`StandardScrollBehavior`] records the offset of every history entry and restores it after
//!   each transition, like native browser restoration.
//! - [`SimpleScrollBehavior`] resets to the top on `PUSH`/`REPLACE` and trusts the browser on
//!   `POP`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behavior;
pub mod host;
mod key;
mod observer;
mod options;
mod restorer;
mod simple;
mod standard;
mod state;
mod stepper;
mod store;
mod types;


pub use behavior::ScrollBehavior;
pub use host::{FrameScheduler, TimerScheduler, Viewport};
pub use key::{EntryKey, StateMap};
pub use observer::ScrollObserver;
pub use options::{ShouldRestoreCallback, SimpleScrollOptions, StandardScrollOptions};
pub use restorer::restore;
pub use simple::SimpleScrollBehavior;
pub use standard::StandardScrollBehavior;
pub use state::{EntryState, PageState};
pub use stepper::{ScrollStepper, Step};
pub use store::{MemoryStateStore, StateStore, read_scroll_position, save_scroll_position};
pub use types::{Action, FrameHandle, Location, ScrollPosition, TimerHandle};
