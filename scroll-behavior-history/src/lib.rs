//! History integration for the `scroll-behavior` crate.
//!
//! The `scroll-behavior` crate only knows about events. This crate wires a strategy to a history
//! collaborator:
//!
//! - [`History`]: the minimal surface a history object has to offer
//! - [`ScrollHistory`]: a history with a strategy attached, with the same [`History`] surface
//! - [`use_scroll`], [`use_standard_scroll`], [`use_simple_scroll`]: turn a history factory into
//!   a factory of [`ScrollHistory`] values
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod history;
mod scroll_history;


pub use error::ScrollHistoryError;
pub use history::{History, Navigation};
pub use scroll_history::{ScrollHistory, use_scroll, use_simple_scroll, use_standard_scroll};
