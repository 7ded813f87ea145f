#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Bounds for history entry identifiers.
#[cfg(feature = "std")]
pub trait EntryKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> EntryKey for T {}

/// Bounds for history entry identifiers.
#[cfg(not(feature = "std"))]
pub trait EntryKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> EntryKey for T {}

#[cfg(feature = "std")]
pub type StateMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub type StateMap<K, V> = BTreeMap<K, V>;
