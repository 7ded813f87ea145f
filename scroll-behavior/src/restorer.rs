use crate::store::read_scroll_position;
use crate::{ScrollPosition, StateStore, Viewport};

/// Applies the scroll position saved for `key`, or `fallback` when none was saved.
///
/// Idempotent for unchanged store contents. Returns the applied position.
pub fn restore<K, S: StateStore<K>>(
    store: &S,
    viewport: &mut impl Viewport,
    key: &K,
    fallback: ScrollPosition,
) -> Result<ScrollPosition, S::Error> {
    let position = read_scroll_position(store, key)?.unwrap_or(fallback);
    viewport.scroll_to(position);
    sdebug!(x = position.x, y = position.y, "restore: applied");
    Ok(position)
}
