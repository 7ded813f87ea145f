//! Property-based invariant tests for scroll recording and restoration.
//!
//! 1. At most one frame request is outstanding at any time.
//! 2. Every store write is caused by a distinct fired frame.
//! 3. No frame request survives a completed transition.
//! 4. Writes only ever land under the active entry, with the viewport offset of that moment.
//! 5. `restore` is idempotent for unchanged store contents.
//! 6. The stepper reaches its target from any start offset, for any tick size and decay.

use std::collections::HashMap;
use std::convert::Infallible;

use proptest::prelude::*;
use scroll_behavior::{
    FrameHandle, FrameScheduler, Location, MemoryStateStore, PageState, ScrollBehavior,
    ScrollPosition, ScrollStepper, SimpleScrollOptions, StandardScrollBehavior, StateStore, Step,
    Viewport, read_scroll_position, save_scroll_position,
};

// ── Host doubles ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Window {
    position: ScrollPosition,
}

impl Viewport for Window {
    fn scroll_position(&self) -> ScrollPosition {
        self.position
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.position = position;
    }
}

#[derive(Debug, Default)]
struct Frames {
    next: u64,
    pending: Vec<FrameHandle>,
    max_pending: usize,
}

impl FrameScheduler for Frames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push(handle);
        self.max_pending = self.max_pending.max(self.pending.len());
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

#[derive(Debug, Default)]
struct Store {
    inner: MemoryStateStore<u8>,
    writes: Vec<(u8, ScrollPosition)>,
}

impl StateStore<u8> for Store {
    type State = PageState;
    type Error = Infallible;

    fn read_state(&self, key: &u8) -> Result<Option<PageState>, Infallible> {
        self.inner.read_state(key)
    }

    fn save_state(&mut self, key: &u8, state: PageState) -> Result<(), Infallible> {
        if let Some(p) = state.scroll_position {
            self.writes.push((*key, p));
        }
        self.inner.save_state(key, state)
    }
}

#[derive(Clone, Debug)]
enum Op {
    Scroll(u64),
    Frame,
    Navigate(u8),
    ScrollDuringNavigate(u8, u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..5_000).prop_map(Op::Scroll),
        3 => Just(Op::Frame),
        1 => (0u8..4).prop_map(Op::Navigate),
        1 => ((0u8..4), (0u64..5_000)).prop_map(|(k, y)| Op::ScrollDuringNavigate(k, y)),
    ]
}

type Behavior = StandardScrollBehavior<u8, Store, Window, Frames>;

fn behavior() -> Behavior {
    StandardScrollBehavior::new(Store::default(), Window::default(), Frames::default())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–4. Event interleavings
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interleavings_keep_write_invariants(ops in proptest::collection::vec(op(), 1..200)) {
        let mut b = behavior();
        let mut fired = 0usize;
        let mut expected: Vec<(u8, ScrollPosition)> = Vec::new();

        for op in ops {
            match op {
                Op::Scroll(y) => {
                    b.viewport_mut().position = ScrollPosition::new(0, y);
                    b.on_scroll();
                }
                Op::Frame => {
                    let due = std::mem::take(&mut b.frames_mut().pending);
                    for handle in due {
                        fired += 1;
                        if let Some(active) = b.active_key().copied() {
                            expected.push((active, b.viewport().scroll_position()));
                        }
                        b.on_animation_frame(handle).unwrap();
                    }
                }
                Op::Navigate(k) => {
                    b.on_before_transition();
                    prop_assert!(b.pending_frame().is_none());
                    b.on_transition_complete(&Location::push(k)).unwrap();
                    prop_assert!(b.frames().pending.is_empty());
                }
                Op::ScrollDuringNavigate(k, y) => {
                    b.on_before_transition();
                    b.viewport_mut().position = ScrollPosition::new(0, y);
                    b.on_scroll();
                    b.on_transition_complete(&Location::pop(k)).unwrap();
                    prop_assert!(b.frames().pending.is_empty());
                }
            }
            prop_assert!(b.frames().pending.len() <= 1);
        }

        prop_assert!(b.frames().max_pending <= 1);
        prop_assert!(b.store().writes.len() <= fired);
        prop_assert_eq!(&b.store().writes, &expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Restore idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn restore_is_idempotent(
        saved in proptest::collection::hash_map(0u8..8, (0u64..10_000, 0u64..10_000), 0..8),
        key in 0u8..8,
    ) {
        let mut b = behavior();
        for (k, (x, y)) in &saved {
            save_scroll_position(b.store_mut(), k, ScrollPosition::new(*x, *y)).unwrap();
        }
        let first = b.restore(&key).unwrap();
        let second = b.restore(&key).unwrap();
        prop_assert_eq!(first, second);

        let lookup: HashMap<u8, (u64, u64)> = saved;
        let want = lookup
            .get(&key)
            .map(|&p| ScrollPosition::from(p))
            .unwrap_or(ScrollPosition::ORIGIN);
        prop_assert_eq!(b.viewport().scroll_position(), want);
        prop_assert_eq!(
            read_scroll_position(b.store(), &key).unwrap(),
            lookup.get(&key).map(|&p| ScrollPosition::from(p))
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Stepper convergence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stepper_converges(
        x in 0u64..100_000,
        y in 0u64..100_000,
        duration_ms in 1u64..2_000,
        tick_ms in 1u64..100,
        decay in 2u64..1_000,
    ) {
        let opts = SimpleScrollOptions::new()
            .with_duration_ms(duration_ms)
            .with_tick_ms(tick_ms)
            .with_decay(decay);
        let mut stepper = ScrollStepper::new(&opts).unwrap();
        let mut cur = ScrollPosition::new(x, y);
        let mut ticks = 0;
        let mut last_delay = stepper.delay_ms();
        loop {
            ticks += 1;
            prop_assert!(ticks < 64, "stepper did not terminate");
            match stepper.step(cur) {
                Step::Continue { position, delay_ms } => {
                    prop_assert!(delay_ms >= 1 && delay_ms <= tick_ms);
                    prop_assert!(delay_ms <= last_delay);
                    last_delay = delay_ms;
                    cur = position;
                }
                Step::Done(position) => {
                    cur = position;
                    break;
                }
            }
        }
        prop_assert_eq!(cur, ScrollPosition::ORIGIN);
    }
}
