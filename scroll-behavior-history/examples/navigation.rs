use std::convert::Infallible;

use scroll_behavior::{
    Location, MemoryStateStore, ScrollPosition, SimpleScrollOptions, StandardScrollOptions,
    TimerHandle, TimerScheduler, Viewport,
};
use scroll_behavior_history::{History, Navigation, use_simple_scroll, use_standard_scroll};

/// A bare history: every push gets a new key, `Go` walks the stack.
#[derive(Default)]
struct StackHistory {
    keys: Vec<u32>,
    index: usize,
    location: Option<Location<u32>>,
}

impl History for StackHistory {
    type Key = u32;
    type Error = Infallible;

    fn location(&self) -> Option<&Location<u32>> {
        self.location.as_ref()
    }

    fn transition(&mut self, navigation: Navigation) -> Result<Location<u32>, Infallible> {
        let location = match navigation {
            Navigation::Push(_) | Navigation::Replace(_) if self.keys.is_empty() => {
                self.keys.push(1);
                Location::push(1)
            }
            Navigation::Push(_) => {
                let key = self.keys.len() as u32 + 1;
                self.keys.truncate(self.index + 1);
                self.keys.push(key);
                self.index = self.keys.len() - 1;
                Location::push(key)
            }
            Navigation::Replace(_) => {
                let key = self.keys[self.index] + 1000;
                self.keys[self.index] = key;
                Location::replace(key)
            }
            Navigation::Go(delta) => {
                let last = self.keys.len().saturating_sub(1) as i64;
                self.index = (self.index as i64 + delta).clamp(0, last) as usize;
                Location::pop(self.keys[self.index])
            }
        };
        self.location = Some(location.clone());
        Ok(location)
    }
}

#[derive(Default)]
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

/// Frames and timers fire "immediately" in this demo: the host drains them after each event.
#[derive(Default)]
struct Queue {
    next: u64,
    due: Vec<u64>,
}

impl scroll_behavior::FrameScheduler for Queue {
    fn request_frame(&mut self) -> scroll_behavior::FrameHandle {
        self.next += 1;
        self.due.push(self.next);
        scroll_behavior::FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, handle: scroll_behavior::FrameHandle) {
        self.due.retain(|h| *h != handle.0);
    }
}

impl TimerScheduler for Queue {
    fn set_timeout(&mut self, _delay_ms: u64) -> TimerHandle {
        self.next += 1;
        self.due.push(self.next);
        TimerHandle(self.next)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.due.retain(|h| *h != handle.0);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let create = use_standard_scroll(
        |()| StackHistory::default(),
        || (MemoryStateStore::<u32>::new(), Window::default(), Queue::default()),
        StandardScrollOptions::new(),
    );
    let mut history = create(())?;

    history.push("/feed")?;
    history.behavior_mut().viewport_mut().position = ScrollPosition::new(0, 1_800);
    history.on_scroll();
    for handle in std::mem::take(&mut history.behavior_mut().frames_mut().due) {
        history.on_animation_frame(scroll_behavior::FrameHandle(handle))?;
    }

    history.push("/post/42")?;
    println!("post: {:?}", history.behavior().viewport().position);
    history.go_back()?;
    println!("back on feed: {:?}", history.behavior().viewport().position);

    let create = use_simple_scroll(
        |()| StackHistory::default(),
        || (Window::default(), Queue::default()),
        SimpleScrollOptions::new(),
    );
    let mut simple = create(())?;
    simple.behavior_mut().viewport_mut().position = ScrollPosition::new(0, 640);
    simple.push("/settings")?;
    while !simple.behavior().timers().due.is_empty() {
        for handle in std::mem::take(&mut simple.behavior_mut().timers_mut().due) {
            simple.on_timer(TimerHandle(handle))?;
        }
    }
    println!("simple reset: {:?}", simple.behavior().viewport().position);
    Ok(())
}
