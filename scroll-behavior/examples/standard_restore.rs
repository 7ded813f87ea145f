use scroll_behavior::{
    FrameHandle, FrameScheduler, Location, MemoryStateStore, ScrollBehavior, ScrollPosition,
    StandardScrollBehavior, Viewport,
};

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

#[derive(Default)]
struct Frames {
    next: u64,
    due: Vec<FrameHandle>,
}

impl FrameScheduler for Frames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        self.due.push(FrameHandle(self.next));
        FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.due.retain(|h| *h != handle);
    }
}

type Behavior =
    StandardScrollBehavior<&'static str, MemoryStateStore<&'static str>, Window, Frames>;

fn navigate(b: &mut Behavior, location: Location<&'static str>) {
    b.on_before_transition();
    b.on_transition_complete(&location).unwrap();
    println!("{location:?} -> viewport {:?}", b.viewport().scroll_position());
}

fn run_frames(b: &mut Behavior) {
    for handle in std::mem::take(&mut b.frames_mut().due) {
        b.on_animation_frame(handle).unwrap();
    }
}

fn main() {
    // A host would forward `scroll` events, `requestAnimationFrame` callbacks and history
    // notifications. Here the loop is simulated by hand.
    let mut b: Behavior =
        StandardScrollBehavior::new(MemoryStateStore::new(), Window::default(), Frames::default());

    navigate(&mut b, Location::push("article"));

    // A scroll burst: three events, one frame, one write.
    for y in [120, 260, 400] {
        b.viewport_mut().position = ScrollPosition::new(0, y);
        b.on_scroll();
    }
    run_frames(&mut b);
    println!("saved for article: {:?}", b.store().get(&"article"));

    navigate(&mut b, Location::push("comments"));
    navigate(&mut b, Location::pop("article"));
}
