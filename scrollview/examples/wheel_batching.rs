use scrollview::{BarPosition, HeadlessBar, ScrollController, ScrollState};

fn main() {
    // Example: wheel events between two frames collapse into one update.
    let bar = HeadlessBar::with_state(BarPosition::Right, ScrollState::new(2_000.0, 400.0, 0.0));
    let mut c = ScrollController::new(bar);
    c.on_scroll(|s| println!("scroll: off={}", s.scrolled_offset()));

    for delta in [3.0, 4.0, 5.0] {
        c.wheel_input(delta, 0.0);
    }
    println!("pending={:?}", c.pending_wheel());
    c.on_frame(16);

    // A mostly sideways trackpad swipe is dropped as a whole.
    c.wheel_input(2.0, 10.0);
    c.on_frame(32);
    println!("after sideways swipe: off={}", c.state().scrolled_offset());
}
