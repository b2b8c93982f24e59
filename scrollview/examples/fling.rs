use scrollview::{BarPosition, ControllerOptions, HeadlessBar, ScrollController, ScrollState};

fn main() {
    // Example: a drag followed by a fast release keeps scrolling until momentum decays.
    //
    // A host would:
    // - forward pointer/touch coordinates (projected onto the bar's axis) to drag_*
    // - call on_frame(now_ms) once per rendered frame while needs_frame() is true
    let bar = HeadlessBar::with_state(
        BarPosition::Right,
        ScrollState::new(10_000.0, 600.0, 2_000.0),
    );
    let mut c = ScrollController::with_options(bar, ControllerOptions::new().with_draggable(true));
    c.on_scroll(|s| {
        if s.scrolled_offset() as u64 % 50 == 0 {
            println!("scroll: off={:.1}", s.scrolled_offset());
        }
    });

    // Finger moves up 30px every 16ms: content follows, offset grows.
    let mut now_ms = 0u64;
    let mut y = 500.0;
    c.drag_start(y, now_ms);
    for _ in 0..5 {
        now_ms += 16;
        y -= 30.0;
        c.drag_move(y, now_ms);
    }
    c.drag_end(now_ms);
    println!(
        "released at off={:.1} momentum={:?}",
        c.state().scrolled_offset(),
        c.momentum().map(|m| m.velocity())
    );

    let mut frames = 0;
    while c.needs_frame() {
        now_ms += 16;
        frames += 1;
        c.on_frame(now_ms);
    }

    println!(
        "settled after {frames} frames: off={:.1} max={:.1}",
        c.state().scrolled_offset(),
        c.state().max_scrolled_offset()
    );
}
