use scrollview::{BarPosition, ControllerOptions, HeadlessBar, ScrollState};
use scrollview_adapter::{
    FrameLoop, PointerEvent, ScrollView, ViewOptions, WheelEvent, WindowEvent, WindowListeners,
};

fn main() {
    // Example: a host owning one window and one scroll view.
    //
    // The host:
    // 1) routes element-level events (down/enter/wheel/touch) to the view
    // 2) routes window-level move/up only to views that currently listen for them
    // 3) runs frames while the view asks for them
    let window = WindowListeners::new();
    let mut view = ScrollView::with_options(
        "long document",
        HeadlessBar::with_state(BarPosition::Right, ScrollState::new(8_000.0, 700.0, 0.0)),
        &window,
        ControllerOptions::new().with_draggable(true),
        ViewOptions::default(),
    );
    let mut frames = FrameLoop::default();

    view.pointer_enter();
    view.pointer_down(PointerEvent::new(40.0, 600.0), frames.now_ms());
    println!(
        "window move listeners: {:?}",
        window.owners_of(WindowEvent::PointerMove)
    );

    let mut y = 600.0;
    for _ in 0..6 {
        frames.advance(16);
        y -= 25.0;
        // The cursor has left the view horizontally; the window binding still delivers it.
        if window.is_bound(view.listener_owner(), WindowEvent::PointerMove) {
            view.pointer_move(PointerEvent::new(-200.0, y), frames.now_ms());
        }
    }
    view.pointer_up(frames.now_ms());
    println!(
        "released: off={:.1} bindings={}",
        view.state().scrolled_offset(),
        window.len()
    );

    let ran = frames.run_until_idle(&mut view, 1_000);
    println!("momentum ran {ran} frames: off={:.1}", view.state().scrolled_offset());

    view.wheel(WheelEvent::lines(0.0, -3.0));
    frames.step(&mut view);
    println!(
        "after wheel: off={:.1} flashes={}",
        view.state().scrolled_offset(),
        view.element().bar.flash_count()
    );
}
