use crate::*;

use alloc::rc::Rc;
use core::cell::Cell;

use scrollview::{BarPosition, ControllerOptions, HeadlessBar, ScrollState};

fn view(
    window: &WindowListeners,
    position: BarPosition,
    state: ScrollState,
) -> ScrollView<HeadlessBar, &'static str> {
    ScrollView::with_options(
        "content",
        HeadlessBar::with_state(position, state),
        window,
        ControllerOptions::new().with_draggable(true),
        ViewOptions::default(),
    )
}

fn offset<C>(v: &ScrollView<HeadlessBar, C>) -> f64 {
    v.state().scrolled_offset()
}

#[test]
fn pointer_drag_binds_window_listeners_for_the_gesture() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));
    let owner = v.listener_owner();
    assert!(window.is_empty());

    assert!(v.pointer_down(PointerEvent::new(10.0, 100.0), 0));
    assert!(window.is_bound(owner, WindowEvent::PointerMove));
    assert!(window.is_bound(owner, WindowEvent::PointerUp));
    assert_eq!(window.owners_of(WindowEvent::PointerMove), [owner]);

    // Vertical bar: only `y` matters, even far outside the view.
    assert!(v.pointer_move(PointerEvent::new(5000.0, 60.0), 16));
    assert_eq!(offset(&v), 90.0);

    assert!(v.pointer_up(20));
    assert!(window.is_empty());
    assert!(!v.pointer_move(PointerEvent::new(0.0, 0.0), 30));
    assert!(!v.pointer_up(40));
    assert_eq!(offset(&v), 90.0);
}

#[test]
fn horizontal_view_follows_x() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Bottom, ScrollState::new(1000.0, 200.0, 50.0));
    v.pointer_down(PointerEvent::new(100.0, 7.0), 0);
    v.pointer_move(PointerEvent::new(60.0, 999.0), 16);
    assert_eq!(offset(&v), 90.0);
}

#[test]
fn pointer_down_is_ignored_when_not_draggable() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));
    v.set_draggable(false);
    assert!(!v.pointer_down(PointerEvent::new(0.0, 100.0), 0));
    assert!(window.is_empty());
    assert!(!v.pointer_move(PointerEvent::new(0.0, 10.0), 16));
    assert_eq!(offset(&v), 50.0);
}

#[test]
fn each_view_owns_its_bindings() {
    let window = WindowListeners::new();
    let mut a = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));
    let b = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));
    assert_ne!(a.listener_owner(), b.listener_owner());

    a.pointer_down(PointerEvent::new(0.0, 0.0), 0);
    assert!(window.is_bound(a.listener_owner(), WindowEvent::PointerUp));
    assert!(!window.is_bound(b.listener_owner(), WindowEvent::PointerUp));
}

#[test]
fn dropping_a_view_mid_drag_releases_its_bindings() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));
    v.pointer_down(PointerEvent::new(0.0, 0.0), 0);
    assert_eq!(window.len(), 2);
    drop(v);
    assert!(window.is_empty());
}

#[test]
fn wheel_axes_follow_the_bar_orientation() {
    let window = WindowListeners::new();

    let mut vertical = view(&window, BarPosition::Left, ScrollState::new(1000.0, 200.0, 50.0));
    vertical.wheel(WheelEvent::pixels(10.0, 2.0));
    vertical.on_frame(16);
    assert_eq!(offset(&vertical), 50.0);

    let mut horizontal = view(&window, BarPosition::Top, ScrollState::new(1000.0, 200.0, 50.0));
    horizontal.wheel(WheelEvent::pixels(10.0, 2.0));
    horizontal.on_frame(16);
    assert_eq!(offset(&horizontal), 60.0);
}

#[test]
fn wheel_lines_and_pages_scale_to_pixels() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));

    v.wheel(WheelEvent::lines(0.0, 3.0));
    v.on_frame(16);
    assert_eq!(offset(&v), 48.0);

    v.wheel(WheelEvent::pages(0.0, 1.0));
    v.on_frame(32);
    assert_eq!(offset(&v), 248.0);

    v.set_options(ViewOptions::default().with_line_height(20.0));
    v.wheel(WheelEvent::lines(0.0, -2.0));
    v.on_frame(48);
    assert_eq!(offset(&v), 208.0);
}

#[test]
fn wheel_events_between_frames_raise_one_scroll() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));
    let scrolls = Rc::new(Cell::new(0usize));
    let s = Rc::clone(&scrolls);
    v.on_scroll(move |_| s.set(s.get() + 1));

    let mut frames = FrameLoop::new(16);
    for dy in [3.0, 4.0, 5.0] {
        v.wheel(WheelEvent::pixels(0.0, dy));
    }
    assert!(frames.step(&mut v));
    assert!(!frames.step(&mut v));
    assert_eq!(frames.frames(), 1);
    assert_eq!(offset(&v), 12.0);
    assert_eq!(scrolls.get(), 1);
}

#[test]
fn touch_drag_tracks_only_its_own_touch() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));

    assert!(v.touch_start(&[TouchPoint::new(7, 0.0, 100.0)], 0));
    assert!(!v.touch_start(&[TouchPoint::new(8, 0.0, 300.0)], 5));
    assert!(!v.touch_move(&[TouchPoint::new(8, 0.0, 0.0)], 10));
    assert_eq!(offset(&v), 50.0);

    assert!(v.touch_move(
        &[TouchPoint::new(8, 0.0, 0.0), TouchPoint::new(7, 0.0, 60.0)],
        16
    ));
    assert_eq!(offset(&v), 90.0);

    assert!(!v.touch_end(&[TouchPoint::new(8, 0.0, 0.0)], 20));
    assert!(v.controller().is_dragging());
    assert!(v.touch_end(&[TouchPoint::new(7, 0.0, 60.0)], 500));
    assert!(!v.controller().is_dragging());
    // Touch drags never bind window listeners.
    assert!(window.is_empty());
}

#[test]
fn touch_cancel_ends_the_gesture() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));
    v.touch_start(&[TouchPoint::new(1, 0.0, 100.0)], 0);
    v.touch_move(&[TouchPoint::new(1, 0.0, 90.0)], 16);
    assert!(v.touch_cancel(400));
    assert!(!v.controller().is_dragging());
    assert!(!v.touch_move(&[TouchPoint::new(1, 0.0, 0.0)], 420));
    assert!(!v.touch_cancel(430));
    assert_eq!(offset(&v), 60.0);
}

#[test]
fn pointer_and_touch_do_not_mix() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));
    assert!(v.pointer_down(PointerEvent::new(0.0, 100.0), 0));
    assert!(!v.touch_start(&[TouchPoint::new(1, 0.0, 0.0)], 5));
    assert!(!v.touch_cancel(6));
    assert!(v.controller().is_dragging());
    assert!(v.pointer_up(10));
    assert!(!v.controller().is_dragging());

    assert!(v.touch_start(&[TouchPoint::new(1, 0.0, 0.0)], 20));
    assert!(!v.pointer_up(30));
    assert!(v.controller().is_dragging());
}

#[test]
fn stale_gesture_source_is_forgotten() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 50.0));
    v.touch_start(&[TouchPoint::new(1, 0.0, 0.0)], 0);
    v.controller_mut().drag_end(10);
    assert!(v.pointer_down(PointerEvent::new(0.0, 0.0), 20));
}

#[test]
fn pointer_enter_flashes_the_bar() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(1000.0, 200.0, 0.0));
    v.pointer_enter();
    assert_eq!(v.element().bar.flash_count(), 1);
}

#[test]
fn element_composes_content_and_bar() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Left, ScrollState::new(1000.0, 200.0, 0.0));
    let el = v.element();
    assert_eq!(*el.content, "content");
    assert_eq!(el.bar.position(), BarPosition::Left);

    v.layout();
    assert_eq!(v.element().bar.layout_count(), 1);
}

#[test]
fn frame_loop_drives_momentum_until_idle() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(10_000.0, 500.0, 1000.0));
    let mut frames = FrameLoop::new(16);

    v.pointer_down(PointerEvent::new(0.0, 400.0), frames.now_ms());
    frames.advance(16);
    v.pointer_move(PointerEvent::new(0.0, 380.0), frames.now_ms());
    frames.advance(16);
    v.pointer_move(PointerEvent::new(0.0, 360.0), frames.now_ms());
    frames.advance(8);
    v.pointer_up(frames.now_ms());
    assert_eq!(offset(&v), 1040.0);
    assert!(v.controller().is_animating());

    let ran = frames.run_until_idle(&mut v, 10_000);
    assert!(ran > 0);
    assert!(ran < 10_000);
    assert!(!v.needs_frame());
    assert!(offset(&v) > 1040.0);
    assert!(!frames.step(&mut v));
}

#[test]
fn frame_loop_stops_as_soon_as_momentum_is_cancelled() {
    let window = WindowListeners::new();
    let mut v = view(&window, BarPosition::Right, ScrollState::new(10_000.0, 500.0, 1000.0));
    let mut frames = FrameLoop::default();

    assert!(v.controller_mut().fling(2.0, frames.now_ms()));
    assert!(frames.step(&mut v));
    v.set_state(ScrollState::new(10_000.0, 500.0, 0.0));
    assert!(!frames.step(&mut v));
    assert_eq!(frames.frames(), 1);
    assert_eq!(offset(&v), 0.0);
}
