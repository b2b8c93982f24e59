use alloc::boxed::Box;

use crate::emitter::ScrollEmitter;
use crate::{
    Bar, ControllerOptions, GestureState, ListenerId, Momentum, Orientation, ScrollState,
    Subscription, VelocityTracker,
};

#[derive(Clone, Debug)]
struct Drag {
    start_coord: f64,
    start_offset: f64,
    tracker: VelocityTracker,
}

/// Wheel deltas accumulated between two frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelBatch {
    pub axis: f64,
    pub cross: f64,
    /// Number of wheel events folded into this batch.
    pub events: u32,
}

/// Turns drag, touch and wheel input into one scroll state, with momentum after release.
///
/// This type holds no UI objects and no clock. The host drives it by:
/// - forwarding input as scroll-axis coordinates (`drag_*`) and deltas (`wheel_input`)
/// - calling `on_frame(now_ms)` once per rendered frame while `needs_frame()` is true
///
/// At most one motion source is active at a time: a drag and a momentum motion never
/// coexist, and starting either one stops the other. Out-of-sequence input (a move without
/// a start, a second start while dragging, ...) is ignored and reported by a `false` return.
///
/// "Scroll" listeners run synchronously inside the call that changed the state.
#[derive(Debug)]
pub struct ScrollController<B> {
    bar: B,
    options: ControllerOptions,
    drag: Option<Drag>,
    momentum: Option<Momentum>,
    wheel: Option<WheelBatch>,
    gesture_scope: Option<Subscription>,
    listeners: ScrollEmitter,
}

impl<B: Bar> ScrollController<B> {
    pub fn new(bar: B) -> Self {
        Self::with_options(bar, ControllerOptions::default())
    }

    pub fn with_options(bar: B, options: ControllerOptions) -> Self {
        sdebug!(
            draggable = options.draggable,
            velocity_window_ms = options.velocity_window_ms,
            "ScrollController::new"
        );
        Self {
            bar,
            options,
            drag: None,
            momentum: None,
            wheel: None,
            gesture_scope: None,
            listeners: ScrollEmitter::default(),
        }
    }

    pub fn bar(&self) -> &B {
        &self.bar
    }

    /// Direct access to the bar.
    ///
    /// State written through this bypasses "scroll" notifications and does not cancel
    /// momentum; use [`ScrollController::set_state`] for that.
    pub fn bar_mut(&mut self) -> &mut B {
        &mut self.bar
    }

    pub fn into_bar(self) -> B {
        self.bar
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Replaces the options. An in-progress drag or momentum keeps the settings it started
    /// with.
    pub fn set_options(&mut self, options: ControllerOptions) {
        if options.cross_axis_ratio.is_nan() || options.cross_axis_ratio < 0.0 {
            swarn!(
                cross_axis_ratio = options.cross_axis_ratio,
                "cross_axis_ratio is negative or NaN; every wheel batch will be dropped"
            );
        }
        self.options = options;
        sdebug!(
            draggable = self.options.draggable,
            cross_axis_ratio = self.options.cross_axis_ratio,
            "ScrollController::set_options"
        );
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut ControllerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn orientation(&self) -> Orientation {
        self.bar.orientation()
    }

    pub fn layout(&mut self) {
        self.bar.layout();
    }

    pub fn state(&self) -> ScrollState {
        self.bar.state()
    }

    /// Replaces the scroll state from outside the controller.
    ///
    /// This always cancels momentum. An in-progress drag is left alone and keeps scrolling
    /// relative to the offset it started from. Writing the current state again raises no
    /// "scroll".
    pub fn set_state(&mut self, state: ScrollState) {
        self.cancel_momentum();
        if state == self.state() {
            strace!("set_state ignored: unchanged");
            return;
        }
        self.apply_state(state);
    }

    pub fn draggable(&self) -> bool {
        self.options.draggable
    }

    /// Gates new drag gestures. A drag that is already in progress is not interrupted.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.options.draggable = draggable;
    }

    pub fn gesture(&self) -> GestureState {
        if self.drag.is_some() {
            GestureState::Dragging
        } else {
            GestureState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.momentum.as_ref().is_some_and(Momentum::is_running)
    }

    pub fn momentum(&self) -> Option<&Momentum> {
        self.momentum.as_ref()
    }

    /// The wheel batch waiting for the next frame, if any.
    pub fn pending_wheel(&self) -> Option<WheelBatch> {
        self.wheel
    }

    pub fn on_scroll(&mut self, listener: impl FnMut(&ScrollState) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Starts a drag at `coord` (already projected onto the scroll axis).
    ///
    /// Returns `false` without side effects when dragging is disabled, a drag is already in
    /// progress, or `coord` is not finite. Otherwise cancels any momentum and records the
    /// starting coordinate and offset.
    pub fn drag_start(&mut self, coord: f64, now_ms: u64) -> bool {
        if !self.options.draggable {
            strace!(coord, "drag_start ignored: not draggable");
            return false;
        }
        if self.drag.is_some() {
            strace!(coord, "drag_start ignored: already dragging");
            return false;
        }
        if !coord.is_finite() {
            return false;
        }

        self.cancel_momentum();
        let start_offset = self.state().scrolled_offset();
        strace!(coord, start_offset, now_ms, "drag_start");
        self.drag = Some(Drag {
            start_coord: coord,
            start_offset,
            tracker: VelocityTracker::starting_at(
                now_ms,
                coord,
                self.options.velocity_window_ms,
                self.options.max_velocity_samples,
            ),
        });
        true
    }

    /// Ties `scope` to the current drag; it is released when the drag ends.
    ///
    /// Without a drag in progress the scope is released immediately and `false` is returned.
    /// Binding a second scope during the same drag releases the first.
    pub fn bind_gesture_scope(&mut self, scope: Subscription) -> bool {
        if self.drag.is_none() {
            scope.release();
            return false;
        }
        if let Some(prev) = self.gesture_scope.replace(scope) {
            prev.release();
        }
        true
    }

    /// Moves the content so it follows the pointer: the offset moves opposite to the
    /// coordinate, relative to where the drag started.
    pub fn drag_move(&mut self, coord: f64, now_ms: u64) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            strace!(coord, "drag_move ignored: not dragging");
            return false;
        };
        if !coord.is_finite() {
            return false;
        }

        drag.tracker.push_sample(now_ms, coord);
        let offset = drag.start_offset - (coord - drag.start_coord);
        strace!(coord, offset, now_ms, "drag_move");

        let state = self.state();
        self.apply_state(state.with_scrolled_offset(offset));
        self.bar.flash();
        true
    }

    /// Ends the drag, releases its gesture scope, and starts momentum if the release
    /// velocity is non-zero.
    ///
    /// Hosts should route abnormal terminations (touch cancel, lost capture) here too.
    pub fn drag_end(&mut self, now_ms: u64) -> bool {
        let Some(drag) = self.drag.take() else {
            strace!("drag_end ignored: not dragging");
            return false;
        };
        if let Some(scope) = self.gesture_scope.take() {
            scope.release();
        }

        let velocity = drag.tracker.velocity_at(now_ms);
        strace!(velocity, now_ms, "drag_end");
        if velocity.abs() > self.options.momentum.min_start() {
            // Content keeps moving the way it was dragged, so the offset velocity is negated.
            self.start_momentum(-velocity, now_ms);
        }
        true
    }

    /// Starts momentum with an offset `velocity` (px/ms), as if a drag had just been
    /// released.
    ///
    /// Returns `false` while a drag is in progress or for a zero/non-finite velocity.
    pub fn fling(&mut self, velocity: f64, now_ms: u64) -> bool {
        if self.drag.is_some() || !velocity.is_finite() || velocity == 0.0 {
            return false;
        }
        self.start_momentum(velocity, now_ms);
        true
    }

    fn start_momentum(&mut self, velocity: f64, now_ms: u64) {
        debug_assert!(self.drag.is_none(), "momentum must not start during a drag");
        self.cancel_momentum();
        let offset = self.state().scrolled_offset();
        let mut momentum = Momentum::new(velocity, offset, &self.options.momentum);
        momentum.start(now_ms);
        sdebug!(velocity, offset, now_ms, "momentum start");
        self.momentum = Some(momentum);
    }

    /// Stops any running momentum. Returns `true` if one was running.
    pub fn cancel_momentum(&mut self) -> bool {
        match self.momentum.take() {
            Some(mut m) => m.cancel(),
            None => false,
        }
    }

    /// Queues wheel/trackpad deltas for the next frame.
    ///
    /// Deltas accumulate until `on_frame`, which applies them as a single update. Returns
    /// `false` for non-finite deltas.
    pub fn wheel_input(&mut self, axis_delta: f64, cross_axis_delta: f64) -> bool {
        if !axis_delta.is_finite() || !cross_axis_delta.is_finite() {
            return false;
        }
        let batch = self.wheel.get_or_insert_with(WheelBatch::default);
        batch.axis += axis_delta;
        batch.cross += cross_axis_delta;
        batch.events = batch.events.saturating_add(1);
        true
    }

    /// Call when the bar raises its own "scroll" (e.g. the user dragged the thumb).
    ///
    /// Cancels momentum and re-raises "scroll" to this controller's listeners.
    pub fn bar_scrolled(&mut self) {
        self.cancel_momentum();
        let state = self.state();
        self.listeners.emit(&state);
    }

    /// Whether the host should schedule another frame.
    pub fn needs_frame(&self) -> bool {
        self.wheel.is_some() || self.is_animating()
    }

    /// Runs one frame: applies the pending wheel batch, then advances momentum.
    pub fn on_frame(&mut self, now_ms: u64) {
        self.flush_wheel();
        self.step_momentum(now_ms);
    }

    fn flush_wheel(&mut self) {
        let Some(batch) = self.wheel.take() else {
            return;
        };
        if self.drag.is_some() {
            strace!(events = batch.events, "wheel batch dropped: dragging");
            return;
        }
        if batch.cross.abs() > batch.axis.abs() * self.options.cross_axis_ratio {
            strace!(
                axis = batch.axis,
                cross = batch.cross,
                "wheel batch dropped: cross-axis"
            );
            return;
        }

        self.cancel_momentum();
        let state = self.state();
        let mut offset = state.scrolled_offset() + batch.axis;
        if self.options.clamp_wheel {
            offset = state.clamp_offset(offset);
        }
        strace!(
            axis = batch.axis,
            events = batch.events,
            offset,
            "wheel batch applied"
        );
        self.apply_state(state.with_scrolled_offset(offset));
        self.bar.flash();
    }

    fn step_momentum(&mut self, now_ms: u64) {
        let Some(tick) = self.momentum.as_mut().and_then(|m| m.tick(now_ms)) else {
            self.momentum = None;
            return;
        };

        let state = self.state();
        if !state.contains_offset(tick.offset) {
            strace!(
                offset = tick.offset,
                max = state.max_scrolled_offset(),
                "momentum hit bounds"
            );
            self.cancel_momentum();
            return;
        }

        self.apply_state(state.with_scrolled_offset(tick.offset));
        if tick.done {
            self.momentum = None;
        }
    }

    /// Writes `next` through the bar and raises "scroll".
    fn apply_state(&mut self, next: ScrollState) {
        self.bar.set_state(next);
        let current = self.bar.state();
        self.listeners.emit(&current);
    }
}
