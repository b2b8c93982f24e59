use scrollview::{Bar, ControllerOptions, ListenerId, ScrollController, ScrollState};

use crate::{
    DeltaMode, ListenerOwner, PointerEvent, TouchPoint, WheelEvent, WindowEvent, WindowListeners,
};

/// Host-side settings for a [`ScrollView`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewOptions {
    /// Pixels per line for [`DeltaMode::Line`] wheel deltas.
    pub line_height: f64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { line_height: 16.0 }
    }
}

impl ViewOptions {
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}

/// The composed visual node: the scrolled content plus its bar.
#[derive(Debug)]
pub struct Element<'a, C, B> {
    pub content: &'a C,
    pub bar: &'a B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputSource {
    Pointer,
    Touch(u64),
}

/// A scrollable surface: content, a bar, and the controller wiring host input to both.
///
/// Raw pointer, touch and wheel events go in; the view projects them onto the bar's axis and
/// forwards them to its [`ScrollController`]. A pointer drag binds window-wide move/up
/// listeners through [`WindowListeners`] for exactly the lifetime of the gesture.
///
/// Only one input source drives a gesture at a time. Touches other than the one that started
/// the gesture are ignored.
#[derive(Debug)]
pub struct ScrollView<B, C> {
    content: C,
    controller: ScrollController<B>,
    window: WindowListeners,
    owner: ListenerOwner,
    options: ViewOptions,
    source: Option<InputSource>,
}

impl<B: Bar, C> ScrollView<B, C> {
    pub fn new(content: C, bar: B, window: &WindowListeners) -> Self {
        Self::with_options(
            content,
            bar,
            window,
            ControllerOptions::default(),
            ViewOptions::default(),
        )
    }

    pub fn with_options(
        content: C,
        bar: B,
        window: &WindowListeners,
        controller_options: ControllerOptions,
        options: ViewOptions,
    ) -> Self {
        Self {
            content,
            controller: ScrollController::with_options(bar, controller_options),
            window: window.clone(),
            owner: window.register_owner(),
            options,
            source: None,
        }
    }

    pub fn element(&self) -> Element<'_, C, B> {
        Element {
            content: &self.content,
            bar: self.controller.bar(),
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn controller(&self) -> &ScrollController<B> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollController<B> {
        &mut self.controller
    }

    pub fn listener_owner(&self) -> ListenerOwner {
        self.owner
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options;
    }

    pub fn layout(&mut self) {
        self.controller.layout();
    }

    pub fn state(&self) -> ScrollState {
        self.controller.state()
    }

    pub fn set_state(&mut self, state: ScrollState) {
        self.controller.set_state(state);
    }

    pub fn draggable(&self) -> bool {
        self.controller.draggable()
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.controller.set_draggable(draggable);
    }

    pub fn on_scroll(&mut self, listener: impl FnMut(&ScrollState) + 'static) -> ListenerId {
        self.controller.on_scroll(listener)
    }

    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.controller.remove_scroll_listener(id)
    }

    fn axis(&self, x: f64, y: f64) -> f64 {
        self.controller.orientation().main(x, y)
    }

    /// The pointer entered the view's bounds.
    pub fn pointer_enter(&mut self) {
        self.controller.bar_mut().flash();
    }

    pub fn pointer_down(&mut self, event: PointerEvent, now_ms: u64) -> bool {
        self.forget_stale_source();
        if self.source.is_some() {
            return false;
        }
        let coord = self.axis(event.x, event.y);
        if !self.controller.drag_start(coord, now_ms) {
            return false;
        }
        let scope = self.window.bind(
            self.owner,
            &[WindowEvent::PointerMove, WindowEvent::PointerUp],
        );
        self.controller.bind_gesture_scope(scope);
        self.source = Some(InputSource::Pointer);
        atrace!(coord, now_ms, "pointer drag started");
        true
    }

    /// A window-level pointer move. Ignored unless this view's drag bound it.
    pub fn pointer_move(&mut self, event: PointerEvent, now_ms: u64) -> bool {
        if self.source != Some(InputSource::Pointer)
            || !self.window.is_bound(self.owner, WindowEvent::PointerMove)
        {
            return false;
        }
        let coord = self.axis(event.x, event.y);
        self.controller.drag_move(coord, now_ms)
    }

    /// A window-level pointer release.
    pub fn pointer_up(&mut self, now_ms: u64) -> bool {
        if self.source != Some(InputSource::Pointer) {
            return false;
        }
        self.end_gesture(now_ms)
    }

    /// Starts a drag from the first listed touch, unless a gesture is already running.
    pub fn touch_start(&mut self, touches: &[TouchPoint], now_ms: u64) -> bool {
        self.forget_stale_source();
        if self.source.is_some() {
            return false;
        }
        let Some(touch) = touches.first() else {
            return false;
        };
        let coord = self.axis(touch.x, touch.y);
        if !self.controller.drag_start(coord, now_ms) {
            return false;
        }
        self.source = Some(InputSource::Touch(touch.id));
        atrace!(id = touch.id, coord, now_ms, "touch drag started");
        true
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint], now_ms: u64) -> bool {
        let Some(touch) = self.tracked_touch(touches) else {
            return false;
        };
        let coord = self.axis(touch.x, touch.y);
        self.controller.drag_move(coord, now_ms)
    }

    /// `changed` lists the touches that were lifted.
    pub fn touch_end(&mut self, changed: &[TouchPoint], now_ms: u64) -> bool {
        if self.tracked_touch(changed).is_none() {
            return false;
        }
        self.end_gesture(now_ms)
    }

    /// The host cancelled the touch sequence. Ends the gesture through the normal release
    /// path.
    pub fn touch_cancel(&mut self, now_ms: u64) -> bool {
        if !matches!(self.source, Some(InputSource::Touch(_))) {
            return false;
        }
        self.end_gesture(now_ms)
    }

    // The controller may have ended the drag on its own (e.g. `controller_mut().drag_end`).
    fn forget_stale_source(&mut self) {
        if !self.controller.is_dragging() {
            self.source = None;
        }
    }

    fn tracked_touch(&self, touches: &[TouchPoint]) -> Option<TouchPoint> {
        let Some(InputSource::Touch(id)) = self.source else {
            return None;
        };
        touches.iter().copied().find(|t| t.id == id)
    }

    fn end_gesture(&mut self, now_ms: u64) -> bool {
        self.source = None;
        atrace!(now_ms, "gesture ended");
        self.controller.drag_end(now_ms)
    }

    /// Queues a wheel event. Horizontal bars take `delta_x` as the scroll-axis delta,
    /// vertical bars take `delta_y`.
    pub fn wheel(&mut self, event: WheelEvent) -> bool {
        let scale = match event.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => self.options.line_height,
            DeltaMode::Page => self.controller.state().visible_extent(),
        };
        let dx = event.delta_x * scale;
        let dy = event.delta_y * scale;
        let orientation = self.controller.orientation();
        self.controller
            .wheel_input(orientation.main(dx, dy), orientation.cross(dx, dy))
    }

    pub fn needs_frame(&self) -> bool {
        self.controller.needs_frame()
    }

    pub fn on_frame(&mut self, now_ms: u64) {
        self.controller.on_frame(now_ms);
    }
}
