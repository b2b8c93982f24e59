use scrollview::{Bar, ScrollController};

use crate::ScrollView;

/// Something that does work once per rendered frame.
pub trait FrameDriven {
    fn needs_frame(&self) -> bool;

    fn on_frame(&mut self, now_ms: u64);
}

impl<B: Bar> FrameDriven for ScrollController<B> {
    fn needs_frame(&self) -> bool {
        ScrollController::needs_frame(self)
    }

    fn on_frame(&mut self, now_ms: u64) {
        ScrollController::on_frame(self, now_ms);
    }
}

impl<B: Bar, C> FrameDriven for ScrollView<B, C> {
    fn needs_frame(&self) -> bool {
        ScrollView::needs_frame(self)
    }

    fn on_frame(&mut self, now_ms: u64) {
        ScrollView::on_frame(self, now_ms);
    }
}

/// A fixed-rate stand-in for the host's frame pacing (e.g. `requestAnimationFrame`).
///
/// Frames are only produced when the target asks for one, and the request is re-checked
/// right before each frame runs, so a motion cancelled between frames never sees another
/// callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLoop {
    now_ms: u64,
    frame_interval_ms: u64,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(16)
    }
}

impl FrameLoop {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self::starting_at(0, frame_interval_ms)
    }

    pub fn starting_at(now_ms: u64, frame_interval_ms: u64) -> Self {
        Self {
            now_ms,
            frame_interval_ms: frame_interval_ms.max(1),
            frames: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Total frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Lets time pass without rendering (e.g. between input events).
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now_ms = self.now_ms.saturating_add(ms);
        self.now_ms
    }

    /// Runs one frame if `target` wants one. Returns whether a frame ran.
    pub fn step(&mut self, target: &mut impl FrameDriven) -> bool {
        if !target.needs_frame() {
            return false;
        }
        self.now_ms = self.now_ms.saturating_add(self.frame_interval_ms);
        self.frames = self.frames.saturating_add(1);
        target.on_frame(self.now_ms);
        true
    }

    /// Runs frames until `target` stops asking or `max_frames` is reached.
    ///
    /// Returns the number of frames run by this call.
    pub fn run_until_idle(&mut self, target: &mut impl FrameDriven, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames && self.step(target) {
            ran += 1;
        }
        ran
    }
}
