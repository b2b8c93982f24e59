use crate::{BarPosition, Orientation, ScrollState};

/// The visual bar collaborator.
///
/// The bar owns the authoritative [`ScrollState`]; the controller only reads and replaces
/// it through this trait. Rendering, thumb geometry and the flash effect are entirely up to
/// the implementation.
pub trait Bar {
    fn state(&self) -> ScrollState;

    fn set_state(&mut self, state: ScrollState);

    fn orientation(&self) -> Orientation;

    /// Briefly emphasizes the bar (e.g. fades it in).
    fn flash(&mut self);

    /// Recomputes visual sizing.
    fn layout(&mut self) {}
}

/// An in-memory [`Bar`] with no visuals.
///
/// Useful for headless hosts and tests: it stores the state as given and counts flash and
/// layout requests.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessBar {
    position: BarPosition,
    state: ScrollState,
    flashes: usize,
    layouts: usize,
}

impl HeadlessBar {
    pub fn new(position: BarPosition) -> Self {
        Self::with_state(position, ScrollState::default())
    }

    pub fn with_state(position: BarPosition, state: ScrollState) -> Self {
        Self {
            position,
            state,
            flashes: 0,
            layouts: 0,
        }
    }

    pub fn position(&self) -> BarPosition {
        self.position
    }

    pub fn flash_count(&self) -> usize {
        self.flashes
    }

    pub fn layout_count(&self) -> usize {
        self.layouts
    }
}

impl Bar for HeadlessBar {
    fn state(&self) -> ScrollState {
        self.state
    }

    fn set_state(&mut self, state: ScrollState) {
        self.state = state;
    }

    fn orientation(&self) -> Orientation {
        self.position.orientation()
    }

    fn flash(&mut self) {
        self.flashes = self.flashes.saturating_add(1);
    }

    fn layout(&mut self) {
        self.layouts = self.layouts.saturating_add(1);
    }
}
