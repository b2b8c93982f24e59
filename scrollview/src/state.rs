/// An immutable snapshot of a scrollable region along its scroll axis.
///
/// A new value replaces the old one wholesale whenever the offset changes; there are no
/// setters. `visible_extent <= total_extent` is the caller's responsibility.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    total_extent: f64,
    visible_extent: f64,
    scrolled_offset: f64,
}

impl ScrollState {
    pub const fn new(total_extent: f64, visible_extent: f64, scrolled_offset: f64) -> Self {
        Self {
            total_extent,
            visible_extent,
            scrolled_offset,
        }
    }

    pub fn total_extent(&self) -> f64 {
        self.total_extent
    }

    pub fn visible_extent(&self) -> f64 {
        self.visible_extent
    }

    /// The current offset. May lie outside `[0, max_scrolled_offset()]` while a drag is in
    /// progress.
    pub fn scrolled_offset(&self) -> f64 {
        self.scrolled_offset
    }

    pub fn max_scrolled_offset(&self) -> f64 {
        (self.total_extent - self.visible_extent).max(0.0)
    }

    /// Returns a copy with the same extents and a new offset.
    pub fn with_scrolled_offset(&self, scrolled_offset: f64) -> Self {
        Self {
            scrolled_offset,
            ..*self
        }
    }

    pub fn contains_offset(&self, offset: f64) -> bool {
        offset >= 0.0 && offset <= self.max_scrolled_offset()
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scrolled_offset())
    }
}
