#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Picks the scroll-axis component of an `(x, y)` pair.
    pub fn main(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Picks the cross-axis component of an `(x, y)` pair.
    pub fn cross(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => y,
            Self::Vertical => x,
        }
    }
}

/// Where the bar sits relative to the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarPosition {
    Left,
    Top,
    Right,
    Bottom,
}

impl BarPosition {
    /// Bars on the left/right edge scroll vertically; bars on the top/bottom edge scroll
    /// horizontally.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Vertical,
            Self::Top | Self::Bottom => Orientation::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}
