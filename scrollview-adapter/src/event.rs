/// A pointer (mouse/pen) position in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One touch point. `id` stays stable for the lifetime of the touch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub const fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Units of a wheel delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    /// Multiplied by `ViewOptions::line_height`.
    Line,
    /// Multiplied by the visible extent.
    Page,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelEvent {
    pub const fn pixels(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    pub const fn lines(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Line,
        }
    }

    pub const fn pages(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Page,
        }
    }
}
