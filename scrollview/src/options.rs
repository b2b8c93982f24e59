/// Tuning for post-release momentum.
///
/// Velocities are in pixels per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumOptions {
    /// Decay time constant. Each tick of `dt` ms scales the velocity by
    /// `time_constant_ms / (time_constant_ms + dt)`. Values below 1 are treated as 1.
    pub time_constant_ms: f64,
    /// The motion completes once `|velocity|` drops below this.
    pub stop_velocity: f64,
    /// A release velocity must exceed this magnitude to start momentum at all.
    pub min_start_velocity: f64,
}

impl Default for MomentumOptions {
    fn default() -> Self {
        Self {
            time_constant_ms: 325.0,
            stop_velocity: 0.01,
            min_start_velocity: 0.0,
        }
    }
}

impl MomentumOptions {
    pub(crate) fn time_constant(&self) -> f64 {
        if self.time_constant_ms.is_finite() {
            self.time_constant_ms.max(1.0)
        } else {
            1.0
        }
    }

    pub(crate) fn min_start(&self) -> f64 {
        if self.min_start_velocity.is_finite() {
            self.min_start_velocity.abs()
        } else {
            0.0
        }
    }

    pub fn with_time_constant_ms(mut self, time_constant_ms: f64) -> Self {
        self.time_constant_ms = time_constant_ms;
        self
    }

    pub fn with_stop_velocity(mut self, stop_velocity: f64) -> Self {
        self.stop_velocity = stop_velocity;
        self
    }

    pub fn with_min_start_velocity(mut self, min_start_velocity: f64) -> Self {
        self.min_start_velocity = min_start_velocity;
        self
    }
}

/// Configuration for [`crate::ScrollController`].
///
/// All fields are plain data, so options can be cloned, tweaked and reapplied through
/// `ScrollController::set_options` / `update_options` at any time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Whether drag gestures (pointer or touch) are honored.
    pub draggable: bool,

    /// Only samples this recent (relative to release) feed the release velocity.
    pub velocity_window_ms: u64,
    /// Upper bound on retained velocity samples per gesture.
    pub max_velocity_samples: usize,

    pub momentum: MomentumOptions,

    /// A wheel batch is discarded when `|cross| > cross_axis_ratio * |axis|`.
    ///
    /// Trackpads rarely produce perfectly axis-aligned deltas; without this, a mostly
    /// sideways swipe would leak into the scroll axis.
    pub cross_axis_ratio: f64,

    /// Clamp wheel-driven offsets to `[0, max_scrolled_offset]`. Off by default: the wheel
    /// delta is applied as is, like a drag.
    pub clamp_wheel: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            draggable: false,
            velocity_window_ms: 100,
            max_velocity_samples: 20,
            momentum: MomentumOptions::default(),
            cross_axis_ratio: 2.0,
            clamp_wheel: false,
        }
    }
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_velocity_window_ms(mut self, velocity_window_ms: u64) -> Self {
        self.velocity_window_ms = velocity_window_ms;
        self
    }

    pub fn with_max_velocity_samples(mut self, max_velocity_samples: usize) -> Self {
        self.max_velocity_samples = max_velocity_samples;
        self
    }

    pub fn with_momentum(mut self, momentum: MomentumOptions) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_cross_axis_ratio(mut self, cross_axis_ratio: f64) -> Self {
        self.cross_axis_ratio = cross_axis_ratio;
        self
    }

    pub fn with_clamp_wheel(mut self, clamp_wheel: bool) -> Self {
        self.clamp_wheel = clamp_wheel;
        self
    }
}
