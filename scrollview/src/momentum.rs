use crate::MomentumOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionPhase {
    Running,
    Completed,
    Cancelled,
}

/// The result of one momentum tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTick {
    /// The new absolute offset. Bounds are the caller's concern.
    pub offset: f64,
    /// The decayed velocity after this tick.
    pub velocity: f64,
    /// `true` exactly once, on the tick where the motion completed naturally.
    pub done: bool,
}

/// A cancellable deceleration animation, driven one frame at a time.
///
/// The motion starts `Running`. Each [`Momentum::tick`] decays the velocity by
/// `tau / (tau + dt)` and integrates the displacement with the trapezoid rule, so the
/// offset curve has no jumps. Once `|velocity|` falls below `stop_velocity`, that tick is
/// reported with `done = true` and the motion becomes `Completed`. A `Cancelled` or
/// `Completed` motion never produces another tick.
#[derive(Clone, Debug)]
pub struct Momentum {
    velocity: f64,
    offset: f64,
    last_ms: Option<u64>,
    phase: MotionPhase,
    time_constant: f64,
    stop_velocity: f64,
}

impl Momentum {
    pub fn new(velocity: f64, offset: f64, options: &MomentumOptions) -> Self {
        let stop_velocity = if options.stop_velocity.is_finite() {
            options.stop_velocity.abs()
        } else {
            0.0
        };
        Self {
            velocity: if velocity.is_finite() { velocity } else { 0.0 },
            offset,
            last_ms: None,
            phase: MotionPhase::Running,
            time_constant: options.time_constant(),
            stop_velocity,
        }
    }

    /// Sets the clock origin. The first tick measures `dt` from here.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase == MotionPhase::Running && self.last_ms.is_none() {
            self.last_ms = Some(now_ms);
        }
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == MotionPhase::Running
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Stops the motion. Returns `false` if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        if self.phase != MotionPhase::Running {
            return false;
        }
        self.phase = MotionPhase::Cancelled;
        strace!(offset = self.offset, velocity = self.velocity, "Momentum::cancel");
        true
    }

    /// Advances the motion to `now_ms`.
    ///
    /// Returns `None` when the motion is no longer running; the phase is checked before any
    /// state is touched. Every tick advances at least 1ms so the velocity strictly
    /// decreases even if the host reports the same timestamp twice.
    pub fn tick(&mut self, now_ms: u64) -> Option<MotionTick> {
        if self.phase != MotionPhase::Running {
            return None;
        }

        let last = self.last_ms.unwrap_or(now_ms);
        let dt = now_ms.saturating_sub(last).max(1) as f64;
        self.last_ms = Some(now_ms.max(last));

        let v0 = self.velocity;
        let v1 = v0 * self.time_constant / (self.time_constant + dt);
        self.offset += (v0 + v1) * 0.5 * dt;
        self.velocity = v1;

        let done = v1.abs() < self.stop_velocity || v1 == 0.0;
        if done {
            self.phase = MotionPhase::Completed;
            strace!(offset = self.offset, "Momentum::done");
        }

        Some(MotionTick {
            offset: self.offset,
            velocity: v1,
            done,
        })
    }
}
