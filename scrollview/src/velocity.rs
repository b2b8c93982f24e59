use alloc::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time_ms: u64,
    coord: f64,
}

/// Estimates release velocity from the coordinates seen during one drag gesture.
///
/// Samples are pushed once per input event, at whatever cadence the host delivers them.
/// The estimate is the slope between the earliest and latest sample inside a short
/// trailing window, in coordinate units per millisecond.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    window_ms: u64,
    capacity: usize,
}

impl VelocityTracker {
    pub fn new(window_ms: u64, capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            samples: VecDeque::with_capacity(capacity),
            window_ms,
            capacity,
        }
    }

    /// Creates a tracker seeded with the gesture's starting coordinate.
    pub fn starting_at(now_ms: u64, coord: f64, window_ms: u64, capacity: usize) -> Self {
        let mut t = Self::new(window_ms, capacity);
        t.push_sample(now_ms, coord);
        t
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push_sample(&mut self, now_ms: u64, coord: f64) {
        if !coord.is_finite() {
            return;
        }
        // Timestamps never run backwards inside the window.
        let time_ms = match self.samples.back() {
            Some(last) => now_ms.max(last.time_ms),
            None => now_ms,
        };
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, coord });
        self.prune(time_ms);
    }

    fn prune(&mut self, now_ms: u64) {
        let horizon = now_ms.saturating_sub(self.window_ms);
        while self.samples.front().is_some_and(|s| s.time_ms < horizon) {
            self.samples.pop_front();
        }
    }

    /// Velocity measured against the most recent sample's time.
    pub fn velocity(&self) -> f64 {
        match self.samples.back() {
            Some(last) => self.velocity_at(last.time_ms),
            None => 0.0,
        }
    }

    /// Velocity as seen at `now_ms` (typically the release time).
    ///
    /// Samples older than the window relative to `now_ms` are ignored, so a pointer that
    /// stopped moving before release yields zero.
    pub fn velocity_at(&self, now_ms: u64) -> f64 {
        let horizon = now_ms.saturating_sub(self.window_ms);
        let mut recent = self.samples.iter().filter(|s| s.time_ms >= horizon);
        let Some(first) = recent.next() else {
            return 0.0;
        };
        let Some(last) = recent.last() else {
            return 0.0;
        };
        let dt = last.time_ms.saturating_sub(first.time_ms);
        if dt == 0 {
            return 0.0;
        }
        (last.coord - first.coord) / dt as f64
    }
}
