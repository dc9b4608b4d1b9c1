/// Duration of the stat counter roll-up.
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
/// Delay between consecutive stat cards starting their roll-up.
pub const COUNTER_STAGGER_MS: u32 = 150;

/// Quadratic ease-out: fast start, decelerating to zero velocity at `p = 1`.
pub fn ease_out_quad(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

/// Integer counter interpolated from `start` to `end` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: i64,
    pub end: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).max(0.0)
    }

    /// Displayed value after `elapsed_ms`; exactly `end` once the duration has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return self.end;
        }
        let span = (self.end - self.start) as f64;
        (self.start as f64 + span * ease_out_quad(p)).floor() as i64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Latch that lets an action through exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns `true` the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
