/// Linear ramp that bridges a control value changing in jumps and a signal
/// path consuming it once per sample.
///
/// Setting a target does not move the current value; instead the gap is
/// divided into `steps` equal increments, where `steps` is derived from the
/// smoothing time and the sample rate. Each [`next_value`](Self::next_value)
/// call advances one increment and clamps at the target, so the ramp is
/// monotonic and never overshoots.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedValue {
    current: f64,
    target: f64,
    increment: f64,
    steps: usize,
    sample_rate: f64,
}

impl SmoothedValue {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            increment: 0.0,
            steps: 1,
            sample_rate,
        }
    }

    /// Store the sample rate used to convert a smoothing duration into a
    /// step count. An in-flight ramp keeps its old step size until
    /// [`set_smoothing_time`](Self::set_smoothing_time) is called again.
    pub fn init(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    /// Set the ramp window in milliseconds.
    ///
    /// Recomputes the step count (`max(1, round(ms * fs / 1000))`) and the
    /// per-sample increment from the *current* in-flight gap, not the gap the
    /// ramp started with.
    pub fn set_smoothing_time(&mut self, ms: f64) {
        self.steps = ((ms * self.sample_rate / 1000.0).round() as usize).max(1);
        self.increment = (self.target - self.current) / self.steps as f64;
    }

    /// Aim the ramp at a new target without resetting the current value.
    pub fn set_target(&mut self, value: f64) {
        self.target = value;
        self.increment = (self.target - self.current) / self.steps as f64;
    }

    /// Advance one step toward the target and return the new value.
    ///
    /// The single mutating read: call exactly once per sample consumed. Once
    /// the target is reached the value stays put until a new target is set.
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        if self.current != self.target {
            self.current += self.increment;
            let overshot = (self.increment > 0.0 && self.current > self.target)
                || (self.increment < 0.0 && self.current < self.target);
            if overshot {
                self.current = self.target;
            }
        }
        self.current
    }

    /// Fill `out` with consecutive ramp values, one step per slot.
    ///
    /// Bulk form of [`next_value`](Self::next_value) for hosts that pull a
    /// contiguous block at a time.
    pub fn next_block(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.next_value();
        }
    }

    /// Current value without advancing the ramp, for inspection/metering.
    #[inline]
    pub fn current_value(&self) -> f64 {
        self.current
    }
}
