use std::f64::consts::TAU;

use crate::dsp::smooth::SmoothedValue;

/// Sine oscillator whose frequency and gain are both smoothed, so parameter
/// jumps from a host control surface never land as clicks in the output.
///
/// Each sample advances both smoothers by one step: the phase increment is
/// recomputed from the smoothed frequency (`TAU * f / sample_rate`) and the
/// phase is re-wrapped into `[0, 2π)` after every advance. A single increment
/// is always far below `2π`, so the wrap loop runs at most a handful of
/// iterations.
pub struct SmoothedOscillator {
    sample_rate: f64,
    phase: f64,
    phase_incr: f64,
    gain: SmoothedValue,
    frequency: SmoothedValue,
}

impl SmoothedOscillator {
    /// The smoothing window is shared by the gain and frequency ramps; both
    /// start from zero and ramp toward the initial values.
    pub fn new(
        sample_rate: f64,
        frequency: f64,
        phase: f64,
        gain: f64,
        smoothing_time_ms: f64,
    ) -> Self {
        let mut osc = Self {
            sample_rate,
            phase,
            phase_incr: 0.0,
            gain: SmoothedValue::new(sample_rate),
            frequency: SmoothedValue::new(sample_rate),
        };
        osc.init(sample_rate, smoothing_time_ms);
        osc.set_frequency(frequency);
        osc.set_gain(gain);
        osc
    }

    /// Re-initialize the sample rate and the shared smoothing window.
    pub fn init(&mut self, sample_rate: f64, smoothing_time_ms: f64) {
        self.sample_rate = sample_rate;
        self.gain.init(sample_rate);
        self.frequency.init(sample_rate);
        self.gain.set_smoothing_time(smoothing_time_ms);
        self.frequency.set_smoothing_time(smoothing_time_ms);
    }

    /// Takes effect gradually over the smoothing window.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency.set_target(frequency);
    }

    /// Takes effect gradually over the smoothing window.
    pub fn set_gain(&mut self, gain: f64) {
        self.gain.set_target(gain);
    }

    /// Current (smoothed) gain, for metering.
    pub fn gain(&self) -> f64 {
        self.gain.current_value()
    }

    /// Render one sample, then advance phase and both smoothers.
    #[inline]
    pub fn process_sample(&mut self) -> f64 {
        let sample = self.phase.sin() * self.gain.next_value();
        self.phase_incr = self.frequency.next_value() * TAU / self.sample_rate;
        self.phase += self.phase_incr;
        while self.phase >= TAU {
            self.phase -= TAU;
        }
        sample
    }

    /// Overwrite `out` with consecutive samples, in order.
    pub fn process_block(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.process_sample();
        }
    }
}
