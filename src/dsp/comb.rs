use crate::dsp::ring::RingBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Comb Filter
===========

A comb filter sums a signal with a delayed copy of itself. The periodic
constructive/destructive interference notches the frequency response into the
shape of a comb, with teeth spaced at sample_rate / delay.

Two topologies:

  Feed-forward (FIR):  y[n] = x[n] + k * x[n - d]
    The delay line stores the raw input. One echo, always stable.

  Feedback (IIR):      y[n] = x[n] + k * y[n - d]
    The delay line stores the *output*, so each echo feeds the next.
    Stability requires k < 1; the intensity setter clamps just below it.

The tap at delay d is read with linear interpolation between the two nearest
integer taps, so d can move continuously (variable pitch/frequency) without
stair-stepping. Delay and frequency are two views of one parameter:

    delay = sample_rate / frequency

Setting either re-derives the other. Whenever the delay grows past the delay
line's capacity, the line is grown to the next power of two that fits; it
never shrinks, so worst-case memory reflects the largest delay requested over
the filter's lifetime. Growing reallocates and clears the buffered history.
*/

/// Which signal the delay line stores; see the module notes on stability.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombTopology {
    /// Delay line stores the raw input (FIR, single echo).
    FeedForward,
    /// Delay line stores the output (IIR, recursive echoes).
    Feedback,
}

/// Upper clamp for the echo intensity, just below the feedback stability
/// limit of 1.
const MAX_INTENSITY: f64 = 0.999_999_99;

/// Comb filter over an exclusively owned delay line.
pub struct CombFilter {
    delay_line: RingBuffer,
    delay: f64,
    frequency: f64,
    sample_rate: f64,
    topology: CombTopology,
    intensity: f64,
}

impl CombFilter {
    pub fn new(topology: CombTopology) -> Self {
        Self {
            delay_line: RingBuffer::new(1000),
            delay: 20.0,
            frequency: 100.0,
            sample_rate: 48_000.0,
            topology,
            intensity: 0.0,
        }
    }

    pub fn feed_forward() -> Self {
        Self::new(CombTopology::FeedForward)
    }

    pub fn feedback() -> Self {
        Self::new(CombTopology::Feedback)
    }

    /// Set the sample rate and re-derive the delay from the configured
    /// frequency, growing the delay line if needed.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.set_frequency(self.frequency);
    }

    /// Tune the comb's fundamental; the delay becomes `sample_rate / f`.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.delay = self.sample_rate / frequency;
        self.ensure_capacity();
    }

    /// Set the tap position in (fractional) samples; the frequency becomes
    /// `sample_rate / delay`.
    pub fn set_delay(&mut self, delay: f64) {
        self.delay = delay;
        self.frequency = self.sample_rate / delay;
        self.ensure_capacity();
    }

    /// Echo intensity, clamped into `[0, 0.99999999]` so the feedback
    /// topology always decays.
    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity.clamp(0.0, MAX_INTENSITY);
    }

    pub fn set_topology(&mut self, topology: CombTopology) {
        self.topology = topology;
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Process one sample, advancing the delay line by exactly one step.
    #[inline]
    pub fn process_sample(&mut self, sample: f64) -> f64 {
        match self.topology {
            CombTopology::Feedback => {
                let output =
                    sample + self.intensity * self.delay_line.pull_delay_sample_interp(self.delay);
                self.delay_line.push_sample(output);
                output
            }
            CombTopology::FeedForward => {
                self.delay_line.push_sample(sample);
                sample + self.intensity * self.delay_line.pull_delay_sample_interp(self.delay)
            }
        }
    }

    /// Apply the per-sample rule in place over a block, preserving order.
    pub fn process_block(&mut self, data: &mut [f64]) {
        match self.topology {
            CombTopology::Feedback => {
                for sample in data.iter_mut() {
                    *sample +=
                        self.intensity * self.delay_line.pull_delay_sample_interp(self.delay);
                    self.delay_line.push_sample(*sample);
                }
            }
            CombTopology::FeedForward => {
                for sample in data.iter_mut() {
                    self.delay_line.push_sample(*sample);
                    *sample +=
                        self.intensity * self.delay_line.pull_delay_sample_interp(self.delay);
                }
            }
        }
    }

    /// Grow the delay line when the configured delay no longer fits.
    ///
    /// The `+ 1` keeps the interpolation's upper tap inside the buffer. The
    /// line never shrinks.
    fn ensure_capacity(&mut self) {
        let needed = self.delay.ceil() as usize + 1;
        if needed > self.delay_line.capacity() {
            self.delay_line.resize(needed);
        }
    }
}

impl Default for CombFilter {
    fn default() -> Self {
        Self::feed_forward()
    }
}
