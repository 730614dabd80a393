pub mod dsp;

pub use dsp::comb::{CombFilter, CombTopology};
pub use dsp::oscillator::SmoothedOscillator;
pub use dsp::ring::RingBuffer;
pub use dsp::smooth::SmoothedValue;
