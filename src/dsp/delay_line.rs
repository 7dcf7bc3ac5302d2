//! Tap delay line: the last 11 input samples.

use crate::constants::NUM_TAPS;

/// Shift register of the most recent input samples.
///
/// Index 0 is the oldest sample, index 10 the newest; index 5 is the
/// center tap position. Unlike a ring buffer, the samples physically
/// shift each tick, matching the hardware register chain, so positional
/// reads need no index arithmetic.
#[derive(Debug, Clone)]
pub struct TapDelayLine {
    samples: [i16; NUM_TAPS],
}

impl TapDelayLine {
    pub fn new() -> Self {
        Self {
            samples: [0; NUM_TAPS],
        }
    }

    /// Advance by one sample tick: every stored sample moves one position
    /// toward the oldest end, the oldest is evicted, and `sample` enters
    /// at the newest position.
    ///
    /// Must run exactly once per tick, unconditionally; sample timing is
    /// never stalled by configuration loading.
    pub fn advance(&mut self, sample: i16) {
        for i in 0..NUM_TAPS - 1 {
            self.samples[i] = self.samples[i + 1];
        }
        self.samples[NUM_TAPS - 1] = sample;
    }

    /// Sample at delay-line position `i` (0 = oldest, 10 = newest).
    pub fn sample(&self, i: usize) -> i16 {
        self.samples[i]
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    pub fn reset(&mut self) {
        self.samples = [0; NUM_TAPS];
    }
}

impl Default for TapDelayLine {
    fn default() -> Self {
        Self::new()
    }
}
