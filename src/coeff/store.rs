//! Coefficient store: the single shared resource between the serial
//! configuration domain and the sample-tick domain.

use crate::coeff::frame::ConfigFrame;

/// Holds the last fully published configuration frame.
///
/// Written only by the loader's publish step, whole-frame at a time, so
/// the datapath never reads a mixture of two loads. The generation
/// counter lets hosts and tests observe when a publish happened.
pub struct CoefficientStore {
    frame: ConfigFrame,
    generation: u64,
}

impl CoefficientStore {
    /// Start with the safe default frame: all-zero coefficients.
    pub fn new() -> Self {
        Self {
            frame: ConfigFrame::default(),
            generation: 0,
        }
    }

    /// Replace the installed frame. Sole writer entry point.
    pub fn publish(&mut self, frame: ConfigFrame) {
        self.frame = frame;
        self.generation += 1;
    }

    /// The currently installed frame.
    pub fn frame(&self) -> &ConfigFrame {
        &self.frame
    }

    /// Number of frames published since reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset(&mut self) {
        self.frame = ConfigFrame::default();
        self.generation = 0;
    }
}

impl Default for CoefficientStore {
    fn default() -> Self {
        Self::new()
    }
}
