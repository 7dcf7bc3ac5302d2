//! The filter core engine: tap delay line, FIR datapath, and the serial
//! configuration path wired together.

use crate::coeff::{CoefficientStore, ConfigFrame, ConfigLoader, LoaderState};
use crate::constants::NUM_TAPS;
use crate::dsp::{TapDelayLine, fir_output};

/// Runtime-programmable 11-tap fixed-point FIR filter core.
///
/// Two timing domains share this object: [`FirCore::tick`] belongs to the
/// audio sample clock, [`FirCore::shift_config_bit`] to the serial
/// configuration strobe. Neither blocks the other; frame assembly may
/// span any number of sample ticks, and the datapath keeps reading the
/// last fully published frame throughout.
pub struct FirCore {
    delay: TapDelayLine,
    loader: ConfigLoader,
    store: CoefficientStore,
}

impl FirCore {
    /// Core in its reset state: zero coefficients, zero delay line,
    /// loader idle. Output is exactly zero until a frame is loaded.
    pub fn new() -> Self {
        Self {
            delay: TapDelayLine::new(),
            loader: ConfigLoader::new(),
            store: CoefficientStore::new(),
        }
    }

    /// Process one sample tick.
    ///
    /// Advances the delay line with `input` and returns the filtered
    /// output computed from the installed coefficient frame. Runs
    /// unconditionally; never waits on configuration loading.
    pub fn tick(&mut self, input: i16) -> i16 {
        self.delay.advance(input);
        fir_output(&self.delay, self.store.frame())
    }

    /// Filter a buffer of samples in-place.
    pub fn process_buffer(&mut self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample);
        }
    }

    /// Feed one serial configuration bit (MSB-first within each byte).
    ///
    /// The bit that completes a 7-byte frame publishes it into the
    /// coefficient store in the same call; every tick from then on uses
    /// the new frame.
    pub fn shift_config_bit(&mut self, bit: bool) {
        if let Some(frame) = self.loader.shift_bit(bit) {
            log::debug!(
                "config frame published: {} clock={:#04x}",
                frame.symmetry,
                frame.clock.bits()
            );
            self.store.publish(frame);
        }
    }

    /// Feed whole wire bytes through the serial path, MSB-first.
    pub fn shift_config_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            for i in (0..8).rev() {
                self.shift_config_bit(byte >> i & 1 == 1);
            }
        }
    }

    /// Install a frame directly, bypassing the serial link. Host-side
    /// convenience; the publish is just as atomic.
    pub fn load_frame(&mut self, frame: &ConfigFrame) {
        self.store.publish(*frame);
    }

    /// Global reset: default frame, zeroed delay line, loader idle with
    /// byte index 0.
    pub fn reset(&mut self) {
        self.delay.reset();
        self.loader.reset();
        self.store.reset();
    }

    /// The currently installed configuration frame.
    pub fn frame(&self) -> &ConfigFrame {
        self.store.frame()
    }

    /// Clock-config bits from the installed frame, for the sample I/O
    /// adapter. Opaque to the FIR math.
    pub fn clock_config(&self) -> u8 {
        self.store.frame().clock.bits()
    }

    /// Number of frames published since reset.
    pub fn config_generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn loader_state(&self) -> LoaderState {
        self.loader.state()
    }

    /// Group delay in samples, a property of any linear-phase design of
    /// this length.
    pub fn group_delay_samples(&self) -> usize {
        (NUM_TAPS - 1) / 2
    }
}

impl Default for FirCore {
    fn default() -> Self {
        Self::new()
    }
}
