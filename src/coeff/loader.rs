//! Bit-serial configuration loader.
//!
//! Assembles one bit per strobe into bytes (MSB-first), commits bytes in
//! positional order into a working frame buffer, and hands back a decoded
//! [`ConfigFrame`] when the 7th byte completes. Framing is purely
//! positional: there is no start/stop delimiter and no resynchronization;
//! a misaligned transport can only be recovered by [`ConfigLoader::reset`].

use crate::coeff::frame::ConfigFrame;
use crate::constants::FRAME_BYTES;

/// Loader progress.
///
/// FRAME_COMPLETE is transient: the decoded frame is returned from
/// [`ConfigLoader::shift_bit`] and the machine is back in `Idle` within
/// the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// No frame in progress; the next bit starts byte 0.
    Idle,
    /// Frame in progress; `byte_index` is the byte currently filling.
    Receiving { byte_index: usize },
}

/// Serial-protocol state machine turning a bitstream into config frames.
pub struct ConfigLoader {
    state: LoaderState,
    shift: u8,
    bits_in_byte: u8,
    buffer: [u8; FRAME_BYTES],
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            state: LoaderState::Idle,
            shift: 0,
            bits_in_byte: 0,
            buffer: [0; FRAME_BYTES],
        }
    }

    /// Shift in one bit from the serial transport.
    ///
    /// Bits accumulate MSB-first into the working byte. Every 8th bit
    /// commits the byte at the current frame position; the bit that
    /// completes the final (mode/config) byte decodes the whole frame and
    /// returns it for publication. All other calls return `None`.
    pub fn shift_bit(&mut self, bit: bool) -> Option<ConfigFrame> {
        let byte_index = match self.state {
            LoaderState::Idle => {
                self.state = LoaderState::Receiving { byte_index: 0 };
                0
            }
            LoaderState::Receiving { byte_index } => byte_index,
        };

        self.shift = (self.shift << 1) | bit as u8;
        self.bits_in_byte += 1;
        if self.bits_in_byte < 8 {
            return None;
        }

        self.buffer[byte_index] = self.shift;
        self.shift = 0;
        self.bits_in_byte = 0;

        if byte_index + 1 < FRAME_BYTES {
            self.state = LoaderState::Receiving {
                byte_index: byte_index + 1,
            };
            return None;
        }

        self.state = LoaderState::Idle;
        Some(ConfigFrame::from_wire(&self.buffer))
    }

    /// Abandon any frame in progress and return to `Idle` with byte
    /// index 0. The only recovery path from a misaligned transport.
    pub fn reset(&mut self) {
        self.state = LoaderState::Idle;
        self.shift = 0;
        self.bits_in_byte = 0;
        self.buffer = [0; FRAME_BYTES];
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == LoaderState::Idle
    }

    /// Bits accumulated toward the frame currently in progress.
    pub fn bits_received(&self) -> usize {
        match self.state {
            LoaderState::Idle => 0,
            LoaderState::Receiving { byte_index } => byte_index * 8 + self.bits_in_byte as usize,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
