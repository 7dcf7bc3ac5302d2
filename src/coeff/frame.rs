//! Configuration frame: coefficient set, symmetry mode, clock config,
//! and the 7-byte serial wire format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CENTER_TAP, FRAME_BYTES, NUM_COEFFS, NUM_TAPS};
use crate::error::{FirError, Result};
use crate::fixed::Coeff;

/// Bit position of the SYM_COEFFS flag within the combined mode byte.
///
/// The flag is the first bit on the wire (MSB-first transmission); the
/// remaining seven bits carry the clock config. This split is a fixed
/// convention shared with the external configuration tool.
pub const MODE_SYM_BIT: u8 = 0x80;

/// Mask of the clock-config field within the combined mode byte.
pub const CLOCK_CONFIG_MASK: u8 = 0x7f;

/// Coefficient mirroring rule for the second half of the tap set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryMode {
    /// tap[5+k] = tap[5-k]: linear-phase Type I/II response
    Symmetric,
    /// tap[5+k] = -tap[5-k]: linear-phase Type III/IV response
    Antisymmetric,
}

impl Default for SymmetryMode {
    fn default() -> Self {
        SymmetryMode::Symmetric
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryMode::Symmetric => write!(f, "symmetric"),
            SymmetryMode::Antisymmetric => write!(f, "antisymmetric"),
        }
    }
}

impl FromStr for SymmetryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symmetric" | "sym" => Ok(SymmetryMode::Symmetric),
            "antisymmetric" | "antisym" => Ok(SymmetryMode::Antisymmetric),
            other => Err(format!("unknown symmetry mode: {}", other)),
        }
    }
}

/// Audio sample-clock divisor/mode selector.
///
/// Opaque to the FIR math; passed through to the sample I/O adapter.
/// Seven bits wide, the width left over in the combined mode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockConfig(u8);

impl ClockConfig {
    /// Build from a raw value; bits above the field width are masked off.
    pub const fn new(bits: u8) -> Self {
        ClockConfig(bits & CLOCK_CONFIG_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// One complete coefficient + mode/config payload.
///
/// The atomic unit written into the coefficient store: a frame is only
/// ever installed as a whole, so the datapath never observes a mixture of
/// two loads. `coeffs[0]` is the center tap; `coeffs[k]` drives the
/// mirrored tap pair at distance `k` from the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigFrame {
    pub coeffs: [Coeff; NUM_COEFFS],
    pub symmetry: SymmetryMode,
    pub clock: ClockConfig,
}

impl ConfigFrame {
    /// Expand the stored coefficients into the full 11-tap vector.
    ///
    /// tap[5] is the center tap and is never mirrored or negated. For
    /// k = 1..=5, tap[5-k] = c[k] and tap[5+k] is c[k] (symmetric) or its
    /// saturating negation (antisymmetric).
    pub fn effective_taps(&self) -> [Coeff; NUM_TAPS] {
        let mut taps = [Coeff::ZERO; NUM_TAPS];
        taps[CENTER_TAP] = self.coeffs[0];
        for k in 1..NUM_COEFFS {
            taps[CENTER_TAP - k] = self.coeffs[k];
            taps[CENTER_TAP + k] = match self.symmetry {
                SymmetryMode::Symmetric => self.coeffs[k],
                SymmetryMode::Antisymmetric => self.coeffs[k].saturating_neg(),
            };
        }
        taps
    }

    /// Serialize to the 7-byte wire form.
    ///
    /// Byte order is coeff[5] down to coeff[0], then the combined mode
    /// byte; each byte is transmitted MSB-first by the serial transport.
    pub fn to_wire(&self) -> [u8; FRAME_BYTES] {
        let mut bytes = [0u8; FRAME_BYTES];
        for (i, byte) in bytes.iter_mut().take(NUM_COEFFS).enumerate() {
            *byte = self.coeffs[NUM_COEFFS - 1 - i].raw() as u8;
        }
        let sym = match self.symmetry {
            SymmetryMode::Symmetric => MODE_SYM_BIT,
            SymmetryMode::Antisymmetric => 0,
        };
        bytes[FRAME_BYTES - 1] = sym | self.clock.bits();
        bytes
    }

    /// Decode the 7-byte wire form.
    pub fn from_wire(bytes: &[u8; FRAME_BYTES]) -> Self {
        let mut coeffs = [Coeff::ZERO; NUM_COEFFS];
        for (i, c) in coeffs.iter_mut().enumerate() {
            *c = Coeff::from_raw(bytes[NUM_COEFFS - 1 - i] as i8);
        }
        let mode = bytes[FRAME_BYTES - 1];
        let symmetry = if mode & MODE_SYM_BIT != 0 {
            SymmetryMode::Symmetric
        } else {
            SymmetryMode::Antisymmetric
        };
        ConfigFrame {
            coeffs,
            symmetry,
            clock: ClockConfig::new(mode),
        }
    }

    /// Parse a frame from 14 hex digits (wire byte order), e.g.
    /// `"0a14283c50649f"`. Whitespace and `:` separators are accepted.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != ':').collect();
        if digits.len() != FRAME_BYTES * 2 {
            return Err(FirError::Frame(format!(
                "expected {} hex digits, got {}",
                FRAME_BYTES * 2,
                digits.len()
            )));
        }
        let mut bytes = [0u8; FRAME_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair: String = digits[i * 2..i * 2 + 2].iter().collect();
            *byte = u8::from_str_radix(&pair, 16)
                .map_err(|e| FirError::Frame(format!("invalid hex byte {:?}: {}", pair, e)))?;
        }
        Ok(Self::from_wire(&bytes))
    }
}
