//! Filter coefficient profiles.
//!
//! A profile is the host-side, human-friendly description of a
//! configuration frame: floating-point coefficients plus symmetry mode
//! and clock config, typically loaded from a TOML file:
//!
//! ```toml
//! # halfband-ish lowpass
//! coefficients = [0.5, 0.3, 0.0, -0.1, 0.0, 0.05]
//! symmetry = "symmetric"
//! clock_config = 2
//! ```
//!
//! `coefficients[0]` is the center tap; `coefficients[k]` drives the
//! mirrored tap pair at distance `k` from the center.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coeff::{ClockConfig, ConfigFrame, SymmetryMode};
use crate::constants::NUM_COEFFS;
use crate::error::{FirError, Result};
use crate::fixed::Coeff;

/// Floating-point coefficient profile, quantizable to a [`ConfigFrame`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterProfile {
    /// Center tap first, outermost pair last; each in [-1.0, +127/128].
    pub coefficients: [f64; NUM_COEFFS],
    /// Mirroring rule for the second half of the tap set.
    #[serde(default)]
    pub symmetry: SymmetryMode,
    /// Sample-clock divisor/mode bits, passed through to the I/O adapter.
    #[serde(default)]
    pub clock_config: u8,
}

impl FilterProfile {
    /// Load a profile from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| FirError::Profile(e.to_string()))
    }

    /// Quantize to SFix<1,7> coefficients.
    ///
    /// # Errors
    /// Returns `FirError::CoefficientRange` for any coefficient outside
    /// the representable range.
    pub fn quantize(&self) -> Result<ConfigFrame> {
        let mut coeffs = [Coeff::ZERO; NUM_COEFFS];
        for (index, (&value, slot)) in self.coefficients.iter().zip(coeffs.iter_mut()).enumerate() {
            *slot = Coeff::try_from_f64(value)
                .ok_or(FirError::CoefficientRange { index, value })?;
        }
        Ok(ConfigFrame {
            coeffs,
            symmetry: self.symmetry,
            clock: ClockConfig::new(self.clock_config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_profile() {
        let profile = FilterProfile {
            coefficients: [0.5, -0.25, 0.125, 0.0, -1.0, 127.0 / 128.0],
            symmetry: SymmetryMode::Antisymmetric,
            clock_config: 3,
        };
        let frame = profile.quantize().unwrap();
        assert_eq!(frame.coeffs[0].raw(), 64);
        assert_eq!(frame.coeffs[1].raw(), -32);
        assert_eq!(frame.coeffs[4].raw(), i8::MIN);
        assert_eq!(frame.coeffs[5].raw(), i8::MAX);
        assert_eq!(frame.symmetry, SymmetryMode::Antisymmetric);
        assert_eq!(frame.clock.bits(), 3);
    }

    #[test]
    fn test_quantize_rejects_out_of_range() {
        let profile = FilterProfile {
            coefficients: [0.0, 0.0, 1.5, 0.0, 0.0, 0.0],
            symmetry: SymmetryMode::Symmetric,
            clock_config: 0,
        };
        match profile.quantize() {
            Err(FirError::CoefficientRange { index: 2, .. }) => {}
            other => panic!("expected CoefficientRange, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let profile = FilterProfile {
            coefficients: [0.5, 0.3, 0.0, -0.1, 0.0, 0.05],
            symmetry: SymmetryMode::Symmetric,
            clock_config: 2,
        };
        let text = toml::to_string(&profile).unwrap();
        let back: FilterProfile = toml::from_str(&text).unwrap();
        assert_eq!(back.coefficients, profile.coefficients);
        assert_eq!(back.symmetry, profile.symmetry);
        assert_eq!(back.clock_config, profile.clock_config);
    }

    #[test]
    fn test_toml_defaults() {
        let profile: FilterProfile =
            toml::from_str("coefficients = [0.1, 0.0, 0.0, 0.0, 0.0, 0.0]").unwrap();
        assert_eq!(profile.symmetry, SymmetryMode::Symmetric);
        assert_eq!(profile.clock_config, 0);
    }
}
