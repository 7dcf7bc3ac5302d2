//! Fixed design-time parameters of the filter core.
//!
//! Tap count is a build-time constant; only the per-tap coefficient values
//! and the mode/clock configuration word are runtime-programmable.

/// Number of taps in the FIR filter.
pub const NUM_TAPS: usize = 11;

/// Number of independent coefficients: the center tap plus one per
/// mirrored pair (ceil(11/2) = 6).
pub const NUM_COEFFS: usize = NUM_TAPS / 2 + 1;

/// Index of the center tap in the delay line and effective tap vector.
pub const CENTER_TAP: usize = NUM_TAPS / 2;

/// Bytes per serial configuration frame: one per independent coefficient
/// plus the combined mode/clock byte.
pub const FRAME_BYTES: usize = NUM_COEFFS + 1;

/// Fractional bits of the SFix<1,7> coefficient format.
pub const COEFF_FRAC_BITS: u32 = 7;
