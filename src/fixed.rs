//! SFix<1,7> coefficient arithmetic.
//!
//! Coefficients are 8-bit 2's-complement fixed point with one sign/integer
//! bit and 7 fractional bits: raw value `r` represents `r / 128`, covering
//! [-1.0, +127/128].

use crate::constants::COEFF_FRAC_BITS;

/// One FIR coefficient in SFix<1,7> format.
///
/// Wraps the raw 8-bit 2's-complement value so that quantization and the
/// saturating-negation rule live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coeff(i8);

impl Coeff {
    pub const ZERO: Coeff = Coeff(0);

    /// Scale factor between the raw integer and the represented value.
    pub const SCALE: f64 = (1i32 << COEFF_FRAC_BITS) as f64;

    /// Build a coefficient from its raw 2's-complement bits.
    pub const fn from_raw(raw: i8) -> Self {
        Coeff(raw)
    }

    /// Raw 2's-complement value.
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Quantize a real value to the nearest representable coefficient.
    ///
    /// Returns `None` when the rounded value falls outside the
    /// representable range [-1.0, +127/128].
    pub fn try_from_f64(value: f64) -> Option<Self> {
        let scaled = (value * Self::SCALE).round();
        if (i8::MIN as f64..=i8::MAX as f64).contains(&scaled) {
            Some(Coeff(scaled as i8))
        } else {
            None
        }
    }

    /// Represented value as a float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }

    /// 2's-complement negation with saturation.
    ///
    /// -(-1.0) is not representable in SFix<1,7>; it clamps to +127/128
    /// instead of wrapping back to -1.0.
    pub fn saturating_neg(self) -> Self {
        Coeff(self.0.saturating_neg())
    }
}

/// Requantize a full-precision accumulator to the 16-bit output width.
///
/// Truncates the coefficient fractional bits with an arithmetic right
/// shift, then clamps symmetrically into `i16` range. Saturation, never
/// wraparound.
pub fn requantize_acc(acc: i32) -> i16 {
    (acc >> COEFF_FRAC_BITS).clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantize_round_trip() {
        for raw in i8::MIN..=i8::MAX {
            let c = Coeff::from_raw(raw);
            let back = Coeff::try_from_f64(c.to_f64()).unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn test_quantize_precision() {
        let c = Coeff::try_from_f64(0.5).unwrap();
        assert_eq!(c.raw(), 64);
        assert_relative_eq!(c.to_f64(), 0.5);

        // Quantization error is at most half an LSB
        let c = Coeff::try_from_f64(0.3).unwrap();
        assert!((c.to_f64() - 0.3).abs() <= 0.5 / Coeff::SCALE);
    }

    #[test]
    fn test_quantize_range() {
        assert!(Coeff::try_from_f64(-1.0).is_some());
        assert_eq!(Coeff::try_from_f64(-1.0).unwrap().raw(), i8::MIN);
        assert!(Coeff::try_from_f64(127.0 / 128.0).is_some());
        assert!(Coeff::try_from_f64(1.0).is_none());
        assert!(Coeff::try_from_f64(-1.01).is_none());
    }

    #[test]
    fn test_saturating_neg_most_negative() {
        let c = Coeff::from_raw(i8::MIN); // -1.0, bits 0b1000_0000
        assert_eq!(c.saturating_neg().raw(), i8::MAX);
    }

    #[test]
    fn test_saturating_neg_ordinary() {
        assert_eq!(Coeff::from_raw(37).saturating_neg().raw(), -37);
        assert_eq!(Coeff::from_raw(-37).saturating_neg().raw(), 37);
        assert_eq!(Coeff::ZERO.saturating_neg(), Coeff::ZERO);
    }

    #[test]
    fn test_requantize_truncates() {
        assert_eq!(requantize_acc(0), 0);
        assert_eq!(requantize_acc(128), 1);
        assert_eq!(requantize_acc(127), 0);
        // Arithmetic shift truncates toward negative infinity
        assert_eq!(requantize_acc(-1), -1);
        assert_eq!(requantize_acc(-128), -1);
        assert_eq!(requantize_acc(-129), -2);
    }

    #[test]
    fn test_requantize_saturates() {
        assert_eq!(requantize_acc(i32::MAX), i16::MAX);
        assert_eq!(requantize_acc(i32::MIN), i16::MIN);
        assert_eq!(requantize_acc((i16::MAX as i32 + 1) << 7), i16::MAX);
        assert_eq!(requantize_acc((i16::MIN as i32 - 1) << 7), i16::MIN);
        assert_eq!(requantize_acc((i16::MAX as i32) << 7), i16::MAX);
    }
}
