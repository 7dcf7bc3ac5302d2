//! FIR multiply-accumulate datapath.
//!
//! Direct-form linear-phase FIR with coefficient folding: the two
//! delay-line samples sharing a mirrored coefficient are pre-combined
//! before the multiply, so each output costs 6 products instead of 11.

use crate::coeff::frame::{ConfigFrame, SymmetryMode};
use crate::constants::{CENTER_TAP, NUM_COEFFS};
use crate::dsp::delay_line::TapDelayLine;
use crate::fixed::requantize_acc;

/// Compute one output sample from the current delay-line window and the
/// installed coefficient frame.
///
/// Products and the accumulator are `i32`: six products of at most
/// 2^7 * 2^16 each cannot overflow, so no intermediate truncation is
/// needed. The final accumulator is requantized (truncate 7 fractional
/// bits, saturate to `i16`).
pub fn fir_output(delay: &TapDelayLine, frame: &ConfigFrame) -> i16 {
    let x = |i: usize| delay.sample(i) as i32;

    let mut acc = frame.coeffs[0].raw() as i32 * x(CENTER_TAP);
    for k in 1..NUM_COEFFS {
        let c = frame.coeffs[k].raw() as i32;
        let outer = x(CENTER_TAP + k);
        match frame.symmetry {
            SymmetryMode::Symmetric => {
                acc += c * (x(CENTER_TAP - k) + outer);
            }
            SymmetryMode::Antisymmetric => {
                acc += c * (x(CENTER_TAP - k) - outer);
                // The mirrored tap is the saturating negation of c. For
                // c = -1.0 that is +127/128, one LSB short of the true
                // negation the folded product applies; subtract the LSB
                // worth of the outer sample to land on the saturated tap.
                if frame.coeffs[k].raw() == i8::MIN {
                    acc -= outer;
                }
            }
        }
    }
    requantize_acc(acc)
}
