pub mod coeff;
pub mod config;
pub mod constants;
pub mod core;
pub mod dsp;
pub mod error;
pub mod fixed;
pub mod wav;

pub use coeff::{ClockConfig, ConfigFrame, ConfigLoader, CoefficientStore, LoaderState, SymmetryMode};
pub use config::FilterProfile;
pub use core::FirCore;
pub use error::{FirError, Result};
pub use fixed::Coeff;
pub use wav::{read_wav_mono, save_wav};
