use thiserror::Error;

/// Host-boundary errors: profile files, wire-frame parsing, WAV I/O.
///
/// The filter core itself never errors; arithmetic overflow saturates and
/// protocol misuse is handled by external reset, per the hardware model.
#[derive(Error, Debug)]
pub enum FirError {
    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Coefficient {index} out of range: {value} (representable range is -1.0..=127/128)")]
    CoefficientRange { index: usize, value: f64 },

    #[error("Frame error: {0}")]
    Frame(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FirError>;
