pub mod datapath;
pub mod delay_line;

pub use datapath::fir_output;
pub use delay_line::TapDelayLine;
