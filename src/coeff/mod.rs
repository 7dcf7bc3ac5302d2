pub mod frame;
pub mod loader;
pub mod store;

pub use frame::{ClockConfig, ConfigFrame, SymmetryMode};
pub use loader::{ConfigLoader, LoaderState};
pub use store::CoefficientStore;
