//! Utility modules for StitchX

pub mod logging;

pub use logging::{init_logging, LogFormat};
