//! Logging setup.
//!
//! The library itself only emits through the `log` facade. Binaries and test
//! harnesses that want output call [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};
