//! Logging and progress reporting for the resender.
//!
//! - `logging`: subscriber initialisation for the binary
//! - `observer`: a `ResendObserver` that reports pipeline progress through `tracing`

pub mod logging;
pub mod observer;

pub use logging::{init_tracing, TracingConfig, TracingError};
pub use observer::TracingObserver;
