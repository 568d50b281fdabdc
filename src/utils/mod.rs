//! Utility functions and helpers for the inference gateway.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret scrubbing for log output.

pub mod logging;
