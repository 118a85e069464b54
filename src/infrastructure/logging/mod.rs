//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Compact, pretty or JSON console output on stderr
//! - Optional rolling JSON log files

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
