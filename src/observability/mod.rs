//! Structured logging for the admission service
//!
//! One log line = one event. Lines are JSON with deterministic key
//! ordering (event first, then severity, then fields sorted by key), so
//! the same validation outcome always produces the same log output.

mod logger;

pub use logger::{Logger, Severity};
