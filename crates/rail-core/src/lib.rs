//! Foundational low-level utilities shared across RailFlow crates.
//!
//! Provides the wall clock used to stamp chat messages and the display
//! formatting applied to those stamps.

pub mod time_utils;

pub use time_utils::{current_unix_timestamp_ms, format_clock_time_utc};
