//! Core types shared across the crate

mod level;

pub use level::LogLevel;
