//! CLI library components for the monuments register extractor.

pub mod config;
pub mod logging;
pub mod pipeline;
