//! Engine crate for the sound acquisition tool.
//!
//! This crate contains the orchestrator that drives the configured sound
//! requests through search, selection, and download.

pub mod orchestrator;

pub use orchestrator::{FetchEngine, FetchOutcome, TargetReport};
