//! Test fixtures for stop-sequencer.
//!
//! Provides realistic test data including:
//! - A morning school run with real Warsaw addresses
//! - A small deterministic generator for move sequences

pub mod school_run;

pub use school_run::*;
