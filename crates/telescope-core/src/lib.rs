//! Telescope Core Library
//!
//! Benchmark engine for the Telescope LLM harness: evaluation blocks, chat
//! clients, report writers, and the executor that ties them together.

pub mod block;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod init;
pub mod logging;
pub mod report;
