//! Integration tests for the tls CLI
//!
//! These tests run the tls binary against temporary projects.

mod cli;
