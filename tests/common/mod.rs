//! Common test utilities for apiwarden CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and config directories plus a CLI runner
//! - Fixtures: Snapshot and change set documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
