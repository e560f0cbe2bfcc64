//! Common test utilities for Checktree CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: reusable tree documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
