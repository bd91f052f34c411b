//! Common utilities for the Cassia toolkit.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for tolerated legacy behavior

pub mod warning;
