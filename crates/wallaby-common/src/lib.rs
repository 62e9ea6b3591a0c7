//! Common utilities for the Wallaby engine.
//!
//! This crate provides shared infrastructure used by the parsing components:
//! - **Warning System** - colored terminal output for recovered parse problems

pub mod warning;
