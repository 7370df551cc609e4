//! Core types and utilities for the themescope design-token engine.
//!
//! This crate provides the foundational types used across all other themescope crates:
//! - Property tables, themes and theme collections
//! - Color values and classifications
//! - Error types

pub mod errors;
pub mod tables;
pub mod types;

pub use errors::*;
pub use tables::*;
pub use types::*;
