//! # Config Crate
//!
//! Centralized configuration constants for background mesh planning.
//! Margin policy defaults, rounding tolerances, and output file names are
//! defined here so the reader, planner, and CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MarginPolicy, DEFAULT_MARGIN_FRACTION};
//!
//! let policy = MarginPolicy::default();
//! assert_eq!(policy.margin_fraction, DEFAULT_MARGIN_FRACTION);
//!
//! // A flat axis still gets half a cell of margin on each side.
//! let margin = policy.margin(0.0, 0.1);
//! assert!(margin > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Tunable values go through a checked constructor
//! - **Pure**: No I/O, no environment lookups

pub mod constants;

#[cfg(test)]
mod tests;
