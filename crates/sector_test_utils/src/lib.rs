//! # Sector Test Utilities
//!
//! Helpers shared by the sector crates' tests and benches:
//! - [`fixtures`]: ready-made games, fleets and hostiles
//! - [`determinism`]: same-inputs, same-hash checks
//! - [`balance`]: seeded battle sampling and win rates
//! - [`strategies`]: proptest generators for core value types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod balance;
pub mod determinism;
pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
