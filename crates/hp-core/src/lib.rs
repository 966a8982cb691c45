#![deny(missing_docs)]

//! Error types and deterministic RNG plumbing shared across the HP lattice
//! folding engine.

/// Structured error types shared across the folding crates.
pub mod errors;
/// Deterministic RNG wrapper and seed-derivation helpers.
pub mod rng;

pub use errors::{ErrorInfo, HpError};
pub use rng::{derive_substream_seed, RngHandle};
