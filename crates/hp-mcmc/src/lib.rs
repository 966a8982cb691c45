#![deny(missing_docs)]

//! Single-temperature MC search and the Replica-Exchange Monte Carlo (REMC)
//! driver built on top of `hp-lattice`'s conformation model and move set.

/// In-memory helpers for summarizing a finished run's samples.
pub mod analysis;
/// Search and replica-ladder configuration, with parameter validation.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Single-temperature search kernel and the REMC driver.
pub mod kernel;
/// In-memory coverage metrics collected across a run.
pub mod metrics;
/// Linear temperature ladder and exchange acceptance.
pub mod tempering;

pub use analysis::{best_energy_trajectory, RunSummary};
pub use config::{LadderConfig, RemcConfig, SearchConfig, SeedPolicy};
pub use kernel::{
    advance_replica, exchange_sweep, mc_search, mc_search_with_rng, remc, remc_cancellable,
    remc_instrumented, RemcOutcome, ReplicaState,
};
pub use metrics::{conformation_hash, CoverageMetrics, MetricSample, MetricsRecorder};
