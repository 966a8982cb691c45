#![deny(missing_docs)]

//! Parallel executors built on top of [`hp_mcmc`]'s single-threaded REMC
//! driver: ensemble parallelism (`remc_multi`, many independent runs racing
//! to target) and intra-run parallelism (`remc_parallel`, one run whose
//! per-iteration replica sweeps fan out to a worker pool).

/// Ensemble parallelism: independent REMC runs racing to reach target.
pub mod ensemble;
/// Intra-run parallelism: one REMC run with a parallel fan-out per iteration.
pub mod intra;

pub use ensemble::remc_multi;
pub use intra::remc_parallel;
