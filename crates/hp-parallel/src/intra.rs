//! Intra-run parallelism: one REMC run whose per-iteration replica sweeps
//! fan out across a worker pool, then join before the (inherently
//! sequential) exchange-sweep step.

use std::time::Instant;

use hp_core::HpError;
use hp_lattice::{energy, generate::random_saw, Conformation, HpString};
use hp_mcmc::{tempering, RemcConfig, ReplicaState};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Runs a single REMC driver instance, but fans the per-iteration replica
/// sweeps out across a `rayon` thread pool before running the sequential
/// exchange sweep on the coordinator.
///
/// Produces the same sequence of replica updates and exchange decisions as
/// [`hp_mcmc::remc`] for a given seed: fanning the sweeps out does not
/// change which replica computes what, only that the computations run
/// concurrently before the join barrier.
pub fn remc_parallel(
    hp: &HpString,
    start: Option<Conformation>,
    config: &RemcConfig,
) -> Result<(Conformation, i64), HpError> {
    config.validate()?;
    let ladder = tempering::build_ladder(&config.ladder);
    let seed = config.seed_policy.master_seed;

    let pool = ThreadPoolBuilder::new()
        .build()
        .expect("rayon thread pool builds with the default thread count");

    let mut init_rng = hp_core::RngHandle::from_seed(seed);
    let start_conformation = start.unwrap_or_else(|| random_saw(hp.len(), &mut init_rng));
    let start_energy = energy(&start_conformation, hp);

    let mut replicas: Vec<ReplicaState> = (0..ladder.len())
        .map(|_| ReplicaState {
            conformation: start_conformation.clone(),
            energy: start_energy,
        })
        .collect();

    let mut best = (start_conformation, start_energy);
    let mut offset = 0usize;
    let mut iteration = 0usize;
    let clock = Instant::now();

    while best.1 > config.e_target
        && iteration < config.max_iterations
        && clock.elapsed() < config.timeout
    {
        pool.install(|| {
            replicas
                .par_iter_mut()
                .enumerate()
                .zip(ladder.par_iter())
                .for_each(|((index, replica), &temperature)| {
                    hp_mcmc::advance_replica(
                        hp,
                        replica,
                        config.phi,
                        config.nu,
                        temperature,
                        seed,
                        index,
                        iteration,
                    );
                });
        });

        for replica in &replicas {
            if replica.energy < best.1 {
                best = (replica.conformation.clone(), replica.energy);
            }
        }

        let _ = hp_mcmc::exchange_sweep(&mut replicas, &ladder, offset, seed, iteration);
        offset = 1 - offset;
        iteration += 1;
    }

    Ok(best)
}
