//! Single-temperature MC search and the REMC driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use hp_core::{HpError, RngHandle};
use hp_lattice::dispatch::dispatch;
use hp_lattice::generate::random_saw;
use hp_lattice::{energy, Conformation, HpString};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{RemcConfig, SearchConfig};
use crate::determinism;
use crate::tempering;

/// A single replica's mutable state within a REMC run: its conformation and
/// cached energy. Temperatures are tracked separately by the fixed ladder
/// (see the swap-discipline note on [`exchange_sweep`]).
#[derive(Debug, Clone)]
pub struct ReplicaState {
    /// Current conformation held by this replica.
    pub conformation: Conformation,
    /// Cached energy of `conformation`.
    pub energy: i64,
}

/// Runs a single-temperature Metropolis MC search.
///
/// `mc_search(hp_string, start?, phi, nu, T) -> (conformation, energy)` per
/// the external API. Returns the lowest-energy conformation observed over
/// the trajectory, not merely the last-accepted state (the reference
/// implementation conflates the two; this driver always tracks the running
/// minimum).
pub fn mc_search(
    hp: &HpString,
    start: Option<Conformation>,
    config: &SearchConfig,
    seed: u64,
) -> Result<(Conformation, i64), HpError> {
    config.validate()?;
    Ok(mc_search_with_rng(hp, start, config, seed, 0, 0))
}

/// Same search, but with the per-move randomness drawn from named
/// substreams of `master_seed` rather than a single continuous stream.
///
/// Every move proposal (the residue index `k`, the move's internal random
/// choices, and the Metropolis acceptance draw) is driven by a fresh
/// [`RngHandle`] seeded from
/// `determinism::move_seed(master_seed, replica_index, outer_iteration,
/// trial)`, one per trial in `0..config.phi` — the same per-concern
/// substream discipline the REMC driver already uses for exchange
/// attempts. `replica_index`/`outer_iteration` let the REMC driver and the
/// parallel executors identify which replica and sweep a call belongs to;
/// a standalone [`mc_search`] call always uses `(0, 0)`.
pub fn mc_search_with_rng(
    hp: &HpString,
    start: Option<Conformation>,
    config: &SearchConfig,
    master_seed: u64,
    replica_index: usize,
    outer_iteration: usize,
) -> (Conformation, i64) {
    let n = hp.len();
    let mut current = start.unwrap_or_else(|| {
        let mut start_rng = RngHandle::from_seed(determinism::replica_seed(master_seed, replica_index));
        random_saw(n, &mut start_rng)
    });
    let mut current_energy = energy(&current, hp);
    let mut best = current.clone();
    let mut best_energy = current_energy;

    for trial in 0..config.phi {
        let mut move_rng = RngHandle::from_seed(determinism::move_seed(
            master_seed,
            replica_index,
            outer_iteration,
            trial,
        ));
        let k = move_rng.gen_range(0..n);
        let (_, candidate) = dispatch(&current, k, config.nu, &mut move_rng);
        let candidate_energy = energy(&candidate, hp);
        let delta = candidate_energy - current_energy;

        let accept = if delta <= 0 {
            true
        } else {
            let draw: f64 = move_rng.gen_range(0.0..1.0);
            draw <= (-(delta as f64) / config.temperature).exp()
        };

        if accept {
            current = candidate;
            current_energy = candidate_energy;
        }
        if current_energy < best_energy {
            best = current.clone();
            best_energy = current_energy;
        }
    }
    (best, best_energy)
}

/// Advances a single replica by one outer iteration's worth of MC sweeping,
/// replacing its conformation/energy with the sweep's running minimum.
///
/// Exposed so the parallel executors can fan this call out without
/// depending on the sequential REMC loop.
pub fn advance_replica(
    hp: &HpString,
    replica: &mut ReplicaState,
    phi: usize,
    nu: f64,
    temperature: f64,
    master_seed: u64,
    replica_index: usize,
    outer_iteration: usize,
) {
    let config = SearchConfig {
        phi,
        nu,
        temperature,
    };
    let (conformation, best_energy) = mc_search_with_rng(
        hp,
        Some(replica.conformation.clone()),
        &config,
        master_seed,
        replica_index,
        outer_iteration,
    );
    replica.conformation = conformation;
    replica.energy = best_energy;
}

/// Runs the exchange sweep over adjacent replica pairs `(i, i+1)` for
/// `i = offset+1, offset+3, ...` while `i+1 < replicas.len()`.
///
/// Swap discipline: replica *contents* (conformation + energy) are
/// exchanged while the temperature ladder stays fixed in place, so replicas
/// walk the ladder over time and `temperatures[i]` always describes rung
/// `i`. Returns the acceptance probability computed for each attempted
/// pair, in ladder order, for diagnostics.
pub fn exchange_sweep(
    replicas: &mut [ReplicaState],
    temperatures: &[f64],
    offset: usize,
    master_seed: u64,
    iteration: usize,
) -> Vec<(usize, f64)> {
    let chi = replicas.len();
    let mut probabilities = Vec::new();
    let mut i = offset + 1;
    while i + 1 < chi {
        let mut rng = RngHandle::from_seed(determinism::exchange_seed(master_seed, iteration, i));
        let (accept, probability) = tempering::attempt_exchange(
            replicas[i].energy,
            temperatures[i],
            replicas[i + 1].energy,
            temperatures[i + 1],
            &mut rng,
        );
        probabilities.push((i, probability));
        if accept {
            replicas.swap(i, i + 1);
        }
        i += 2;
    }
    probabilities
}

/// Diagnostics returned by [`remc_instrumented`] alongside the best result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemcOutcome {
    /// Best conformation observed across all replicas.
    pub best_conformation: Conformation,
    /// Energy of `best_conformation`.
    pub best_energy: i64,
    /// Outer iterations actually executed before stopping.
    pub iterations_run: usize,
    /// Mean exchange acceptance probability per ladder pair, in rung order.
    pub exchange_acceptance: Vec<f64>,
}

/// Runs the Replica-Exchange Monte Carlo driver to completion.
///
/// `remc(hp_string, E_target, start?, phi, nu, T_init, T_final, chi,
/// max_iter, timeout) -> (conformation, energy)` per the external API.
/// Stops once any replica's energy is `<= e_target`, the iteration cap is
/// hit, or the wall-clock timeout elapses; always returns the best
/// conformation/energy observed, even if `e_target` was never reached.
pub fn remc(
    hp: &HpString,
    start: Option<Conformation>,
    config: &RemcConfig,
) -> Result<(Conformation, i64), HpError> {
    let (best_conformation, best_energy, _, _) = remc_inner(hp, start, config, None, None)?;
    Ok((best_conformation, best_energy))
}

/// Runs the REMC driver exactly like [`remc`], but also records one
/// [`MetricSample`](crate::metrics::MetricSample) per replica per outer
/// iteration into `recorder` and returns exchange-acceptance diagnostics.
pub fn remc_instrumented(
    hp: &HpString,
    start: Option<Conformation>,
    config: &RemcConfig,
    recorder: &mut crate::metrics::MetricsRecorder,
) -> Result<RemcOutcome, HpError> {
    let (best_conformation, best_energy, iterations_run, exchange_acceptance) =
        remc_inner(hp, start, config, Some(recorder), None)?;
    Ok(RemcOutcome {
        best_conformation,
        best_energy,
        iterations_run,
        exchange_acceptance,
    })
}

/// Runs the REMC driver exactly like [`remc`], but exits early (returning
/// the best-so-far) once `cancel` is set, in addition to the usual
/// target/iteration/timeout stop conditions.
///
/// Exposed for the ensemble executor: once any worker reports an energy at
/// or below target, the coordinator sets every sibling's flag so they stop
/// at their next outer-iteration boundary rather than running to their own
/// timeout.
pub fn remc_cancellable(
    hp: &HpString,
    start: Option<Conformation>,
    config: &RemcConfig,
    cancel: &AtomicBool,
) -> Result<RemcOutcome, HpError> {
    let (best_conformation, best_energy, iterations_run, exchange_acceptance) =
        remc_inner(hp, start, config, None, Some(cancel))?;
    Ok(RemcOutcome {
        best_conformation,
        best_energy,
        iterations_run,
        exchange_acceptance,
    })
}

fn remc_inner(
    hp: &HpString,
    start: Option<Conformation>,
    config: &RemcConfig,
    mut recorder: Option<&mut crate::metrics::MetricsRecorder>,
    cancel: Option<&AtomicBool>,
) -> Result<(Conformation, i64, usize, Vec<f64>), HpError> {
    config.validate()?;
    let ladder = tempering::build_ladder(&config.ladder);
    let seed = config.seed_policy.master_seed;

    let mut init_rng = RngHandle::from_seed(seed);
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
    let mut exchange_totals = vec![0.0; ladder.len().saturating_sub(1)];
    let mut exchange_counts = vec![0usize; ladder.len().saturating_sub(1)];

    while best.1 > config.e_target
        && iteration < config.max_iterations
        && clock.elapsed() < config.timeout
        && !cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    {
        for (index, replica) in replicas.iter_mut().enumerate() {
            advance_replica(
                hp,
                replica,
                config.phi,
                config.nu,
                ladder[index],
                seed,
                index,
                iteration,
            );
            if replica.energy < best.1 {
                best = (replica.conformation.clone(), replica.energy);
            }
            if let Some(recorder) = recorder.as_deref_mut() {
                recorder.push_sample(
                    iteration,
                    index,
                    ladder[index],
                    replica.energy,
                    &replica.conformation,
                );
            }
        }

        for (pair, probability) in exchange_sweep(&mut replicas, &ladder, offset, seed, iteration)
        {
            exchange_totals[pair] += probability;
            exchange_counts[pair] += 1;
        }
        offset = 1 - offset;
        iteration += 1;

        println!("Iteration {iteration}, Best Energy: {}", best.1);
    }

    let exchange_acceptance = exchange_totals
        .iter()
        .zip(exchange_counts.iter())
        .map(|(total, count)| if *count == 0 { 0.0 } else { total / *count as f64 })
        .collect();

    Ok((best.0, best.1, iteration, exchange_acceptance))
}

/// Convenience constructor bundling the timeout as whole seconds, matching
/// the external API's `timeout in seconds` parameter domain.
pub fn timeout_from_secs(seconds: f64) -> Duration {
    Duration::from_secs_f64(seconds.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_lattice::generate::linear;
    use hp_lattice::sequence::HpString;

    fn ladder_config(chi: usize) -> crate::config::LadderConfig {
        crate::config::LadderConfig {
            chi,
            t_init: 160.0,
            t_final: 220.0,
        }
    }

    #[test]
    fn property_p7_mc_search_monotonicity() {
        let hp = HpString::parse("HPHPPHHPHPPHPHHPPHPH").unwrap();
        let start = linear(hp.len());
        let start_energy = energy(&start, &hp);
        let config = SearchConfig {
            phi: 2000,
            nu: 0.4,
            temperature: 160.0,
        };
        let (_, best_energy) = mc_search(&hp, Some(start), &config, 42).unwrap();
        assert!(best_energy <= start_energy);
    }

    #[test]
    fn property_p9_mc_search_is_deterministic_for_fixed_seed() {
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        let config = SearchConfig {
            phi: 500,
            nu: 0.5,
            temperature: 180.0,
        };
        let a = mc_search(&hp, None, &config, 7).unwrap();
        let b = mc_search(&hp, None, &config, 7).unwrap();
        assert_eq!(a.0.positions(), b.0.positions());
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn rejects_invalid_search_config() {
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        let bad = SearchConfig {
            phi: 10,
            nu: 1.5,
            temperature: 160.0,
        };
        assert!(mc_search(&hp, None, &bad, 1).is_err());
    }

    #[test]
    fn property_p8_remc_monotonicity() {
        let hp = HpString::parse("HPHPPHHPHPPHPHHPPHPH").unwrap();
        let start = linear(hp.len());
        let start_energy = energy(&start, &hp);
        let config = RemcConfig {
            phi: 200,
            nu: 0.4,
            ladder: ladder_config(4),
            e_target: i64::MIN,
            max_iterations: 20,
            timeout: timeout_from_secs(30.0),
            seed_policy: crate::config::SeedPolicy {
                master_seed: 99,
                label: None,
            },
        };
        let (_, best_energy) = remc(&hp, Some(start), &config).unwrap();
        assert!(best_energy <= start_energy);
    }

    #[test]
    fn remc_returns_best_even_without_reaching_target() {
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        let config = RemcConfig {
            phi: 50,
            nu: 0.3,
            ladder: ladder_config(3),
            e_target: i64::MIN, // unreachable, forces iteration-cap exit
            max_iterations: 3,
            timeout: timeout_from_secs(30.0),
            seed_policy: crate::config::SeedPolicy {
                master_seed: 5,
                label: None,
            },
        };
        let result = remc(&hp, None, &config);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_invalid_remc_config() {
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        let config = RemcConfig {
            phi: 10,
            nu: 0.4,
            ladder: ladder_config(1), // chi < 2
            e_target: 0,
            max_iterations: 5,
            timeout: timeout_from_secs(1.0),
            seed_policy: crate::config::SeedPolicy::default(),
        };
        assert!(remc(&hp, None, &config).is_err());
    }
}
