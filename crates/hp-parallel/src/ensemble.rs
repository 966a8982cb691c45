//! Ensemble parallelism: `n_workers` independent REMC runs, each started
//! from its own random conformation with an independent RNG stream, racing
//! to reach the configured target energy.
//!
//! Rust cannot safely force-terminate another OS thread, so "the coordinator
//! terminates all remaining workers" is implemented cooperatively: a shared
//! flag is set as soon as a winner is found, every worker checks it at its
//! own outer-iteration boundary (see [`hp_mcmc::remc_cancellable`]), and the
//! coordinator joins every worker thread before returning.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use hp_core::HpError;
use hp_lattice::{Conformation, HpString};
use hp_mcmc::{determinism, RemcConfig};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Launches `n_workers` independent REMC runs and returns the first result
/// that reaches `config.e_target`, or the overall best if none do before
/// every worker exhausts its own iteration cap or timeout.
///
/// Each worker derives its master seed from `config.seed_policy.master_seed`
/// via [`determinism::worker_seed`], so a fixed `(config, n_workers)` pair
/// always launches the same set of worker seeds, even though which worker
/// wins the race is not itself deterministic (see the concurrency model).
pub fn remc_multi(
    hp: &HpString,
    config: &RemcConfig,
    n_workers: usize,
) -> Result<(Conformation, i64), HpError> {
    config.validate()?;
    assert!(n_workers > 0, "remc_multi requires at least one worker");

    let slots: Arc<Mutex<Vec<Option<(Conformation, i64)>>>> =
        Arc::new(Mutex::new(vec![None; n_workers]));
    let cancel = Arc::new(AtomicBool::new(false));

    let handles: Vec<_> = (0..n_workers)
        .map(|worker_index| {
            let hp = hp.clone();
            let mut worker_config = config.clone();
            worker_config.seed_policy.master_seed =
                determinism::worker_seed(config.seed_policy.master_seed, worker_index);
            let slots = Arc::clone(&slots);
            let cancel = Arc::clone(&cancel);

            thread::spawn(move || {
                let outcome = hp_mcmc::remc_cancellable(&hp, None, &worker_config, &cancel);
                if let Ok(outcome) = outcome {
                    let mut slots = slots.lock().unwrap();
                    slots[worker_index] = Some((outcome.best_conformation, outcome.best_energy));
                }
            })
        })
        .collect();

    loop {
        thread::sleep(POLL_INTERVAL);
        let snapshot = slots.lock().unwrap().clone();
        let winner = snapshot
            .iter()
            .flatten()
            .find(|(_, energy)| *energy <= config.e_target);
        if let Some((conformation, energy)) = winner {
            cancel.store(true, Ordering::Relaxed);
            let result = (conformation.clone(), *energy);
            for handle in handles {
                let _ = handle.join();
            }
            return Ok(result);
        }
        if snapshot.iter().all(Option::is_some) {
            break;
        }
    }

    for handle in handles {
        let _ = handle.join();
    }
    let slots = slots.lock().unwrap();
    let best = slots
        .iter()
        .flatten()
        .min_by_key(|(_, energy)| *energy)
        .cloned()
        .expect("every slot was filled before the poll loop exited");
    Ok(best)
}
