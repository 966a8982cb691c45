use hp_core::RngHandle;
use rand::RngCore;

use crate::config::LadderConfig;

/// Builds the linear temperature ladder `T[i] = t_init + i*(t_final-t_init)/(chi-1)`.
///
/// The ladder is fixed at run start; `config` must already have passed
/// [`LadderConfig::validate`].
pub fn build_ladder(config: &LadderConfig) -> Vec<f64> {
    let chi = config.chi.max(1);
    if chi == 1 {
        return vec![config.t_init];
    }
    let step = (config.t_final - config.t_init) / (chi - 1) as f64;
    (0..chi).map(|i| config.t_init + i as f64 * step).collect()
}

/// Computes the Metropolis exchange acceptance probability for adjacent
/// replicas `i` (energy/temperature `energy_i`/`temp_i`) and `i+1`.
///
/// `delta = (1/temp_j - 1/temp_i) * (energy_i - energy_j)`; always swap when
/// `delta <= 0`, otherwise swap with probability `exp(-delta)`.
pub fn exchange_acceptance(energy_i: i64, temp_i: f64, energy_j: i64, temp_j: f64) -> f64 {
    let delta = (1.0 / temp_j - 1.0 / temp_i) * (energy_i - energy_j) as f64;
    if delta <= 0.0 {
        1.0
    } else {
        (-delta).exp()
    }
}

/// Draws the accept/reject outcome for an exchange attempt between replicas
/// `i` and `i+1`, returning `(accepted, acceptance_probability)`.
pub fn attempt_exchange(
    energy_i: i64,
    temp_i: f64,
    energy_j: i64,
    temp_j: f64,
    rng: &mut RngHandle,
) -> (bool, f64) {
    let acceptance = exchange_acceptance(energy_i, temp_i, energy_j, temp_j);
    let draw = rng.next_u64() as f64 / u64::MAX as f64;
    (draw < acceptance, acceptance)
}
