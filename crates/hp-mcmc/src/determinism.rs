use hp_core::derive_substream_seed;

/// Derives the deterministic seed used for a specific replica's RNG stream.
pub fn replica_seed(master_seed: u64, replica_index: usize) -> u64 {
    derive_substream_seed(master_seed, replica_index as u64)
}

/// Derives the deterministic seed for a single move proposal within a sweep.
pub fn move_seed(master_seed: u64, replica_index: usize, iteration: usize, trial: usize) -> u64 {
    let intermediate =
        derive_substream_seed(master_seed, (replica_index as u64) << 32 | iteration as u64);
    derive_substream_seed(intermediate, trial as u64)
}

/// Deterministic identifier for an exchange attempt between replicas
/// `pair_index` and `pair_index + 1` at a given outer iteration.
pub fn exchange_seed(master_seed: u64, iteration: usize, pair_index: usize) -> u64 {
    derive_substream_seed(
        master_seed ^ 0xA5A5_A5A5_A5A5_A5A5,
        (iteration as u64) << 16 | pair_index as u64,
    )
}

/// Derives the per-worker master seed used by the ensemble executor.
pub fn worker_seed(master_seed: u64, worker_index: usize) -> u64 {
    derive_substream_seed(master_seed ^ 0x5A5A_5A5A_5A5A_5A5A, worker_index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replica_seeds_are_distinct() {
        assert_ne!(replica_seed(1, 0), replica_seed(1, 1));
    }

    #[test]
    fn move_seeds_are_deterministic() {
        let a = move_seed(1, 0, 5, 2);
        let b = move_seed(1, 0, 5, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn worker_seeds_differ_from_replica_seeds() {
        assert_ne!(worker_seed(1, 0), replica_seed(1, 0));
    }
}
