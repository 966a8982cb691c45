//! Post-hoc analysis of a finished run's in-memory samples.
//!
//! The core performs no file I/O, so there is nothing here to load from
//! disk; these helpers only reshape data already held in a
//! [`MetricsRecorder`](crate::metrics::MetricsRecorder) or
//! [`RemcOutcome`](crate::kernel::RemcOutcome).

use hp_lattice::Conformation;

use crate::kernel::RemcOutcome;
use crate::metrics::{CoverageMetrics, MetricSample};

/// A compact summary of a completed REMC run, combining the driver's
/// outcome with the coverage computed from its recorded samples.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Best conformation observed across all replicas.
    pub best_conformation: Conformation,
    /// Energy of `best_conformation`.
    pub best_energy: i64,
    /// Outer iterations actually executed.
    pub iterations_run: usize,
    /// Mean exchange acceptance probability per ladder pair.
    pub exchange_acceptance: Vec<f64>,
    /// Coverage metrics computed from the run's recorded samples.
    pub coverage: CoverageMetrics,
}

impl RunSummary {
    /// Builds a summary from a driver outcome and the samples recorded
    /// alongside it.
    pub fn new(outcome: RemcOutcome, samples: &[MetricSample]) -> Self {
        let coverage = crate::metrics::MetricsRecorder::coverage_of(samples);
        Self {
            best_conformation: outcome.best_conformation,
            best_energy: outcome.best_energy,
            iterations_run: outcome.iterations_run,
            exchange_acceptance: outcome.exchange_acceptance,
            coverage,
        }
    }
}

/// Extracts the running minimum energy across all replicas, one point per
/// outer iteration, from a run's recorded samples.
///
/// Samples are expected in the order [`MetricsRecorder::push_sample`]
/// produces them (iteration-major, replica-minor); out-of-order input still
/// produces a correct trajectory since each point only depends on samples
/// at or before its iteration.
pub fn best_energy_trajectory(samples: &[MetricSample]) -> Vec<(usize, i64)> {
    let mut trajectory = Vec::new();
    let mut running_best = i64::MAX;
    let mut last_iteration = None;

    let mut ordered: Vec<&MetricSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.iteration);

    for sample in ordered {
        running_best = running_best.min(sample.energy);
        if last_iteration != Some(sample.iteration) {
            trajectory.push((sample.iteration, running_best));
            last_iteration = Some(sample.iteration);
        } else if let Some(last) = trajectory.last_mut() {
            last.1 = running_best;
        }
    }
    trajectory
}
