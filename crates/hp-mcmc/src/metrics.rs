//! In-memory coverage metrics collected across a REMC run.
//!
//! The core performs no file I/O (see the error handling design); these
//! structures exist purely for callers (tests, analysis code) that want to
//! inspect what a run explored after the fact.

use std::collections::BTreeSet;

use hp_lattice::Conformation;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Per-outer-iteration metrics sample for one replica.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSample {
    /// Outer iteration index at which the sample was recorded.
    pub iteration: usize,
    /// Replica index within the ladder.
    pub replica: usize,
    /// Temperature of the replica when sampling.
    pub temperature: f64,
    /// Energy of the replica's conformation at sample time.
    pub energy: i64,
    /// Canonical hash of the conformation, used for coverage deduplication.
    pub conformation_hash: String,
}

/// Aggregate coverage metrics summarizing the exploration quality of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageMetrics {
    /// Number of distinct conformations observed across all samples.
    pub unique_conformations: usize,
    /// Mean energy over the recorded samples.
    pub mean_energy: f64,
    /// Variance of the recorded energy values.
    pub energy_variance: f64,
}

impl CoverageMetrics {
    /// Coverage descriptor for a run that recorded no samples.
    pub fn empty() -> Self {
        Self {
            unique_conformations: 0,
            mean_energy: 0.0,
            energy_variance: 0.0,
        }
    }
}

/// Hashes a conformation's residue-ordered position sequence.
pub fn conformation_hash(conformation: &Conformation) -> String {
    let mut hasher = Sha256::new();
    for position in conformation.positions() {
        hasher.update(position.x.to_le_bytes());
        hasher.update(position.y.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Collects per-iteration samples and computes aggregate coverage metrics.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: Vec<MetricSample>,
    unique_hashes: BTreeSet<String>,
}

impl MetricsRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one replica's state at the current outer iteration.
    pub fn push_sample(
        &mut self,
        iteration: usize,
        replica: usize,
        temperature: f64,
        energy: i64,
        conformation: &Conformation,
    ) {
        let hash = conformation_hash(conformation);
        self.unique_hashes.insert(hash.clone());
        self.samples.push(MetricSample {
            iteration,
            replica,
            temperature,
            energy,
            conformation_hash: hash,
        });
    }

    /// Returns an immutable view over the recorded samples.
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    /// Computes aggregate coverage metrics from the recorded data.
    pub fn coverage(&self) -> CoverageMetrics {
        Self::coverage_of(&self.samples)
    }

    /// Computes coverage metrics directly from a slice of samples, without
    /// needing a live recorder (used by [`crate::analysis::RunSummary`]).
    pub fn coverage_of(samples: &[MetricSample]) -> CoverageMetrics {
        if samples.is_empty() {
            return CoverageMetrics::empty();
        }
        let unique: BTreeSet<&str> = samples.iter().map(|s| s.conformation_hash.as_str()).collect();
        let energies: Vec<f64> = samples.iter().map(|s| s.energy as f64).collect();
        let mean_energy = energies.iter().sum::<f64>() / energies.len() as f64;
        let variance = if energies.len() > 1 {
            let mean_sq = energies.iter().map(|&e| e * e).sum::<f64>() / energies.len() as f64;
            (mean_sq - mean_energy * mean_energy).max(0.0)
        } else {
            0.0
        };
        CoverageMetrics {
            unique_conformations: unique.len(),
            mean_energy,
            energy_variance: variance,
        }
    }
}
