use std::time::Duration;

use hp_core::HpError;
use serde::{Deserialize, Serialize};

/// Parameters governing a single-temperature MC search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of Metropolis iterations per search (phi).
    pub phi: usize,
    /// Probability of proposing a pull move rather than a VSHD move (nu).
    pub nu: f64,
    /// Fixed temperature for the search.
    pub temperature: f64,
}

impl SearchConfig {
    /// Validates phi/nu/temperature against the documented parameter domains.
    pub fn validate(&self) -> Result<(), HpError> {
        if !(0.0..=1.0).contains(&self.nu) {
            return Err(HpError::invalid(
                "E_NU_RANGE",
                format!("nu must lie in [0, 1], got {}", self.nu),
            ));
        }
        if self.temperature <= 0.0 {
            return Err(HpError::invalid(
                "E_TEMPERATURE",
                format!("temperature must be > 0, got {}", self.temperature),
            ));
        }
        Ok(())
    }
}

/// Linear temperature ladder construction settings.
///
/// The reference driver only ever uses a linear interpolation between
/// `t_init` and `t_final`; the teacher's geometric/manual ladder policies
/// have no counterpart here (see the crate's design notes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Number of replicas in the ladder (chi), must be >= 2.
    pub chi: usize,
    /// Temperature of the coldest replica.
    pub t_init: f64,
    /// Temperature of the hottest replica.
    pub t_final: f64,
}

impl LadderConfig {
    /// Validates chi/t_init/t_final against the documented parameter domains.
    pub fn validate(&self) -> Result<(), HpError> {
        if self.chi < 2 {
            return Err(HpError::invalid(
                "E_CHI_RANGE",
                format!("chi must be >= 2, got {}", self.chi),
            ));
        }
        if self.t_init <= 0.0 {
            return Err(HpError::invalid(
                "E_T_INIT",
                format!("t_init must be > 0, got {}", self.t_init),
            ));
        }
        if self.t_final <= 0.0 {
            return Err(HpError::invalid(
                "E_T_FINAL",
                format!("t_final must be > 0, got {}", self.t_final),
            ));
        }
        Ok(())
    }
}

/// Deterministic seeding configuration shared by every entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed for the run; substreams are derived from this value.
    pub master_seed: u64,
    /// Optional label recorded alongside run summaries for provenance.
    #[serde(default)]
    pub label: Option<String>,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: 0x05EE_D5EE_DD15_5EED_u64,
            label: None,
        }
    }
}

/// Full parameter set for a [`crate::kernel::remc`] run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemcConfig {
    /// Sweep length per replica per outer iteration (phi).
    pub phi: usize,
    /// Pull-move probability (nu).
    pub nu: f64,
    /// Replica ladder configuration.
    pub ladder: LadderConfig,
    /// Target energy; the driver stops once any replica reaches it.
    pub e_target: i64,
    /// Hard cap on outer iterations.
    pub max_iterations: usize,
    /// Wall-clock budget for the whole run.
    pub timeout: Duration,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

impl RemcConfig {
    /// Validates every parameter against the documented domains (§7 of the
    /// error handling design): chi < 2, phi < 0 (not representable by
    /// `usize`, so only chi/nu/temperatures/timeout are checked here), nu
    /// outside [0, 1], non-positive temperatures, non-positive timeout.
    pub fn validate(&self) -> Result<(), HpError> {
        if !(0.0..=1.0).contains(&self.nu) {
            return Err(HpError::invalid(
                "E_NU_RANGE",
                format!("nu must lie in [0, 1], got {}", self.nu),
            ));
        }
        self.ladder.validate()?;
        if self.timeout.is_zero() {
            return Err(HpError::invalid(
                "E_TIMEOUT",
                "timeout must be > 0 seconds",
            ));
        }
        Ok(())
    }
}
