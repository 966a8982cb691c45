use hp_lattice::generate::linear;
use hp_lattice::HpString;
use hp_mcmc::{remc_instrumented, LadderConfig, MetricsRecorder, RemcConfig, SeedPolicy};

fn config() -> RemcConfig {
    RemcConfig {
        phi: 60,
        nu: 0.4,
        ladder: LadderConfig {
            chi: 3,
            t_init: 160.0,
            t_final: 220.0,
        },
        e_target: i64::MIN,
        max_iterations: 4,
        timeout: hp_mcmc::kernel::timeout_from_secs(30.0),
        seed_policy: SeedPolicy {
            master_seed: 314159,
            label: Some("serde-roundtrip".to_string()),
        },
    }
}

#[test]
fn remc_outcome_roundtrips_through_json() {
    let hp = HpString::parse("HPPHHPHPPH").unwrap();
    let start = linear(hp.len());
    let mut recorder = MetricsRecorder::new();
    let outcome = remc_instrumented(&hp, Some(start), &config(), &mut recorder).unwrap();

    let bytes = serde_json::to_vec(&outcome).expect("serialize outcome");
    let parsed: hp_mcmc::RemcOutcome = serde_json::from_slice(&bytes).expect("deserialize outcome");

    assert_eq!(parsed.best_energy, outcome.best_energy);
    assert_eq!(
        parsed.best_conformation.positions(),
        outcome.best_conformation.positions()
    );
    assert_eq!(parsed.iterations_run, outcome.iterations_run);
}

#[test]
fn metric_sample_roundtrips_through_json() {
    let mut recorder = MetricsRecorder::new();
    let c = linear(6);
    recorder.push_sample(0, 0, 180.0, -3, &c);
    let sample = recorder.samples()[0].clone();

    let text = serde_json::to_string(&sample).expect("serialize sample");
    let parsed: hp_mcmc::MetricSample = serde_json::from_str(&text).expect("deserialize sample");
    assert_eq!(parsed, sample);
}

#[test]
fn seed_policy_roundtrips_and_preserves_label() {
    let policy = SeedPolicy {
        master_seed: 7,
        label: Some("nightly".to_string()),
    };
    let text = serde_json::to_string(&policy).expect("serialize seed policy");
    let parsed: SeedPolicy = serde_json::from_str(&text).expect("deserialize seed policy");
    assert_eq!(parsed.master_seed, policy.master_seed);
    assert_eq!(parsed.label, policy.label);
}
