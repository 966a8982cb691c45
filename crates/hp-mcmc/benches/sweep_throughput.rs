use criterion::{criterion_group, criterion_main, Criterion};

use hp_lattice::HpString;
use hp_mcmc::{remc, LadderConfig, RemcConfig, SeedPolicy};

fn sample_sequence() -> HpString {
    HpString::parse("HPHPPHHPHPPHPHHPPHPHHPPH").unwrap()
}

fn bench_config() -> RemcConfig {
    RemcConfig {
        phi: 300,
        nu: 0.3,
        ladder: LadderConfig {
            chi: 5,
            t_init: 160.0,
            t_final: 260.0,
        },
        e_target: i64::MIN,
        max_iterations: 10,
        timeout: hp_mcmc::kernel::timeout_from_secs(60.0),
        seed_policy: SeedPolicy {
            master_seed: 42,
            label: None,
        },
    }
}

fn bench_remc(c: &mut Criterion) {
    let hp = sample_sequence();
    let config = bench_config();

    c.bench_function("remc_sweep", |b| {
        b.iter(|| {
            let _ = remc(&hp, None, &config).unwrap();
        })
    });
}

criterion_group!(benches, bench_remc);
criterion_main!(benches);
