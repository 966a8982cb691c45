use hp_core::RngHandle;
use hp_mcmc::tempering;

#[test]
fn exchange_probabilities_land_in_target_band() {
    let acceptance = tempering::exchange_acceptance(0, 160.0, 600, 220.0);
    assert!(
        acceptance > 0.2 && acceptance < 0.5,
        "unexpected acceptance {acceptance}"
    );

    let mut rng = RngHandle::from_seed(0xDEAD_BEEF);
    let (_accepted, prob) = tempering::attempt_exchange(0, 160.0, 600, 220.0, &mut rng);
    assert!((prob - acceptance).abs() < 1e-12);
}

#[test]
fn ladder_build_matches_config_bounds() {
    let ladder = tempering::build_ladder(&hp_mcmc::LadderConfig {
        chi: 3,
        t_init: 100.0,
        t_final: 400.0,
    });
    assert_eq!(ladder, vec![100.0, 250.0, 400.0]);
}
