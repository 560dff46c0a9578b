use progeny_core::config::AppConfig;
use progeny_core::lifecycle;
use progeny_core::session::BreedingSession;
use progeny_lib::app::App;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn equal_seeds_reproduce_a_session_draw_for_draw() {
    let mut rng1 = ChaCha8Rng::seed_from_u64(12345);
    let mut rng2 = ChaCha8Rng::seed_from_u64(12345);

    let mut session1 = BreedingSession::new(lifecycle::generate_with_rng(10, &mut rng1));
    let mut session2 = BreedingSession::new(lifecycle::generate_with_rng(10, &mut rng2));

    let ids: Vec<_> = session1.roster().map(|(id, _)| id).collect();
    for window in ids.windows(2) {
        for session in [&mut session1, &mut session2] {
            session.deselect();
            session.select(window[0]);
            session.select(window[1]);
        }
        let child1 = session1.breed_with_rng(&mut rng1).cloned();
        let child2 = session2.breed_with_rng(&mut rng2).cloned();
        assert_eq!(child1, child2);
    }

    assert_eq!(session1.offspring(), session2.offspring());
    for (id, candidate) in session1.roster() {
        assert_eq!(
            candidate.fertility_left(),
            session2.candidate(id).unwrap().fertility_left()
        );
    }
}

#[test]
fn seeded_apps_produce_identical_runs() {
    let mut config = AppConfig::default();
    config.population.seed = Some(99);
    config.population.deterministic = true;
    config.population.size = 8;

    let mut app1 = App::new(config.clone());
    let mut app2 = App::new(config);

    let births1 = app1.run_breeding(16);
    let births2 = app2.run_breeding(16);

    assert_eq!(births1, births2);
    assert_eq!(app1.session.offspring(), app2.session.offspring());
    assert_eq!(app1.state.player_pop, app2.state.player_pop);
    assert_eq!(app1.state.enemy_pop, app2.state.enemy_pop);
}

#[test]
fn different_seeds_diverge() {
    let mut rng1 = ChaCha8Rng::seed_from_u64(1);
    let mut rng2 = ChaCha8Rng::seed_from_u64(2);
    let roster1 = lifecycle::generate_with_rng(10, &mut rng1);
    let roster2 = lifecycle::generate_with_rng(10, &mut rng2);
    assert_ne!(roster1, roster2);
}
