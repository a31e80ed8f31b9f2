use lifeboard_lib::model::config::AppConfig;
use lifeboard_lib::model::grid::Grid;
use lifeboard_lib::model::simulation::Simulation;
use lifeboard_lib::model::state::RuleParameters;

#[test]
fn test_same_seed_same_initial_board() {
    let a = Simulation::new(30, RuleParameters::conway(), 12345).unwrap();
    let b = Simulation::new(30, RuleParameters::conway(), 12345).unwrap();
    assert!(a.initial_grid().equals(b.initial_grid()).unwrap());
}

#[test]
fn test_same_seed_same_run() {
    let mut a = Simulation::new(20, RuleParameters::conway(), 99).unwrap();
    let mut b = Simulation::new(20, RuleParameters::conway(), 99).unwrap();

    let mut trace_a = Vec::new();
    let mut trace_b = Vec::new();
    let summary_a = a.run(Some(300), |r| trace_a.push(r.population)).unwrap();
    let summary_b = b.run(Some(300), |r| trace_b.push(r.population)).unwrap();

    assert_eq!(trace_a, trace_b, "Population traces should match");
    assert_eq!(summary_a, summary_b);
}

#[test]
fn test_random_population_below_board_size() {
    for seed in 0..50 {
        let mut grid = Grid::new(4).unwrap();
        grid.populate_random(seed);
        assert!(grid.count_live() < 16, "seed {seed} filled the board");
    }
}

#[test]
fn test_from_config_matches_new() {
    let mut config = AppConfig::default();
    config.engine.side_length = 15;
    let from_config = Simulation::from_config(&config.engine, 7).unwrap();
    let direct = Simulation::new(15, RuleParameters::conway(), 7).unwrap();
    assert_eq!(from_config.initial_grid(), direct.initial_grid());
}
