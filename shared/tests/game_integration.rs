use elimination::{
    run_batch, CellState, EngineState, Error, Grid, RandomSelector, Selection, ToggleEngine,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn lit(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|cell| cell.state().is_on())
        .map(|cell| (cell.row(), cell.col()))
        .collect()
}

fn corner_only() -> ToggleEngine {
    let grid = Grid::from_fn(3, |row, col| {
        if (row, col) == (0, 0) {
            CellState::On
        } else {
            CellState::Off
        }
    })
    .unwrap();
    ToggleEngine::new(grid)
}

#[test]
fn corner_game_plays_out_to_termination() {
    let mut engine = corner_only();
    assert_eq!(engine.state(), EngineState::Running);

    let first = engine.select(0, 0).unwrap();
    assert_eq!(first, Selection { state: EngineState::Running, selections: 1 });
    assert_eq!(lit(engine.grid()), vec![(0, 1), (1, 0)]);
    assert!(!engine.grid().all_off());

    let second = engine.select(0, 1).unwrap();
    assert_eq!(second.selections, 2);
    assert_eq!(engine.grid().state_at(0, 1).unwrap(), CellState::Off);
    assert_eq!(engine.grid().state_at(0, 0).unwrap(), CellState::On);
    assert_eq!(engine.grid().state_at(1, 1).unwrap(), CellState::On);
    assert_eq!(lit(engine.grid()), vec![(0, 0), (0, 2), (1, 0), (1, 1)]);

    let rest = [(0, 2), (0, 1), (1, 0), (1, 2), (2, 0), (1, 0), (2, 1)];
    for (step, &(row, col)) in rest.iter().enumerate() {
        assert!(!engine.is_terminated(), "terminated early at step {step}");
        assert_eq!(engine.grid().state_at(row, col).unwrap(), CellState::On);
        engine.select(row, col).unwrap();
    }

    assert!(engine.grid().all_off());
    assert_eq!(engine.selection(), Selection { state: EngineState::Terminated, selections: 9 });
    assert_eq!(
        engine.select(1, 1).unwrap_err(),
        Error::GameAlreadyTerminated { selections: 9 }
    );
    assert_eq!(engine.selections(), 9);
}

#[test]
fn progress_towards_dark_board_is_not_monotonic() {
    let mut engine = corner_only();
    assert_eq!(engine.grid().on_count(), 1);

    engine.select(0, 0).unwrap();
    // One hit, yet more cells are lit than before.
    assert_eq!(engine.grid().on_count(), 2);
    assert_eq!(engine.grid().state_at(0, 0).unwrap(), CellState::Off);

    engine.select(0, 1).unwrap();
    // A cell switched off by its own hit is relit by a neighbour's hit.
    assert_eq!(engine.grid().state_at(0, 0).unwrap(), CellState::On);
    assert_eq!(engine.grid().on_count(), 4);
}

fn replay(seed: u64, picks: &[(usize, usize)]) -> (Vec<CellState>, u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = ToggleEngine::new(Grid::new(5, &mut rng).unwrap());
    for &(row, col) in picks {
        if engine.is_terminated() {
            break;
        }
        engine.select(row, col).unwrap();
    }
    let states = engine.grid().cells().map(|cell| cell.state()).collect();
    (states, engine.selections())
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut picker = StdRng::seed_from_u64(7);
    let picks: Vec<_> = (0..200)
        .map(|_| (picker.random_range(0..5), picker.random_range(0..5)))
        .collect();
    assert_eq!(replay(0xDEADBEEF, &picks), replay(0xDEADBEEF, &picks));
}

#[test]
fn batch_yields_one_count_per_trial() {
    let counts: Vec<u64> = run_batch(3, 10).unwrap().collect();
    assert_eq!(counts.len(), 10);
}

#[test]
fn batch_is_restartable() {
    let batch = run_batch(3, 10).unwrap();
    let first: Vec<u64> = batch.clone().collect();
    let again: Vec<u64> = batch.collect();
    assert_eq!(first, again);
}

#[test]
fn each_trial_replays_from_its_seed() {
    let selector = RandomSelector::with_seed(3, 1234).unwrap();
    let trials: Vec<_> = selector.trials(10).collect();
    for trial in &trials {
        assert_eq!(trial.seed, selector.trial_seed(trial.index));
        assert_eq!(selector.run_trial(trial.index), *trial);
    }

    let other = RandomSelector::with_seed(3, 1234).unwrap();
    assert_eq!(other.trials(10).collect::<Vec<_>>(), trials);
}
