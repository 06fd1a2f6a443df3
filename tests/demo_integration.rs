//! Golden test for the built-in 8x8 demo
//!
//! Food only ever spins in place. Each hopper advances one cell per round in
//! its fixed facing until the wall stops it, after which every hop is a no-op.

use darwin::core::types::{Direction, Position};
use darwin::render::render_board;
use darwin::scenario::Scenario;
use darwin::simulation::{ActionOutcome, SimulationEvent};
use darwin::world::World;

fn snapshot(world: &World) -> Vec<(Position, String, Direction)> {
    world
        .creatures()
        .map(|(pos, c)| (pos, c.symbol().to_string(), c.facing()))
        .collect()
}

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_demo_trajectory() {
    use Direction::*;

    let scenario = Scenario::demo().unwrap();
    let rounds = scenario.config.rounds;
    let mut sim = scenario.into_simulation().unwrap();

    let mut boards = Vec::new();
    sim.run(rounds, |_, world| boards.push(snapshot(world))).unwrap();
    assert_eq!(boards.len(), 6);

    // (food at 0,0), (hopper N), (hopper E), (hopper W), (hopper S), (food at 7,7)
    // listed in scan order for each round
    let expected: Vec<Vec<(Position, &str, Direction)>> = vec![
        vec![
            (p(0, 0), "f", East),
            (p(3, 3), "h", North),
            (p(3, 4), "h", East),
            (p(4, 3), "h", West),
            (p(4, 4), "h", South),
            (p(7, 7), "f", North),
        ],
        vec![
            (p(0, 0), "f", North),
            (p(2, 3), "h", North),
            (p(3, 5), "h", East),
            (p(4, 2), "h", West),
            (p(5, 4), "h", South),
            (p(7, 7), "f", West),
        ],
        vec![
            (p(0, 0), "f", West),
            (p(1, 3), "h", North),
            (p(3, 6), "h", East),
            (p(4, 1), "h", West),
            (p(6, 4), "h", South),
            (p(7, 7), "f", South),
        ],
        vec![
            (p(0, 0), "f", South),
            (p(0, 3), "h", North),
            (p(3, 7), "h", East),
            (p(4, 0), "h", West),
            (p(7, 4), "h", South),
            (p(7, 7), "f", East),
        ],
        vec![
            (p(0, 0), "f", East),
            (p(0, 3), "h", North),
            (p(3, 7), "h", East),
            (p(4, 0), "h", West),
            (p(7, 4), "h", South),
            (p(7, 7), "f", North),
        ],
        vec![
            (p(0, 0), "f", North),
            (p(0, 3), "h", North),
            (p(3, 7), "h", East),
            (p(4, 0), "h", West),
            (p(7, 4), "h", South),
            (p(7, 7), "f", West),
        ],
    ];

    for (round, (actual, wanted)) in boards.iter().zip(&expected).enumerate() {
        let wanted: Vec<(Position, String, Direction)> = wanted
            .iter()
            .map(|(pos, sym, dir)| (*pos, sym.to_string(), *dir))
            .collect();
        assert_eq!(actual, &wanted, "board mismatch after round {}", round);
    }
}

#[test]
fn test_demo_rendering() {
    let scenario = Scenario::demo().unwrap();
    let rounds = scenario.config.rounds;
    let mut sim = scenario.into_simulation().unwrap();

    let initial = render_board(sim.world());
    assert_eq!(
        initial,
        "  01234567\n\
         0 f-------\n\
         1 --------\n\
         2 --------\n\
         3 ---hh---\n\
         4 ---hh---\n\
         5 --------\n\
         6 --------\n\
         7 -------f\n"
    );

    sim.run(rounds, |_, _| {}).unwrap();
    assert_eq!(
        render_board(sim.world()),
        "  01234567\n\
         0 f--h----\n\
         1 --------\n\
         2 --------\n\
         3 -------h\n\
         4 h-------\n\
         5 --------\n\
         6 --------\n\
         7 ----h--f\n"
    );
}

#[test]
fn test_bundled_arena_runs() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/arena.toml");
    let scenario = Scenario::load(&path).unwrap();
    assert_eq!(scenario.world.creature_count(), 9);
    assert_eq!(scenario.species.len(), 4);

    let rounds = scenario.config.rounds;
    let mut sim = scenario.into_simulation().unwrap();
    let reports = sim.run(rounds, |_, _| {}).unwrap();

    assert_eq!(reports.len(), 30);
    assert_eq!(sim.world().creature_count(), 9);
    // food never infects, so it can only lose members
    let food = sim.world().census().get("f").copied().unwrap_or(0);
    assert!(food <= 4);
}

#[test]
fn test_hoppers_blocked_once_at_wall() {
    let scenario = Scenario::demo().unwrap();
    let mut sim = scenario.into_simulation().unwrap();
    let reports = sim.run(5, |_, _| {}).unwrap();

    for report in &reports {
        for event in &report.events {
            let SimulationEvent::TurnTaken { species, outcome, steps, .. } = event else {
                panic!("demo has no infections");
            };
            if species == "h" {
                let expected = if report.round <= 3 {
                    ActionOutcome::Moved
                } else {
                    ActionOutcome::Blocked
                };
                assert_eq!(*outcome, expected, "round {}", report.round);
            } else {
                assert_eq!(*outcome, ActionOutcome::Turned);
            }
            // first round starts at the action, later rounds loop through `go 0`
            let expected_steps = if report.round == 1 { 1 } else { 2 };
            assert_eq!(*steps, expected_steps);
        }
        assert_eq!(report.census.get("h"), Some(&4));
        assert_eq!(report.census.get("f"), Some(&2));
    }
}
