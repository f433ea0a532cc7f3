use gridlife::{Engine, Grid, Rule};

/// Conway's Game of Life, written the long way round to exercise rule injection.
#[derive(Debug)]
pub struct Gol;

impl Rule for Gol {
    fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        // Count the cell itself too, like a 3x3 window would.
        let n = neighbors + alive as usize;
        if alive {
            (3..=4).contains(&n)
        } else {
            n == 3
        }
    }
}

/// Every cell dies no matter what.
#[derive(Debug)]
struct Extinction;

impl Rule for Extinction {
    fn next_state(&self, _: bool, _: usize) -> bool {
        false
    }
}

#[test]
fn gol_blinker() {
    let mut grid = Grid::from_fn(5, 5, |x, y| y == 2 && (1..=3).contains(&x)).unwrap();
    grid = grid.next_generation(&Gol);
    assert_eq!(
        grid,
        Grid::from_fn(5, 5, |x, y| x == 2 && (1..=3).contains(&y)).unwrap()
    );
    grid = grid.next_generation(&Gol);
    assert_eq!(
        grid,
        Grid::from_fn(5, 5, |x, y| y == 2 && (1..=3).contains(&x)).unwrap()
    );
}

#[test]
fn injected_rule_drives_the_engine() {
    let mut engine = Engine::with_rule(4, 4, Extinction).unwrap();
    engine.set_cell(1, 1, true).unwrap();
    engine.set_cell(1, 2, true).unwrap();
    engine.step();
    assert_eq!(engine.alive_count(), 0);
    assert_eq!(engine.generation(), 1);
}

#[test]
fn boxed_rules_can_be_chosen_at_runtime() {
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(Gol), Box::new(gridlife::Conway)];
    for rule in rules {
        let mut engine = Engine::with_rule(5, 5, rule).unwrap();
        for x in 1..=3 {
            engine.set_cell(x, 2, true).unwrap();
        }
        engine.step();
        assert!(engine.get_cell(2, 1).unwrap());
        assert!(engine.get_cell(2, 3).unwrap());
        assert!(!engine.get_cell(1, 2).unwrap());
        assert_eq!(engine.alive_count(), 3);
    }
}

#[test]
fn stepping_twice_from_the_same_grid_is_deterministic() {
    let grid = Grid::from_fn(16, 16, |x, y| (x * 7 + y * 13) % 5 < 2).unwrap();
    let a = grid.next_generation(&Gol).next_generation(&Gol);
    let b = grid.next_generation(&Gol).next_generation(&Gol);
    assert_eq!(a, b);
}
