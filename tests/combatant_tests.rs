use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Combatant, Coordinate, Grid, GridError, GridView, Orientation, RandomTargeting, ShotResult,
    Targeting, TurnError, Vessel,
};

/// Replays a fixed list of targets and records what the combatant reports back.
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: Rc<RefCell<Vec<GridError>>>,
    resolved: Rc<RefCell<Vec<(Coordinate, ShotResult)>>>,
}

impl Targeting for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _view: &GridView) -> Option<Coordinate> {
        self.targets.pop_front()
    }

    fn shot_rejected(&mut self, _coord: Coordinate, error: &GridError) {
        self.rejected.borrow_mut().push(*error);
    }

    fn shot_resolved(&mut self, coord: Coordinate, result: ShotResult) {
        self.resolved.borrow_mut().push((coord, result));
    }
}

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_invalid_targets_are_retried() {
    let rejected = Rc::new(RefCell::new(Vec::new()));
    let resolved = Rc::new(RefCell::new(Vec::new()));
    let script = Scripted {
        targets: [at(0, 0), at(7, 3), at(2, 2), at(2, 2), at(3, 3)].into(),
        rejected: Rc::clone(&rejected),
        resolved: Rc::clone(&resolved),
    };
    let mut combatant = Combatant::new("Tester", Grid::new(), Box::new(script));
    let mut target = Grid::new();
    let mut rng = SmallRng::seed_from_u64(0);

    let shot = combatant.take_turn(&mut target, &mut rng).unwrap();
    assert_eq!(shot.target, at(2, 2));
    assert_eq!(shot.result, ShotResult::Miss);
    assert_eq!(shot.rejected, 2);

    let shot = combatant.take_turn(&mut target, &mut rng).unwrap();
    assert_eq!(shot.target, at(3, 3));
    assert_eq!(shot.rejected, 1);

    assert_eq!(
        *rejected.borrow(),
        vec![
            GridError::OutOfBounds { row: 0, col: 0 },
            GridError::OutOfBounds { row: 7, col: 3 },
            GridError::AlreadyTargeted { row: 2, col: 2 },
        ]
    );
    assert_eq!(
        *resolved.borrow(),
        vec![(at(2, 2), ShotResult::Miss), (at(3, 3), ShotResult::Miss)]
    );
    assert_eq!(combatant.shots_fired(), 2);
    assert_eq!(combatant.grid(), &Grid::new());
}

#[test]
fn test_exhausted_script_withdraws() {
    let script = Scripted {
        targets: VecDeque::new(),
        rejected: Rc::new(RefCell::new(Vec::new())),
        resolved: Rc::new(RefCell::new(Vec::new())),
    };
    let mut combatant = Combatant::new("Tester", Grid::new(), Box::new(script));
    let mut target = Grid::new();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        combatant.take_turn(&mut target, &mut rng),
        Err(TurnError::Withdrew)
    );
    assert_eq!(combatant.shots_fired(), 0);
    assert_eq!(target, Grid::new());
}

#[test]
fn test_random_targeting_finds_last_open_cell() {
    let last = at(4, 5);
    for seed in 0..16 {
        let mut target = Grid::new();
        assert!(target.place_vessel(&Vessel::new(1, last, Orientation::Vertical)));
        for coord in target.untargeted() {
            if coord != last {
                assert_eq!(target.shoot(coord), Ok(ShotResult::Miss));
            }
        }
        assert_eq!(target.untargeted(), vec![last]);

        let mut combatant = Combatant::new("Computer", Grid::new(), Box::new(RandomTargeting::new()));
        let mut rng = SmallRng::seed_from_u64(seed);
        let shot = combatant.take_turn(&mut target, &mut rng).unwrap();
        assert_eq!(shot.target, last);
        assert_eq!(shot.result, ShotResult::Hit);
        assert!(target.is_defeated());
        assert!(target.untargeted().is_empty());
    }
}

#[test]
fn test_random_targeting_stays_on_grid() {
    let mut targeting = RandomTargeting::new();
    let mut rng = SmallRng::seed_from_u64(77);
    let view = Grid::new().view(false);
    for _ in 0..500 {
        let coord = targeting.select_target(&mut rng, &view).unwrap();
        assert!(!Grid::is_out_of_bounds(coord));
    }
}

#[test]
fn test_fully_targeted_grid_has_no_targets_left() {
    let mut target = Grid::new();
    for coord in target.untargeted() {
        assert_eq!(target.shoot(coord), Ok(ShotResult::Miss));
    }
    assert!(!target.is_defeated());
    let before = target.clone();

    let mut combatant = Combatant::new("Computer", Grid::new(), Box::new(RandomTargeting::new()));
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        combatant.take_turn(&mut target, &mut rng),
        Err(TurnError::NoTargetsLeft)
    );
    assert_eq!(combatant.shots_fired(), 0);
    assert_eq!(target, before);
}
