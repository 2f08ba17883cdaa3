use naval_battle::{
    strategy_for, Coordinate, Difficulty, HuntingTargeting, RandomTargeting, ShotHistory,
    ShotResult, TargetingStrategy,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Drive a strategy for 100 shots; outcomes come from `is_ship`.
fn run_full_board(
    strategy: &mut dyn TargetingStrategy,
    seed: u64,
    is_ship: impl Fn(Coordinate) -> bool,
) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut history = ShotHistory::new();
    let mut fired = Vec::new();
    while let Some(target) = strategy.select_target(&history, &mut rng) {
        assert!(!history.contains(target), "repeated {}", target);
        assert!(history.record(target).unwrap());
        let result = if is_ship(target) { ShotResult::Hit } else { ShotResult::Miss };
        strategy.record_result(target, result);
        fired.push(target);
    }
    fired
}

#[test]
fn hunting_targets_neighbors_of_last_hit() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut hunter = HuntingTargeting::new();
    let history = ShotHistory::new();
    hunter.record_result(at(4, 4), ShotResult::Hit);
    let neighbors = [at(3, 4), at(5, 4), at(4, 3), at(4, 5)];
    for _ in 0..50 {
        let t = hunter.select_target(&history, &mut rng).unwrap();
        assert!(neighbors.contains(&t), "{} is not next to E5", t);
    }
}

#[test]
fn hunting_skips_shot_and_offboard_neighbors() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut hunter = HuntingTargeting::new();
    let mut history = ShotHistory::new();
    history.record(at(0, 0)).unwrap();
    history.record(at(1, 0)).unwrap();
    hunter.record_result(at(0, 0), ShotResult::Hit);
    // (0,0) has neighbours (1,0) and (0,1); only (0,1) is unshot
    for _ in 0..10 {
        assert_eq!(hunter.select_target(&history, &mut rng), Some(at(0, 1)));
    }
}

#[test]
fn hunting_falls_back_to_random_when_boxed_in() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut hunter = HuntingTargeting::new();
    let mut history = ShotHistory::new();
    for cell in [at(5, 5), at(4, 5), at(6, 5), at(5, 4), at(5, 6)] {
        history.record(cell).unwrap();
    }
    hunter.record_result(at(5, 5), ShotResult::Hit);
    assert_eq!(hunter.candidates(&history).count(), 0);
    let t = hunter.select_target(&history, &mut rng).unwrap();
    assert!(!history.contains(t));
}

#[test]
fn strategy_for_difficulty() {
    assert_eq!(strategy_for(Difficulty::Easy).difficulty(), Difficulty::Easy);
    assert_eq!(strategy_for(Difficulty::Hard).difficulty(), Difficulty::Hard);
}

#[test]
fn random_mode_covers_the_whole_board() {
    let fired = run_full_board(&mut RandomTargeting, 99, |_| false);
    assert_eq!(fired.len(), 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Neither mode repeats a target over a full 100-shot run.
    #[test]
    fn no_repeats_over_full_run(seed in any::<u64>(), density in 0u64..4) {
        // a deterministic pseudo-layout: roughly density/4 of cells are "ship"
        let is_ship = move |c: Coordinate| ((c.row * 7 + c.col * 3) as u64).wrapping_add(seed) % 4 < density;

        let fired = run_full_board(&mut RandomTargeting, seed, is_ship);
        prop_assert_eq!(fired.len(), 100);

        let mut hunter = HuntingTargeting::new();
        let fired = run_full_board(&mut hunter, seed, is_ship);
        prop_assert_eq!(fired.len(), 100);
        let mut sorted = fired.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), 100);
    }
}
