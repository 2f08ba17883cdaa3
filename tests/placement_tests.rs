use naval_battle::{
    can_place, check_placement, create_fleet, place, place_fleet_randomly, random_placement,
    Board, CellState, Coordinate, GameError, GameSession, Grid, Orientation, Phase,
    PlacementError, Side, FLEET, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn rejects_footprint_running_off_the_edge() {
    let grid = Grid::new();
    assert!(can_place(&grid, Coordinate::new(0, 5), 5, Orientation::Horizontal));
    assert!(!can_place(&grid, Coordinate::new(0, 6), 5, Orientation::Horizontal));
    assert!(can_place(&grid, Coordinate::new(5, 9), 5, Orientation::Vertical));
    assert!(!can_place(&grid, Coordinate::new(6, 9), 5, Orientation::Vertical));
    // a long ship near the right edge still fits vertically
    assert!(can_place(&grid, Coordinate::new(0, 9), 5, Orientation::Vertical));
    assert_eq!(
        check_placement(&grid, Coordinate::new(9, 8), 3, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        check_placement(&grid, Coordinate::new(12, 0), 2, Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn rejects_overlap_accepts_edge_adjacent() {
    let mut board = Board::new(&FLEET);
    board
        .place(0, Coordinate::new(2, 2), Orientation::Horizontal)
        .unwrap();
    let grid = board.grid();

    // crossing the carrier
    assert_eq!(
        check_placement(grid, Coordinate::new(0, 4), 4, Orientation::Vertical),
        Err(PlacementError::Overlaps)
    );
    // directly below, touching along the whole edge
    assert!(can_place(grid, Coordinate::new(3, 2), 5, Orientation::Horizontal));
    // end-to-end with the carrier
    assert!(can_place(grid, Coordinate::new(2, 7), 3, Orientation::Horizontal));
}

#[test]
fn place_marks_footprint_and_returns_it() {
    let mut grid = Grid::new();
    let mut fleet = create_fleet();
    let carrier = fleet.ship_mut(0).unwrap();
    let coords = place(&mut grid, carrier, Coordinate::new(0, 0), Orientation::Horizontal).unwrap();
    let expected: Vec<_> = (0..5).map(|c| Coordinate::new(0, c)).collect();
    assert_eq!(coords, expected);
    assert_eq!(fleet.ships()[0].footprint(), &expected[..]);
    for at in expected {
        assert_eq!(grid.get_at(at).unwrap(), CellState::Occupied);
    }
    assert_eq!(grid.count(CellState::Occupied), 5);
}

#[test]
fn board_place_reports_invalid_placement() {
    let mut board = Board::new(&FLEET);
    board
        .place(0, Coordinate::new(0, 0), Orientation::Vertical)
        .unwrap();
    let before = board.clone();
    assert_eq!(
        board
            .place(1, Coordinate::new(1, 0), Orientation::Horizontal)
            .unwrap_err(),
        GameError::InvalidPlacement(PlacementError::Overlaps)
    );
    assert_eq!(
        board
            .place(1, Coordinate::new(0, 7), Orientation::Horizontal)
            .unwrap_err(),
        GameError::InvalidPlacement(PlacementError::OutOfBounds)
    );
    assert_eq!(board, before);
}

#[test]
fn far_out_of_range_origin_is_rejected() {
    let grid = Grid::new();
    let cases = [
        (Coordinate::new(0, usize::MAX), Orientation::Horizontal),
        (Coordinate::new(usize::MAX, 3), Orientation::Vertical),
        (Coordinate::new(usize::MAX, usize::MAX), Orientation::Horizontal),
    ];
    for (origin, o) in cases {
        assert!(!can_place(&grid, origin, 5, o));
        assert_eq!(
            check_placement(&grid, origin, 5, o),
            Err(PlacementError::OutOfBounds)
        );
    }

    let mut session = GameSession::builder().seed(5).build().unwrap();
    for (origin, o) in cases {
        assert_eq!(
            session.place_ship(origin, o).unwrap_err(),
            GameError::InvalidPlacement(PlacementError::OutOfBounds)
        );
    }
    assert_eq!(session.phase(), Phase::Placement);
    assert_eq!(session.status().next_ship.map(|(i, _)| i), Some(0));
    assert_eq!(
        session.board(Side::Human).grid().count(CellState::Empty),
        100
    );
}

#[test]
fn placing_a_ship_twice_is_refused() {
    let mut board = Board::new(&FLEET);
    board
        .place(0, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let before = board.clone();
    assert_eq!(
        board
            .place(0, Coordinate::new(5, 5), Orientation::Vertical)
            .unwrap_err(),
        GameError::WrongPhase
    );
    let mut rng = SmallRng::seed_from_u64(9);
    assert_eq!(board.place_randomly(0, &mut rng).unwrap_err(), GameError::WrongPhase);
    assert_eq!(board, before);
    assert_eq!(board.grid().count(CellState::Occupied), 5);
}

#[test]
fn random_placement_is_reproducible() {
    let grid = Grid::new();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    for len in [5, 4, 3, 3, 2, 2] {
        assert_eq!(
            random_placement(&grid, len, &mut rng1),
            random_placement(&grid, len, &mut rng2)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A fully placed random fleet covers exactly 19 cells with pairwise
    /// disjoint footprints.
    #[test]
    fn random_fleet_is_disjoint(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut fleet = create_fleet();
        place_fleet_randomly(&mut grid, &mut fleet, &mut rng).unwrap();

        prop_assert_eq!(grid.count(CellState::Occupied), TOTAL_SHIP_CELLS);
        let mut seen = HashSet::new();
        for ship in fleet.ships() {
            prop_assert_eq!(ship.footprint().len(), ship.length());
            for at in ship.footprint() {
                prop_assert!(seen.insert(*at), "cell {} claimed twice", at);
                prop_assert_eq!(grid.get_at(*at).unwrap(), CellState::Occupied);
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
    }

    /// `can_place` agrees with a direct bounds-and-emptiness check.
    #[test]
    fn can_place_matches_definition(
        seed in any::<u64>(),
        row in 0..10usize,
        col in 0..10usize,
        len in 1..=5usize,
        vertical in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut fleet = create_fleet();
        place_fleet_randomly(&mut grid, &mut fleet, &mut rng).unwrap();

        let o = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let fits = if vertical { row + len <= 10 } else { col + len <= 10 };
        let expected = fits && (0..len).all(|i| {
            let at = o.step(Coordinate::new(row, col), i);
            grid.get_at(at) == Ok(CellState::Empty)
        });
        prop_assert_eq!(can_place(&grid, Coordinate::new(row, col), len, o), expected);
    }
}
