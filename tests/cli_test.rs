#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::time::Duration;

    use naval_battle::cli::{parse_coord, parse_orientation, print_board, run_game};
    use naval_battle::{Coordinate, GameSession, Orientation, Phase, ShipDef, Side};

    fn run(session: &mut GameSession, input: &str) -> String {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        rt.block_on(run_game(session, &mut input, &mut out, Duration::ZERO))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_column_letter_then_row() {
        assert_eq!(parse_coord("A1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("j10"), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coord(" C5 "), Ok(Coordinate::new(4, 2)));
    }

    #[test]
    fn rejects_bad_coordinates() {
        for bad in ["", "A", "K1", "A0", "A11", "1A", "Ax"] {
            assert!(parse_coord(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn parses_orientation_words() {
        assert_eq!(parse_orientation("h"), Ok(Orientation::Horizontal));
        assert_eq!(parse_orientation("Vertical"), Ok(Orientation::Vertical));
        assert!(parse_orientation("diagonal").is_err());
    }

    #[test]
    fn coordinate_display_parses_back() {
        let c = Coordinate::new(6, 3);
        assert_eq!(parse_coord(&c.to_string()), Ok(c));
    }

    #[test]
    fn board_frame_lines_have_equal_width() {
        let mut session = GameSession::builder().seed(6).build().unwrap();
        session.auto_place_remaining().unwrap();
        session.fire_shot(Coordinate::new(9, 9)).unwrap();
        for side in [Side::Human, Side::Opponent] {
            let mut out = Vec::new();
            print_board(&mut out, &session, side).unwrap();
            let text = String::from_utf8(out).unwrap();
            let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
            assert_eq!(widths.len(), 14);
            assert!(widths.iter().all(|&w| w == widths[0]), "{:?}", widths);
        }
    }

    #[test]
    fn auto_placement_then_quit() {
        let mut session = GameSession::builder().seed(1).build().unwrap();
        let out = run(&mut session, "auto\nq\n");
        assert!(out.contains("All ships placed"));
        assert_eq!(session.phase(), Phase::Shooting);
    }

    #[test]
    fn manual_placement_and_rotation() {
        let mut session = GameSession::builder().seed(2).build().unwrap();
        let out = run(&mut session, "A1 V\nr\nB1\nZ9\nquit\n");
        assert!(out.contains("Aircraft Carrier placed at A1"));
        assert!(out.contains("Cruiser placed at B1"));
        assert!(out.contains("✗ Error"));
        let fleet = session.board(Side::Human).fleet();
        assert_eq!(fleet.ships()[0].footprint()[4], Coordinate::new(4, 0));
        // rotated back to horizontal before the cruiser went down
        assert_eq!(fleet.ships()[1].footprint()[3], Coordinate::new(0, 4));
    }

    #[test]
    fn shots_report_the_computer_reply() {
        let mut session = GameSession::builder().seed(3).build().unwrap();
        let out = run(&mut session, "auto\nhelp\nE5\nE5\nnonsense\n");
        assert!(out.contains("Shooting commands"));
        assert!(out.contains("The computer fired at"));
        assert!(out.contains("✗ Invalid coordinate"));
        assert_eq!(session.stats(Side::Human).shots(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn game_over_prints_summary() {
        let mut session = GameSession::builder()
            .seed(4)
            .fleet(&[ShipDef::new("Dinghy", 1)])
            .build()
            .unwrap();
        session.auto_place_remaining().unwrap();
        let target = session.board(Side::Opponent).fleet().ships()[0].footprint()[0];

        let out = run(&mut session, &format!("{}\nn\n", target));
        assert!(out.contains("SUNK! You destroyed the enemy's Dinghy"));
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("Winner: Player"));
        assert!(out.contains("Play again?"));
        assert_eq!(session.winner(), Some(Side::Human));
    }

    #[test]
    fn play_again_restarts() {
        let mut session = GameSession::builder()
            .seed(5)
            .fleet(&[ShipDef::new("Dinghy", 1)])
            .build()
            .unwrap();
        session.auto_place_remaining().unwrap();
        let target = session.board(Side::Opponent).fleet().ships()[0].footprint()[0];

        run(&mut session, &format!("{}\ny\n", target));
        assert_eq!(session.phase(), Phase::Placement);
        assert_eq!(session.winner(), None);
    }
}
