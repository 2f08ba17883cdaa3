//! Board and status rendering for the terminal.

use std::io::{self, Write};

use crate::core::{
    CellState, Coordinate, FireOutcome, GameSession, OpponentMove, Phase, ShotResult, Side,
    BOARD_SIZE,
};

const GRID: usize = BOARD_SIZE as usize;

fn cell_char(session: &GameSession, side: Side, at: Coordinate, sunk: &[Coordinate]) -> char {
    if sunk.contains(&at) {
        return '#';
    }
    match session.query_visible_cell(side, at) {
        Ok(CellState::Hit) => 'X',
        Ok(CellState::Miss) => 'o',
        Ok(CellState::Occupied) => 'S',
        Ok(CellState::Empty) | Err(_) => '.',
    }
}

/// Print one side's board as the human is allowed to see it.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession, side: Side) -> io::Result<()> {
    let sunk: Vec<Coordinate> = session
        .query_sunk_footprints(side)
        .into_iter()
        .flatten()
        .copied()
        .collect();

    writeln!(out, "    ╔════════════════════════╗")?;
    write!(out, "    ║   ")?;
    for c in 0..GRID {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠════════════════════════╣")?;
    for r in 0..GRID {
        write!(out, "    ║ {:2}", r + 1)?;
        for c in 0..GRID {
            write!(out, " {}", cell_char(session, side, Coordinate::new(r, c), &sunk))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚════════════════════════╝")
}

fn sunk_line<W: Write>(out: &mut W, session: &GameSession, side: Side) -> io::Result<()> {
    let names = session.query_sunk_ships(side);
    if names.is_empty() {
        writeln!(out, "    Ships sunk ({}): (none)", side)
    } else {
        writeln!(out, "    Ships sunk ({}): {}", side, names.join(", "))
    }
}

/// Print the opponent board (top), the human board (bottom) and the
/// sunk-ship status lines.
pub fn print_boards<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "\nOpponent board:")?;
    print_board(out, session, Side::Opponent)?;
    writeln!(out, "\nYour board:")?;
    print_board(out, session, Side::Human)?;
    writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  #=Sunk  .=Water")?;
    sunk_line(out, session, Side::Human)?;
    sunk_line(out, session, Side::Opponent)
}

/// One-line turn / phase label.
pub fn print_status<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let status = session.status();
    match status.phase {
        Phase::Placement => match status.next_ship {
            Some((i, def)) => writeln!(
                out,
                "\nShip {}: {} (length {})",
                i + 1,
                def.name(),
                def.length()
            ),
            None => Ok(()),
        },
        Phase::Shooting => match status.to_move {
            Some(side) => writeln!(out, "\n{}'s turn", side),
            None => Ok(()),
        },
        Phase::GameOver => writeln!(out, "\nGame over"),
    }
}

/// Report the human's shot.
pub fn print_human_shot<W: Write>(out: &mut W, outcome: &FireOutcome) -> io::Result<()> {
    match outcome.result {
        ShotResult::Hit => writeln!(out, "\n🎯 HIT at {}!", outcome.target),
        ShotResult::HitAndSunk(name) => {
            writeln!(out, "\n💥 SUNK! You destroyed the enemy's {}!", name)
        }
        ShotResult::Miss => writeln!(out, "\n💧 Miss at {}.", outcome.target),
        ShotResult::AlreadyShot => writeln!(out, "\nYou already fired at {}.", outcome.target),
    }
}

/// Report the opponent's automatic reply.
pub fn print_opponent_shot<W: Write>(out: &mut W, reply: &OpponentMove) -> io::Result<()> {
    match reply.result {
        ShotResult::Hit => writeln!(out, "⚠️  The computer fired at {} and hit you!", reply.target),
        ShotResult::HitAndSunk(name) => writeln!(
            out,
            "💀 The computer fired at {} and sank your {}!",
            reply.target, name
        ),
        ShotResult::Miss => writeln!(out, "The computer fired at {} and missed.", reply.target),
        ShotResult::AlreadyShot => Ok(()),
    }
}

/// End screen: summary text.
pub fn print_summary<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    if let Ok(summary) = session.query_session_summary() {
        writeln!(out, "\n════════════════════ GAME OVER ════════════════════")?;
        writeln!(out, "{}", summary)?;
    }
    Ok(())
}

pub fn print_placement_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nPlacement commands:")?;
    writeln!(out, "  A5 H | B3 V   place the current ship (H=horizontal, V=vertical)")?;
    writeln!(out, "  A5            place using the current orientation")?;
    writeln!(out, "  r             rotate (toggle orientation)")?;
    writeln!(out, "  ENTER         place the current ship randomly")?;
    writeln!(out, "  auto          place all remaining ships randomly")?;
    writeln!(out, "  quit          leave the game")
}

pub fn print_targeting_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nShooting commands:")?;
    writeln!(out, "  A5            fire at column A, row 5 (columns A-J, rows 1-10)")?;
    writeln!(out, "  quit          leave the game")
}
