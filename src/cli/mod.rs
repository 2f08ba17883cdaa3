//! Terminal front end.
//!
//! A thin presentation layer over [`GameSession`]: it parses commands,
//! forwards them to the session and renders the results. The only
//! timing it adds is a short pause before showing the computer's reply.

pub mod interface;

pub use interface::*;

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::core::{Coordinate, GameSession, Orientation, Phase, BOARD_SIZE};

/// Parse `A5`-style input: column letter A-J then row 1-10.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Parse `H`/`V` (or the full words), case-insensitive.
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

/// Next trimmed input line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

enum Flow {
    Continue,
    Quit,
}

/// Play games until the user quits or input ends. `pacing` delays the
/// display of the computer's reply; it has no effect on game state.
pub async fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
    pacing: Duration,
) -> anyhow::Result<()> {
    let mut orientation = Orientation::Horizontal;
    loop {
        let flow = match session.phase() {
            Phase::Placement => placement_step(session, input, out, &mut orientation)?,
            Phase::Shooting => shooting_step(session, input, out, pacing).await?,
            Phase::GameOver => {
                print_boards(out, session)?;
                print_summary(out, session)?;
                prompt(out, "\nPlay again? (y/N): ")?;
                match read_line(input)? {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => {
                        session.restart()?;
                        orientation = Orientation::Horizontal;
                        Flow::Continue
                    }
                    _ => Flow::Quit,
                }
            }
        };
        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

fn placement_step<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
    orientation: &mut Orientation,
) -> anyhow::Result<Flow> {
    writeln!(out, "\nYour board:")?;
    print_board(out, session, crate::core::Side::Human)?;
    print_status(out, session)?;
    prompt(
        out,
        &format!("Orientation: {:?}. Enter placement ('help' for commands): ", orientation),
    )?;
    let Some(line) = read_line(input)? else {
        return Ok(Flow::Quit);
    };

    let placed = match line.to_ascii_lowercase().as_str() {
        "quit" | "q" => return Ok(Flow::Quit),
        "help" => {
            print_placement_help(out)?;
            return Ok(Flow::Continue);
        }
        "r" | "rotate" => {
            *orientation = orientation.toggled();
            return Ok(Flow::Continue);
        }
        "" => session.auto_place_ship().map(|p| vec![p]),
        "auto" => session.auto_place_remaining(),
        _ => {
            let mut parts = line.split_whitespace();
            let origin = match parts.next().map(parse_coord) {
                Some(Ok(origin)) => origin,
                Some(Err(e)) => {
                    writeln!(out, "✗ Error: {}", e)?;
                    return Ok(Flow::Continue);
                }
                None => return Ok(Flow::Continue),
            };
            if let Some(word) = parts.next() {
                match parse_orientation(word) {
                    Ok(o) => *orientation = o,
                    Err(e) => {
                        writeln!(out, "✗ Error: {}", e)?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            session.place_ship(origin, *orientation).map(|p| vec![p])
        }
    };

    match placed {
        Ok(outcomes) => {
            for p in &outcomes {
                if let Some(origin) = p.footprint.first() {
                    writeln!(out, "✓ {} placed at {}", p.ship, origin)?;
                }
            }
            if outcomes.iter().any(|p| p.fleet_complete) {
                writeln!(out, "\n✓ All ships placed! Fire at the enemy grid.")?;
            }
        }
        Err(e) => {
            writeln!(out, "✗ Error: {}", e)?;
            writeln!(out, "   Hint: the ship must fit on the board and not overlap another.")?;
        }
    }
    Ok(Flow::Continue)
}

async fn shooting_step<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
    pacing: Duration,
) -> anyhow::Result<Flow> {
    print_boards(out, session)?;
    print_status(out, session)?;
    prompt(out, "Enter target ('help' for commands): ")?;
    let Some(line) = read_line(input)? else {
        return Ok(Flow::Quit);
    };

    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" => return Ok(Flow::Quit),
        "help" => {
            print_targeting_help(out)?;
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    let target = match parse_coord(&line) {
        Ok(target) => target,
        Err(e) => {
            writeln!(out, "✗ Invalid coordinate: {}", e)?;
            writeln!(out, "   Example: A5, B10, J1")?;
            return Ok(Flow::Continue);
        }
    };

    match session.fire_shot(target) {
        Ok(outcome) => {
            print_human_shot(out, &outcome)?;
            if let Some(reply) = outcome.opponent {
                writeln!(out, "\nThe computer is aiming...")?;
                out.flush()?;
                if !pacing.is_zero() {
                    tokio::time::sleep(pacing).await;
                }
                print_opponent_shot(out, &reply)?;
            }
        }
        Err(e) => writeln!(out, "✗ {}", e)?,
    }
    Ok(Flow::Continue)
}
