//! Headless games: the human side auto-places and fires uniformly at
//! random while the computer plays its configured strategy. Prints one
//! JSON summary per game.

use clap::Parser;
use log::LevelFilter;
use naval_battle::{init_logging, random_target, Difficulty, GameSession, Phase, ShotHistory};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Simulate games against the computer and print JSON summaries")]
struct Args {
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();
    let mut shooter_rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));

    for game in 0..args.games {
        let mut session = GameSession::builder()
            .difficulty(args.difficulty)
            .seed(args.seed.wrapping_add(u64::from(game) * 2))
            .build()?;
        session.auto_place_remaining()?;

        let mut fired = ShotHistory::new();
        while session.phase() == Phase::Shooting {
            let target = random_target(&fired, &mut shooter_rng)
                .ok_or_else(|| anyhow::anyhow!("human ran out of targets"))?;
            fired.record(target)?;
            session.fire_shot(target)?;
        }

        let summary = session.query_session_summary()?;
        let result = json!({
            "game": game,
            "difficulty": summary.difficulty,
            "winner": summary.winner,
            "turns": summary.human.shots(),
            "human": summary.human,
            "opponent": summary.opponent,
            "sunk_by_human": summary.sunk_by_human,
            "sunk_by_opponent": summary.sunk_by_opponent,
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
