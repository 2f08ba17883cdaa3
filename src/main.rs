use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use naval_battle::{cli, init_logging, Difficulty, GameSession, OPPONENT_DELAY_MS};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = OPPONENT_DELAY_MS, help = "Pause before the computer's reply is shown")]
        delay_ms: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            delay_ms,
        } => {
            println!("Naval battle - difficulty: {}", difficulty);
            let mut builder = GameSession::builder().difficulty(difficulty);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                builder = builder.seed(s);
            }
            let mut session = builder.build()?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            cli::run_game(
                &mut session,
                &mut input,
                &mut out,
                Duration::from_millis(delay_ms),
            )
            .await?;
            println!("Goodbye!");
        }
    }
    Ok(())
}
